//! Compiled default values for all policy knobs.

/// Points gained per approved task.
pub const DEFAULT_APPROVAL_POINTS: i32 = 5;

/// Points lost per rejected task (applied as a negative delta).
pub const DEFAULT_REJECTION_PENALTY: i32 = 10;

/// A streak bonus fires every this many consecutive approvals.
pub const DEFAULT_STREAK_INTERVAL: u32 = 10;

/// Extra points per streak bonus.
pub const DEFAULT_STREAK_BONUS_POINTS: i32 = 5;

/// Score a freshly created profile starts at.
pub const DEFAULT_STARTING_SCORE: u8 = 100;

/// Score below which a profile counts as at risk.
pub const DEFAULT_AT_RISK_THRESHOLD: u8 = 60;

/// Score a recovered profile must reach to unlock the redemption bonus.
pub const DEFAULT_UNLOCK_THRESHOLD: u8 = 95;

/// Redemption bonus multiplier.
pub const DEFAULT_BONUS_MULTIPLIER: f64 = 1.3;

/// Redemption bonus lifetime in days.
pub const DEFAULT_BONUS_DURATION_DAYS: i64 = 7;

/// XP required per minute of screen time before multipliers.
pub const DEFAULT_XP_PER_MINUTE: u32 = 10;
