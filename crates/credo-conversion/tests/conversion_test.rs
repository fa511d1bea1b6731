use chrono::{Duration, Utc};

use credo_conversion::{
    effective_rate, formatted_rate, rate_breakdown, xp_to_minutes, ConversionCalculator,
};
use credo_core::config::CredoConfig;
use credo_core::profile::{CredibilityProfile, RedemptionBonus, Score};

fn profile_at(score: u8) -> CredibilityProfile {
    CredibilityProfile::new(Score::new(score as i64))
}

fn profile_with_bonus(score: u8, multiplier: f64, expires_in_days: i64) -> CredibilityProfile {
    let mut profile = profile_at(score);
    profile.redemption_bonus = Some(RedemptionBonus {
        multiplier,
        expires_at: Utc::now() + Duration::days(expires_in_days),
        unlocked_from_low_watermark: true,
    });
    profile
}

// ── Effective rate ───────────────────────────────────────────────────────

#[test]
fn rate_follows_the_tier_table() {
    let config = CredoConfig::default();
    let now = Utc::now();

    let cases = [(0u8, 0.5), (59, 0.5), (60, 1.0), (79, 1.0), (80, 1.15), (94, 1.15), (95, 1.3), (100, 1.3)];
    for (score, expected) in cases {
        let rate = effective_rate(&profile_at(score), &config, now);
        assert!(
            (rate - expected).abs() < 1e-9,
            "score {} should convert at {}, got {}",
            score,
            expected,
            rate
        );
    }
}

#[test]
fn active_bonus_multiplies_the_tier_base() {
    let config = CredoConfig::default();
    let now = Utc::now();
    let profile = profile_with_bonus(100, 1.3, 7);

    let rate = effective_rate(&profile, &config, now);
    assert!((rate - 1.3 * 1.3).abs() < 1e-9);
}

#[test]
fn lapsed_bonus_contributes_nothing() {
    let config = CredoConfig::default();
    let now = Utc::now();
    let profile = profile_with_bonus(100, 1.3, 7);

    let rate = effective_rate(&profile, &config, now + Duration::days(8));
    assert!(
        (rate - 1.3).abs() < 1e-9,
        "a stale bonus must never keep contributing, got {}",
        rate
    );
}

#[test]
fn expiry_instant_is_already_inactive() {
    let config = CredoConfig::default();
    let expires_at = Utc::now() + Duration::days(7);
    let mut profile = profile_at(100);
    profile.redemption_bonus = Some(RedemptionBonus {
        multiplier: 1.3,
        expires_at,
        unlocked_from_low_watermark: true,
    });

    let rate = effective_rate(&profile, &config, expires_at);
    assert!((rate - 1.3).abs() < 1e-9);
}

// ── XP to minutes ────────────────────────────────────────────────────────

#[test]
fn xp_to_minutes_floors_partial_minutes() {
    let config = CredoConfig::default(); // 10 XP per minute
    let now = Utc::now();

    // 95 XP at 1.0× is 9.5 minutes; the half minute is never granted.
    assert_eq!(xp_to_minutes(95, &profile_at(70), &config, now), 9);
    assert_eq!(xp_to_minutes(90, &profile_at(70), &config, now), 9);
    assert_eq!(xp_to_minutes(89, &profile_at(70), &config, now), 8);
}

#[test]
fn xp_to_minutes_scales_with_tier() {
    let config = CredoConfig::default();
    let now = Utc::now();

    // 100 XP: Critical 0.5× → 5 min, Fair 1.0× → 10, Good 1.15× → 11, Excellent 1.3× → 13.
    assert_eq!(xp_to_minutes(100, &profile_at(30), &config, now), 5);
    assert_eq!(xp_to_minutes(100, &profile_at(70), &config, now), 10);
    assert_eq!(xp_to_minutes(100, &profile_at(85), &config, now), 11);
    assert_eq!(xp_to_minutes(100, &profile_at(100), &config, now), 13);
}

#[test]
fn xp_to_minutes_honors_the_bonus_window() {
    let config = CredoConfig::default();
    let now = Utc::now();
    let profile = profile_with_bonus(100, 1.3, 7);

    // 1.3 × 1.3 = 1.69× → 100 XP is 16.9 minutes → 16.
    assert_eq!(xp_to_minutes(100, &profile, &config, now), 16);
    assert_eq!(xp_to_minutes(100, &profile, &config, now + Duration::days(8)), 13);
}

#[test]
fn zero_xp_is_zero_minutes() {
    let config = CredoConfig::default();
    assert_eq!(xp_to_minutes(0, &profile_at(100), &config, Utc::now()), 0);
}

// ── Display formatting ───────────────────────────────────────────────────

#[test]
fn formatted_rate_is_compact() {
    let config = CredoConfig::default();
    let now = Utc::now();

    assert_eq!(formatted_rate(&profile_at(100), &config, now), "1.3x");
    assert_eq!(formatted_rate(&profile_at(70), &config, now), "1x");
    assert_eq!(formatted_rate(&profile_at(85), &config, now), "1.15x");
    assert_eq!(formatted_rate(&profile_at(30), &config, now), "0.5x");

    let boosted = profile_with_bonus(100, 1.3, 7);
    assert_eq!(formatted_rate(&boosted, &config, now), "1.69x");
}

// ── Breakdown ────────────────────────────────────────────────────────────

#[test]
fn breakdown_exposes_each_factor() {
    let config = CredoConfig::default();
    let now = Utc::now();

    let plain = rate_breakdown(&profile_at(85), &config, now);
    assert_eq!(plain.tier_name, "Good");
    assert!((plain.tier_multiplier - 1.15).abs() < 1e-9);
    assert!(!plain.bonus_active);
    assert!((plain.bonus_multiplier - 1.0).abs() < 1e-9);
    assert!((plain.effective_rate - 1.15).abs() < 1e-9);

    let boosted = rate_breakdown(&profile_with_bonus(100, 1.3, 7), &config, now);
    assert!(boosted.bonus_active);
    assert!((boosted.effective_rate - 1.69).abs() < 1e-9);
}

// ── Calculator ───────────────────────────────────────────────────────────

#[test]
fn calculator_matches_the_free_functions() {
    let calculator = ConversionCalculator::default();
    let now = Utc::now();
    let profile = profile_with_bonus(100, 1.3, 7);
    let config = CredoConfig::default();

    assert_eq!(
        calculator.effective_rate(&profile, now),
        effective_rate(&profile, &config, now)
    );
    assert_eq!(
        calculator.xp_to_minutes(250, &profile, now),
        xp_to_minutes(250, &profile, &config, now)
    );
    assert_eq!(
        calculator.formatted_rate(&profile, now),
        formatted_rate(&profile, &config, now)
    );
    assert_eq!(calculator.tier(&profile).name, "Excellent");
}
