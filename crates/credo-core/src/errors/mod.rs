//! Error handling for Credo.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod review_error;

pub use config_error::ConfigError;
pub use review_error::ReviewError;
