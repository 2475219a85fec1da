// File: crates/chart-hover/src/error.rs
// Summary: Error type for configuration and checked constructors.

use thiserror::Error;

/// Errors raised at construction/configuration boundaries.
/// Pointer handling itself never fails; it clamps and defaults instead.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid value domain [{min}, {max}]")]
    InvalidDomain { min: f64, max: f64 },

    #[error("invalid candle: {0}")]
    InvalidCandle(&'static str),

    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
