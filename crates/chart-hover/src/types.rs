// File: crates/chart-hover/src/types.rs
// Summary: Shared types and constants (margins, default value domains).

use serde::{Deserialize, Serialize};

/// Default lower bound of the line pane's value axis.
pub const LINE_Y_MIN: f64 = 9900.0;
/// Default upper bound of the line pane's value axis.
pub const LINE_Y_MAX: f64 = 10750.0;
/// Default lower bound of the candlestick pane's value axis.
pub const OHLCV_Y_MIN: f64 = 9000.0;
/// Default upper bound of the candlestick pane's value axis.
pub const OHLCV_Y_MAX: f64 = 10800.0;

/// Space reserved around the plot interior for axes and legend gutter, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Margins {
    /// Create new margins (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(24, 120, 20, 60)
    }
}

/// Which chart kind is currently displayed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Line,
    Candle,
}

impl Mode {
    /// The other mode; what a two-button toggle switches to.
    pub const fn toggled(self) -> Self {
        match self {
            Mode::Line => Mode::Candle,
            Mode::Candle => Mode::Line,
        }
    }
}
