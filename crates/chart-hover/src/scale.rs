// File: crates/chart-hover/src/scale.rs
// Summary: Fixed value domains and the linear pixel <-> value mapping.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};
use crate::types::{LINE_Y_MAX, LINE_Y_MIN, OHLCV_Y_MAX, OHLCV_Y_MIN};

/// Value Y coordinate (e.g., price).
pub type Value = f64;

/// Fixed `[min, max]` range a pane's vertical axis represents, independent
/// of the data extremes. Top of the surface maps to `max`, bottom to `min`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDomain", into = "RawDomain")]
pub struct ValueDomain {
    min: Value,
    max: Value,
}

impl ValueDomain {
    /// Checked constructor: both bounds finite and `min <= max`.
    pub fn new(min: Value, max: Value) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidDomain { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn line() -> Self { Self { min: LINE_Y_MIN, max: LINE_Y_MAX } }
    pub const fn candle() -> Self { Self { min: OHLCV_Y_MIN, max: OHLCV_Y_MAX } }

    pub fn min(&self) -> Value { self.min }
    pub fn max(&self) -> Value { self.max }
    pub fn span(&self) -> Value { self.max - self.min }

    /// Inverse mapping from a vertical ratio (0 = top, 1 = bottom) to a value.
    #[inline]
    pub fn from_ratio(&self, y_ratio: f64) -> Value {
        self.max - y_ratio * self.span()
    }

    /// Forward mapping from a value to a vertical ratio (0 = top, 1 = bottom).
    /// A degenerate domain maps everything to the top.
    #[inline]
    pub fn to_ratio(&self, v: Value) -> f64 {
        let span = self.span();
        if span <= 0.0 { 0.0 } else { (self.max - v) / span }
    }
}

#[derive(Serialize, Deserialize)]
struct RawDomain {
    min: Value,
    max: Value,
}

impl TryFrom<RawDomain> for ValueDomain {
    type Error = ChartError;
    fn try_from(raw: RawDomain) -> Result<Self> {
        ValueDomain::new(raw.min, raw.max)
    }
}

impl From<ValueDomain> for RawDomain {
    fn from(d: ValueDomain) -> Self {
        Self { min: d.min, max: d.max }
    }
}

/// Round to two decimal places, the precision of the price readout.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_endpoints_hit_domain_bounds() {
        let d = ValueDomain::line();
        assert_eq!(d.from_ratio(0.0), LINE_Y_MAX);
        assert_eq!(d.from_ratio(1.0), LINE_Y_MIN);
        assert_eq!(d.to_ratio(LINE_Y_MAX), 0.0);
        assert_eq!(d.to_ratio(LINE_Y_MIN), 1.0);
    }

    #[test]
    fn rejects_inverted_and_non_finite() {
        assert!(ValueDomain::new(2.0, 1.0).is_err());
        assert!(ValueDomain::new(f64::NAN, 1.0).is_err());
        assert!(ValueDomain::new(0.0, f64::INFINITY).is_err());
        assert!(ValueDomain::new(5.0, 5.0).is_ok());
    }

    #[test]
    fn round2_keeps_two_decimals() {
        assert_eq!(round2(10324.456), 10324.46);
        assert_eq!(round2(9900.0), 9900.0);
    }
}
