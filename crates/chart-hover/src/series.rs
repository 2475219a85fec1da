// File: crates/chart-hover/src/series.rs
// Summary: Series descriptors and the two sample shapes (multi-series line, OHLCV).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Static description of one line series. Immutable for the widget's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    /// Unique id; also the field name inside each [`LineSample`].
    pub key: String,
    pub label: String,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SeriesDescriptor {
    pub fn new(key: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self { key: key.into(), label: label.into(), color: color.into(), icon: None }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// One time tick of the line chart; every series shares the same time axis.
///
/// Serialized flat, e.g. `{"time": "10:00", "gpt": 10120.5, "claude": 9980.0}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSample {
    pub time: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl LineSample {
    pub fn new(time: impl Into<String>) -> Self {
        Self { time: time.into(), values: BTreeMap::new() }
    }

    pub fn with(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    /// Value for a series key, if the sample carries one.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }
}

/// One candle of the OHLCV pane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OhlcvSample {
    pub time: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

impl OhlcvSample {
    /// Try to construct a candle enforcing OHLC invariants:
    /// low <= min(open,close), high >= max(open,close), and low <= high.
    pub fn try_new(
        time: impl Into<String>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: Option<f64>,
    ) -> Result<Self> {
        let lo = open.min(close);
        let hi = open.max(close);
        if low > lo { return Err(ChartError::InvalidCandle("low above min(open,close)")); }
        if high < hi { return Err(ChartError::InvalidCandle("high below max(open,close)")); }
        if low > high { return Err(ChartError::InvalidCandle("low above high")); }
        Ok(Self { time: time.into(), open, high, low, close, volume })
    }

    /// Close at or above open.
    pub fn is_bullish(&self) -> bool { self.close >= self.open }
}
