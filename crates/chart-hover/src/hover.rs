// File: crates/chart-hover/src/hover.rs
// Summary: Hover snapshot projection for the crosshair overlay and the sidebar.

use serde::Serialize;

use crate::geometry::ChartGeometry;
use crate::resolver::{Pane, Resolution};
use crate::series::SeriesDescriptor;
use crate::types::Mode;

/// Value of one series at the hovered sample, keyed by series key so it
/// stays stable when labels change.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeriesValue {
    pub key: String,
    /// `None` when the sample has no field for this key.
    pub value: Option<f64>,
}

/// Mode-specific part of a hover snapshot: the discrete nearest-sample values.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum HoverDetail {
    Line { values: Vec<SeriesValue> },
    Candle { open: f64, high: f64, low: f64, close: f64, volume: Option<f64> },
}

/// Immutable result of one pointer event. Replaced wholesale, never patched.
///
/// `interpolated_value` is the continuous pointer-derived price; the values
/// in `detail` come from the nearest sample. The two are expected to differ.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HoverSnapshot {
    /// Copied verbatim from the resolved sample.
    pub time: String,
    pub interpolated_value: f64,
    pub px_x: f64,
    pub px_y: f64,
    pub detail: HoverDetail,
}

impl HoverSnapshot {
    pub fn mode(&self) -> Mode {
        match self.detail {
            HoverDetail::Line { .. } => Mode::Line,
            HoverDetail::Candle { .. } => Mode::Candle,
        }
    }

    /// Per-series values in descriptor order; empty in candle mode.
    pub fn series_values(&self) -> &[SeriesValue] {
        match &self.detail {
            HoverDetail::Line { values } => values.as_slice(),
            HoverDetail::Candle { .. } => &[],
        }
    }

    /// Value of one series by key (line mode only).
    pub fn value_of(&self, key: &str) -> Option<f64> {
        self.series_values().iter().find(|v| v.key == key).and_then(|v| v.value)
    }

    /// Guide lines for the crosshair overlay, spanning the whole surface box.
    pub fn crosshair(&self, geometry: &ChartGeometry) -> Crosshair {
        Crosshair {
            x: self.px_x,
            y: self.px_y,
            width: geometry.box_width().max(0.0),
            height: geometry.box_height().max(0.0),
        }
    }
}

/// Two perpendicular guide lines through the pointer, in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Crosshair {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Crosshair {
    /// Vertical segment `((x, 0), (x, height))`.
    pub fn vertical(&self) -> ((f64, f64), (f64, f64)) {
        ((self.x, 0.0), (self.x, self.height))
    }
    /// Horizontal segment `((0, y), (width, y))`.
    pub fn horizontal(&self) -> ((f64, f64), (f64, f64)) {
        ((0.0, self.y), (self.width, self.y))
    }
}

/// Build the snapshot for a resolved pointer event.
///
/// Returns `None` only if `resolution.sample_index` is outside the pane,
/// which cannot happen for a resolution produced against the same pane.
pub fn project(resolution: &Resolution, pane: &Pane<'_>, series: &[SeriesDescriptor]) -> Option<HoverSnapshot> {
    let idx = resolution.sample_index;
    let (time, detail) = match pane {
        Pane::Line { dataset, .. } => {
            let row = dataset.get(idx)?;
            let values = series
                .iter()
                .map(|s| SeriesValue { key: s.key.clone(), value: row.get(&s.key) })
                .collect();
            (row.time.clone(), HoverDetail::Line { values })
        }
        Pane::Candle { dataset, .. } => {
            let row = dataset.get(idx)?;
            let detail = HoverDetail::Candle {
                open: row.open,
                high: row.high,
                low: row.low,
                close: row.close,
                volume: row.volume,
            };
            (row.time.clone(), detail)
        }
    };
    Some(HoverSnapshot {
        time,
        interpolated_value: resolution.interpolated_value,
        px_x: resolution.px_x,
        px_y: resolution.px_y,
        detail,
    })
}
