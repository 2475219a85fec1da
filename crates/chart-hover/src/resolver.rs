// File: crates/chart-hover/src/resolver.rs
// Summary: Pointer position -> (nearest sample index, interpolated value) mapping.

use crate::geometry::{clamp, ChartGeometry};
use crate::scale::{round2, ValueDomain};
use crate::series::{LineSample, OhlcvSample};
use crate::types::Mode;

/// The active pane: its dataset and its own value domain.
/// The two panes are on different price scales and are never mixed.
#[derive(Clone, Copy, Debug)]
pub enum Pane<'a> {
    Line { dataset: &'a [LineSample], domain: ValueDomain },
    Candle { dataset: &'a [OhlcvSample], domain: ValueDomain },
}

impl<'a> Pane<'a> {
    pub fn mode(&self) -> Mode {
        match self {
            Pane::Line { .. } => Mode::Line,
            Pane::Candle { .. } => Mode::Candle,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Pane::Line { dataset, .. } => dataset.len(),
            Pane::Candle { dataset, .. } => dataset.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn domain(&self) -> ValueDomain {
        match self {
            Pane::Line { domain, .. } | Pane::Candle { domain, .. } => *domain,
        }
    }

    /// Time label of the sample at `index`, if in range.
    pub fn time_at(&self, index: usize) -> Option<&'a str> {
        match *self {
            Pane::Line { dataset, .. } => dataset.get(index).map(|s| s.time.as_str()),
            Pane::Candle { dataset, .. } => dataset.get(index).map(|s| s.time.as_str()),
        }
    }
}

/// Outcome of resolving one pointer event against a pane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Resolution {
    pub sample_index: usize,
    /// Continuous value under the pointer, rounded to 2 decimals.
    pub interpolated_value: f64,
    /// Pointer position clamped to the surface box, surface-relative.
    pub px_x: f64,
    pub px_y: f64,
}

/// Resolve a surface-relative pointer position.
///
/// Returns `None` when the pane has no samples; callers keep their previous
/// hover state in that case. O(1): index arithmetic only, the dataset is
/// assumed sorted by time.
pub fn resolve(pointer_x: f64, pointer_y: f64, geometry: &ChartGeometry, pane: &Pane<'_>) -> Option<Resolution> {
    let len = pane.len();
    if len == 0 {
        log::trace!("resolve: empty {:?} dataset, no update", pane.mode());
        return None;
    }

    let box_w = geometry.box_width();
    let box_h = geometry.box_height();
    let px_x = clamp(finite_or_zero(pointer_x), 0.0, box_w);
    let px_y = clamp(finite_or_zero(pointer_y), 0.0, box_h);

    let sample_index = index_for_x(px_x, geometry, len);

    let y_ratio = if box_h <= 0.0 { 0.0 } else { px_y / box_h };
    let interpolated_value = round2(pane.domain().from_ratio(y_ratio));

    Some(Resolution { sample_index, interpolated_value, px_x, px_y })
}

/// Resolve client coordinates by first subtracting the surface origin.
pub fn resolve_client(client_x: f64, client_y: f64, geometry: &ChartGeometry, pane: &Pane<'_>) -> Option<Resolution> {
    let (x, y) = geometry.to_local(client_x, client_y);
    resolve(x, y, geometry, pane)
}

/// Nearest sample index for a clamped x inside a dataset of `len >= 1` samples.
/// Only the plot interior (box minus left/right margins) contributes to the ratio.
fn index_for_x(px_x: f64, geometry: &ChartGeometry, len: usize) -> usize {
    let plot_w = geometry.plot_width();
    let x_ratio = if plot_w <= 0.0 {
        0.0
    } else {
        clamp(px_x - geometry.margins.left as f64, 0.0, plot_w) / plot_w
    };
    let last = len - 1;
    let idx = (x_ratio * last as f64).round();
    clamp(idx, 0.0, last as f64) as usize
}

#[inline]
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}
