// File: crates/chart-hover/src/geometry.rs
// Summary: Surface bounds and chart geometry used for pointer math.

use crate::scale::ValueDomain;
use crate::types::Margins;

/// Measured bounding box of the plotting surface, in the same coordinate
/// space as incoming pointer events.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
    /// Box at the origin; pointer coordinates are already surface-relative.
    pub const fn sized(width: f64, height: f64) -> Self {
        Self::from_ltwh(0.0, 0.0, width, height)
    }
}

/// Source of the current surface bounds. Implemented by whatever owns the
/// rendered chart (a DOM node, a window, a test fixture).
pub trait Surface {
    fn bounding_box(&self) -> SurfaceRect;
}

impl Surface for SurfaceRect {
    fn bounding_box(&self) -> SurfaceRect { *self }
}

/// Geometry of one chart surface: its box plus the margins reserved for axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartGeometry {
    pub bounds: SurfaceRect,
    pub margins: Margins,
}

impl ChartGeometry {
    pub fn new(bounds: SurfaceRect, margins: Margins) -> Self {
        Self { bounds, margins }
    }

    /// Geometry for a box at the origin with no margins.
    pub fn unmargined(width: f64, height: f64) -> Self {
        Self::new(SurfaceRect::sized(width, height), Margins::new(0, 0, 0, 0))
    }

    pub fn box_width(&self) -> f64 { self.bounds.width }
    pub fn box_height(&self) -> f64 { self.bounds.height }

    /// Width of the plot interior once left/right margins are removed.
    /// May be zero or negative when the surface is narrower than its margins.
    pub fn plot_width(&self) -> f64 {
        self.bounds.width - self.margins.left as f64 - self.margins.right as f64
    }

    /// Vertical pixel of `value` on a pane with the given domain
    /// (top of the box = domain max, bottom = domain min).
    pub fn y_for_value(&self, domain: &ValueDomain, value: f64) -> f64 {
        domain.to_ratio(value) * self.bounds.height.max(0.0)
    }

    /// Convert client coordinates into surface-relative ones.
    #[inline]
    pub fn to_local(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (client_x - self.bounds.left, client_y - self.bounds.top)
    }
}

/// Clamp `v` into `[lo, hi]`. Unlike `f64::clamp` this never panics when
/// `hi < lo` (a surface that has not been laid out yet); `lo` wins.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v > hi { if hi < lo { lo } else { hi } } else if v < lo { lo } else { v }
}
