// File: crates/chart-hover/src/view.rs
// Explicit chart interaction state: active mode, datasets, last-measured geometry and hover snapshot.

use crate::config::{ChartConfig, LeavePolicy};
use crate::geometry::{ChartGeometry, Surface};
use crate::hover::{project, HoverSnapshot};
use crate::legend::{tooltip_rows, TooltipRow};
use crate::resolver::{resolve_client, Pane};
use crate::series::{LineSample, OhlcvSample, SeriesDescriptor};
use crate::types::Mode;

/// What an event did to the hover snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverUpdate {
    /// A new snapshot replaced the previous one.
    Updated,
    /// The snapshot was dropped.
    Cleared,
    /// Nothing changed (empty dataset, no touch point, retained on leave).
    Unchanged,
}

/// State owned by the display layer and fed by its event bindings.
/// Each handler runs to completion and swaps the snapshot as a whole value.
#[derive(Clone, Debug)]
pub struct ChartView {
    config: ChartConfig,
    series: Vec<SeriesDescriptor>,
    line_data: Vec<LineSample>,
    candle_data: Vec<OhlcvSample>,
    mode: Mode,
    geometry: Option<ChartGeometry>,
    hover: Option<HoverSnapshot>,
    active_line: Option<String>,
}

impl ChartView {
    pub fn new(
        config: ChartConfig,
        series: Vec<SeriesDescriptor>,
        line_data: Vec<LineSample>,
        candle_data: Vec<OhlcvSample>,
    ) -> Self {
        let mode = config.initial_mode;
        Self {
            config,
            series,
            line_data,
            candle_data,
            mode,
            geometry: None,
            hover: None,
            active_line: None,
        }
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn series(&self) -> &[SeriesDescriptor] { &self.series }
    pub fn line_data(&self) -> &[LineSample] { &self.line_data }
    pub fn candle_data(&self) -> &[OhlcvSample] { &self.candle_data }
    pub fn mode(&self) -> Mode { self.mode }
    pub fn hover(&self) -> Option<&HoverSnapshot> { self.hover.as_ref() }
    /// Geometry measured by the most recent pointer event; `None` before the first one.
    pub fn geometry(&self) -> Option<&ChartGeometry> { self.geometry.as_ref() }
    pub fn active_line(&self) -> Option<&str> { self.active_line.as_deref() }

    /// The pane the resolver works against for the current mode.
    pub fn pane(&self) -> Pane<'_> {
        match self.mode {
            Mode::Line => Pane::Line { dataset: &self.line_data, domain: self.config.line_domain },
            Mode::Candle => Pane::Candle { dataset: &self.candle_data, domain: self.config.candle_domain },
        }
    }

    /// Handle a mouse move in client coordinates. The surface is measured on
    /// every call, so scrolling or resizing between events needs no notification.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64, surface: &dyn Surface) -> HoverUpdate {
        let geometry = self.measure(surface);
        let snapshot = {
            let pane = self.pane();
            resolve_client(client_x, client_y, &geometry, &pane)
                .and_then(|r| project(&r, &pane, &self.series))
        };
        match snapshot {
            Some(s) => {
                self.hover = Some(s);
                HoverUpdate::Updated
            }
            None => HoverUpdate::Unchanged,
        }
    }

    /// Handle a touch move; only the first touch point drives the crosshair.
    pub fn touch_move(&mut self, touches: &[(f64, f64)], surface: &dyn Surface) -> HoverUpdate {
        match touches.first() {
            Some(&(x, y)) => self.pointer_move(x, y, surface),
            None => HoverUpdate::Unchanged,
        }
    }

    pub fn pointer_leave(&mut self) -> HoverUpdate {
        match self.config.leave_policy {
            LeavePolicy::Clear => self.clear_hover(),
            LeavePolicy::RetainLast => HoverUpdate::Unchanged,
        }
    }

    pub fn touch_end(&mut self) -> HoverUpdate {
        self.pointer_leave()
    }

    /// Switch chart kind. The old snapshot belongs to the other pane, so it
    /// is dropped; the next pointer event resolves against the new dataset.
    pub fn set_mode(&mut self, mode: Mode) -> HoverUpdate {
        if mode == self.mode {
            return HoverUpdate::Unchanged;
        }
        log::debug!("mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.clear_hover()
    }

    pub fn toggle_mode(&mut self) -> HoverUpdate {
        self.set_mode(self.mode.toggled())
    }

    /// Replace both datasets. A snapshot may point at a time that no longer
    /// exists, so it is dropped.
    pub fn set_data(&mut self, line_data: Vec<LineSample>, candle_data: Vec<OhlcvSample>) -> HoverUpdate {
        self.line_data = line_data;
        self.candle_data = candle_data;
        self.clear_hover()
    }

    /// Highlight one line series (or none) for tooltip filtering.
    pub fn set_active_line(&mut self, key: Option<&str>) {
        self.active_line = key
            .filter(|k| self.series.iter().any(|s| s.key == *k))
            .map(str::to_owned);
    }

    /// Tooltip rows for the current line-mode snapshot, honouring the highlighted line.
    pub fn tooltip(&self) -> Vec<TooltipRow<'_>> {
        match &self.hover {
            Some(h) => tooltip_rows(h.series_values(), &self.series, self.active_line()),
            None => Vec::new(),
        }
    }

    fn measure(&mut self, surface: &dyn Surface) -> ChartGeometry {
        let g = ChartGeometry::new(surface.bounding_box(), self.config.margins);
        if self.geometry.map(|prev| prev.bounds) != Some(g.bounds) {
            log::debug!("surface bounds now {:?}", g.bounds);
        }
        self.geometry = Some(g);
        g
    }

    fn clear_hover(&mut self) -> HoverUpdate {
        if self.hover.take().is_some() { HoverUpdate::Cleared } else { HoverUpdate::Unchanged }
    }
}
