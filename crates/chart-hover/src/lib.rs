// File: crates/chart-hover/src/lib.rs
// Summary: Core library entry point; exports pointer resolution and hover projection API.

pub mod config;
pub mod error;
pub mod geometry;
pub mod hover;
pub mod legend;
pub mod resolver;
pub mod scale;
pub mod series;
pub mod types;
pub mod view;

pub use config::{ChartConfig, LeavePolicy};
pub use error::ChartError;
pub use geometry::{ChartGeometry, Surface, SurfaceRect};
pub use hover::{project, Crosshair, HoverDetail, HoverSnapshot, SeriesValue};
pub use legend::{last_values, tooltip_rows, LegendEntry, TooltipRow};
pub use resolver::{resolve, resolve_client, Pane, Resolution};
pub use scale::ValueDomain;
pub use series::{LineSample, OhlcvSample, SeriesDescriptor};
pub use types::{Margins, Mode};
pub use view::{ChartView, HoverUpdate};
