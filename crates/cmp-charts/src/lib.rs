//! cmp-charts: chart templates, legend toggles and configuration resolution.

pub mod resolve;
pub mod series;
pub mod template;
pub mod toggles;

pub use resolve::{resolve, ChartConfig, ResolvedSeries};
pub use series::{goal_color, AxisSide, Rgb, SeriesDesc, SeriesRole, GOAL_PALETTE};
pub use template::{ChartKind, ChartLibrary, ChartTemplate};
pub use toggles::LegendToggles;
