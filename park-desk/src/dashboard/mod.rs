//! 仪表盘 - occupancy figures and revenue charts

pub mod chart;
pub mod summary;

pub use chart::{ChartKind, ChartScale, Rect, RevenueChart, SeriesShape, Tick};
pub use summary::{DONUT_CIRCUMFERENCE, Donut, OccupancySummary};
