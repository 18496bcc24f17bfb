//! Revenue chart geometry
//!
//! Coordinates are in the 1000×300 chart viewbox. The plot area spans
//! y = 40 (scale max) down to y = 280 (zero).

use serde::{Deserialize, Serialize};
use shared::models::{RevenuePeriod, RevenueSeries};
use std::fmt;
use std::str::FromStr;

pub const PLOT_TOP: f64 = 40.0;
pub const PLOT_HEIGHT: f64 = 240.0;
/// y of the zero line
pub const PLOT_BOTTOM: f64 = PLOT_TOP + PLOT_HEIGHT;
/// Number of horizontal grid lines (max down to zero)
pub const TICK_COUNT: usize = 6;

/// Bar / area toggle, held per chart
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Area,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Area => "area",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" | "cột" => Ok(Self::Bar),
            "area" | "miền" => Ok(Self::Area),
            other => Err(format!("unknown chart kind: {}", other)),
        }
    }
}

/// Linear value → height mapping for one chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScale {
    pub max: f64,
}

impl ChartScale {
    pub fn new(max: i64) -> Self {
        Self { max: max as f64 }
    }

    /// `v / max * 240`, clamped to the plot
    pub fn bar_height(&self, value: i64) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (value as f64 / self.max * PLOT_HEIGHT).clamp(0.0, PLOT_HEIGHT)
    }

    pub fn y(&self, value: i64) -> f64 {
        PLOT_TOP + PLOT_HEIGHT - self.bar_height(value)
    }

    /// Grid lines from the top of the scale down to zero
    pub fn ticks(&self) -> Vec<Tick> {
        let step = self.max / (TICK_COUNT - 1) as f64;
        (0..TICK_COUNT)
            .map(|i| {
                let value = self.max - step * i as f64;
                Tick {
                    y: PLOT_TOP + (PLOT_HEIGHT / (TICK_COUNT - 1) as f64) * i as f64,
                    label: format!("₫{}tr", (value / 1_000_000.0).round() as i64),
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub y: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Horizontal layout of one period's chart
#[derive(Debug, Clone, Copy, PartialEq)]
struct Layout {
    bar_x0: f64,
    area_x0: f64,
    step: f64,
    bar_width: f64,
}

impl Layout {
    fn for_period(period: RevenuePeriod) -> Self {
        match period {
            RevenuePeriod::Week => Self {
                bar_x0: 105.0,
                area_x0: 135.0,
                step: 100.0,
                bar_width: 60.0,
            },
            RevenuePeriod::Month => Self {
                bar_x0: 75.0,
                area_x0: 95.0,
                step: 65.0,
                bar_width: 40.0,
            },
        }
    }
}

/// Drawable shapes for one series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SeriesShape {
    Bar { rects: Vec<Rect> },
    Area {
        /// Polyline through the data points
        line: Vec<(f64, f64)>,
        /// Line points closed along the zero line
        fill: Vec<(f64, f64)>,
    },
}

/// One revenue chart with its current kind
#[derive(Debug, Clone, PartialEq)]
pub struct RevenueChart {
    series: RevenueSeries,
    scale: ChartScale,
    kind: ChartKind,
}

impl RevenueChart {
    pub fn new(series: RevenueSeries) -> Self {
        Self {
            scale: ChartScale::new(series.scale_max),
            series,
            kind: ChartKind::default(),
        }
    }

    pub fn weekly() -> Self {
        Self::new(RevenueSeries::weekly())
    }

    pub fn monthly() -> Self {
        Self::new(RevenueSeries::monthly())
    }

    pub fn series(&self) -> &RevenueSeries {
        &self.series
    }

    pub fn scale(&self) -> ChartScale {
        self.scale
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        tracing::debug!(period = ?self.series.period, kind = %kind, "Chart kind changed");
        self.kind = kind;
    }

    pub fn current_shape(&self) -> SeriesShape {
        self.shape(&self.series.current)
    }

    pub fn previous_shape(&self) -> SeriesShape {
        self.shape(&self.series.previous)
    }

    fn shape(&self, values: &[i64]) -> SeriesShape {
        let layout = Layout::for_period(self.series.period);
        match self.kind {
            ChartKind::Bar => SeriesShape::Bar {
                rects: values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| Rect {
                        x: layout.bar_x0 + layout.step * i as f64,
                        y: self.scale.y(v),
                        width: layout.bar_width,
                        height: self.scale.bar_height(v),
                    })
                    .collect(),
            },
            ChartKind::Area => {
                let line: Vec<(f64, f64)> = values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| (layout.area_x0 + layout.step * i as f64, self.scale.y(v)))
                    .collect();
                let mut fill = line.clone();
                if let Some(&(last_x, _)) = line.last() {
                    fill.push((last_x, PLOT_BOTTOM));
                    fill.push((layout.area_x0, PLOT_BOTTOM));
                }
                SeriesShape::Area { line, fill }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_mapping() {
        let scale = ChartScale::new(10_000_000);
        assert_eq!(scale.bar_height(5_000_000), 120.0);
        assert_eq!(scale.y(5_000_000), 160.0);
        assert_eq!(scale.y(0), PLOT_BOTTOM);
        assert_eq!(scale.y(10_000_000), PLOT_TOP);
    }

    #[test]
    fn test_scale_clamps() {
        let scale = ChartScale::new(10_000_000);
        assert_eq!(scale.bar_height(25_000_000), PLOT_HEIGHT);
        assert_eq!(scale.bar_height(-1), 0.0);
        assert_eq!(ChartScale::new(0).bar_height(100), 0.0);
    }

    #[test]
    fn test_ticks() {
        let ticks = ChartScale::new(20_000_000).ticks();
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["₫20tr", "₫16tr", "₫12tr", "₫8tr", "₫4tr", "₫0tr"]);
        assert_eq!(ticks[0].y, 40.0);
        assert_eq!(ticks[1].y, 88.0);
        assert_eq!(ticks[5].y, 280.0);
    }

    #[test]
    fn test_weekly_bars() {
        let chart = RevenueChart::weekly();
        assert_eq!(chart.kind(), ChartKind::Bar);

        let SeriesShape::Bar { rects } = chart.current_shape() else {
            panic!("expected bars");
        };
        assert_eq!(rects.len(), 7);
        // CN: 3.2M of 10M
        assert_eq!(rects[0].x, 105.0);
        assert_eq!(rects[0].width, 60.0);
        assert!((rects[0].height - 76.8).abs() < 1e-9);
        assert_eq!(rects[6].x, 705.0);
    }

    #[test]
    fn test_weekly_area_closes_on_baseline() {
        let mut chart = RevenueChart::weekly();
        chart.set_kind(ChartKind::Area);

        let SeriesShape::Area { line, fill } = chart.previous_shape() else {
            panic!("expected area");
        };
        assert_eq!(line.len(), 7);
        assert_eq!(line[0].0, 135.0);
        assert_eq!(line[6].0, 735.0);
        assert_eq!(fill.len(), 9);
        assert_eq!(fill[7], (735.0, 280.0));
        assert_eq!(fill[8], (135.0, 280.0));
    }

    #[test]
    fn test_monthly_layout() {
        let mut chart = RevenueChart::monthly();
        let SeriesShape::Bar { rects } = chart.current_shape() else {
            panic!("expected bars");
        };
        assert_eq!(rects[1].x, 140.0);
        assert_eq!(rects[1].width, 40.0);
        // T7 hits the scale max
        assert_eq!(rects[6].y, PLOT_TOP);

        chart.set_kind(ChartKind::Area);
        let SeriesShape::Area { line, .. } = chart.current_shape() else {
            panic!("expected area");
        };
        assert_eq!(line[11].0, 95.0 + 65.0 * 11.0);
    }

    #[test]
    fn test_chart_kind_parse() {
        assert_eq!("Bar".parse::<ChartKind>(), Ok(ChartKind::Bar));
        assert_eq!("area".parse::<ChartKind>(), Ok(ChartKind::Area));
        assert_eq!("Miền".parse::<ChartKind>(), Ok(ChartKind::Area));
        assert!("pie".parse::<ChartKind>().is_err());
    }
}
