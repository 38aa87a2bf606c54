use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::format_measure;
use crate::core::{LinearScale, Margin, PlotArea, SeriesPoint, Viewport};
use crate::error::{VizError, VizResult};
use crate::render::{
    AxisOrientation, Color, PathPrimitive, RenderFrame, build_linear_axis,
};

/// Line chart over an ordered numeric series.
///
/// X spans the extent of the series, Y spans `[0, max]` with the usual
/// inverted pixel range. Path continuity follows dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    pub viewport: Viewport,
    pub margin: Margin,
    pub stroke: Color,
    pub stroke_width: f64,
    #[serde(default = "default_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_tick_count")]
    pub y_tick_count: usize,
}

fn default_tick_count() -> usize {
    6
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(600, 300),
            margin: Margin::new(20.0, 30.0, 30.0, 50.0),
            // steelblue
            stroke: Color::rgb(0.275, 0.510, 0.706),
            stroke_width: 2.0,
            x_tick_count: default_tick_count(),
            y_tick_count: default_tick_count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineChart {
    pub config: LineChartConfig,
}

impl LineChart {
    #[must_use]
    pub fn new(config: LineChartConfig) -> Self {
        Self { config }
    }

    /// Builds the full scene: both axes plus one open path through the
    /// scale-mapped points.
    pub fn render(&self, points: &[SeriesPoint]) -> VizResult<RenderFrame> {
        if points.len() < 2 {
            return Err(VizError::DegenerateDomain(format!(
                "line chart needs at least two points, got {}",
                points.len()
            )));
        }

        let plot = PlotArea::from_viewport(self.config.viewport, self.config.margin)?;

        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let x_scale = LinearScale::from_extent(&xs, 0.0, plot.width)?;

        let y_max = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let y_scale = LinearScale::new(0.0, y_max, plot.height, 0.0)?;

        let mapped: Vec<(f64, f64)> = points
            .iter()
            .map(|point| {
                (
                    plot.origin_x + x_scale.map(point.x),
                    plot.origin_y + y_scale.map(point.y),
                )
            })
            .collect();
        debug!(points = mapped.len(), "projected line series");

        let mut frame = RenderFrame::new(self.config.viewport).with_path(PathPrimitive::polyline(
            mapped,
            self.config.stroke,
            self.config.stroke_width,
        ));

        let y_axis = build_linear_axis(
            y_scale,
            AxisOrientation::Left,
            plot,
            self.config.y_tick_count,
            format_measure,
        )?;
        let x_axis = build_linear_axis(
            x_scale,
            AxisOrientation::Bottom,
            plot,
            self.config.x_tick_count,
            |value| format!("{}", value.round() as i64),
        )?;
        frame.paths.extend(y_axis.paths);
        frame.texts.extend(y_axis.texts);
        frame.paths.extend(x_axis.paths);
        frame.texts.extend(x_axis.texts);

        Ok(frame)
    }
}
