use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::charts::format_measure;
use crate::core::{BandScale, CategoryValue, LinearScale, Margin, PlotArea, Viewport};
use crate::error::{VizError, VizResult};
use crate::render::{
    AxisOrientation, Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
    build_band_axis, build_linear_axis,
};

const VALUE_LABEL_OFFSET_X: f64 = 5.0;
const VALUE_LABEL_OFFSET_Y: f64 = 4.0;
const VALUE_LABEL_FONT_SIZE_PX: f64 = 11.0;

/// Horizontal bar chart over a keyed series.
///
/// Categories take the Y axis as equal-width bands in dataset order;
/// values grow rightward on a linear X scale anchored at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    pub margin: Margin,
    pub band_padding: f64,
    pub fill: Color,
    #[serde(default = "default_value_tick_count")]
    pub value_tick_count: usize,
}

fn default_value_tick_count() -> usize {
    5
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::new(740, 480),
            margin: Margin::new(20.0, 20.0, 60.0, 120.0),
            band_padding: 0.1,
            // material blue 700
            fill: Color::rgb(0.098, 0.463, 0.824),
            value_tick_count: default_value_tick_count(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BarChart {
    pub config: BarChartConfig,
}

impl BarChart {
    #[must_use]
    pub fn new(config: BarChartConfig) -> Self {
        Self { config }
    }

    /// Builds the full scene: category axis, value axis, one rect per
    /// record, and a value label at each bar end.
    pub fn render(&self, records: &[CategoryValue]) -> VizResult<RenderFrame> {
        if records.is_empty() {
            return Err(VizError::DegenerateDomain(
                "bar chart needs at least one record".to_owned(),
            ));
        }

        let plot = PlotArea::from_viewport(self.config.viewport, self.config.margin)?;

        let band_scale = BandScale::new(
            records.iter().map(|record| record.key.clone()),
            0.0,
            plot.height,
            self.config.band_padding,
        )?;

        let value_max = records
            .iter()
            .map(|record| record.value)
            .fold(f64::NEG_INFINITY, f64::max);
        let value_scale = LinearScale::new(0.0, value_max, 0.0, plot.width)?;

        let mut frame = RenderFrame::new(self.config.viewport);
        for record in records {
            let band = band_scale.band(&record.key)?;
            let bar_width = value_scale.map(record.value);
            frame.rects.push(RectPrimitive::new(
                plot.origin_x,
                plot.origin_y + band.start,
                bar_width,
                band.width,
                self.config.fill,
            ));
            frame.texts.push(TextPrimitive::new(
                format!("{}M", format_measure(record.value)),
                plot.origin_x + bar_width + VALUE_LABEL_OFFSET_X,
                plot.origin_y + band.center() + VALUE_LABEL_OFFSET_Y,
                VALUE_LABEL_FONT_SIZE_PX,
                Color::rgb(0.2, 0.2, 0.2),
                TextHAlign::Left,
            ));
        }
        debug!(bars = frame.rects.len(), "projected bar series");

        let category_axis = build_band_axis(&band_scale, plot)?;
        let value_axis = build_linear_axis(
            value_scale,
            AxisOrientation::Bottom,
            plot,
            self.config.value_tick_count,
            |value| format!("{}M", format_measure(value)),
        )?;
        frame.paths.extend(category_axis.paths);
        frame.texts.extend(category_axis.texts);
        frame.paths.extend(value_axis.paths);
        frame.texts.extend(value_axis.texts);

        Ok(frame)
    }
}
