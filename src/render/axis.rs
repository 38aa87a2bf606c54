use crate::core::{BandScale, LinearScale, PlotArea};
use crate::error::VizResult;
use crate::render::{Color, PathPrimitive, TextHAlign, TextPrimitive};

const TICK_LENGTH_PX: f64 = 6.0;
const LABEL_GAP_PX: f64 = 3.0;
const AXIS_FONT_SIZE_PX: f64 = 10.0;
const AXIS_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);

/// Which plot edge an axis is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Left,
    Bottom,
}

/// Primitive bundle for one rendered axis.
///
/// Kept separate from `RenderFrame` so chart pipelines can merge axes
/// into their scene in a single pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisPrimitives {
    pub paths: Vec<PathPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl AxisPrimitives {
    fn push_segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.paths
            .push(PathPrimitive::polyline(vec![(x1, y1), (x2, y2)], AXIS_COLOR, 1.0));
    }
}

/// Builds the baseline, tick marks, and tick labels for a linear axis.
///
/// The scale's range is interpreted in plot-local coordinates; emitted
/// primitives are shifted to viewport coordinates via `plot`.
pub fn build_linear_axis(
    scale: LinearScale,
    orientation: AxisOrientation,
    plot: PlotArea,
    tick_count: usize,
    format: impl Fn(f64) -> String,
) -> VizResult<AxisPrimitives> {
    let mut axis = AxisPrimitives::default();

    match orientation {
        AxisOrientation::Bottom => {
            let baseline_y = plot.origin_y + plot.height;
            axis.push_segment(
                plot.origin_x,
                baseline_y,
                plot.origin_x + plot.width,
                baseline_y,
            );
            for tick in scale.ticks(tick_count) {
                let x = plot.origin_x + scale.map(tick);
                axis.push_segment(x, baseline_y, x, baseline_y + TICK_LENGTH_PX);
                axis.texts.push(TextPrimitive::new(
                    format(tick),
                    x,
                    baseline_y + TICK_LENGTH_PX + LABEL_GAP_PX + AXIS_FONT_SIZE_PX,
                    AXIS_FONT_SIZE_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
            }
        }
        AxisOrientation::Left => {
            axis.push_segment(
                plot.origin_x,
                plot.origin_y,
                plot.origin_x,
                plot.origin_y + plot.height,
            );
            for tick in scale.ticks(tick_count) {
                let y = plot.origin_y + scale.map(tick);
                axis.push_segment(plot.origin_x - TICK_LENGTH_PX, y, plot.origin_x, y);
                axis.texts.push(TextPrimitive::new(
                    format(tick),
                    plot.origin_x - TICK_LENGTH_PX - LABEL_GAP_PX,
                    y + AXIS_FONT_SIZE_PX / 2.0,
                    AXIS_FONT_SIZE_PX,
                    AXIS_COLOR,
                    TextHAlign::Right,
                ));
            }
        }
    }

    Ok(axis)
}

/// Builds a left-edge category axis: baseline plus one label per band,
/// centered on its slot.
pub fn build_band_axis(scale: &BandScale, plot: PlotArea) -> VizResult<AxisPrimitives> {
    let mut axis = AxisPrimitives::default();
    axis.push_segment(
        plot.origin_x,
        plot.origin_y,
        plot.origin_x,
        plot.origin_y + plot.height,
    );

    for key in scale.keys() {
        let band = scale.band(key)?;
        let y = plot.origin_y + band.center();
        axis.push_segment(plot.origin_x - TICK_LENGTH_PX, y, plot.origin_x, y);
        axis.texts.push(TextPrimitive::new(
            key,
            plot.origin_x - TICK_LENGTH_PX - LABEL_GAP_PX,
            y + AXIS_FONT_SIZE_PX / 2.0,
            AXIS_FONT_SIZE_PX,
            AXIS_COLOR,
            TextHAlign::Right,
        ));
    }

    Ok(axis)
}
