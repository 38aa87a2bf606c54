mod axis;
mod frame;
mod null_renderer;
mod primitives;

pub use axis::{AxisOrientation, AxisPrimitives, build_band_axis, build_linear_axis};
pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, PathPrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::VizResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from scale and projection logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> VizResult<()>;
}
