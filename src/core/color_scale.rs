use indexmap::IndexMap;

use crate::error::{VizError, VizResult};
use crate::render::Color;

/// Sequential Blues ramp sampled from light to dark.
///
/// Stops are evenly spaced over the unit interval and interpolated
/// piecewise-linearly per channel.
const BLUES_STOPS: [Color; 5] = [
    Color::rgb(0.969, 0.984, 1.0),
    Color::rgb(0.776, 0.859, 0.937),
    Color::rgb(0.420, 0.682, 0.839),
    Color::rgb(0.129, 0.443, 0.710),
    Color::rgb(0.031, 0.188, 0.420),
];

/// Fill used for regions without a data value.
pub const UNKNOWN_REGION_COLOR: Color = Color::rgb(0.8, 0.8, 0.8);

/// Continuous value-to-color mapping over a fixed numeric domain.
///
/// Unlike `LinearScale`, out-of-domain input clamps to the nearest
/// endpoint: a gradient has nothing meaningful past its ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialColorScale {
    domain_min: f64,
    domain_max: f64,
}

impl SequentialColorScale {
    pub fn new(domain_min: f64, domain_max: f64) -> VizResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
            return Err(VizError::DegenerateDomain(format!(
                "color domain must be finite with min < max, got [{domain_min}, {domain_max}]"
            )));
        }

        Ok(Self {
            domain_min,
            domain_max,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    /// Maps a value to a ramp color, clamping to the domain endpoints.
    #[must_use]
    pub fn color_at(self, value: f64) -> Color {
        let clamped = value.clamp(self.domain_min, self.domain_max);
        let t = (clamped - self.domain_min) / (self.domain_max - self.domain_min);
        sample_ramp(t)
    }
}

/// Choropleth fill resolver: ramp color for known regions, neutral
/// sentinel for everything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChoroplethColors {
    scale: SequentialColorScale,
}

impl ChoroplethColors {
    pub fn new(domain_min: f64, domain_max: f64) -> VizResult<Self> {
        Ok(Self {
            scale: SequentialColorScale::new(domain_min, domain_max)?,
        })
    }

    /// Resolves the fill for one region code against a value table.
    ///
    /// Pure function of its two inputs; an absent code yields
    /// `UNKNOWN_REGION_COLOR` rather than an error, matching the
    /// all-regions-drawn behavior of the map pipeline.
    #[must_use]
    pub fn color_for(self, region_code: &str, values: &IndexMap<String, f64>) -> Color {
        match values.get(region_code) {
            Some(value) => self.scale.color_at(*value),
            None => UNKNOWN_REGION_COLOR,
        }
    }
}

fn sample_ramp(t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let segments = (BLUES_STOPS.len() - 1) as f64;
    let position = t * segments;
    let index = (position.floor() as usize).min(BLUES_STOPS.len() - 2);
    let local = position - index as f64;

    let lower = BLUES_STOPS[index];
    let upper = BLUES_STOPS[index + 1];
    Color::rgb(
        lerp(lower.red, upper.red, local),
        lerp(lower.green, upper.green, local),
        lerp(lower.blue, upper.blue, local),
    )
}

fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}
