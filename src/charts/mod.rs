mod bar;
mod line;
mod map;

pub use bar::{BarChart, BarChartConfig};
pub use line::{LineChart, LineChartConfig};
pub use map::{ChoroplethMap, ChoroplethMapConfig};

/// Formats a measure the way a host page displays plain numbers:
/// integers without a decimal point, everything else trimmed to two
/// decimals.
#[must_use]
pub fn format_measure(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}
