pub mod band_scale;
pub mod color_scale;
pub mod labels;
pub mod projection;
pub mod scale;
pub mod types;

pub use band_scale::{Band, BandScale};
pub use color_scale::{ChoroplethColors, SequentialColorScale, UNKNOWN_REGION_COLOR};
pub use labels::{LabelEntry, PlacedLabel, place_labels};
pub use projection::{MAX_LATITUDE_DEG, MercatorProjection, ProjectedPoint};
pub use scale::LinearScale;
pub use types::{CategoryValue, Margin, PlotArea, SeriesPoint, Viewport};
