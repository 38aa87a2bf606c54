pub mod geojson;
mod provider;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[cfg(feature = "http-provider")]
pub use provider::HttpGeometryProvider;
pub use provider::{GeometryProvider, StaticRegions};

/// Polygon boundary of one named region in (longitude, latitude) degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionShape {
    pub code: String,
    pub rings: Vec<Vec<(f64, f64)>>,
}

/// Region shapes keyed by region code, in source order.
pub type RegionCollection = IndexMap<String, RegionShape>;
