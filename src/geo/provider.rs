use crate::error::VizResult;
use crate::geo::RegionCollection;

/// Supplies named region polygons for the choropleth pipeline.
///
/// The fetch is one-shot: no retries, no timeout handling beyond what
/// the transport gives us. Failures must surface as
/// `VizError::GeometryFetch` so the caller can decide between aborting
/// the map pipeline and rendering it blank.
pub trait GeometryProvider {
    fn fetch_regions(&self) -> VizResult<RegionCollection>;
}

/// In-memory provider for tests and offline hosts.
#[derive(Debug, Clone, Default)]
pub struct StaticRegions {
    regions: RegionCollection,
}

impl StaticRegions {
    #[must_use]
    pub fn new(regions: RegionCollection) -> Self {
        Self { regions }
    }
}

impl GeometryProvider for StaticRegions {
    fn fetch_regions(&self) -> VizResult<RegionCollection> {
        Ok(self.regions.clone())
    }
}

#[cfg(feature = "http-provider")]
mod http {
    use tracing::debug;

    use crate::error::{VizError, VizResult};
    use crate::geo::{RegionCollection, geojson};

    use super::GeometryProvider;

    /// Blocking single-GET provider for a remote GeoJSON document.
    #[derive(Debug, Clone)]
    pub struct HttpGeometryProvider {
        url: String,
    }

    impl HttpGeometryProvider {
        #[must_use]
        pub fn new(url: impl Into<String>) -> Self {
            Self { url: url.into() }
        }
    }

    impl GeometryProvider for HttpGeometryProvider {
        fn fetch_regions(&self) -> VizResult<RegionCollection> {
            debug!(url = %self.url, "fetching region geometry");
            let response = reqwest::blocking::get(&self.url)
                .map_err(|err| VizError::GeometryFetch(format!("request failed: {err}")))?;
            let response = response
                .error_for_status()
                .map_err(|err| VizError::GeometryFetch(format!("bad status: {err}")))?;
            let payload = response
                .text()
                .map_err(|err| VizError::GeometryFetch(format!("body read failed: {err}")))?;
            geojson::parse_regions(&payload)
        }
    }
}

#[cfg(feature = "http-provider")]
pub use http::HttpGeometryProvider;
