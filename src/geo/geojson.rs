use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

use crate::error::{VizError, VizResult};
use crate::geo::{RegionCollection, RegionShape};

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon {
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
    #[serde(other)]
    Unsupported,
}

/// Decodes a GeoJSON `FeatureCollection` into region shapes keyed by
/// the feature `id`.
///
/// Features without an id or with non-areal geometry are skipped with a
/// debug log; a payload that does not decode at all is a
/// `GeometryFetch` error so transport and format failures surface the
/// same way to the map pipeline.
pub fn parse_regions(payload: &str) -> VizResult<RegionCollection> {
    let collection: FeatureCollection = serde_json::from_str(payload)
        .map_err(|err| VizError::GeometryFetch(format!("geojson decode error: {err}")))?;
    if collection.kind != "FeatureCollection" {
        return Err(VizError::GeometryFetch(format!(
            "expected FeatureCollection, got `{}`",
            collection.kind
        )));
    }

    let mut regions = IndexMap::new();
    let mut skipped = 0_usize;
    for feature in collection.features {
        let Some(code) = feature.id else {
            skipped += 1;
            continue;
        };
        let rings = match feature.geometry {
            Some(Geometry::Polygon { coordinates }) => coordinates
                .into_iter()
                .map(ring_points)
                .collect::<Vec<_>>(),
            Some(Geometry::MultiPolygon { coordinates }) => coordinates
                .into_iter()
                .flatten()
                .map(ring_points)
                .collect::<Vec<_>>(),
            Some(Geometry::Unsupported) | None => {
                skipped += 1;
                continue;
            }
        };
        regions.insert(code.clone(), RegionShape { code, rings });
    }

    if skipped > 0 {
        debug!(skipped, kept = regions.len(), "skipped non-areal features");
    }

    Ok(regions)
}

fn ring_points(ring: Vec<[f64; 2]>) -> Vec<(f64, f64)> {
    ring.into_iter().map(|[lon, lat]| (lon, lat)).collect()
}
