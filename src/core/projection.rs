use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Latitude cutoff of the spherical Mercator square; inputs beyond it
/// saturate instead of diverging toward infinity.
pub const MAX_LATITUDE_DEG: f64 = 85.051_128_78;

/// Projected planar point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Spherical Mercator projection with a pixel scale factor and translation.
///
/// Mirrors `geoMercator().scale(s).translate([tx, ty])`: longitude maps
/// linearly, latitude through the inverse Gudermannian, and Y grows
/// downward in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MercatorProjection {
    scale_factor: f64,
    translate_x: f64,
    translate_y: f64,
}

impl MercatorProjection {
    pub fn new(scale_factor: f64, translate_x: f64, translate_y: f64) -> VizResult<Self> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(VizError::InvalidData(format!(
                "projection scale factor must be finite and > 0, got {scale_factor}"
            )));
        }
        if !translate_x.is_finite() || !translate_y.is_finite() {
            return Err(VizError::InvalidData(
                "projection translation must be finite".to_owned(),
            ));
        }

        Ok(Self {
            scale_factor,
            translate_x,
            translate_y,
        })
    }

    #[must_use]
    pub fn scale_factor(self) -> f64 {
        self.scale_factor
    }

    #[must_use]
    pub fn translate(self) -> (f64, f64) {
        (self.translate_x, self.translate_y)
    }

    /// Projects one (longitude, latitude) pair in degrees to pixel space.
    ///
    /// Latitude is saturated to the Mercator cutoff first, so polar input
    /// produces a large finite Y rather than NaN or infinity. Stateless;
    /// every call depends only on its arguments.
    #[must_use]
    pub fn project(self, lon_deg: f64, lat_deg: f64) -> ProjectedPoint {
        let lon = lon_deg.to_radians();
        let lat = lat_deg
            .clamp(-MAX_LATITUDE_DEG, MAX_LATITUDE_DEG)
            .to_radians();

        let y_merc = (std::f64::consts::FRAC_PI_4 + lat / 2.0).tan().ln();
        ProjectedPoint {
            x: self.scale_factor * lon + self.translate_x,
            y: -self.scale_factor * y_merc + self.translate_y,
        }
    }

    /// Projects a polygon ring, preserving vertex order.
    #[must_use]
    pub fn project_ring(self, ring: &[(f64, f64)]) -> Vec<ProjectedPoint> {
        ring.iter()
            .map(|(lon, lat)| self.project(*lon, *lat))
            .collect()
    }
}
