use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Affine domain-to-pixel mapping.
///
/// The range may run in either direction; a descending range
/// (`range_start > range_end`) gives the inverted-Y mapping used by
/// value axes. Values outside the domain extrapolate linearly, there
/// is no clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> VizResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(VizError::DegenerateDomain(
                "linear domain bounds must be finite".to_owned(),
            ));
        }
        if domain_start == domain_end {
            return Err(VizError::DegenerateDomain(format!(
                "linear domain has zero span at {domain_start}"
            )));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(VizError::InvalidData(
                "linear range bounds must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Builds a scale whose domain is the min/max extent of `values`.
    pub fn from_extent(values: &[f64], range_start: f64, range_end: f64) -> VizResult<Self> {
        if values.is_empty() {
            return Err(VizError::DegenerateDomain(
                "cannot take the extent of an empty series".to_owned(),
            ));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values {
            if !value.is_finite() {
                return Err(VizError::InvalidData(
                    "series values must be finite".to_owned(),
                ));
            }
            min = min.min(*value);
            max = max.max(*value);
        }

        Self::new(min, max, range_start, range_end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value into the pixel range.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse of `map`; pixel back to domain value.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Evenly spaced tick values across the domain, endpoints included.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        match tick_count {
            0 => Vec::new(),
            1 => vec![self.domain_start],
            _ => {
                let span = self.domain_end - self.domain_start;
                let denominator = (tick_count - 1) as f64;
                (0..tick_count)
                    .map(|index| self.domain_start + span * (index as f64) / denominator)
                    .collect()
            }
        }
    }
}
