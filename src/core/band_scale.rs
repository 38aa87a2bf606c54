use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// Pixel slot assigned to one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub start: f64,
    pub width: f64,
}

impl Band {
    #[must_use]
    pub fn center(self) -> f64 {
        self.start + self.width / 2.0
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.start + self.width
    }
}

/// Categorical scale dividing a pixel extent into equal-width slots.
///
/// `padding` is the fraction of each step withheld from the band and
/// redistributed as inter-band gaps, so bands plus gaps always tile the
/// extent exactly. Category order is insertion order and drives slot
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    categories: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
}

impl BandScale {
    pub fn new<I, K>(categories: I, range_start: f64, range_end: f64, padding: f64) -> VizResult<Self>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(VizError::InvalidData(
                "band range bounds must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(VizError::InvalidData(format!(
                "band padding must be in [0, 1), got {padding}"
            )));
        }

        let mut set = IndexSet::new();
        for key in categories {
            let key = key.into();
            if !set.insert(key.clone()) {
                return Err(VizError::DuplicateCategory { key });
            }
        }
        if set.is_empty() {
            return Err(VizError::DegenerateDomain(
                "band scale needs at least one category".to_owned(),
            ));
        }

        Ok(Self {
            categories: set,
            range_start,
            range_end,
            padding,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// Distance between the starts of adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        (self.range_end - self.range_start) / (self.len() as f64)
    }

    /// Width of every band; identical for all keys.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Looks up the pixel slot for one category key.
    pub fn band(&self, key: &str) -> VizResult<Band> {
        let Some(index) = self.categories.get_index_of(key) else {
            return Err(VizError::UnknownCategory {
                key: key.to_owned(),
            });
        };

        let step = self.step();
        Ok(Band {
            start: self.range_start + (index as f64) * step + step * self.padding / 2.0,
            width: self.bandwidth(),
        })
    }
}
