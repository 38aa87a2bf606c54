use serde::{Deserialize, Serialize};

use crate::error::{VizError, VizResult};

/// One entry of an annotation block: a key and its display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEntry {
    pub key: String,
    pub text: String,
}

impl LabelEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// A label resolved to its pixel anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Stacks labels top-to-bottom at a fixed x anchor.
///
/// Entry order is preserved: entry `i` lands at `anchor_y + i * line_height`.
/// There is no overlap avoidance and no negative-y validation; callers are
/// expected to anchor high enough for the block they pass in.
pub fn place_labels(
    entries: &[LabelEntry],
    anchor_x: f64,
    anchor_y: f64,
    line_height: f64,
) -> VizResult<Vec<PlacedLabel>> {
    if !anchor_x.is_finite() || !anchor_y.is_finite() {
        return Err(VizError::InvalidData(
            "label anchor must be finite".to_owned(),
        ));
    }
    if !line_height.is_finite() || line_height <= 0.0 {
        return Err(VizError::InvalidData(
            "label line height must be finite and > 0".to_owned(),
        ));
    }

    Ok(entries
        .iter()
        .enumerate()
        .map(|(index, entry)| PlacedLabel {
            text: format!("{}: {}", entry.key, entry.text),
            x: anchor_x,
            y: anchor_y + (index as f64) * line_height,
        })
        .collect())
}
