//! Built-in demo datasets: global internet adoption figures.
//!
//! Shipping the data as constructor functions (rather than module-level
//! state) keeps every pipeline run explicit about its inputs.

use indexmap::IndexMap;

use crate::core::{CategoryValue, LabelEntry, SeriesPoint};

/// Worldwide internet users by year, in millions.
#[must_use]
pub fn internet_user_growth() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new(2000.0, 416.2),
        SeriesPoint::new(2005.0, 1030.0),
        SeriesPoint::new(2010.0, 2020.0),
        SeriesPoint::new(2015.0, 3001.0),
        SeriesPoint::new(2020.0, 4700.0),
        SeriesPoint::new(2021.0, 5020.0),
    ]
}

/// Programming language usage share, percent of developers.
#[must_use]
pub fn language_usage() -> Vec<CategoryValue> {
    vec![
        CategoryValue::new("JavaScript", 12.4),
        CategoryValue::new("Python", 9.0),
        CategoryValue::new("Java", 8.2),
        CategoryValue::new("C/C++", 6.3),
        CategoryValue::new("PHP", 6.1),
        CategoryValue::new("C#", 6.0),
        CategoryValue::new("Visual Dev Tools", 2.8),
        CategoryValue::new("Swift", 2.4),
        CategoryValue::new("Kotlin", 2.3),
        CategoryValue::new("Go", 1.5),
        CategoryValue::new("Ruby", 1.5),
        CategoryValue::new("Objective C", 1.4),
    ]
}

/// Internet penetration percentage by ISO3 country code.
#[must_use]
pub fn internet_penetration() -> IndexMap<String, f64> {
    IndexMap::from([
        ("USA".to_owned(), 80.0),
        ("CHN".to_owned(), 100.0),
        ("IND".to_owned(), 90.0),
        ("BRA".to_owned(), 75.0),
        ("NGA".to_owned(), 40.0),
        ("DEU".to_owned(), 20.0),
        ("THA".to_owned(), 15.0),
    ])
}

/// Absolute user counts for the map info panel, in display order.
#[must_use]
pub fn penetration_labels() -> Vec<LabelEntry> {
    vec![
        LabelEntry::new("CHN", "1110M users"),
        LabelEntry::new("IND", "808M users"),
        LabelEntry::new("USA", "322M users"),
        LabelEntry::new("BRA", "183M users"),
        LabelEntry::new("NGA", "107M users"),
        LabelEntry::new("DEU", "78.9M users"),
        LabelEntry::new("THA", "65.4M users"),
    ]
}
