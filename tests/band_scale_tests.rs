use approx::assert_relative_eq;
use statchart::VizError;
use statchart::core::BandScale;

fn languages() -> Vec<&'static str> {
    vec!["JavaScript", "Python", "Java", "Go"]
}

#[test]
fn bands_tile_the_extent_exactly() {
    let scale = BandScale::new(languages(), 0.0, 400.0, 0.1).expect("valid scale");

    let band_total: f64 = scale
        .keys()
        .map(|key| scale.band(key).expect("band").width)
        .sum();
    let gap_total = 400.0 - band_total;

    // 4 steps of 100, each donating 10% to gaps.
    assert_relative_eq!(band_total, 360.0, epsilon = 1e-9);
    assert_relative_eq!(gap_total, 40.0, epsilon = 1e-9);
}

#[test]
fn every_band_has_identical_width() {
    let scale = BandScale::new(languages(), 0.0, 400.0, 0.25).expect("valid scale");

    let widths: Vec<f64> = scale
        .keys()
        .map(|key| scale.band(key).expect("band").width)
        .collect();
    for width in &widths {
        assert_relative_eq!(*width, widths[0], epsilon = 1e-12);
        assert_relative_eq!(*width, scale.bandwidth(), epsilon = 1e-12);
    }
}

#[test]
fn adjacent_bands_do_not_overlap() {
    let scale = BandScale::new(languages(), 0.0, 400.0, 0.1).expect("valid scale");

    let bands: Vec<_> = scale
        .keys()
        .map(|key| scale.band(key).expect("band"))
        .collect();
    for pair in bands.windows(2) {
        assert!(pair[0].end() <= pair[1].start + 1e-9);
    }
}

#[test]
fn band_start_respects_padding_split() {
    let scale = BandScale::new(languages(), 0.0, 400.0, 0.1).expect("valid scale");

    // Half of each 10px padding donation sits before the band.
    let first = scale.band("JavaScript").expect("band");
    assert_relative_eq!(first.start, 5.0, epsilon = 1e-9);
    assert_relative_eq!(first.width, 90.0, epsilon = 1e-9);

    let third = scale.band("Java").expect("band");
    assert_relative_eq!(third.start, 205.0, epsilon = 1e-9);
}

#[test]
fn zero_padding_makes_bands_touch() {
    let scale = BandScale::new(vec!["a", "b"], 0.0, 100.0, 0.0).expect("valid scale");

    let first = scale.band("a").expect("band");
    let second = scale.band("b").expect("band");
    assert_relative_eq!(first.end(), second.start, epsilon = 1e-9);
    assert_relative_eq!(scale.bandwidth(), scale.step(), epsilon = 1e-12);
}

#[test]
fn band_scale_preserves_insertion_order() {
    let scale = BandScale::new(vec!["z", "a", "m"], 0.0, 300.0, 0.0).expect("valid scale");

    let order: Vec<&str> = scale.keys().collect();
    assert_eq!(order, vec!["z", "a", "m"]);
    assert!(scale.band("z").expect("band").start < scale.band("a").expect("band").start);
}

#[test]
fn duplicate_category_is_rejected() {
    let result = BandScale::new(vec!["Go", "Rust", "Go"], 0.0, 300.0, 0.1);
    assert!(matches!(
        result,
        Err(VizError::DuplicateCategory { key }) if key == "Go"
    ));
}

#[test]
fn unknown_category_lookup_is_rejected() {
    let scale = BandScale::new(languages(), 0.0, 400.0, 0.1).expect("valid scale");
    let result = scale.band("COBOL");
    assert!(matches!(
        result,
        Err(VizError::UnknownCategory { key }) if key == "COBOL"
    ));
}

#[test]
fn empty_category_set_is_rejected() {
    let result = BandScale::new(Vec::<String>::new(), 0.0, 400.0, 0.1);
    assert!(matches!(result, Err(VizError::DegenerateDomain(_))));
}

#[test]
fn out_of_range_padding_is_rejected() {
    assert!(BandScale::new(languages(), 0.0, 400.0, 1.0).is_err());
    assert!(BandScale::new(languages(), 0.0, 400.0, -0.1).is_err());
}
