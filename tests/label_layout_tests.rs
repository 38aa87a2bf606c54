use approx::assert_relative_eq;
use statchart::core::{LabelEntry, place_labels};

#[test]
fn labels_stack_top_to_bottom_in_entry_order() {
    let entries = vec![
        LabelEntry::new("CHN", "1110M"),
        LabelEntry::new("IND", "808M"),
    ];

    let placed = place_labels(&entries, 650.0, 100.0, 20.0).expect("placement");

    assert_eq!(placed.len(), 2);
    assert_eq!(placed[0].text, "CHN: 1110M");
    assert_relative_eq!(placed[0].y, 100.0);
    assert_eq!(placed[1].text, "IND: 808M");
    assert_relative_eq!(placed[1].y, 120.0);
}

#[test]
fn all_labels_share_the_anchor_x() {
    let entries = vec![
        LabelEntry::new("USA", "322M"),
        LabelEntry::new("BRA", "183M"),
        LabelEntry::new("NGA", "107M"),
    ];

    let placed = place_labels(&entries, 650.0, 340.0, 20.0).expect("placement");
    for label in &placed {
        assert_relative_eq!(label.x, 650.0);
    }
}

#[test]
fn empty_entries_produce_no_labels() {
    let placed = place_labels(&[], 0.0, 0.0, 20.0).expect("placement");
    assert!(placed.is_empty());
}

#[test]
fn non_positive_line_height_is_rejected() {
    let entries = vec![LabelEntry::new("DEU", "78.9M")];
    assert!(place_labels(&entries, 0.0, 0.0, 0.0).is_err());
    assert!(place_labels(&entries, 0.0, 0.0, -20.0).is_err());
}

#[test]
fn non_finite_anchor_is_rejected() {
    let entries = vec![LabelEntry::new("DEU", "78.9M")];
    assert!(place_labels(&entries, f64::NAN, 0.0, 20.0).is_err());
}
