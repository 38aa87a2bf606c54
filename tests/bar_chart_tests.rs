use approx::assert_relative_eq;
use statchart::VizError;
use statchart::charts::{BarChart, BarChartConfig};
use statchart::core::CategoryValue;
use statchart::datasets;

#[test]
fn one_rect_per_record_in_dataset_order() {
    let chart = BarChart::default();
    let frame = chart.render(&datasets::language_usage()).expect("bar frame");

    assert_eq!(frame.rects.len(), 12);
    // Dataset order drives the vertical stacking.
    for pair in frame.rects.windows(2) {
        assert!(pair[0].y < pair[1].y);
    }
}

#[test]
fn largest_value_fills_the_plot_width() {
    let chart = BarChart::default();
    let frame = chart.render(&datasets::language_usage()).expect("bar frame");

    // JavaScript (12.4) is first and carries the maximum.
    // Default margins leave a 600px wide plot.
    assert_relative_eq!(frame.rects[0].width, 600.0, epsilon = 1e-9);
    for rect in &frame.rects {
        assert!(rect.width <= 600.0 + 1e-9);
    }
}

#[test]
fn bar_heights_equal_the_bandwidth() {
    let chart = BarChart::default();
    let frame = chart.render(&datasets::language_usage()).expect("bar frame");

    // 400px plot height, 12 bands, 10% padding.
    let expected = 400.0 / 12.0 * 0.9;
    for rect in &frame.rects {
        assert_relative_eq!(rect.height, expected, epsilon = 1e-9);
    }
}

#[test]
fn bar_widths_are_proportional_to_values() {
    let chart = BarChart::default();
    let frame = chart.render(&datasets::language_usage()).expect("bar frame");

    // Python (9.0) against JavaScript (12.4).
    let ratio = frame.rects[1].width / frame.rects[0].width;
    assert_relative_eq!(ratio, 9.0 / 12.4, epsilon = 1e-9);
}

#[test]
fn value_labels_sit_just_past_each_bar_end() {
    let chart = BarChart::default();
    let frame = chart.render(&datasets::language_usage()).expect("bar frame");

    let label = frame
        .texts
        .iter()
        .find(|text| text.text == "12.4M")
        .expect("value label for JavaScript");
    assert_relative_eq!(label.x, frame.rects[0].x + frame.rects[0].width + 5.0, epsilon = 1e-9);
}

#[test]
fn category_axis_labels_every_key() {
    let chart = BarChart::default();
    let frame = chart.render(&datasets::language_usage()).expect("bar frame");

    for record in datasets::language_usage() {
        assert!(
            frame.texts.iter().any(|text| text.text == record.key),
            "missing category label for {}",
            record.key
        );
    }
    frame.validate().expect("frame validates");
}

#[test]
fn duplicate_category_keys_are_rejected() {
    let chart = BarChart::default();
    let records = vec![
        CategoryValue::new("Go", 1.5),
        CategoryValue::new("Go", 2.0),
    ];

    let result = chart.render(&records);
    assert!(matches!(result, Err(VizError::DuplicateCategory { .. })));
}

#[test]
fn empty_dataset_is_rejected() {
    let chart = BarChart::new(BarChartConfig::default());
    let result = chart.render(&[]);
    assert!(matches!(result, Err(VizError::DegenerateDomain(_))));
}
