use smoothgraph_rs::core::dataset::FALLBACK_MAX_VALUE;
use smoothgraph_rs::core::{DataPoint, GraphDataset};

#[test]
fn max_value_tracks_largest_point() {
    let dataset = GraphDataset::new(vec![
        DataPoint::new("a", 10.0),
        DataPoint::new("b", 70.0),
        DataPoint::new("c", 50.0),
    ]);

    assert_eq!(dataset.max_value(), 70.0);
}

#[test]
fn empty_dataset_reports_fallback_max() {
    let dataset = GraphDataset::new(Vec::new());
    assert_eq!(dataset.max_value(), FALLBACK_MAX_VALUE);

    let default = GraphDataset::default();
    assert_eq!(default.max_value(), FALLBACK_MAX_VALUE);
}

#[test]
fn replace_recomputes_max() {
    let mut dataset = GraphDataset::new(vec![DataPoint::new("a", 10.0)]);
    dataset.replace(vec![DataPoint::new("b", 3.0), DataPoint::new("c", 4.0)]);

    assert_eq!(dataset.max_value(), 4.0);
    assert_eq!(dataset.len(), 2);

    dataset.replace(Vec::new());
    assert_eq!(dataset.max_value(), FALLBACK_MAX_VALUE);
    assert!(dataset.is_empty());
}

#[test]
fn all_zero_dataset_reports_zero_max() {
    let dataset = GraphDataset::new(vec![DataPoint::new("a", 0.0), DataPoint::new("b", 0.0)]);
    assert_eq!(dataset.max_value(), 0.0);
}

#[test]
fn all_negative_dataset_reports_largest_value() {
    let dataset = GraphDataset::new(vec![DataPoint::new("a", -5.0), DataPoint::new("b", -2.0)]);
    assert_eq!(dataset.max_value(), -2.0);
}

#[test]
fn zero_cap_shows_all_points() {
    let dataset = GraphDataset::new(vec![
        DataPoint::new("a", 10.0),
        DataPoint::new("a", 20.0),
        DataPoint::new("a", 50.0),
    ]);

    assert_eq!(dataset.visible_count(0), 3);
    assert_eq!(dataset.max_value(), 50.0);
}

#[test]
fn cap_within_range_limits_to_prefix() {
    let dataset = GraphDataset::new(vec![
        DataPoint::new("first", 1.0),
        DataPoint::new("second", 2.0),
        DataPoint::new("third", 3.0),
    ]);

    assert_eq!(dataset.visible_count(2), 2);

    let window = dataset.visible_points(2);
    assert_eq!(window.len(), 2);
    assert_eq!(window[0].label, "first");
    assert_eq!(window[1].label, "second");
}

#[test]
fn cap_equal_to_len_shows_all() {
    let dataset = GraphDataset::new(vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)]);
    assert_eq!(dataset.visible_count(2), 2);
}

#[test]
fn oversized_cap_falls_through_to_show_all() {
    let dataset = GraphDataset::new(vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)]);
    assert_eq!(dataset.visible_count(5), 2);
}

#[test]
fn negative_cap_falls_through_to_show_all() {
    let dataset = GraphDataset::new(vec![DataPoint::new("a", 1.0), DataPoint::new("b", 2.0)]);
    assert_eq!(dataset.visible_count(-3), 2);
}
