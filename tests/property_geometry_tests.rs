use proptest::prelude::*;
use smoothgraph_rs::core::geometry::{
    BASELINE_PROGRESS_THRESHOLD, PointBand, point_center_x, point_y, slot_width,
};
use smoothgraph_rs::core::{DataPoint, GraphDataset};

proptest! {
    #[test]
    fn point_y_stays_inside_the_band_property(
        band_top in 0.0f64..500.0,
        band_span in 1.0f64..1000.0,
        max_value in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0,
        progress in 0.1001f64..1.0,
        point_radius in 0.0f64..16.0
    ) {
        let band = PointBand {
            top: band_top,
            bottom: band_top + band_span,
        };
        let value = max_value * value_factor;

        let y = point_y(value, max_value, band, progress, point_radius);

        prop_assert!(y <= band.bottom + point_radius + 1e-9);
        prop_assert!(y >= band.top + point_radius - 1e-9);
    }

    #[test]
    fn early_progress_pins_to_baseline_property(
        value in -1_000_000.0f64..1_000_000.0,
        max_value in 0.0f64..1_000_000.0,
        progress in 0.0f64..=BASELINE_PROGRESS_THRESHOLD,
        point_radius in 0.0f64..16.0
    ) {
        let band = PointBand {
            top: 30.0,
            bottom: 170.0,
        };

        let y = point_y(value, max_value, band, progress, point_radius);
        prop_assert_eq!(y, band.bottom - point_radius);
    }

    #[test]
    fn slots_cover_the_content_width_property(
        content_width in 1.0f64..10_000.0,
        count in 1usize..100
    ) {
        let slot = slot_width(content_width, count);
        let covered = slot * count as f64;

        prop_assert!((covered - content_width).abs() <= 1e-9 * content_width);
    }

    #[test]
    fn point_centers_are_strictly_increasing_property(
        padding_left in 0.0f64..100.0,
        slot in 0.001f64..1000.0,
        index in 0usize..100
    ) {
        let here = point_center_x(padding_left, slot, index);
        let next = point_center_x(padding_left, slot, index + 1);

        prop_assert!(next > here);
    }

    #[test]
    fn visible_count_never_exceeds_dataset_len_property(
        values in prop::collection::vec(-1000.0f64..1000.0, 0..50),
        cap in -100i32..200
    ) {
        let points: Vec<DataPoint> = values
            .iter()
            .map(|value| DataPoint::new("p", *value))
            .collect();
        let dataset = GraphDataset::new(points);
        let len = dataset.len();

        let visible = dataset.visible_count(cap);
        prop_assert!(visible <= len);

        if cap > 0 && (cap as usize) <= len {
            prop_assert_eq!(visible, cap as usize);
        } else {
            prop_assert_eq!(visible, len);
        }
    }

    #[test]
    fn max_value_bounds_every_point_property(
        values in prop::collection::vec(-1000.0f64..1000.0, 1..50)
    ) {
        let points: Vec<DataPoint> = values
            .iter()
            .map(|value| DataPoint::new("p", *value))
            .collect();
        let dataset = GraphDataset::new(points);

        for point in dataset.points() {
            prop_assert!(point.value <= dataset.max_value());
        }
    }
}
