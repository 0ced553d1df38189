use approx::assert_relative_eq;
use smoothgraph_rs::core::geometry::{
    BASELINE_PROGRESS_THRESHOLD, DEFAULT_MARGIN, PointBand, format_value, point_band,
    point_center_x, point_y, slot_width, vertical_extents,
};
use smoothgraph_rs::core::{EdgeInsets, HeuristicTextMeasurer, TextMeasurer, Viewport};

#[test]
fn slot_width_divides_content_evenly() {
    assert_eq!(slot_width(300.0, 3), 100.0);
    assert_relative_eq!(slot_width(500.0, 7), 500.0 / 7.0);
}

#[test]
fn slot_width_is_zero_for_no_points() {
    assert_eq!(slot_width(300.0, 0), 0.0);
}

#[test]
fn point_centers_sit_mid_slot() {
    let slot = 100.0;
    assert_eq!(point_center_x(10.0, slot, 0), 60.0);
    assert_eq!(point_center_x(10.0, slot, 1), 160.0);
    assert_eq!(point_center_x(10.0, slot, 2), 260.0);
}

#[test]
fn vertical_extents_apply_padding_and_margin() {
    let viewport = Viewport::new(300, 200);
    let padding = EdgeInsets::new(0.0, 5.0, 0.0, 7.0);

    let (start_y, end_y) = vertical_extents(viewport, padding);
    assert_eq!(start_y, 5.0 + DEFAULT_MARGIN);
    assert_eq!(end_y, 200.0 - 7.0 - DEFAULT_MARGIN);
}

#[test]
fn band_shrinks_for_shown_labels_only() {
    let band = point_band(10.0, 190.0, Some(12.0), Some(12.0));
    assert_eq!(band.top, 10.0 + 12.0 + DEFAULT_MARGIN);
    assert_eq!(band.bottom, 190.0 - 12.0 - DEFAULT_MARGIN);

    let bare = point_band(10.0, 190.0, None, None);
    assert_eq!(bare.top, 10.0);
    assert_eq!(bare.bottom, 190.0);
}

#[test]
fn early_progress_pins_points_to_baseline() {
    let band = PointBand {
        top: 30.0,
        bottom: 170.0,
    };

    for progress in [0.0, 0.05, BASELINE_PROGRESS_THRESHOLD] {
        for value in [0.0, 10.0, 50.0, -20.0] {
            assert_eq!(point_y(value, 50.0, band, progress, 4.0), 170.0 - 4.0);
        }
    }
}

#[test]
fn full_progress_maps_value_ratio_exactly() {
    let band = PointBand {
        top: 30.0,
        bottom: 170.0,
    };

    // value == max lands at band top (plus radius), half value half way.
    assert_eq!(point_y(50.0, 50.0, band, 1.0, 4.0), 30.0 + 4.0);
    assert_eq!(point_y(25.0, 50.0, band, 1.0, 4.0), 170.0 - 140.0 * 0.5 + 4.0);
    assert_eq!(point_y(10.0, 50.0, band, 1.0, 4.0), 170.0 - 140.0 * 0.2 + 4.0);
}

#[test]
fn partial_progress_scales_growth() {
    let band = PointBand {
        top: 30.0,
        bottom: 170.0,
    };

    let y = point_y(50.0, 50.0, band, 0.5, 4.0);
    assert_relative_eq!(y, 170.0 - 140.0 * 0.5 + 4.0);
}

#[test]
fn zero_max_value_resolves_to_baseline_plus_radius() {
    let band = PointBand {
        top: 30.0,
        bottom: 170.0,
    };

    assert_eq!(point_y(0.0, 0.0, band, 1.0, 4.0), 170.0 + 4.0);
    assert_eq!(point_y(5.0, 0.0, band, 0.7, 4.0), 170.0 + 4.0);
}

#[test]
fn negative_values_draw_below_the_baseline() {
    let band = PointBand {
        top: 30.0,
        bottom: 170.0,
    };

    let y = point_y(-10.0, 50.0, band, 1.0, 4.0);
    assert!(y > band.bottom);
}

#[test]
fn values_format_with_at_least_one_fraction_digit() {
    assert_eq!(format_value(10.0), "10.0");
    assert_eq!(format_value(10.5), "10.5");
    assert_eq!(format_value(0.0), "0.0");
    assert_eq!(format_value(-3.0), "-3.0");
    assert_eq!(format_value(70.25), "70.25");
}

#[test]
fn heuristic_measurer_scales_with_font_and_length() {
    let measurer = HeuristicTextMeasurer::default();

    let extent = measurer.text_extent("abcd", 12.0);
    assert_eq!(extent.height, 12.0);
    assert_relative_eq!(extent.width, 4.0 * 12.0 * 0.6);

    let empty = measurer.text_extent("", 12.0);
    assert_eq!(empty.width, 0.0);
    assert_eq!(empty.height, 0.0);
}
