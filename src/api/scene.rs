use crate::core::geometry::{
    self, DEFAULT_MARGIN, PointBand, format_value, point_band, point_center_x, slot_width,
    vertical_extents,
};
use crate::core::{EdgeInsets, GraphDataset, TextMeasurer, Viewport};
use crate::render::{CirclePrimitive, PathPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::GraphStyle;

/// Join rounding applied to the smoothed curve.
pub const CURVE_CORNER_RADIUS: f64 = 3.0;

#[derive(Debug, Clone)]
struct PointPlacement {
    center_x: f64,
    y: f64,
    band: PointBand,
    title_text: String,
    value_text: String,
    title_height: f64,
}

/// Materializes one draw pass for the current visible window of the dataset.
///
/// An empty dataset produces an empty frame; backends then perform zero
/// drawing operations.
#[must_use]
pub fn build_scene(
    dataset: &GraphDataset,
    style: GraphStyle,
    viewport: Viewport,
    padding: EdgeInsets,
    progress: f64,
    measurer: &dyn TextMeasurer,
) -> RenderFrame {
    let mut frame = RenderFrame::new(viewport);

    let visible = dataset.visible_points(style.count_visible_points);
    if visible.is_empty() {
        return frame;
    }

    let content_width = f64::from(viewport.width) - padding.left - padding.right;
    let slot = slot_width(content_width, visible.len());
    let (start_y, end_y) = vertical_extents(viewport, padding);

    let placements: Vec<PointPlacement> = visible
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let value_text = format_value(point.value);
            let title_extent = measurer.text_extent(&point.label, style.title_size);
            let value_extent = measurer.text_extent(&value_text, style.value_size);
            let band = point_band(
                start_y,
                end_y,
                style.value_show.then_some(value_extent.height),
                style.title_show.then_some(title_extent.height),
            );
            PointPlacement {
                center_x: point_center_x(padding.left, slot, index),
                y: geometry::point_y(
                    point.value,
                    dataset.max_value(),
                    band,
                    progress,
                    style.point_radius,
                ),
                band,
                title_text: point.label.clone(),
                value_text,
                title_height: title_extent.height,
            }
        })
        .collect();

    frame.paths.push(build_curve(&placements, style, slot, end_y, progress));

    for placement in &placements {
        if style.title_show && !placement.title_text.is_empty() {
            frame.texts.push(TextPrimitive::new(
                placement.title_text.clone(),
                placement.center_x,
                placement.band.bottom + placement.title_height + DEFAULT_MARGIN,
                style.title_size,
                style.title_color,
                TextHAlign::Center,
            ));
        }
        if style.value_show {
            frame.texts.push(TextPrimitive::new(
                placement.value_text.clone(),
                placement.center_x,
                placement.y - DEFAULT_MARGIN,
                style.value_size,
                style.value_color,
                TextHAlign::Center,
            ));
        }
        if style.point_show {
            frame.circles.push(CirclePrimitive::new(
                placement.center_x,
                placement.y,
                style.point_radius,
                style.point_color,
            ));
        }
    }

    frame
}

/// Smoothed curve through the placed points.
///
/// The first point is a plain move-to. Each later point adds a cubic segment
/// whose control points sit on the midpoint vertical between the previous
/// slot and this one. At progress 0 exactly, only the move-to is emitted.
fn build_curve(
    placements: &[PointPlacement],
    style: GraphStyle,
    slot: f64,
    baseline_y: f64,
    progress: f64,
) -> PathPrimitive {
    let mut path = PathPrimitive::new(style.line_width, style.line_color, CURVE_CORNER_RADIUS);

    let mut midpoint_x = placements[0].center_x;
    let mut previous_y = baseline_y;

    for (index, placement) in placements.iter().enumerate() {
        if index == 0 {
            path.move_to(placement.center_x, placement.y);
        } else if progress != 0.0 {
            path.cubic_to(
                midpoint_x,
                previous_y,
                midpoint_x,
                placement.y,
                placement.center_x,
                placement.y,
            );
        }
        midpoint_x = placement.center_x + slot / 2.0;
        previous_y = placement.y;
    }

    path
}

#[cfg(test)]
mod tests {
    use super::build_scene;
    use crate::api::GraphStyle;
    use crate::core::{DataPoint, EdgeInsets, GraphDataset, HeuristicTextMeasurer, Viewport};
    use crate::render::PathSegment;

    fn dataset() -> GraphDataset {
        GraphDataset::new(vec![
            DataPoint::new("a", 10.0),
            DataPoint::new("b", 20.0),
            DataPoint::new("c", 50.0),
        ])
    }

    #[test]
    fn curve_emits_one_move_and_cubics_for_the_rest() {
        let frame = build_scene(
            &dataset(),
            GraphStyle::default(),
            Viewport::new(300, 200),
            EdgeInsets::zero(),
            1.0,
            &HeuristicTextMeasurer::default(),
        );

        let path = frame.paths.first().expect("curve path");
        assert_eq!(path.segments.len(), 3);
        assert!(matches!(path.segments[0], PathSegment::MoveTo { .. }));
        assert!(matches!(path.segments[1], PathSegment::CubicTo { .. }));
        assert!(matches!(path.segments[2], PathSegment::CubicTo { .. }));
    }

    #[test]
    fn curve_is_move_to_only_at_zero_progress() {
        let frame = build_scene(
            &dataset(),
            GraphStyle::default(),
            Viewport::new(300, 200),
            EdgeInsets::zero(),
            0.0,
            &HeuristicTextMeasurer::default(),
        );

        let path = frame.paths.first().expect("curve path");
        assert_eq!(path.segments.len(), 1);
        assert!(matches!(path.segments[0], PathSegment::MoveTo { .. }));
    }
}
