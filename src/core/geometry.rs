//! Pure point/band geometry for the grow-animated line graph.
//!
//! Everything here is deterministic and side-effect free so the scene
//! builder and tests consume the exact same coordinate math, with no UI
//! dependency anywhere in the module.

use crate::core::types::{EdgeInsets, Viewport};

/// Fixed gap between the content edges, labels, and the drawing band.
pub const DEFAULT_MARGIN: f64 = 8.0;

/// While progress sits in `[0, BASELINE_PROGRESS_THRESHOLD]` every point is
/// pinned flat to the baseline regardless of its value.
pub const BASELINE_PROGRESS_THRESHOLD: f64 = 0.1;

/// Measured bounding box of one rendered text run.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// Text metrics collaborator.
///
/// Backends with real font shaping (Pango) implement this; headless hosts
/// and tests use [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    fn text_extent(&self, text: &str, font_size: f64) -> TextExtent;
}

/// Deterministic glyph-box estimate: full font size tall, a fixed fraction
/// of the font size wide per character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicTextMeasurer {
    pub glyph_aspect: f64,
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self { glyph_aspect: 0.6 }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn text_extent(&self, text: &str, font_size: f64) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        TextExtent {
            width: text.chars().count() as f64 * font_size * self.glyph_aspect,
            height: font_size,
        }
    }
}

/// Vertical pixel range a point's height is interpolated within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointBand {
    pub top: f64,
    pub bottom: f64,
}

/// Horizontal span allocated to one data point.
#[must_use]
pub fn slot_width(content_width: f64, visible_count: usize) -> f64 {
    if visible_count == 0 {
        return 0.0;
    }
    content_width / visible_count as f64
}

/// Horizontal center of the point at `index`.
#[must_use]
pub fn point_center_x(padding_left: f64, slot: f64, index: usize) -> f64 {
    padding_left + slot / 2.0 + index as f64 * slot
}

/// Outer vertical extents of the drawing area: `(start_y, end_y)`, already
/// inset by the fixed margin. `end_y` is the baseline points grow from.
#[must_use]
pub fn vertical_extents(viewport: Viewport, padding: EdgeInsets) -> (f64, f64) {
    let start_y = padding.top + DEFAULT_MARGIN;
    let end_y = f64::from(viewport.height) - padding.bottom - DEFAULT_MARGIN;
    (start_y, end_y)
}

/// Shrinks the outer extents by the label boxes actually shown.
///
/// `value_label_height`/`title_label_height` are `Some` only when that label
/// is visible; heights are measured per point, so the band can differ
/// between points whose label strings have different glyph heights.
#[must_use]
pub fn point_band(
    start_y: f64,
    end_y: f64,
    value_label_height: Option<f64>,
    title_label_height: Option<f64>,
) -> PointBand {
    let top = match value_label_height {
        Some(height) => start_y + height + DEFAULT_MARGIN,
        None => start_y,
    };
    let bottom = match title_label_height {
        Some(height) => end_y - height - DEFAULT_MARGIN,
        None => end_y,
    };
    PointBand { top, bottom }
}

/// Vertical position of one point for an in-progress grow animation.
///
/// A zero `max_value` treats the value ratio as 0 instead of dividing.
#[must_use]
pub fn point_y(
    value: f64,
    max_value: f64,
    band: PointBand,
    progress: f64,
    point_radius: f64,
) -> f64 {
    if (0.0..=BASELINE_PROGRESS_THRESHOLD).contains(&progress) {
        return band.bottom - point_radius;
    }
    let ratio = if max_value == 0.0 {
        0.0
    } else {
        value / max_value
    };
    band.bottom - (band.bottom - band.top) * ratio * progress + point_radius
}

/// Renders a value the way the graph prints it: minimal decimal form with at
/// least one fractional digit ("10.0", "10.5", "-3.0").
#[must_use]
pub fn format_value(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    text
}
