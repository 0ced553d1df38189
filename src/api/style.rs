use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Default text size for title and value labels, in pixels.
pub const DEFAULT_TEXT_SIZE: f64 = 12.0;
/// Default point radius and line stroke width, in pixels.
pub const DEFAULT_ELEMENT_SIZE: f64 = 4.0;

/// Presentation parameters for the graph.
///
/// An explicit struct the embedding application constructs and hands to the
/// engine, replacing declarative attribute parsing. Serializable so hosts can
/// persist/load graph styling without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphStyle {
    #[serde(default = "default_color")]
    pub point_color: Color,
    #[serde(default = "default_color")]
    pub line_color: Color,
    #[serde(default = "default_color")]
    pub title_color: Color,
    #[serde(default = "default_color")]
    pub value_color: Color,
    #[serde(default = "default_show")]
    pub title_show: bool,
    #[serde(default = "default_show")]
    pub value_show: bool,
    #[serde(default = "default_show")]
    pub point_show: bool,
    #[serde(default = "default_text_size")]
    pub title_size: f64,
    #[serde(default = "default_text_size")]
    pub value_size: f64,
    #[serde(default = "default_element_size")]
    pub point_radius: f64,
    #[serde(default = "default_element_size")]
    pub line_width: f64,
    /// Cap on how many leading points are displayed; 0 = show all.
    #[serde(default)]
    pub count_visible_points: i32,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            point_color: default_color(),
            line_color: default_color(),
            title_color: default_color(),
            value_color: default_color(),
            title_show: default_show(),
            value_show: default_show(),
            point_show: default_show(),
            title_size: default_text_size(),
            value_size: default_text_size(),
            point_radius: default_element_size(),
            line_width: default_element_size(),
            count_visible_points: 0,
        }
    }
}

impl GraphStyle {
    #[must_use]
    pub fn with_point_color(mut self, color: Color) -> Self {
        self.point_color = color;
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, color: Color) -> Self {
        self.line_color = color;
        self
    }

    #[must_use]
    pub fn with_title_color(mut self, color: Color) -> Self {
        self.title_color = color;
        self
    }

    #[must_use]
    pub fn with_value_color(mut self, color: Color) -> Self {
        self.value_color = color;
        self
    }

    #[must_use]
    pub fn with_title_show(mut self, show: bool) -> Self {
        self.title_show = show;
        self
    }

    #[must_use]
    pub fn with_value_show(mut self, show: bool) -> Self {
        self.value_show = show;
        self
    }

    #[must_use]
    pub fn with_point_show(mut self, show: bool) -> Self {
        self.point_show = show;
        self
    }

    #[must_use]
    pub fn with_title_size(mut self, size: f64) -> Self {
        self.title_size = size;
        self
    }

    #[must_use]
    pub fn with_value_size(mut self, size: f64) -> Self {
        self.value_size = size;
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn with_count_visible_points(mut self, count: i32) -> Self {
        self.count_visible_points = count;
        self
    }
}

fn default_color() -> Color {
    Color::rgb(0.5, 0.5, 0.5)
}

fn default_show() -> bool {
    true
}

fn default_text_size() -> f64 {
    DEFAULT_TEXT_SIZE
}

fn default_element_size() -> f64 {
    DEFAULT_ELEMENT_SIZE
}
