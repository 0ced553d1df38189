use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;

/// Derived maximum reported for an empty dataset.
pub const FALLBACK_MAX_VALUE: f64 = 100.0;

/// Ordered sequence of labeled samples plus its derived maximum value.
///
/// The sequence order is the display order, left to right. The dataset is
/// replaced wholesale by the caller and never mutated by rendering code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDataset {
    points: Vec<DataPoint>,
    max_value: f64,
}

impl Default for GraphDataset {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            max_value: FALLBACK_MAX_VALUE,
        }
    }
}

impl GraphDataset {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        let max_value = derive_max_value(&points);
        Self { points, max_value }
    }

    /// Replaces the whole dataset and recomputes the derived maximum.
    pub fn replace(&mut self, points: Vec<DataPoint>) {
        self.max_value = derive_max_value(&points);
        self.points = points;
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Number of leading points shown for a display cap.
    ///
    /// A cap of 0 means "show all". Out-of-range caps (negative, or larger
    /// than the dataset) also fall through to "show all".
    #[must_use]
    pub fn visible_count(&self, cap: i32) -> usize {
        let len = self.points.len();
        if cap > 0 && (cap as usize) <= len {
            cap as usize
        } else {
            len
        }
    }

    /// The leading window of points actually displayed — strictly a prefix.
    #[must_use]
    pub fn visible_points(&self, cap: i32) -> &[DataPoint] {
        &self.points[..self.visible_count(cap)]
    }
}

fn derive_max_value(points: &[DataPoint]) -> f64 {
    if points.is_empty() {
        return FALLBACK_MAX_VALUE;
    }
    points
        .iter()
        .map(|point| point.value)
        .fold(f64::NEG_INFINITY, f64::max)
}
