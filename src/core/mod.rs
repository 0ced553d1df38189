pub mod animation;
pub mod dataset;
pub mod geometry;
pub mod measure;
pub mod types;

pub use animation::{AnimationDriver, AnimationHandle, GrowAnimation};
pub use dataset::GraphDataset;
pub use geometry::{HeuristicTextMeasurer, TextExtent, TextMeasurer};
pub use measure::MeasureSpec;
pub use types::{DataPoint, EdgeInsets, Viewport};
