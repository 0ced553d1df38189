use serde::{Deserialize, Serialize};

/// Fallback width when the host places no exact constraint on the widget.
pub const DEFAULT_GRAPH_WIDTH: u32 = 320;
/// Fallback height when the host places no exact constraint on the widget.
pub const DEFAULT_GRAPH_HEIGHT: u32 = 240;

/// Layout constraint for one axis, as handed down by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureSpec {
    /// The host dictates this exact size.
    Exactly(u32),
    /// The widget may pick any size up to this bound.
    AtMost(u32),
    /// The widget picks its own size.
    Unspecified,
}

/// Resolves one axis against a desired default size.
#[must_use]
pub fn resolve_axis(spec: MeasureSpec, desired: u32) -> u32 {
    match spec {
        MeasureSpec::Exactly(size) => size,
        MeasureSpec::AtMost(bound) => desired.min(bound),
        MeasureSpec::Unspecified => desired,
    }
}

/// Resolves both axes against the default graph dimensions.
#[must_use]
pub fn resolve_size(width_spec: MeasureSpec, height_spec: MeasureSpec) -> (u32, u32) {
    (
        resolve_axis(width_spec, DEFAULT_GRAPH_WIDTH),
        resolve_axis(height_spec, DEFAULT_GRAPH_HEIGHT),
    )
}
