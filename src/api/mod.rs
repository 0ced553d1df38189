use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::measure;
use crate::core::{
    AnimationDriver, AnimationHandle, DataPoint, EdgeInsets, GraphDataset, HeuristicTextMeasurer,
    MeasureSpec, TextMeasurer, Viewport,
};
use crate::error::{GraphError, GraphResult};
use crate::render::{Color, RenderFrame, Renderer};

mod scene;
mod style;

pub use scene::{CURVE_CORNER_RADIUS, build_scene};
pub use style::{DEFAULT_ELEMENT_SIZE, DEFAULT_TEXT_SIZE, GraphStyle};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load graph setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub padding: EdgeInsets,
    #[serde(default)]
    pub style: GraphStyle,
}

impl GraphEngineConfig {
    /// Creates a minimal config with zero padding and default styling.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            padding: EdgeInsets::zero(),
            style: GraphStyle::default(),
        }
    }

    /// Sets content padding.
    #[must_use]
    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    /// Sets initial style.
    #[must_use]
    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> GraphResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| GraphError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> GraphResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| GraphError::InvalidData(format!("failed to parse config: {e}")))
    }
}

/// Single-threaded graph engine: dataset, style, animation, and frame
/// construction behind one mutable facade the host drives.
pub struct GraphEngine<R: Renderer> {
    renderer: R,
    viewport: Viewport,
    padding: EdgeInsets,
    style: GraphStyle,
    dataset: GraphDataset,
    animation: AnimationDriver,
    measurer: Box<dyn TextMeasurer>,
    pending_redraw: bool,
}

impl<R: Renderer> GraphEngine<R> {
    pub fn new(renderer: R, config: GraphEngineConfig) -> GraphResult<Self> {
        if !config.viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        Ok(Self {
            renderer,
            viewport: config.viewport,
            padding: config.padding,
            style: config.style,
            dataset: GraphDataset::default(),
            animation: AnimationDriver::default(),
            measurer: Box::new(HeuristicTextMeasurer::default()),
            pending_redraw: false,
        })
    }

    /// Replaces the dataset and recomputes its derived maximum.
    pub fn set_data(&mut self, points: Vec<DataPoint>) {
        self.dataset.replace(points);
        debug!(
            count = self.dataset.len(),
            max_value = self.dataset.max_value(),
            "set data points"
        );
        self.request_redraw();
    }

    #[must_use]
    pub fn dataset(&self) -> &GraphDataset {
        &self.dataset
    }

    #[must_use]
    pub fn style(&self) -> GraphStyle {
        self.style
    }

    pub fn set_style(&mut self, style: GraphStyle) {
        self.style = style;
        self.request_redraw();
    }

    pub fn set_point_color(&mut self, color: Color) {
        self.style.point_color = color;
        self.request_redraw();
    }

    pub fn set_line_color(&mut self, color: Color) {
        self.style.line_color = color;
        self.request_redraw();
    }

    pub fn set_title_color(&mut self, color: Color) {
        self.style.title_color = color;
        self.request_redraw();
    }

    pub fn set_value_color(&mut self, color: Color) {
        self.style.value_color = color;
        self.request_redraw();
    }

    pub fn set_title_show(&mut self, show: bool) {
        self.style.title_show = show;
        self.request_redraw();
    }

    pub fn set_value_show(&mut self, show: bool) {
        self.style.value_show = show;
        self.request_redraw();
    }

    pub fn set_point_show(&mut self, show: bool) {
        self.style.point_show = show;
        self.request_redraw();
    }

    pub fn set_title_size(&mut self, size: f64) {
        self.style.title_size = size;
        self.request_redraw();
    }

    pub fn set_value_size(&mut self, size: f64) {
        self.style.value_size = size;
        self.request_redraw();
    }

    pub fn set_point_radius(&mut self, radius: f64) {
        self.style.point_radius = radius;
        self.request_redraw();
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.style.line_width = width;
        self.request_redraw();
    }

    pub fn set_count_visible_points(&mut self, count: i32) {
        self.style.count_visible_points = count;
        self.request_redraw();
    }

    /// Starts a new grow animation at the polled instant `now` (milliseconds).
    ///
    /// Any in-flight run is cancelled synchronously before the new one is
    /// installed; ticks carrying the superseded handle are ignored.
    pub fn start_animation(&mut self, now: f64) -> AnimationHandle {
        let handle = self.animation.start(now);
        debug!(start_time = now, "start grow animation");
        self.request_redraw();
        handle
    }

    /// Advances the animation identified by `handle`.
    ///
    /// Returns `true` when the tick was accepted and a redraw was requested.
    pub fn tick(&mut self, handle: AnimationHandle, now: f64) -> bool {
        match self.animation.tick(handle, now) {
            Some(progress) => {
                trace!(progress, "animation tick");
                self.request_redraw();
                true
            }
            None => {
                trace!("ignoring tick from superseded animation");
                false
            }
        }
    }

    pub fn cancel_animation(&mut self) {
        self.animation.cancel();
    }

    #[must_use]
    pub fn animation_active(&self) -> bool {
        self.animation.is_active()
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.animation.progress()
    }

    /// Resolves host layout constraints and adopts the result as viewport.
    pub fn measure(&mut self, width_spec: MeasureSpec, height_spec: MeasureSpec) -> (u32, u32) {
        let (width, height) = measure::resolve_size(width_spec, height_spec);
        self.viewport = Viewport::new(width, height);
        self.request_redraw();
        (width, height)
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> GraphResult<()> {
        if !viewport.is_valid() {
            return Err(GraphError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        self.request_redraw();
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    pub fn set_padding(&mut self, padding: EdgeInsets) {
        self.padding = padding;
        self.request_redraw();
    }

    /// Swaps in a text-metrics collaborator (for example Pango-backed).
    pub fn set_text_measurer(&mut self, measurer: Box<dyn TextMeasurer>) {
        self.measurer = measurer;
        self.request_redraw();
    }

    /// Builds the backend-agnostic scene for the current state.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        build_scene(
            &self.dataset,
            self.style,
            self.viewport,
            self.padding,
            self.animation.progress(),
            self.measurer.as_ref(),
        )
    }

    pub fn render(&mut self) -> GraphResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.pending_redraw)
    }

    #[must_use]
    pub fn has_pending_redraw(&self) -> bool {
        self.pending_redraw
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn request_redraw(&mut self) {
        self.pending_redraw = true;
    }
}
