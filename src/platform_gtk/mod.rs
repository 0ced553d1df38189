use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;

use gtk::prelude::*;

use crate::api::GraphEngine;
use crate::core::Viewport;
use crate::render::{CairoContextRenderer, CairoRenderer};

/// Thin GTK4 adapter around the graph engine.
///
/// Owns the engine behind `Rc<RefCell<…>>` and wires the widget draw callback
/// to frame construction plus Cairo rendering. Animation ticking stays with
/// the host (frame clock, timeout source), which polls `flush_redraw`.
pub struct GtkGraphAdapter {
    engine: Rc<RefCell<GraphEngine<CairoRenderer>>>,
}

impl GtkGraphAdapter {
    #[must_use]
    pub fn new(engine: GraphEngine<CairoRenderer>) -> Self {
        Self {
            engine: Rc::new(RefCell::new(engine)),
        }
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<GraphEngine<CairoRenderer>>> {
        Rc::clone(&self.engine)
    }

    /// Installs the graph draw function on a `DrawingArea`.
    pub fn attach_draw_func(&self, area: &gtk::DrawingArea) {
        let engine = Rc::clone(&self.engine);
        area.set_draw_func(move |_, context, width, height| {
            let mut engine = engine.borrow_mut();
            if width > 0 && height > 0 {
                let _ = engine.set_viewport(Viewport::new(width as u32, height as u32));
            }
            let frame = engine.build_render_frame();
            if let Err(err) = engine.renderer_mut().render_on_cairo_context(context, &frame) {
                tracing::warn!(error = %err, "graph draw pass failed");
            }
        });
    }

    /// Queues a widget redraw when the engine has a pending request.
    pub fn flush_redraw(&self, area: &gtk::DrawingArea) {
        if self.engine.borrow_mut().take_redraw_request() {
            area.queue_draw();
        }
    }
}
