//! smoothgraph-rs: animated smooth-line graph engine.
//!
//! This crate provides a UI-free geometry core, a backend-agnostic draw
//! command model, and thin optional Cairo/GTK4 adapter layers for rendering
//! an animated line/point graph over a small labeled dataset.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{GraphEngine, GraphEngineConfig, GraphStyle};
pub use error::{GraphError, GraphResult};
