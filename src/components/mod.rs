//! Reusable view components.

pub mod force_canvas;
pub mod graph_editor;
pub mod telemetry;
