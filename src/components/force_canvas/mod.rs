//! Canvas-based force-directed renderer for graph descriptions.

mod component;
mod render;
mod state;

pub use component::ForceCanvas;
