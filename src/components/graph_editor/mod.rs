//! Graph-definition editor: structured edge rows, their textual
//! projection and the on-demand render description, kept in sync through
//! a single reducer.

mod codec;
mod component;
mod model;
mod store;
mod validate;
mod viz;

pub use component::GraphEditor;
pub use viz::{RenderEdge, RenderGraph, RenderNode};
