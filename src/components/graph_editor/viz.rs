//! Conversion of editor state into the renderer's graph description.
//!
//! The description is self-contained and owned, so the canvas can keep
//! drawing a snapshot while the editor state moves on (last render wins).

use super::model::Edge;

/// A node entry of the render description. Ids and labels are 1-based,
/// matching what the editor shows the user.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderNode {
	/// 1-based node id.
	pub id: usize,
	/// Display label, the decimal form of `id`.
	pub label: String,
}

/// An edge entry of the render description.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderEdge {
	/// 1-based source node id.
	pub tail: usize,
	/// 1-based destination node id.
	pub head: usize,
	/// Edge label, the weight.
	pub label: String,
	/// Draw an arrowhead at the head end.
	pub directed: bool,
}

/// Everything the external renderer needs to draw one graph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderGraph {
	/// Drawn as a directed graph.
	pub directed: bool,
	/// Draw hint only; the adapter never deduplicates parallel edges.
	pub strict: bool,
	/// One entry per node index.
	pub nodes: Vec<RenderNode>,
	/// One entry per valid edge, in display order.
	pub edges: Vec<RenderEdge>,
}

/// Build the render description for the current state: every node
/// `1..=node_count`, and only the currently valid edges. Recomputed in
/// full on each render action; nothing is cached.
pub fn to_render_graph(node_count: usize, edges: &[Edge]) -> RenderGraph {
	let nodes = (1..=node_count)
		.map(|id| RenderNode {
			id,
			label: id.to_string(),
		})
		.collect();

	let edges = edges
		.iter()
		.filter(|edge| edge.valid)
		.filter_map(|edge| {
			Some(RenderEdge {
				tail: edge.source? + 1,
				head: edge.destination? + 1,
				label: edge.weight.to_string(),
				directed: edge.directed,
			})
		})
		.collect();

	RenderGraph {
		directed: true,
		strict: true,
		nodes,
		edges,
	}
}
