use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::components::graph_editor::RenderGraph;

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const NODE_RADIUS: f64 = 12.0;
pub const HIT_RADIUS: f64 = 16.0;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: String,
	pub color: String,
}

/// A drawable edge, kept beside the physics graph so the renderer has
/// labels and directedness without reaching into the simulation.
#[derive(Clone, Debug)]
pub struct CanvasEdge {
	pub tail: DefaultNodeIdx,
	pub head: DefaultNodeIdx,
	pub label: String,
	pub directed: bool,
	pub is_loop: bool,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

pub struct CanvasState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub edges: Vec<CanvasEdge>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
}

impl CanvasState {
	/// Seed the simulation from a render description: nodes start on a
	/// circle around the center, one spring per non-loop edge.
	pub fn new(description: &RenderGraph, width: f64, height: f64) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		let node_total = description.nodes.len().max(1);
		let indices: Vec<DefaultNodeIdx> = description
			.nodes
			.iter()
			.enumerate()
			.map(|(i, node)| {
				let angle = (i as f64) * 2.0 * PI / node_total as f64;
				graph.add_node(NodeData {
					x: (width / 2.0 + 100.0 * angle.cos()) as f32,
					y: (height / 2.0 + 100.0 * angle.sin()) as f32,
					mass: 10.0,
					is_anchor: false,
					user_data: NodeInfo {
						label: node.label.clone(),
						color: COLORS[i % COLORS.len()].into(),
					},
				})
			})
			.collect();

		let mut edges = Vec::new();
		for edge in &description.edges {
			// tail/head are 1-based ids straight from the description
			let (Some(&tail), Some(&head)) = (
				edge.tail.checked_sub(1).and_then(|i| indices.get(i)),
				edge.head.checked_sub(1).and_then(|i| indices.get(i)),
			) else {
				continue;
			};
			let is_loop = tail == head;
			if !is_loop {
				graph.add_edge(tail, head, EdgeData::default());
			}
			edges.push(CanvasEdge {
				tail,
				head,
				label: edge.label.clone(),
				directed: edge.directed,
				is_loop,
			});
		}

		Self {
			graph,
			edges,
			transform: ViewTransform {
				x: 0.0,
				y: 0.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
			animation_running: true,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}
}
