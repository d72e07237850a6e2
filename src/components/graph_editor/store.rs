//! Editor state and its reducer.
//!
//! All mutations go through [`GraphState::apply`] so each user action lands
//! atomically: mutate, re-validate what the action touched, regenerate the
//! text projection. The text pane therefore always shows the encoding of
//! the current valid subset; the reverse direction only runs on an explicit
//! [`EditorAction::ParseText`].

use log::debug;

use super::codec;
use super::model::{Edge, EdgeField};
use super::validate::validate;

/// A user action against the graph editor.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorAction {
	/// Add one node. Re-validates every edge.
	IncrementNodes,
	/// Remove one node; no-op at zero. Re-validates every edge.
	DecrementNodes,
	/// Append an unassigned edge row; rejected while the graph has no nodes.
	AddEdge,
	/// Remove the edge row at this position; out-of-range is a no-op.
	DeleteEdge(usize),
	/// Change one field of the edge row at `index`.
	UpdateField {
		/// Row position of the edge to change.
		index: usize,
		/// The field and its new value.
		field: EdgeField,
	},
	/// Replace the whole edge collection with the result of parsing `text`.
	ParseText(String),
	/// Clear the editor back to its freshly mounted state.
	Reset,
}

/// The editor's entire state: node count, edge rows, derived text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphState {
	/// Number of nodes; node indices range over `0..node_count`.
	pub node_count: usize,
	/// Edge rows in insertion/display order. Row position is identity.
	pub edges: Vec<Edge>,
	/// Encoding of the valid edges, regenerated after every mutation.
	pub text: String,
}

impl GraphState {
	/// Fresh empty state, as at view mount.
	pub fn new() -> Self {
		Self::default()
	}

	/// Apply one action. Every branch leaves `text` consistent with
	/// `edges` before returning.
	pub fn apply(&mut self, action: EditorAction) {
		match action {
			EditorAction::IncrementNodes => {
				self.node_count += 1;
				debug!("nodes (+): {}", self.node_count);
				self.revalidate_all();
			}
			EditorAction::DecrementNodes => {
				if self.node_count == 0 {
					return;
				}
				self.node_count -= 1;
				debug!("nodes (-): {}", self.node_count);
				self.revalidate_all();
			}
			EditorAction::AddEdge => {
				if self.node_count == 0 {
					debug!("cannot add edge: no nodes in graph");
					return;
				}
				self.edges.push(Edge::unassigned());
				self.regenerate_text();
			}
			EditorAction::DeleteEdge(index) => {
				if index >= self.edges.len() {
					return;
				}
				self.edges.remove(index);
				self.regenerate_text();
			}
			EditorAction::UpdateField { index, field } => {
				let Some(edge) = self.edges.get_mut(index) else {
					return;
				};
				match field {
					EdgeField::Source(src) => edge.source = src,
					EdgeField::Destination(dst) => edge.destination = dst,
					EdgeField::Weight(weight) => edge.weight = weight,
					EdgeField::Directed(directed) => edge.directed = directed,
				}
				edge.valid = validate(edge, self.node_count);
				self.regenerate_text();
			}
			EditorAction::ParseText(text) => {
				self.edges = codec::decode(&text, self.node_count);
				debug!("parsed {} edge(s) from text pane", self.edges.len());
				self.regenerate_text();
			}
			EditorAction::Reset => {
				*self = Self::new();
			}
		}
	}

	/// Node-count changes can flip validity of any edge, in both
	/// directions, so every row is re-checked.
	fn revalidate_all(&mut self) {
		for edge in &mut self.edges {
			edge.valid = validate(edge, self.node_count);
		}
		self.regenerate_text();
	}

	fn regenerate_text(&mut self) {
		self.text = codec::encode(&self.edges);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn set_endpoints(state: &mut GraphState, index: usize, src: usize, dst: usize) {
		state.apply(EditorAction::UpdateField {
			index,
			field: EdgeField::Source(Some(src)),
		});
		state.apply(EditorAction::UpdateField {
			index,
			field: EdgeField::Destination(Some(dst)),
		});
	}

	#[test]
	fn add_edge_without_nodes_is_rejected() {
		let mut state = GraphState::new();
		state.apply(EditorAction::AddEdge);
		assert!(state.edges.is_empty());
		assert_eq!(state.text, "");
	}

	#[test]
	fn new_edge_starts_unassigned_and_invalid() {
		let mut state = GraphState::new();
		state.apply(EditorAction::IncrementNodes);
		state.apply(EditorAction::AddEdge);
		assert_eq!(state.edges.len(), 1);
		let edge = &state.edges[0];
		assert_eq!(edge.source, None);
		assert_eq!(edge.destination, None);
		assert_eq!(edge.weight, 0.0);
		assert!(edge.directed);
		assert!(!edge.valid);
		assert_eq!(state.text, "");
	}

	#[test]
	fn decrement_below_zero_is_a_no_op() {
		let mut state = GraphState::new();
		state.apply(EditorAction::DecrementNodes);
		assert_eq!(state.node_count, 0);
	}

	#[test]
	fn edit_sequence_produces_valid_edge_and_text() {
		let mut state = GraphState::new();
		for _ in 0..3 {
			state.apply(EditorAction::IncrementNodes);
		}
		state.apply(EditorAction::AddEdge);
		set_endpoints(&mut state, 0, 0, 2);
		state.apply(EditorAction::UpdateField {
			index: 0,
			field: EdgeField::Weight(5.0),
		});
		assert!(state.edges[0].valid);
		assert_eq!(state.text, "(1, 3, 5)");
	}

	#[test]
	fn out_of_range_destination_stays_invalid() {
		let mut state = GraphState::new();
		for _ in 0..3 {
			state.apply(EditorAction::IncrementNodes);
		}
		state.apply(EditorAction::AddEdge);
		set_endpoints(&mut state, 0, 0, 5);
		assert!(!state.edges[0].valid);
		assert_eq!(state.text, "");
	}

	#[test]
	fn delete_is_positional_and_order_preserving() {
		let mut state = GraphState::new();
		for _ in 0..4 {
			state.apply(EditorAction::IncrementNodes);
		}
		for i in 0..3 {
			state.apply(EditorAction::AddEdge);
			set_endpoints(&mut state, i, i, i + 1);
		}
		assert_eq!(state.text, "(1, 2, 0)\n(2, 3, 0)\n(3, 4, 0)");

		state.apply(EditorAction::DeleteEdge(1));
		assert_eq!(state.edges.len(), 2);
		assert_eq!(state.edges[0].source, Some(0));
		assert_eq!(state.edges[1].source, Some(2));
		assert_eq!(state.text, "(1, 2, 0)\n(3, 4, 0)");

		// out of range: nothing changes
		let before = state.clone();
		state.apply(EditorAction::DeleteEdge(7));
		assert_eq!(state, before);
	}

	#[test]
	fn node_count_changes_revalidate_every_edge() {
		let mut state = GraphState::new();
		for _ in 0..3 {
			state.apply(EditorAction::IncrementNodes);
		}
		state.apply(EditorAction::AddEdge);
		set_endpoints(&mut state, 0, 0, 2);
		assert!(state.edges[0].valid);

		// shrinking below the destination invalidates
		state.apply(EditorAction::DecrementNodes);
		assert!(!state.edges[0].valid);
		assert_eq!(state.text, "");

		// growing back revalidates without touching the row
		state.apply(EditorAction::IncrementNodes);
		assert!(state.edges[0].valid);
		assert_eq!(state.text, "(1, 3, 0)");
	}

	#[test]
	fn update_field_out_of_range_is_a_no_op() {
		let mut state = GraphState::new();
		state.apply(EditorAction::IncrementNodes);
		let before = state.clone();
		state.apply(EditorAction::UpdateField {
			index: 3,
			field: EdgeField::Weight(9.0),
		});
		assert_eq!(state, before);
	}

	#[test]
	fn parse_text_replaces_edges_wholesale() {
		let mut state = GraphState::new();
		for _ in 0..3 {
			state.apply(EditorAction::IncrementNodes);
		}
		state.apply(EditorAction::AddEdge);
		set_endpoints(&mut state, 0, 2, 2);

		state.apply(EditorAction::ParseText("(1, 2, 4)\n(2, 3, 1)".to_string()));
		assert_eq!(state.edges.len(), 2);
		assert!(state.edges.iter().all(|e| e.valid));
		assert_eq!(state.edges[0].source, Some(0));
		assert_eq!(state.edges[0].destination, Some(1));
		assert_eq!(state.edges[1].source, Some(1));
		assert_eq!(state.edges[1].destination, Some(2));
		assert_eq!(state.text, "(1, 2, 4)\n(2, 3, 1)");
	}

	#[test]
	fn reset_clears_everything() {
		let mut state = GraphState::new();
		for _ in 0..2 {
			state.apply(EditorAction::IncrementNodes);
		}
		state.apply(EditorAction::AddEdge);
		state.apply(EditorAction::Reset);
		assert_eq!(state, GraphState::new());
	}

	#[test]
	fn directedness_survives_edits_but_not_text() {
		let mut state = GraphState::new();
		state.apply(EditorAction::IncrementNodes);
		state.apply(EditorAction::AddEdge);
		state.apply(EditorAction::UpdateField {
			index: 0,
			field: EdgeField::Directed(false),
		});
		set_endpoints(&mut state, 0, 0, 0);
		assert!(!state.edges[0].directed);
		assert!(state.edges[0].valid);

		// round-tripping through the pane loses the flag by design
		let text = state.text.clone();
		state.apply(EditorAction::ParseText(text));
		assert!(state.edges[0].directed);
	}
}
