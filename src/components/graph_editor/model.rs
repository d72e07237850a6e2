//! Edge record and the field-change variants used by the editor reducer.

/// One edge of the graph under construction.
///
/// Endpoints are `None` until the user picks a node, so an unassigned
/// endpoint can never collide with a real node index. The `valid` flag is
/// derived; [`super::validate::validate`] is its only writer.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Source node index, 0-based. `None` while unassigned.
	pub source: Option<usize>,
	/// Destination node index, 0-based. `None` while unassigned.
	pub destination: Option<usize>,
	/// Edge weight shown as the edge label in the rendered graph.
	pub weight: f64,
	/// Whether the edge is directed (source -> destination).
	pub directed: bool,
	/// Derived validity: both endpoints assigned and in range.
	pub valid: bool,
}

impl Edge {
	/// A freshly added edge: endpoints unassigned, weight zero, directed.
	pub fn unassigned() -> Self {
		Self {
			source: None,
			destination: None,
			weight: 0.0,
			directed: true,
			valid: false,
		}
	}
}

/// A single-field update applied to an edge row.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeField {
	/// Change the source endpoint; `None` returns it to unassigned.
	Source(Option<usize>),
	/// Change the destination endpoint; `None` returns it to unassigned.
	Destination(Option<usize>),
	/// Change the weight.
	Weight(f64),
	/// Change the directedness flag.
	Directed(bool),
}
