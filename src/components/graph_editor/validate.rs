//! Edge validity check, kept free of state so it can be tested alone.

use super::model::Edge;

/// Returns true when both endpoints are assigned and index an existing
/// node, i.e. both lie in `[0, node_count)`. Self-loops and parallel
/// edges are allowed.
pub fn validate(edge: &Edge, node_count: usize) -> bool {
	match (edge.source, edge.destination) {
		(Some(src), Some(dst)) => src < node_count && dst < node_count,
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edge(source: Option<usize>, destination: Option<usize>) -> Edge {
		Edge {
			source,
			destination,
			weight: 1.0,
			directed: true,
			valid: false,
		}
	}

	#[test]
	fn in_range_endpoints_are_valid() {
		assert!(validate(&edge(Some(0), Some(2)), 3));
		assert!(validate(&edge(Some(2), Some(2)), 3)); // self-loop
	}

	#[test]
	fn out_of_range_endpoints_are_invalid() {
		assert!(!validate(&edge(Some(0), Some(3)), 3));
		assert!(!validate(&edge(Some(3), Some(0)), 3));
		assert!(!validate(&edge(Some(0), Some(0)), 0));
	}

	#[test]
	fn unassigned_endpoints_are_invalid() {
		assert!(!validate(&edge(None, Some(1)), 3));
		assert!(!validate(&edge(Some(1), None), 3));
		assert!(!validate(&edge(None, None), 3));
	}

	#[test]
	fn boundary_is_exclusive() {
		for n in 0..6 {
			for s in 0..6 {
				for d in 0..6 {
					let expect = s < n && d < n;
					assert_eq!(validate(&edge(Some(s), Some(d)), n), expect);
				}
			}
		}
	}
}
