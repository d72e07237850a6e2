//! Line-oriented text encoding of the edge list.
//!
//! Each valid edge becomes one line `(S, D, W)` with 1-based node indices,
//! the copy/paste-friendly form shown in the editor's text pane. Encoding
//! is a lossy projection: invalid edges and directedness are not written.
//! Decoding is a best-effort recovery parser, not a strict grammar.

use super::model::Edge;
use super::validate::validate;

/// Encode the valid subset of `edges` in display order, newline-joined
/// with no trailing newline. Deterministic and idempotent.
pub fn encode(edges: &[Edge]) -> String {
	edges
		.iter()
		.filter(|edge| edge.valid)
		.filter_map(|edge| {
			let (src, dst) = (edge.source?, edge.destination?);
			Some(format!("({}, {}, {})", src + 1, dst + 1, edge.weight))
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Parse `text` into candidate edges, skipping malformed lines.
///
/// A line is recognized only if it splits into exactly three comma
/// components: `S` after a leading `(`, `D` verbatim, `W` before a
/// trailing `)`. Indices are 1-based in text; values below 1 decode to an
/// unassigned endpoint. Directedness is not representable in text, so
/// decoded edges default to directed. Validity is computed against
/// `node_count`.
pub fn decode(text: &str, node_count: usize) -> Vec<Edge> {
	text.lines().filter_map(|line| parse_line(line, node_count)).collect()
}

fn parse_line(line: &str, node_count: usize) -> Option<Edge> {
	let parts: Vec<&str> = line.split(',').collect();
	if parts.len() != 3 {
		return None;
	}

	let src = parse_index(parts[0].trim().trim_start_matches('('))?;
	let dst = parse_index(parts[1])?;
	let weight: f64 = parts[2].trim().trim_end_matches(')').trim().parse().ok()?;

	let mut edge = Edge {
		source: src,
		destination: dst,
		weight,
		directed: true,
		valid: false,
	};
	edge.valid = validate(&edge, node_count);
	Some(edge)
}

/// 1-based index field -> 0-based endpoint; non-positive means unassigned.
fn parse_index(field: &str) -> Option<Option<usize>> {
	let value: i64 = field.trim().parse().ok()?;
	if value < 1 {
		Some(None)
	} else {
		Some(Some((value - 1) as usize))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn valid_edge(source: usize, destination: usize, weight: f64) -> Edge {
		Edge {
			source: Some(source),
			destination: Some(destination),
			weight,
			directed: true,
			valid: true,
		}
	}

	#[test]
	fn encode_is_one_based_and_newline_joined() {
		let edges = vec![valid_edge(0, 2, 5.0), valid_edge(1, 1, 2.5)];
		assert_eq!(encode(&edges), "(1, 3, 5)\n(2, 2, 2.5)");
	}

	#[test]
	fn encode_skips_invalid_edges() {
		let mut edges = vec![valid_edge(0, 1, 4.0), Edge::unassigned()];
		edges.push(valid_edge(5, 0, 9.0));
		edges[2].valid = false;
		assert_eq!(encode(&edges), "(1, 2, 4)");
	}

	#[test]
	fn encode_of_empty_or_all_invalid_is_empty() {
		assert_eq!(encode(&[]), "");
		assert_eq!(encode(&[Edge::unassigned()]), "");
	}

	#[test]
	fn decode_example_lines() {
		let edges = decode("(1, 2, 4)\n(2, 3, 1)", 3);
		assert_eq!(edges.len(), 2);
		assert_eq!(edges[0], valid_edge(0, 1, 4.0));
		assert_eq!(edges[1], valid_edge(1, 2, 1.0));
	}

	#[test]
	fn decode_skips_malformed_lines() {
		let text = "(1, 2, 4)\nnot an edge\n(1, 2)\n(1, 2, 3, 4)\n(2, x, 1)\n(2, 3, 1)";
		let edges = decode(text, 3);
		assert_eq!(edges.len(), 2);
		assert_eq!(edges[0], valid_edge(0, 1, 4.0));
		assert_eq!(edges[1], valid_edge(1, 2, 1.0));
	}

	#[test]
	fn decode_marks_out_of_range_edges_invalid() {
		let edges = decode("(1, 9, 4)", 3);
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].source, Some(0));
		assert_eq!(edges[0].destination, Some(8));
		assert!(!edges[0].valid);
	}

	#[test]
	fn decode_treats_non_positive_indices_as_unassigned() {
		let edges = decode("(0, 2, 4)\n(-1, 2, 7)", 3);
		assert_eq!(edges.len(), 2);
		assert_eq!(edges[0].source, None);
		assert_eq!(edges[1].source, None);
		assert!(!edges[0].valid);
	}

	#[test]
	fn round_trip_preserves_valid_triples() {
		let edges = vec![
			valid_edge(0, 2, 5.0),
			Edge::unassigned(), // dropped by encode
			valid_edge(2, 0, 1.0),
		];
		let decoded = decode(&encode(&edges), 3);
		let originally_valid: Vec<_> = edges.iter().filter(|e| e.valid).collect();
		assert_eq!(decoded.len(), originally_valid.len());
		for (dec, orig) in decoded.iter().zip(originally_valid) {
			assert_eq!(dec.source, orig.source);
			assert_eq!(dec.destination, orig.destination);
			assert_eq!(dec.weight, orig.weight);
		}
	}

	#[test]
	fn encode_decode_encode_is_idempotent() {
		let edges = vec![valid_edge(0, 1, 3.0), valid_edge(1, 2, 7.0)];
		let once = encode(&edges);
		assert_eq!(encode(&decode(&once, 3)), once);
	}
}
