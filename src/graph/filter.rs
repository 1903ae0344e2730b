//! One-hop neighborhood extraction.

use std::collections::HashSet;

use log::debug;

use super::model::GraphSnapshot;

/// Narrow `snapshot` to the direct neighborhood of `query`.
///
/// Keeps every edge with `query` as source or target, plus the endpoints of
/// those edges. Nodes come out in the order they are first met while scanning
/// edges; the two endpoints of one edge keep their relative order from the
/// input node list. A query naming a node without edges yields just that node.
/// A query naming nothing yields an empty snapshot.
///
/// Ids are compared exactly. The empty query is the reset case and hands back
/// the full snapshot.
pub fn filter(snapshot: &GraphSnapshot, query: &str) -> GraphSnapshot {
	if query.is_empty() {
		return snapshot.clone();
	}

	let index = snapshot.index_by_id();
	let mut picked: Vec<usize> = Vec::new();
	let mut seen: HashSet<usize> = HashSet::new();
	let mut edges = Vec::new();

	for edge in snapshot.edges().iter().filter(|e| e.touches(query)) {
		let (Some(&s), Some(&t)) = (
			index.get(edge.source.as_str()),
			index.get(edge.target.as_str()),
		) else {
			continue;
		};
		let (first, second) = if s <= t { (s, t) } else { (t, s) };
		for i in [first, second] {
			if seen.insert(i) {
				picked.push(i);
			}
		}
		edges.push(edge.clone());
	}

	if picked.is_empty() {
		if let Some(&i) = index.get(query) {
			picked.push(i);
		}
	}

	let nodes = picked
		.into_iter()
		.map(|i| snapshot.nodes()[i].clone())
		.collect::<Vec<_>>();
	debug!(
		"neighborhood of `{}`: {} nodes, {} edges",
		query,
		nodes.len(),
		edges.len()
	);
	GraphSnapshot::from_parts_unchecked(nodes, edges)
}
