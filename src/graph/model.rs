use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::error::{Endpoint, GraphError, Result};

/// A graph entity: a table, service, web endpoint, batch job, ...
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
	/// Unique within a snapshot.
	pub id: String,
	/// Ordinal category. Only used for coloring.
	#[serde(default)]
	pub group: u32,
}

impl Node {
	/// Node `id` in `group`.
	pub fn new(id: impl Into<String>, group: u32) -> Self {
		Self {
			id: id.into(),
			group,
		}
	}

	/// Tooltip text: the id followed by the group on its own line.
	pub fn title(&self) -> String {
		format!("{}\n{}", self.id, self.group)
	}
}

fn default_weight() -> f64 {
	1.0
}

/// Undirected connection between two node ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
	/// Id of one endpoint.
	pub source: String,
	/// Id of the other endpoint. Direction carries no meaning.
	pub target: String,
	/// Visual thickness hint. Has no effect on the layout.
	#[serde(rename = "value", default = "default_weight")]
	pub weight: f64,
}

impl Edge {
	/// Edge of weight 1.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			weight: default_weight(),
		}
	}

	/// Replace the weight.
	pub fn with_weight(mut self, weight: f64) -> Self {
		self.weight = weight;
		self
	}

	/// Whether `id` is either endpoint.
	pub fn touches(&self, id: &str) -> bool {
		self.source == id || self.target == id
	}

	/// Line width hint for renderers: `sqrt(weight)`.
	pub fn stroke_width(&self) -> f64 {
		self.weight.sqrt()
	}
}

/// Raw dataset shape: `{nodes: [{id, group}], links: [{source, target, value}]}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GraphData {
	/// Node list, order kept.
	pub nodes: Vec<Node>,
	/// Link list, order kept.
	pub links: Vec<Edge>,
}

/// An immutable, validated graph.
///
/// Every edge endpoint resolves to a node of the same snapshot; node ids are
/// unique. Node order is preserved from construction and only matters for
/// rendering order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphSnapshot {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
}

impl GraphSnapshot {
	/// Validate and wrap `nodes` and `edges`.
	///
	/// Fails on duplicate node ids, on edges whose endpoints are not among
	/// `nodes`, and on weights that are not finite and positive.
	pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
		let mut seen = HashSet::with_capacity(nodes.len());
		for node in &nodes {
			if !seen.insert(node.id.as_str()) {
				return Err(GraphError::DuplicateNode {
					id: node.id.clone(),
				});
			}
		}

		for (index, edge) in edges.iter().enumerate() {
			for (endpoint, id) in [
				(Endpoint::Source, &edge.source),
				(Endpoint::Target, &edge.target),
			] {
				if !seen.contains(id.as_str()) {
					return Err(GraphError::DanglingEdge {
						index,
						endpoint,
						id: id.clone(),
					});
				}
			}
			if !(edge.weight.is_finite() && edge.weight > 0.0) {
				return Err(GraphError::InvalidWeight {
					index,
					weight: edge.weight,
				});
			}
		}

		Ok(Self { nodes, edges })
	}

	/// No nodes, no edges.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Assemble a snapshot from parts already known to be consistent.
	pub(crate) fn from_parts_unchecked(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
		debug_assert!(Self::new(nodes.clone(), edges.clone()).is_ok());
		Self { nodes, edges }
	}

	/// Nodes in construction order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Edges in construction order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Look up a node by id.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Whether a node named `id` exists.
	pub fn contains(&self, id: &str) -> bool {
		self.node(id).is_some()
	}

	/// Number of nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Whether there are no nodes.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Number of edges, parallel ones included.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Number of edge endpoints at `id`. Parallel edges count separately and a
	/// self-loop counts twice.
	pub fn degree(&self, id: &str) -> usize {
		self.edges
			.iter()
			.map(|e| (e.source == id) as usize + (e.target == id) as usize)
			.sum()
	}

	/// Position of each node id in [`nodes`](Self::nodes).
	pub fn index_by_id(&self) -> HashMap<&str, usize> {
		self.nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.as_str(), i))
			.collect()
	}

	/// Node ids bucketed by group, groups ascending, node order kept within a group.
	pub fn groups(&self) -> BTreeMap<u32, Vec<&str>> {
		let mut groups: BTreeMap<u32, Vec<&str>> = BTreeMap::new();
		for node in &self.nodes {
			groups.entry(node.group).or_default().push(&node.id);
		}
		groups
	}
}

impl TryFrom<GraphData> for GraphSnapshot {
	type Error = GraphError;

	fn try_from(data: GraphData) -> Result<Self> {
		Self::new(data.nodes, data.links)
	}
}

impl From<&GraphSnapshot> for GraphData {
	fn from(snapshot: &GraphSnapshot) -> Self {
		Self {
			nodes: snapshot.nodes.clone(),
			links: snapshot.edges.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn abc() -> (Vec<Node>, Vec<Edge>) {
		(
			vec![Node::new("A", 1), Node::new("B", 2), Node::new("C", 1)],
			vec![Edge::new("A", "B"), Edge::new("B", "C")],
		)
	}

	#[test]
	fn builds_valid_snapshot() {
		let (nodes, edges) = abc();
		let snapshot = GraphSnapshot::new(nodes, edges).unwrap();
		assert_eq!(snapshot.len(), 3);
		assert_eq!(snapshot.edge_count(), 2);
		assert_eq!(snapshot.degree("B"), 2);
		assert_eq!(snapshot.degree("A"), 1);
		assert!(snapshot.contains("C"));
		assert!(!snapshot.contains("Z"));
	}

	#[test]
	fn rejects_dangling_target() {
		let (nodes, mut edges) = abc();
		edges.push(Edge::new("C", "Z"));
		let err = GraphSnapshot::new(nodes, edges).unwrap_err();
		match err {
			GraphError::DanglingEdge {
				index,
				endpoint,
				id,
			} => {
				assert_eq!(index, 2);
				assert_eq!(endpoint, Endpoint::Target);
				assert_eq!(id, "Z");
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn rejects_duplicate_ids() {
		let (mut nodes, edges) = abc();
		nodes.push(Node::new("A", 3));
		assert!(matches!(
			GraphSnapshot::new(nodes, edges),
			Err(GraphError::DuplicateNode { id }) if id == "A"
		));
	}

	#[test]
	fn rejects_non_positive_weight() {
		let (nodes, mut edges) = abc();
		edges[1].weight = 0.0;
		assert!(matches!(
			GraphSnapshot::new(nodes, edges),
			Err(GraphError::InvalidWeight { index: 1, .. })
		));
	}

	#[test]
	fn link_value_defaults_to_one() {
		let data: GraphData = serde_json::from_str(
			r#"{"nodes":[{"id":"a","group":1},{"id":"b","group":1}],
			    "links":[{"source":"a","target":"b"}]}"#,
		)
		.unwrap();
		assert_eq!(data.links[0].weight, 1.0);
		let snapshot = GraphSnapshot::try_from(data).unwrap();
		assert_eq!(snapshot.edges()[0].stroke_width(), 1.0);
	}

	#[test]
	fn groups_are_ordered() {
		let (nodes, edges) = abc();
		let snapshot = GraphSnapshot::new(nodes, edges).unwrap();
		let groups = snapshot.groups();
		assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
		assert_eq!(groups[&1], vec!["A", "C"]);
		assert_eq!(groups[&2], vec!["B"]);
	}

	#[test]
	fn title_has_id_and_group() {
		assert_eq!(Node::new("svc1", 2).title(), "svc1\n2");
	}
}
