use std::sync::Arc;

use log::info;

use super::error::Result;
use super::filter::filter;
use super::model::{GraphData, GraphSnapshot};

const DATASET: &str = include_str!("dataset.json");

/// Owner of the full, immutable graph.
///
/// The snapshot is validated once on construction and shared behind an `Arc`;
/// nothing can mutate it afterwards.
#[derive(Clone, Debug)]
pub struct GraphStore {
	full: Arc<GraphSnapshot>,
}

impl GraphStore {
	/// Load the bundled dataset.
	pub fn load() -> Result<Self> {
		Self::from_json(DATASET)
	}

	/// Parse and validate a `{nodes, links}` JSON dataset.
	pub fn from_json(json: &str) -> Result<Self> {
		let data: GraphData = serde_json::from_str(json)?;
		Self::from_data(data)
	}

	/// Validate an already parsed dataset.
	pub fn from_data(data: GraphData) -> Result<Self> {
		let full = GraphSnapshot::try_from(data)?;
		info!(
			"graph loaded: {} nodes, {} links",
			full.len(),
			full.edge_count()
		);
		Ok(Self {
			full: Arc::new(full),
		})
	}

	/// The full graph.
	pub fn snapshot(&self) -> Arc<GraphSnapshot> {
		Arc::clone(&self.full)
	}

	/// [`filter`] applied to the full graph.
	pub fn neighborhood(&self, query: &str) -> GraphSnapshot {
		filter(&self.full, query)
	}
}
