//! Errors raised while building a graph snapshot.

use thiserror::Error;

/// Failure to build a [`GraphSnapshot`](super::GraphSnapshot) from raw data.
///
/// All of these are configuration errors: the dataset itself is malformed and
/// nothing downstream can recover from it.
#[derive(Debug, Error)]
pub enum GraphError {
	/// Two nodes share an identifier.
	#[error("duplicate node id `{id}`")]
	DuplicateNode {
		/// The repeated id.
		id: String,
	},

	/// An edge endpoint does not name a node of the same snapshot.
	#[error("link #{index} has {endpoint} `{id}` which is not a known node")]
	DanglingEdge {
		/// Position of the edge in the input.
		index: usize,
		/// Which end is unknown.
		endpoint: Endpoint,
		/// The id it names.
		id: String,
	},

	/// Edge weights must be finite and strictly positive.
	#[error("link #{index} has invalid weight {weight}")]
	InvalidWeight {
		/// Position of the edge in the input.
		index: usize,
		/// The rejected weight.
		weight: f64,
	},

	/// The dataset could not be parsed.
	#[error("malformed dataset: {0}")]
	Dataset(#[from] serde_json::Error),
}

/// Which end of an edge failed to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
	/// The `source` field.
	Source,
	/// The `target` field.
	Target,
}

impl std::fmt::Display for Endpoint {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Endpoint::Source => f.write_str("source"),
			Endpoint::Target => f.write_str("target"),
		}
	}
}

/// Result alias for graph construction.
pub type Result<T> = std::result::Result<T, GraphError>;
