//! Graph data model, the full-graph store and the neighborhood filter.

mod error;
mod filter;
mod model;
mod store;

pub use error::{Endpoint, GraphError, Result};
pub use filter::filter;
pub use model::{Edge, GraphData, GraphSnapshot, Node};
pub use store::GraphStore;
