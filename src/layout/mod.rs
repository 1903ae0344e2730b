//! Force-directed layout.
//!
//! Each tick combines three forces on every node:
//! - springs along edges, weaker at high-degree endpoints
//! - many-body repulsion through a Barnes-Hut quadtree
//! - a centering translation toward the configured origin
//!
//! Force magnitudes scale with a decaying alpha. Once alpha drops below
//! `alpha_min` the layout is settled and stepping stops integrating.

mod forces;
mod params;
mod quadtree;
mod simulation;

pub use params::{LayoutError, SimulationParameters};
pub use simulation::{
	EdgeSegment, ForceLayoutEngine, NodePosition, SimulationHandle, SimulationStatus,
};
