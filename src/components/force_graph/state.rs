use std::collections::HashSet;

use crate::graph::GraphSnapshot;
use crate::layout::{ForceLayoutEngine, SimulationHandle};

use super::scale::OrdinalScale;

pub const NODE_RADIUS: f64 = 5.0;
pub const HIT_RADIUS: f64 = 10.0;

#[derive(Clone, Debug)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

/// A node drag in progress. `handle` is the binding it started under.
#[derive(Clone, Debug)]
pub struct DragState {
	pub node: String,
	pub handle: SimulationHandle,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Hovered node and its direct neighbors, computed once per hover change.
#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<String>,
	pub neighbors: HashSet<String>,
}

/// Everything the canvas needs between frames.
pub struct ForceGraphState {
	pub engine: ForceLayoutEngine,
	pub handle: SimulationHandle,
	pub palette: OrdinalScale,
	pub transform: ViewTransform,
	pub drag: Option<DragState>,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
}

impl ForceGraphState {
	pub fn new(snapshot: &GraphSnapshot, palette: OrdinalScale, width: f64, height: f64) -> Self {
		let mut engine = ForceLayoutEngine::default();
		let handle = engine.bind(snapshot);
		Self {
			engine,
			handle,
			palette,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: None,
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
		}
	}

	/// Lay out a new snapshot from scratch. Any drag or hover belongs to the
	/// old one and is dropped.
	pub fn rebind(&mut self, snapshot: &GraphSnapshot) {
		if self.engine.snapshot() == Some(snapshot) {
			return;
		}
		self.engine.stop(self.handle);
		self.handle = self.engine.bind(snapshot);
		self.drag = None;
		self.hover = HoverState::default();
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<String> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.engine
			.positions()
			.iter()
			.rev()
			.find(|p| (p.x - gx).hypot(p.y - gy) < HIT_RADIUS)
			.map(|p| p.id.to_string())
	}

	pub fn begin_drag(&mut self, node: String) {
		if self.engine.drag_start(&node) {
			self.drag = Some(DragState {
				node,
				handle: self.handle,
			});
		}
	}

	pub fn drag_to(&mut self, sx: f64, sy: f64) {
		let Some(drag) = &self.drag else {
			return;
		};
		if !self.engine.is_current(drag.handle) {
			self.drag = None;
			return;
		}
		let (gx, gy) = self.screen_to_graph(sx, sy);
		self.engine.drag_move(&drag.node, gx, gy);
	}

	pub fn end_drag(&mut self) {
		if let Some(drag) = self.drag.take() {
			if self.engine.is_current(drag.handle) {
				self.engine.drag_end(&drag.node);
			}
		}
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.is_some()
	}

	pub fn set_hover(&mut self, node: Option<String>) {
		if self.hover.node == node {
			return;
		}
		self.hover.neighbors.clear();
		if let (Some(id), Some(snapshot)) = (&node, self.engine.snapshot()) {
			for edge in snapshot.edges() {
				if edge.source == *id {
					self.hover.neighbors.insert(edge.target.clone());
				} else if edge.target == *id {
					self.hover.neighbors.insert(edge.source.clone());
				}
			}
		}
		self.hover.node = node;
	}

	pub fn is_hovering(&self) -> bool {
		self.hover.node.is_some()
	}

	/// Whether `id` is the hovered node or one of its direct neighbors.
	pub fn is_highlighted(&self, id: &str) -> bool {
		self.hover.node.as_deref() == Some(id) || self.hover.neighbors.contains(id)
	}

	/// The canvas is going away: drop the layout so nothing steps it again.
	pub fn shutdown(&mut self) {
		self.engine.invalidate();
		self.drag = None;
		self.hover = HoverState::default();
		self.pan.active = false;
	}

	pub fn tick(&mut self) {
		self.engine.step();
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
