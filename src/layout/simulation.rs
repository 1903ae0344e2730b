use std::collections::HashMap;
use std::f64::consts::PI;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::forces::{self, Body, Spring};
use super::params::SimulationParameters;
use crate::graph::GraphSnapshot;

/// Position of one node after a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePosition<'a> {
	/// Node id.
	pub id: &'a str,
	/// Horizontal coordinate in layout space.
	pub x: f64,
	/// Vertical coordinate in layout space.
	pub y: f64,
}

/// Endpoint coordinates of one edge, ready to be drawn as a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeSegment<'a> {
	/// Source node id.
	pub source: &'a str,
	/// Target node id.
	pub target: &'a str,
	/// Source x.
	pub x1: f64,
	/// Source y.
	pub y1: f64,
	/// Target x.
	pub x2: f64,
	/// Target y.
	pub y2: f64,
	/// `sqrt(weight)` of the edge.
	pub stroke_width: f64,
}

/// Token for one [`ForceLayoutEngine::bind`] call.
///
/// A handle outlives its binding: once another snapshot is bound it no longer
/// refers to anything and operations taking it are no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SimulationHandle {
	generation: u64,
}

/// Lifecycle of the bound simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationStatus {
	/// Nothing bound.
	Idle,
	/// Alpha is above the minimum and every step integrates forces.
	Running,
	/// Alpha dropped below the minimum. Steps only enforce pins.
	Settled,
	/// Halted by the host. Steps are no-ops until the next bind.
	Stopped,
}

/// Per-snapshot simulation state.
struct Simulation {
	snapshot: GraphSnapshot,
	index: HashMap<String, usize>,
	bodies: Vec<Body>,
	springs: Vec<Spring>,
	alpha: f64,
	alpha_target: f64,
	status: SimulationStatus,
	ticks: u64,
	rng: StdRng,
}

impl Simulation {
	fn new(snapshot: &GraphSnapshot, params: &SimulationParameters) -> Self {
		let snapshot = snapshot.clone();
		let index: HashMap<String, usize> = snapshot
			.nodes()
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.clone(), i))
			.collect();

		// Phyllotaxis spiral.
		let step = PI * (3.0 - 5f64.sqrt());
		let bodies = (0..snapshot.len())
			.map(|i| {
				let r = params.initial_radius * (0.5 + i as f64).sqrt();
				let a = i as f64 * step;
				Body {
					x: r * a.cos(),
					y: r * a.sin(),
					..Body::default()
				}
			})
			.collect();

		let mut degree = vec![0usize; snapshot.len()];
		let mut ends = Vec::with_capacity(snapshot.edge_count());
		for edge in snapshot.edges() {
			// Snapshots are validated, every endpoint resolves.
			if let (Some(&s), Some(&t)) = (index.get(&edge.source), index.get(&edge.target)) {
				degree[s] += 1;
				degree[t] += 1;
				ends.push((s, t));
			}
		}
		let springs = ends
			.into_iter()
			.map(|(s, t)| Spring::new(s, t, &degree))
			.collect();

		let status = if snapshot.is_empty() {
			SimulationStatus::Settled
		} else {
			SimulationStatus::Running
		};

		Self {
			snapshot,
			index,
			bodies,
			springs,
			alpha: params.alpha,
			alpha_target: params.alpha_target,
			status,
			ticks: 0,
			rng: StdRng::seed_from_u64(params.seed),
		}
	}

	fn enforce_pins(&mut self) {
		for body in &mut self.bodies {
			if let Some(fx) = body.fx {
				body.x = fx;
				body.vx = 0.0;
			}
			if let Some(fy) = body.fy {
				body.y = fy;
				body.vy = 0.0;
			}
		}
	}

	fn tick(&mut self, params: &SimulationParameters) {
		self.enforce_pins();

		self.alpha += (self.alpha_target - self.alpha) * params.alpha_decay;
		let alpha = self.alpha;
		forces::apply_links(&mut self.bodies, &self.springs, params, alpha, &mut self.rng);
		forces::apply_many_body(&mut self.bodies, params, alpha, &mut self.rng);

		let keep = 1.0 - params.velocity_decay;
		for body in &mut self.bodies {
			if body.fx.is_none() {
				body.vx *= keep;
				body.x += body.vx;
			}
			if body.fy.is_none() {
				body.vy *= keep;
				body.y += body.vy;
			}
		}
		// After integration, so the reported centroid sits on the center.
		forces::apply_center(&mut self.bodies, params);
		self.enforce_pins();
		self.ticks += 1;

		if self.alpha < params.alpha_min {
			self.status = SimulationStatus::Settled;
			debug!(
				"layout settled after {} ticks ({} nodes)",
				self.ticks,
				self.bodies.len()
			);
		}
	}

	fn positions(&self) -> Vec<NodePosition<'_>> {
		self.snapshot
			.nodes()
			.iter()
			.zip(&self.bodies)
			.map(|(node, body)| NodePosition {
				id: &node.id,
				x: body.x,
				y: body.y,
			})
			.collect()
	}

	fn restart(&mut self) {
		if self.status == SimulationStatus::Settled && !self.bodies.is_empty() {
			self.status = SimulationStatus::Running;
		}
	}
}

/// Force-directed layout of one snapshot at a time.
///
/// The host drives it: call [`step`](Self::step) once per frame and draw what
/// it returns. Binding a new snapshot throws away all previous state,
/// including pins.
pub struct ForceLayoutEngine {
	params: SimulationParameters,
	generation: u64,
	current: Option<Simulation>,
}

impl Default for ForceLayoutEngine {
	fn default() -> Self {
		Self::new(SimulationParameters::default())
	}
}

impl ForceLayoutEngine {
	/// Engine with nothing bound.
	pub fn new(params: SimulationParameters) -> Self {
		Self {
			params,
			generation: 0,
			current: None,
		}
	}

	/// Parameters every binding is simulated with.
	pub fn params(&self) -> &SimulationParameters {
		&self.params
	}

	/// Start a fresh simulation of `snapshot`, replacing whatever was bound.
	///
	/// Nodes start on a phyllotaxis spiral around the origin with zero
	/// velocity. An empty snapshot is settled from the start.
	pub fn bind(&mut self, snapshot: &GraphSnapshot) -> SimulationHandle {
		self.generation += 1;
		self.current = Some(Simulation::new(snapshot, &self.params));
		debug!(
			"layout bound: generation {}, {} nodes, {} edges",
			self.generation,
			snapshot.len(),
			snapshot.edge_count()
		);
		SimulationHandle {
			generation: self.generation,
		}
	}

	/// Whether `handle` is the binding currently held.
	pub fn is_current(&self, handle: SimulationHandle) -> bool {
		self.current.is_some() && handle.generation == self.generation
	}

	/// [`SimulationStatus::Idle`] when nothing is bound.
	pub fn status(&self) -> SimulationStatus {
		self.current
			.as_ref()
			.map_or(SimulationStatus::Idle, |sim| sim.status)
	}

	/// Whether the next step integrates forces.
	pub fn is_running(&self) -> bool {
		self.status() == SimulationStatus::Running
	}

	/// Current alpha, zero when nothing is bound.
	pub fn alpha(&self) -> f64 {
		self.current.as_ref().map_or(0.0, |sim| sim.alpha)
	}

	/// The bound snapshot.
	pub fn snapshot(&self) -> Option<&GraphSnapshot> {
		self.current.as_ref().map(|sim| &sim.snapshot)
	}

	/// Advance one tick and report every node position in snapshot order.
	///
	/// A settled simulation only re-applies pins; a stopped one returns the
	/// last positions untouched.
	pub fn step(&mut self) -> Vec<NodePosition<'_>> {
		let Some(sim) = self.current.as_mut() else {
			return Vec::new();
		};
		match sim.status {
			SimulationStatus::Running => sim.tick(&self.params),
			SimulationStatus::Settled => sim.enforce_pins(),
			SimulationStatus::Stopped | SimulationStatus::Idle => {}
		}
		sim.positions()
	}

	/// Step until settled, stopped or `max_ticks` is reached, handing each
	/// step's positions to `on_tick`. Returns the number of ticks taken.
	pub fn run<F>(&mut self, max_ticks: usize, mut on_tick: F) -> usize
	where
		F: FnMut(&[NodePosition<'_>]),
	{
		let mut ticks = 0;
		while ticks < max_ticks && self.is_running() {
			let positions = self.step();
			on_tick(&positions);
			ticks += 1;
		}
		ticks
	}

	/// Positions as of the last step, without stepping.
	pub fn positions(&self) -> Vec<NodePosition<'_>> {
		self.current
			.as_ref()
			.map(Simulation::positions)
			.unwrap_or_default()
	}

	/// Position of `id` as of the last step.
	pub fn position(&self, id: &str) -> Option<(f64, f64)> {
		let sim = self.current.as_ref()?;
		let body = &sim.bodies[*sim.index.get(id)?];
		Some((body.x, body.y))
	}

	/// One segment per edge of the bound snapshot, in snapshot order.
	pub fn edge_segments(&self) -> Vec<EdgeSegment<'_>> {
		let Some(sim) = self.current.as_ref() else {
			return Vec::new();
		};
		sim.snapshot
			.edges()
			.iter()
			.zip(&sim.springs)
			.map(|(edge, spring)| {
				let (s, t) = (&sim.bodies[spring.source], &sim.bodies[spring.target]);
				EdgeSegment {
					source: &edge.source,
					target: &edge.target,
					x1: s.x,
					y1: s.y,
					x2: t.x,
					y2: t.y,
					stroke_width: edge.stroke_width(),
				}
			})
			.collect()
	}

	/// Fix a node at `(x, y)` from the next step on. Unknown ids and
	/// non-finite coordinates are ignored.
	pub fn pin(&mut self, id: &str, x: f64, y: f64) -> bool {
		if !(x.is_finite() && y.is_finite()) {
			debug!("pin ignored, ({x}, {y}) is not a finite position for `{id}`");
			return false;
		}
		match self.body_mut(id) {
			Some(body) => {
				body.fx = Some(x);
				body.fy = Some(y);
				true
			}
			None => {
				debug!("pin ignored, `{id}` is not in the bound snapshot");
				false
			}
		}
	}

	/// Release a pinned node back to the simulation.
	pub fn unpin(&mut self, id: &str) -> bool {
		match self.body_mut(id) {
			Some(body) => {
				body.fx = None;
				body.fy = None;
				true
			}
			None => {
				debug!("unpin ignored, `{id}` is not in the bound snapshot");
				false
			}
		}
	}

	/// Whether `id` is held at a fixed position.
	pub fn is_pinned(&self, id: &str) -> bool {
		self.current
			.as_ref()
			.and_then(|sim| sim.index.get(id).map(|&i| &sim.bodies[i]))
			.is_some_and(|body| body.fx.is_some() || body.fy.is_some())
	}

	/// Wake a settled simulation. Stopped ones stay stopped.
	pub fn restart(&mut self) {
		if let Some(sim) = self.current.as_mut() {
			sim.restart();
		}
	}

	/// Alpha decays toward `target` from the next step on.
	pub fn set_alpha_target(&mut self, target: f64) {
		if let Some(sim) = self.current.as_mut() {
			sim.alpha_target = target;
		}
	}

	/// Raise alpha to `alpha` and restart.
	pub fn reheat(&mut self, alpha: f64) {
		if let Some(sim) = self.current.as_mut() {
			sim.alpha = alpha;
			sim.restart();
		}
	}

	/// Drag gesture began on `id`: keep the layout warm and hold the node.
	pub fn drag_start(&mut self, id: &str) -> bool {
		let Some((x, y)) = self.position(id) else {
			return false;
		};
		self.set_alpha_target(self.params.reheat_alpha_target);
		self.restart();
		self.pin(id, x, y)
	}

	/// Pointer moved while dragging `id`: pin it at the pointer.
	pub fn drag_move(&mut self, id: &str, x: f64, y: f64) -> bool {
		self.pin(id, x, y)
	}

	/// Drag gesture ended: let the layout cool down and release the node.
	pub fn drag_end(&mut self, id: &str) -> bool {
		self.set_alpha_target(self.params.alpha_target);
		self.unpin(id)
	}

	/// Halt stepping. Safe to call repeatedly, after settling, or with a
	/// handle from an earlier bind.
	pub fn stop(&mut self, handle: SimulationHandle) {
		if !self.is_current(handle) {
			return;
		}
		if let Some(sim) = self.current.as_mut() {
			if sim.status != SimulationStatus::Stopped {
				debug!("layout stopped: generation {}", handle.generation);
				sim.status = SimulationStatus::Stopped;
			}
		}
	}

	/// Drop the bound state entirely. Later steps return nothing.
	pub fn invalidate(&mut self) {
		if self.current.take().is_some() {
			debug!("layout invalidated: generation {}", self.generation);
		}
	}

	fn body_mut(&mut self, id: &str) -> Option<&mut Body> {
		let sim = self.current.as_mut()?;
		let &i = sim.index.get(id)?;
		sim.bodies.get_mut(i)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::{Edge, GraphStore, Node};

	fn abc() -> GraphSnapshot {
		GraphSnapshot::new(
			vec![Node::new("A", 1), Node::new("B", 1), Node::new("C", 1)],
			vec![Edge::new("A", "B"), Edge::new("B", "C")],
		)
		.unwrap()
	}

	fn owned(positions: &[NodePosition<'_>]) -> Vec<(String, f64, f64)> {
		positions
			.iter()
			.map(|p| (p.id.to_string(), p.x, p.y))
			.collect()
	}

	fn dist(engine: &ForceLayoutEngine, a: &str, b: &str) -> f64 {
		let (ax, ay) = engine.position(a).unwrap();
		let (bx, by) = engine.position(b).unwrap();
		((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
	}

	#[test]
	fn idle_engine_steps_to_nothing() {
		let mut engine = ForceLayoutEngine::default();
		assert_eq!(engine.status(), SimulationStatus::Idle);
		assert!(engine.step().is_empty());
		assert!(!engine.pin("A", 0.0, 0.0));
	}

	#[test]
	fn empty_snapshot_settles_immediately() {
		let mut engine = ForceLayoutEngine::default();
		let handle = engine.bind(&GraphSnapshot::empty());
		assert_eq!(engine.status(), SimulationStatus::Settled);
		assert!(engine.step().is_empty());
		assert_eq!(engine.run(100, |_| {}), 0);
		engine.stop(handle);
		engine.stop(handle);
	}

	#[test]
	fn single_node_converges_to_center() {
		let snapshot = GraphSnapshot::new(vec![Node::new("X", 1)], vec![]).unwrap();
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&snapshot);
		engine.run(1_000, |positions| {
			assert_eq!(positions.len(), 1);
			assert!(positions[0].x.is_finite() && positions[0].y.is_finite());
		});
		assert_eq!(engine.status(), SimulationStatus::Settled);
		let (x, y) = engine.position("X").unwrap();
		assert!(x.abs() < 1e-9 && y.abs() < 1e-9, "({x}, {y})");
	}

	#[test]
	fn positions_follow_snapshot_order() {
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&abc());
		let ids: Vec<_> = engine.step().iter().map(|p| p.id).collect();
		assert_eq!(ids, vec!["A", "B", "C"]);
	}

	#[test]
	fn same_seed_same_trajectory() {
		let store = GraphStore::load().unwrap();
		let snapshot = store.snapshot();

		let record = || {
			let mut engine = ForceLayoutEngine::default();
			engine.bind(&snapshot);
			let mut frames = Vec::new();
			engine.run(40, |positions| frames.push(owned(positions)));
			frames
		};
		assert_eq!(record(), record());
	}

	#[test]
	fn settles_and_stays_put() {
		let store = GraphStore::load().unwrap();
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&store.snapshot());

		let ticks = engine.run(10_000, |_| {});
		assert!(ticks > 0 && ticks < 10_000);
		assert_eq!(engine.status(), SimulationStatus::Settled);
		assert!(engine.alpha() < engine.params().alpha_min);

		let before = owned(&engine.positions());
		let after = owned(&engine.step());
		for (b, a) in before.iter().zip(&after) {
			assert!((b.1 - a.1).abs() < 1e-9 && (b.2 - a.2).abs() < 1e-9);
		}
		assert!(after.iter().all(|p| p.1.is_finite() && p.2.is_finite()));
	}

	#[test]
	fn layout_is_spread_and_centered() {
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&abc());
		engine.run(1_000, |_| {});

		let positions = engine.positions();
		let cx = positions.iter().map(|p| p.x).sum::<f64>() / 3.0;
		let cy = positions.iter().map(|p| p.y).sum::<f64>() / 3.0;
		assert!(cx.abs() < 1e-6 && cy.abs() < 1e-6);

		// linked pairs near the rest length, the ends pushed further apart
		let (ab, bc, ac) = (dist(&engine, "A", "B"), dist(&engine, "B", "C"), dist(&engine, "A", "C"));
		assert!((15.0..80.0).contains(&ab), "{ab}");
		assert!((15.0..80.0).contains(&bc), "{bc}");
		assert!(ac > ab.max(bc), "{ac}");
	}

	#[test]
	fn pinned_node_reports_exact_position() {
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&abc());
		engine.step();
		assert!(engine.pin("A", 50.0, -20.0));
		assert!(engine.is_pinned("A"));

		for _ in 0..25 {
			let positions = engine.step();
			let a = positions.iter().find(|p| p.id == "A").unwrap();
			assert_eq!((a.x, a.y), (50.0, -20.0));
		}

		assert!(engine.unpin("A"));
		assert!(!engine.is_pinned("A"));
		engine.step();
		assert_ne!(engine.position("A"), Some((50.0, -20.0)));
	}

	#[test]
	fn non_finite_pin_is_rejected() {
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&abc());
		engine.step();
		assert!(!engine.pin("A", f64::NAN, 0.0));
		assert!(!engine.pin("A", 0.0, f64::INFINITY));
		assert!(!engine.drag_move("A", f64::NEG_INFINITY, 1.0));
		assert!(!engine.is_pinned("A"));

		for _ in 0..50 {
			engine.step();
		}
		for p in engine.positions() {
			assert!(p.x.is_finite() && p.y.is_finite(), "{p:?}");
		}
	}

	#[test]
	fn pin_is_applied_before_forces() {
		// Both nodes start at rest, so B's first move comes only from this
		// step's spring. Centering is off so it cannot mask the direction.
		let snapshot = GraphSnapshot::new(
			vec![Node::new("A", 1), Node::new("B", 1)],
			vec![Edge::new("A", "B")],
		)
		.unwrap();
		let mut engine = ForceLayoutEngine::new(SimulationParameters {
			center_strength: 0.0,
			..SimulationParameters::default()
		});
		engine.bind(&snapshot);
		let (bx, by) = engine.position("B").unwrap();

		// Far to the right of B; from its spawn point A would push B left.
		assert!(engine.pin("A", bx + 1_000.0, by));
		engine.step();
		let (nx, _) = engine.position("B").unwrap();
		assert!(nx > bx + 100.0, "B moved from {bx} to {nx}");
		assert_eq!(engine.position("A"), Some((bx + 1_000.0, by)));
	}

	#[test]
	fn pin_holds_after_settling() {
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&abc());
		engine.run(1_000, |_| {});
		assert_eq!(engine.status(), SimulationStatus::Settled);

		engine.pin("B", 7.0, 8.0);
		engine.step();
		assert_eq!(engine.position("B"), Some((7.0, 8.0)));
	}

	#[test]
	fn unknown_ids_are_ignored() {
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&abc());
		assert!(!engine.pin("Z", 1.0, 1.0));
		assert!(!engine.unpin("Z"));
		assert!(!engine.drag_start("Z"));
		assert_eq!(engine.step().len(), 3);
	}

	#[test]
	fn rebinding_drops_pins() {
		let mut engine = ForceLayoutEngine::default();
		let first = engine.bind(&abc());
		engine.pin("A", 50.0, -20.0);

		let second = engine.bind(&abc());
		assert!(!engine.is_current(first));
		assert!(engine.is_current(second));
		assert!(!engine.is_pinned("A"));
		engine.step();
		assert_ne!(engine.position("A"), Some((50.0, -20.0)));
	}

	#[test]
	fn stop_is_idempotent_and_freezes() {
		let mut engine = ForceLayoutEngine::default();
		let handle = engine.bind(&abc());
		engine.step();
		engine.stop(handle);
		engine.stop(handle);
		assert_eq!(engine.status(), SimulationStatus::Stopped);

		let before = owned(&engine.positions());
		assert_eq!(owned(&engine.step()), before);
		assert_eq!(engine.run(10, |_| {}), 0);

		engine.restart();
		assert_eq!(engine.status(), SimulationStatus::Stopped);
	}

	#[test]
	fn stale_handle_cannot_stop_new_binding() {
		let mut engine = ForceLayoutEngine::default();
		let old = engine.bind(&abc());
		engine.bind(&abc());
		engine.stop(old);
		assert!(engine.is_running());
	}

	#[test]
	fn stop_after_settling_is_harmless() {
		let mut engine = ForceLayoutEngine::default();
		let handle = engine.bind(&abc());
		engine.run(1_000, |_| {});
		engine.stop(handle);
		assert_eq!(engine.status(), SimulationStatus::Stopped);
	}

	#[test]
	fn invalidate_clears_state() {
		let mut engine = ForceLayoutEngine::default();
		let handle = engine.bind(&abc());
		engine.invalidate();
		assert_eq!(engine.status(), SimulationStatus::Idle);
		assert!(!engine.is_current(handle));
		assert!(engine.step().is_empty());
		engine.stop(handle);
		engine.invalidate();
	}

	#[test]
	fn drag_keeps_layout_warm() {
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&abc());
		engine.run(1_000, |_| {});
		assert_eq!(engine.status(), SimulationStatus::Settled);

		assert!(engine.drag_start("B"));
		assert!(engine.is_running());
		for _ in 0..500 {
			engine.step();
		}
		assert!(engine.is_running());
		assert!((engine.alpha() - 0.3).abs() < 0.01);

		assert!(engine.drag_move("B", 100.0, 100.0));
		engine.step();
		assert_eq!(engine.position("B"), Some((100.0, 100.0)));

		assert!(engine.drag_end("B"));
		assert!(engine.run(10_000, |_| {}) < 10_000);
		assert_eq!(engine.status(), SimulationStatus::Settled);
	}

	#[test]
	fn reheat_restarts_settled_layout() {
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&abc());
		engine.run(1_000, |_| {});
		engine.reheat(0.3);
		assert!(engine.is_running());
		assert_eq!(engine.alpha(), 0.3);
	}

	#[test]
	fn isolated_nodes_get_finite_distinct_positions() {
		let snapshot = GraphSnapshot::new(
			vec![Node::new("a", 1), Node::new("b", 1), Node::new("c", 2)],
			vec![],
		)
		.unwrap();
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&snapshot);
		engine.run(1_000, |_| {});
		assert!(dist(&engine, "a", "b") > 1.0);
		assert!(dist(&engine, "b", "c") > 1.0);
		assert!(dist(&engine, "a", "c") > 1.0);
	}

	#[test]
	fn segments_track_node_positions() {
		let snapshot = GraphSnapshot::new(
			vec![Node::new("A", 1), Node::new("B", 1)],
			vec![Edge::new("A", "B").with_weight(4.0)],
		)
		.unwrap();
		let mut engine = ForceLayoutEngine::default();
		engine.bind(&snapshot);
		engine.step();

		let segments = engine.edge_segments();
		assert_eq!(segments.len(), 1);
		let seg = segments[0];
		assert_eq!((seg.source, seg.target), ("A", "B"));
		assert_eq!(Some((seg.x1, seg.y1)), engine.position("A"));
		assert_eq!(Some((seg.x2, seg.y2)), engine.position("B"));
		assert_eq!(seg.stroke_width, 2.0);
	}
}
