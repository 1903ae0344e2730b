//! The three forces of a tick. Links and many-body act on velocities,
//! centering translates positions directly.

use rand::Rng;
use rand::rngs::StdRng;

use super::params::SimulationParameters;
use super::quadtree::QuadTree;

/// Simulated state of one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Body {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub fx: Option<f64>,
	pub fy: Option<f64>,
}

/// Link resolved to body indices with its degree-derived coefficients.
#[derive(Clone, Debug)]
pub(crate) struct Spring {
	pub source: usize,
	pub target: usize,
	pub strength: f64,
	/// Share of the correction taken by the target.
	pub bias: f64,
}

impl Spring {
	pub fn new(source: usize, target: usize, degree: &[usize]) -> Self {
		let (ds, dt) = (degree[source] as f64, degree[target] as f64);
		Self {
			source,
			target,
			strength: 1.0 / ds.min(dt),
			bias: ds / (ds + dt),
		}
	}
}

/// Tiny random offset used where two values coincide exactly.
pub(crate) fn jiggle(rng: &mut StdRng) -> f64 {
	(rng.r#gen::<f64>() - 0.5) * 1e-6
}

pub(crate) fn apply_links(
	bodies: &mut [Body],
	springs: &[Spring],
	params: &SimulationParameters,
	alpha: f64,
	rng: &mut StdRng,
) {
	for _ in 0..params.link_iterations {
		for spring in springs {
			let (s, t) = (&bodies[spring.source], &bodies[spring.target]);
			let mut x = t.x + t.vx - s.x - s.vx;
			let mut y = t.y + t.vy - s.y - s.vy;
			if x == 0.0 {
				x = jiggle(rng);
			}
			if y == 0.0 {
				y = jiggle(rng);
			}
			let len = (x * x + y * y).sqrt();
			let k = (len - params.link_distance) / len * alpha * spring.strength;
			x *= k;
			y *= k;

			let t = &mut bodies[spring.target];
			t.vx -= x * spring.bias;
			t.vy -= y * spring.bias;
			let s = &mut bodies[spring.source];
			s.vx += x * (1.0 - spring.bias);
			s.vy += y * (1.0 - spring.bias);
		}
	}
}

pub(crate) fn apply_many_body(
	bodies: &mut [Body],
	params: &SimulationParameters,
	alpha: f64,
	rng: &mut StdRng,
) {
	if bodies.len() < 2 || params.charge_strength == 0.0 {
		return;
	}

	let xs: Vec<f64> = bodies.iter().map(|b| b.x).collect();
	let ys: Vec<f64> = bodies.iter().map(|b| b.y).collect();
	let strengths = vec![params.charge_strength; bodies.len()];
	let tree = QuadTree::build(&xs, &ys, &strengths);

	let (min2, max2, theta2) = (
		params.distance_min2(),
		params.distance_max2(),
		params.theta2(),
	);

	let mut stack = Vec::new();
	for (i, body) in bodies.iter_mut().enumerate() {
		stack.clear();
		stack.push(0);
		while let Some(idx) = stack.pop() {
			let cell = tree.cell(idx);
			if cell.strength == 0.0 {
				continue;
			}

			let mut dx = cell.cx - body.x;
			let mut dy = cell.cy - body.y;
			let mut l = dx * dx + dy * dy;

			// Far enough to treat the whole cell as one body. A leaf holding
			// the body itself is always opened.
			let holds_self = cell.is_leaf() && cell.points.contains(&i);
			if theta2 > 0.0 && !holds_self && cell.size * cell.size / theta2 < l {
				if l < max2 {
					if dx == 0.0 {
						dx = jiggle(rng);
						l += dx * dx;
					}
					if dy == 0.0 {
						dy = jiggle(rng);
						l += dy * dy;
					}
					if l < min2 {
						l = (min2 * l).sqrt();
					}
					body.vx += dx * cell.strength * alpha / l;
					body.vy += dy * cell.strength * alpha / l;
				}
				continue;
			}

			if let Some(children) = cell.children {
				stack.extend(children);
				continue;
			}
			if l >= max2 {
				continue;
			}

			for &p in cell.points.iter().filter(|&&p| p != i) {
				let mut dx = xs[p] - body.x;
				let mut dy = ys[p] - body.y;
				if dx == 0.0 {
					dx = jiggle(rng);
				}
				if dy == 0.0 {
					dy = jiggle(rng);
				}
				let mut l = dx * dx + dy * dy;
				if l < min2 {
					l = (min2 * l).sqrt();
				}
				let w = strengths[p] * alpha / l;
				body.vx += dx * w;
				body.vy += dy * w;
			}
		}
	}
}

pub(crate) fn apply_center(bodies: &mut [Body], params: &SimulationParameters) {
	if bodies.is_empty() {
		return;
	}
	let n = bodies.len() as f64;
	let (sx, sy) = bodies
		.iter()
		.fold((0.0, 0.0), |(sx, sy), b| (sx + b.x, sy + b.y));
	let shift_x = (sx / n - params.center_x) * params.center_strength;
	let shift_y = (sy / n - params.center_y) * params.center_strength;
	for body in bodies {
		body.x -= shift_x;
		body.y -= shift_y;
	}
}
