//! Barnes-Hut quadtree over node positions.
//!
//! Cells live in an arena and refer to each other by index. Every cell knows
//! its square bounds, the signed sum of the strengths below it and the
//! centroid of those strengths weighted by magnitude.

/// Past this depth points are kept together in one leaf instead of splitting.
const MAX_DEPTH: usize = 32;

#[derive(Clone, Debug)]
pub(crate) struct Cell {
	pub x0: f64,
	pub y0: f64,
	pub size: f64,
	pub children: Option<[usize; 4]>,
	/// Node indices held by a leaf.
	pub points: Vec<usize>,
	pub strength: f64,
	pub cx: f64,
	pub cy: f64,
}

impl Cell {
	fn new(x0: f64, y0: f64, size: f64) -> Self {
		Self {
			x0,
			y0,
			size,
			children: None,
			points: Vec::new(),
			strength: 0.0,
			cx: 0.0,
			cy: 0.0,
		}
	}

	fn quadrant(&self, x: f64, y: f64) -> usize {
		let half = self.size / 2.0;
		let right = (x >= self.x0 + half) as usize;
		let bottom = (y >= self.y0 + half) as usize;
		bottom << 1 | right
	}

	pub fn is_leaf(&self) -> bool {
		self.children.is_none()
	}
}

#[derive(Clone, Debug, Default)]
pub(crate) struct QuadTree {
	cells: Vec<Cell>,
}

impl QuadTree {
	/// Build a tree over `xs`/`ys` and accumulate `strengths` into it.
	pub fn build(xs: &[f64], ys: &[f64], strengths: &[f64]) -> Self {
		let mut tree = Self::default();
		if xs.is_empty() {
			return tree;
		}

		let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
		let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
		for (&x, &y) in xs.iter().zip(ys) {
			min_x = min_x.min(x);
			min_y = min_y.min(y);
			max_x = max_x.max(x);
			max_y = max_y.max(y);
		}
		// Slightly larger than the extent so the max corner falls inside.
		let size = ((max_x - min_x).max(max_y - min_y) * 1.0001).max(1.0);
		tree.cells.push(Cell::new(min_x, min_y, size));

		for i in 0..xs.len() {
			tree.insert(i, xs, ys);
		}
		tree.accumulate(0, xs, ys, strengths);
		tree
	}

	pub fn root(&self) -> Option<&Cell> {
		self.cells.first()
	}

	pub fn cell(&self, idx: usize) -> &Cell {
		&self.cells[idx]
	}

	fn insert(&mut self, i: usize, xs: &[f64], ys: &[f64]) {
		let (x, y) = (xs[i], ys[i]);
		let mut current = 0;
		let mut depth = 0;
		loop {
			if let Some(children) = self.cells[current].children {
				current = children[self.cells[current].quadrant(x, y)];
				depth += 1;
				continue;
			}

			let cell = &self.cells[current];
			let coincident = cell
				.points
				.first()
				.is_some_and(|&p| xs[p] == x && ys[p] == y);
			if cell.points.is_empty() || coincident || depth >= MAX_DEPTH {
				self.cells[current].points.push(i);
				return;
			}

			self.split(current, xs, ys);
		}
	}

	fn split(&mut self, idx: usize, xs: &[f64], ys: &[f64]) {
		let (x0, y0, half) = {
			let cell = &self.cells[idx];
			(cell.x0, cell.y0, cell.size / 2.0)
		};
		let first = self.cells.len();
		self.cells.extend([
			Cell::new(x0, y0, half),
			Cell::new(x0 + half, y0, half),
			Cell::new(x0, y0 + half, half),
			Cell::new(x0 + half, y0 + half, half),
		]);
		let children = [first, first + 1, first + 2, first + 3];

		let points = std::mem::take(&mut self.cells[idx].points);
		for p in points {
			let q = self.cells[idx].quadrant(xs[p], ys[p]);
			self.cells[children[q]].points.push(p);
		}
		self.cells[idx].children = Some(children);
	}

	fn accumulate(&mut self, idx: usize, xs: &[f64], ys: &[f64], strengths: &[f64]) {
		let (mut strength, mut weight, mut cx, mut cy) = (0.0, 0.0, 0.0, 0.0);

		match self.cells[idx].children {
			Some(children) => {
				for child in children {
					self.accumulate(child, xs, ys, strengths);
					let c = &self.cells[child];
					let w = c.strength.abs();
					strength += c.strength;
					weight += w;
					cx += w * c.cx;
					cy += w * c.cy;
				}
			}
			None => {
				for &p in &self.cells[idx].points {
					let w = strengths[p].abs();
					strength += strengths[p];
					weight += w;
					cx += w * xs[p];
					cy += w * ys[p];
				}
			}
		}

		let cell = &mut self.cells[idx];
		cell.strength = strength;
		if weight > 0.0 {
			cell.cx = cx / weight;
			cell.cy = cy / weight;
		}
	}
}
