//! Ordinal color scale for node groups.

use crate::graph::GraphSnapshot;

/// Tableau10.
pub const COLORS: &[&str] = &[
	"#4e79a7", "#f28e2c", "#e15759", "#76b7b2", "#59a14f", "#edc949", "#af7aa1", "#ff9da7",
	"#9c755f", "#bab0ab",
];

/// Maps each group to a color by its rank among the known groups.
///
/// Built once from the full graph so a group keeps its color when the view is
/// narrowed to a neighborhood.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrdinalScale {
	domain: Vec<u32>,
}

impl OrdinalScale {
	pub fn from_snapshot(snapshot: &GraphSnapshot) -> Self {
		Self {
			domain: snapshot.groups().into_keys().collect(),
		}
	}

	pub fn color(&self, group: u32) -> &'static str {
		let rank = self
			.domain
			.binary_search(&group)
			.unwrap_or_else(|_| group as usize);
		COLORS[rank % COLORS.len()]
	}
}
