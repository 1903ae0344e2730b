use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejected simulation configuration.
#[derive(Debug, Error)]
pub enum LayoutError {
	/// A field lies outside its allowed range.
	#[error("`{name}` must be within {min}..={max}, got {value}")]
	OutOfRange {
		/// Field name.
		name: &'static str,
		/// Rejected value.
		value: f64,
		/// Inclusive lower bound.
		min: f64,
		/// Inclusive upper bound.
		max: f64,
	},

	/// The JSON overrides could not be read.
	#[error("invalid simulation parameters: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Knobs of the force simulation.
///
/// Every field has a default, so a host can override a subset from JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
	/// Alpha on bind.
	pub alpha: f64,
	/// Below this (with the target also below it) the simulation is settled.
	pub alpha_min: f64,
	/// Fraction of the gap to `alpha_target` closed per tick.
	pub alpha_decay: f64,
	/// Alpha decays toward this when nothing is dragged.
	pub alpha_target: f64,
	/// Alpha target while a node is being dragged.
	pub reheat_alpha_target: f64,
	/// Fraction of velocity lost per tick.
	pub velocity_decay: f64,

	/// Many-body strength. Negative repels.
	pub charge_strength: f64,
	/// Repulsion is computed as if nodes closer than this were this far apart.
	pub distance_min: f64,
	/// Nodes further apart than this do not repel each other.
	pub distance_max: f64,
	/// Barnes-Hut opening criterion. Zero means exact pairwise repulsion.
	pub theta: f64,

	/// Rest length of every link.
	pub link_distance: f64,
	/// Spring passes per tick.
	pub link_iterations: usize,

	/// Horizontal position the centroid is pulled to.
	pub center_x: f64,
	/// Vertical position the centroid is pulled to.
	pub center_y: f64,
	/// Fraction of the centroid offset removed per tick.
	pub center_strength: f64,

	/// Spacing of the initial phyllotaxis spiral.
	pub initial_radius: f64,
	/// Seed for the jiggle that separates coincident nodes.
	pub seed: u64,
}

impl Default for SimulationParameters {
	fn default() -> Self {
		let alpha_min = 0.001;
		Self {
			alpha: 1.0,
			alpha_min,
			alpha_decay: 1.0 - f64::powf(alpha_min, 1.0 / 300.0),
			alpha_target: 0.0,
			reheat_alpha_target: 0.3,
			velocity_decay: 0.4,
			charge_strength: -30.0,
			distance_min: 1.0,
			distance_max: f64::INFINITY,
			theta: 0.9,
			link_distance: 30.0,
			link_iterations: 1,
			center_x: 0.0,
			center_y: 0.0,
			center_strength: 1.0,
			initial_radius: 10.0,
			seed: 0x5eed,
		}
	}
}

impl SimulationParameters {
	/// Defaults overridden by whatever fields `json` sets, then validated.
	pub fn from_json(json: &str) -> Result<Self, LayoutError> {
		let params: Self = serde_json::from_str(json)?;
		params.validate()?;
		Ok(params)
	}

	/// Reject values the simulation cannot work with.
	pub fn validate(&self) -> Result<(), LayoutError> {
		let checks: [(&'static str, f64, f64, f64); 10] = [
			("alpha", self.alpha, 0.0, 1.0),
			("alpha_min", self.alpha_min, 0.0, 1.0),
			("alpha_decay", self.alpha_decay, 0.0, 1.0),
			("alpha_target", self.alpha_target, 0.0, 1.0),
			("reheat_alpha_target", self.reheat_alpha_target, 0.0, 1.0),
			("velocity_decay", self.velocity_decay, 0.0, 1.0),
			("distance_min", self.distance_min, 0.0, f64::MAX),
			("theta", self.theta, 0.0, f64::MAX),
			("link_distance", self.link_distance, 0.0, f64::MAX),
			("center_strength", self.center_strength, 0.0, 1.0),
		];
		for (name, value, min, max) in checks {
			if !(min..=max).contains(&value) {
				return Err(LayoutError::OutOfRange {
					name,
					value,
					min,
					max,
				});
			}
		}
		if !(self.distance_max > self.distance_min) {
			return Err(LayoutError::OutOfRange {
				name: "distance_max",
				value: self.distance_max,
				min: self.distance_min,
				max: f64::INFINITY,
			});
		}
		Ok(())
	}

	pub(crate) fn distance_min2(&self) -> f64 {
		self.distance_min * self.distance_min
	}

	pub(crate) fn distance_max2(&self) -> f64 {
		self.distance_max * self.distance_max
	}

	pub(crate) fn theta2(&self) -> f64 {
		self.theta * self.theta
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		SimulationParameters::default().validate().unwrap();
	}

	#[test]
	fn default_decay_settles_in_about_300_ticks() {
		let p = SimulationParameters::default();
		let mut alpha = p.alpha;
		let mut ticks = 0;
		while alpha >= p.alpha_min {
			alpha += (p.alpha_target - alpha) * p.alpha_decay;
			ticks += 1;
		}
		assert!((299..=301).contains(&ticks), "{ticks}");
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let p = SimulationParameters::from_json(r#"{"link_distance": 50, "seed": 7}"#).unwrap();
		assert_eq!(p.link_distance, 50.0);
		assert_eq!(p.seed, 7);
		assert_eq!(p.charge_strength, -30.0);
	}

	#[test]
	fn out_of_range_is_rejected() {
		let err = SimulationParameters::from_json(r#"{"alpha_decay": 1.5}"#).unwrap_err();
		assert!(matches!(
			err,
			LayoutError::OutOfRange {
				name: "alpha_decay",
				..
			}
		));
	}
}
