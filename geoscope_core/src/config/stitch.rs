use anyhow::{Result, ensure};
use serde::Deserialize;

/// Endpoint matching tolerance in degrees, roughly 11 m at the equator.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct StitchConfig {
	/// Maximum per-axis difference in degrees for two way endpoints to count as the same vertex.
	pub tolerance: f64,
}

impl Default for StitchConfig {
	fn default() -> Self {
		Self {
			tolerance: DEFAULT_TOLERANCE,
		}
	}
}

impl StitchConfig {
	pub fn verify(&self) -> Result<()> {
		ensure!(
			self.tolerance.is_finite() && self.tolerance > 0.0,
			"stitch.tolerance must be a positive number, got {}",
			self.tolerance
		);
		Ok(())
	}

	pub fn override_optional_tolerance(&mut self, tolerance: &Option<f64>) {
		if let Some(tolerance) = tolerance {
			self.tolerance = *tolerance;
		}
	}
}
