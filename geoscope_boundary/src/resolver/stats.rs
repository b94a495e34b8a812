use crate::statistics::PopulationData;
use geoscope_geometry::math::round_to;
use serde_json::{Value, json};

/// Inhabitants per km², rounded to a whole number.
///
/// `None` unless the population is known and the area is positive.
pub fn population_density(population: Option<u64>, area_km2: f64) -> Option<u64> {
	let population = population?;
	if area_km2.is_finite() && area_km2 > 0.0 {
		Some((population as f64 / area_km2).round() as u64)
	} else {
		None
	}
}

/// Derived statistics of a resolved boundary.
///
/// The density is based on the calculated area of the rendered ring, never on the official area.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundaryStats {
	/// km², unrounded
	pub calculated_area: f64,
	pub population: Option<u64>,
	/// km², as published by the statistics source
	pub official_area: Option<f64>,
	pub density: Option<u64>,
}

impl BoundaryStats {
	pub fn new(calculated_area: f64, data: PopulationData) -> BoundaryStats {
		BoundaryStats {
			calculated_area,
			population: data.population,
			official_area: data.official_area,
			density: population_density(data.population, calculated_area),
		}
	}

	pub fn to_json(&self) -> Value {
		json!({
			"calculated_area_km2": round_to(self.calculated_area, 2),
			"population": self.population,
			"official_area_km2": self.official_area,
			"density": self.density,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[rstest]
	#[case(Some(100_000), 10.0, Some(10_000))]
	#[case(Some(221_893), 9.21, Some(24_093))]
	#[case(Some(5), 2.0, Some(3))]
	#[case(None, 10.0, None)]
	#[case(Some(100), 0.0, None)]
	#[case(Some(100), -1.0, None)]
	#[case(Some(100), f64::NAN, None)]
	fn density(#[case] population: Option<u64>, #[case] area: f64, #[case] expected: Option<u64>) {
		assert_eq!(population_density(population, area), expected);
	}

	#[test]
	fn stats_use_calculated_area() {
		let stats = BoundaryStats::new(
			10.0,
			PopulationData {
				population: Some(100_000),
				official_area: Some(50.0),
			},
		);
		assert_eq!(stats.density, Some(10_000));
		assert_eq!(
			stats.to_json(),
			json!({
				"calculated_area_km2": 10.0,
				"population": 100000,
				"official_area_km2": 50.0,
				"density": 10000,
			})
		);
	}

	#[test]
	fn missing_population_gives_null_density() {
		let stats = BoundaryStats::new(12.346, PopulationData::default());
		assert_eq!(
			stats.to_json(),
			json!({
				"calculated_area_km2": 12.35,
				"population": null,
				"official_area_km2": null,
				"density": null,
			})
		);
	}
}
