use serde_json::{Value, json};
use std::fmt::Debug;

/// A single WGS84 vertex as `[longitude, latitude]` in degrees.
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(lon: f64, lat: f64) -> Self {
		Self([lon, lat])
	}

	#[must_use]
	pub fn lon(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn lat(&self) -> f64 {
		self.0[1]
	}

	/// True if both axis deltas are strictly below `tolerance` degrees.
	///
	/// This is a per-axis box test, not a distance.
	#[must_use]
	pub fn matches(&self, other: &Coordinates, tolerance: f64) -> bool {
		(self.0[0] - other.0[0]).abs() < tolerance && (self.0[1] - other.0[1]).abs() < tolerance
	}

	#[must_use]
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		if let Some(prec) = precision {
			let factor = 10f64.powi(i32::from(prec));
			let lon = (self.0[0] * factor).round() / factor;
			let lat = (self.0[1] * factor).round() / factor;
			json!([lon, lat])
		} else {
			json!(self.0)
		}
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<Coordinates> for geo::Coord {
	fn from(value: Coordinates) -> Self {
		geo::Coord {
			x: value.0[0],
			y: value.0[1],
		}
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
