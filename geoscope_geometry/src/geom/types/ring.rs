use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, LineStringGeometry};
use crate::math::calculate_polygon_area;
use anyhow::{Result, ensure};
use geo::Centroid;
use serde_json::Value;
use std::fmt::Debug;

/// A closed ring: the first and last vertex are identical.
/// This is the building block of polygons and the unit the area is measured on.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Center of mass of the enclosed area, `None` for degenerate rings.
	pub fn centroid(&self) -> Option<Coordinates> {
		if self.0.len() < 3 {
			return None;
		}
		let exterior = geo::LineString::from(self.0.iter().map(|c| geo::Coord::from(*c)).collect::<Vec<_>>());
		geo::Polygon::new(exterior, vec![])
			.centroid()
			.map(|point| Coordinates::new(point.x(), point.y()))
	}

	pub fn is_closed(&self) -> bool {
		self.0.len() > 1 && self.0.first() == self.0.last()
	}

	/// Spherical area in km².
	pub fn area_km2(&self) -> f64 {
		calculate_polygon_area(&self.0)
	}

	/// A valid ring has at least 4 coordinates (3 unique points plus the closing point)
	/// and is closed.
	pub fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points, got {}", self.0.len());
		ensure!(self.is_closed(), "Ring must be closed");
		Ok(())
	}
}

impl GeometryTrait for RingGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::Array(self.0.iter().map(|c| c.to_json(precision)).collect())
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);

impl From<RingGeometry> for LineStringGeometry {
	fn from(ring: RingGeometry) -> Self {
		LineStringGeometry(ring.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	fn square() -> RingGeometry {
		RingGeometry::from(&[[0.0, 0.0], [0.01, 0.0], [0.01, 0.01], [0.0, 0.01], [0.0, 0.0]])
	}

	#[test]
	fn area_in_square_kilometers() {
		assert_relative_eq!(square().area_km2(), 1.2364, epsilon = 0.001);
		assert_eq!(RingGeometry::new().area_km2(), 0.0);
	}

	#[test]
	fn verify_valid() {
		assert!(square().verify().is_ok());
	}

	#[test]
	fn verify_too_few_points() {
		assert!(RingGeometry::from(&[[0, 0], [1, 1], [0, 0]]).verify().is_err());
	}

	#[test]
	fn verify_not_closed() {
		assert!(RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 1]]).verify().is_err());
	}

	#[test]
	fn centroid_of_square() {
		let c = square().centroid().unwrap();
		assert_relative_eq!(c.lon(), 0.005, epsilon = 1e-9);
		assert_relative_eq!(c.lat(), 0.005, epsilon = 1e-9);
		assert!(RingGeometry::from(&[[0, 0], [1, 1]]).centroid().is_none());
	}
}
