use super::*;
use serde_json::Value;
use std::fmt::Debug;

/// An exterior ring followed by zero or more holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	pub fn from_exterior(exterior: RingGeometry) -> Self {
		Self(vec![exterior])
	}

	pub fn exterior(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	pub fn interiors(&self) -> &[RingGeometry] {
		self.0.get(1..).unwrap_or(&[])
	}
}

impl GeometryTrait for PolygonGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::Array(self.0.iter().map(|ring| ring.to_coord_json(precision)).collect())
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);
