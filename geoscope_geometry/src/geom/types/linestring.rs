use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use serde_json::Value;
use std::fmt::Debug;

/// An ordered sequence of vertices, e.g. one way of a boundary relation.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
	/// True if there are vertices and the first one equals the last one exactly.
	pub fn is_closed(&self) -> bool {
		match (self.0.first(), self.0.last()) {
			(Some(first), Some(last)) => self.0.len() > 1 && first == last,
			_ => false,
		}
	}
}

impl GeometryTrait for LineStringGeometry {
	fn to_coord_json(&self, precision: Option<u8>) -> Value {
		Value::Array(self.0.iter().map(|c| c.to_json(precision)).collect())
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
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

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);
