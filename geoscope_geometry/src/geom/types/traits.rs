use serde_json::Value;
use std::fmt::Debug;

/// Common interface of all boundary geometries.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// The GeoJSON `coordinates` member of this geometry.
	fn to_coord_json(&self, precision: Option<u8>) -> Value;
}

/// Geometries that are collections of simpler elements.
/// For example, a polygon is made of rings, and a multilinestring is made of lines.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
