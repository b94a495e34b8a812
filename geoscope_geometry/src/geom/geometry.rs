use super::*;
use serde_json::{Value, json};
use std::fmt::Debug;

/// The geometries a reconstructed boundary can end up as.
///
/// Closed rings become polygons, ways that do not close stay line strings.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	pub fn get_type(&self) -> &'static str {
		match self {
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	/// The GeoJSON geometry object, `{"type": ..., "coordinates": ...}`.
	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let coordinates = match self {
			Geometry::LineString(g) => g.to_coord_json(precision),
			Geometry::Polygon(g) => g.to_coord_json(precision),
			Geometry::MultiLineString(g) => g.to_coord_json(precision),
			Geometry::MultiPolygon(g) => g.to_coord_json(precision),
		};
		json!({ "type": self.get_type(), "coordinates": coordinates })
	}
}

impl From<PolygonGeometry> for Geometry {
	fn from(value: PolygonGeometry) -> Self {
		Geometry::Polygon(value)
	}
}

impl From<MultiPolygonGeometry> for Geometry {
	fn from(value: MultiPolygonGeometry) -> Self {
		Geometry::MultiPolygon(value)
	}
}

impl From<LineStringGeometry> for Geometry {
	fn from(value: LineStringGeometry) -> Self {
		Geometry::LineString(value)
	}
}

impl From<MultiLineStringGeometry> for Geometry {
	fn from(value: MultiLineStringGeometry) -> Self {
		Geometry::MultiLineString(value)
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.get_type()).field(inner).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn polygon_to_json() {
		let geometry = Geometry::from(PolygonGeometry::from_exterior(RingGeometry::from(&[
			[0, 0],
			[1, 0],
			[1, 1],
			[0, 0],
		])));
		assert_eq!(
			geometry.to_json(None),
			json!({
				"type": "Polygon",
				"coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
			})
		);
	}

	#[test]
	fn multi_line_string_to_json() {
		let geometry = Geometry::from(MultiLineStringGeometry(vec![LineStringGeometry::from(&[[0, 0], [1, 1]])]));
		assert_eq!(geometry.get_type(), "MultiLineString");
		assert_eq!(
			geometry.to_json(Some(1)),
			json!({ "type": "MultiLineString", "coordinates": [[[0.0, 0.0], [1.0, 1.0]]] })
		);
	}

	#[test]
	fn debug_names_the_type() {
		let geometry = Geometry::from(LineStringGeometry::from(&[[1, 2], [3, 4]]));
		assert_eq!(format!("{geometry:?}"), "LineString([[1.0, 2.0], [3.0, 4.0]])");
	}
}
