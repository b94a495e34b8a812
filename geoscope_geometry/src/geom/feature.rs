use super::Geometry;
use serde_json::{Map, Value, json};

/// A GeoJSON feature: optional geometry plus free-form properties.
///
/// The geometry is optional because a boundary without usable ways is still
/// reported, with `"geometry": null`.
#[derive(Clone, Debug, Default)]
pub struct GeoFeature {
	pub id: Option<String>,
	pub geometry: Option<Geometry>,
	pub properties: Map<String, Value>,
}

impl GeoFeature {
	pub fn new(geometry: Option<Geometry>) -> Self {
		Self {
			id: None,
			geometry,
			properties: Map::new(),
		}
	}

	pub fn set_id(&mut self, id: impl Into<String>) {
		self.id = Some(id.into());
	}

	pub fn set_property<T>(&mut self, key: &str, value: T)
	where
		Value: From<T>,
	{
		self.properties.insert(key.to_string(), Value::from(value));
	}

	pub fn to_json(&self, precision: Option<u8>) -> Value {
		let mut feature = json!({
			"type": "Feature",
			"properties": self.properties,
			"geometry": self.geometry.as_ref().map(|g| g.to_json(precision)),
		});
		if let Some(id) = &self.id {
			feature["id"] = Value::from(id.as_str());
		}
		feature
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{LineStringGeometry, MultiLineStringGeometry};
	use pretty_assertions::assert_eq;

	#[test]
	fn feature_with_geometry_and_properties() {
		let mut feature = GeoFeature::new(Some(Geometry::from(MultiLineStringGeometry(vec![
			LineStringGeometry::from(&[[0, 0], [1, 1]]),
		]))));
		feature.set_id("relation/1234");
		feature.set_property("name", "Ba Đình");
		feature.set_property("population", 221893u64);
		feature.set_property("density", Option::<u64>::None);

		assert_eq!(
			feature.to_json(None),
			json!({
				"type": "Feature",
				"id": "relation/1234",
				"properties": { "name": "Ba Đình", "population": 221893, "density": null },
				"geometry": { "type": "MultiLineString", "coordinates": [[[0.0, 0.0], [1.0, 1.0]]] }
			})
		);
	}

	#[test]
	fn feature_without_geometry() {
		let feature = GeoFeature::new(None);
		assert_eq!(
			feature.to_json(None),
			json!({ "type": "Feature", "properties": {}, "geometry": null })
		);
	}
}
