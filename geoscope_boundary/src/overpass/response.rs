//! Serde model of the Overpass JSON answer to `out geom;` queries.
//!
//! Only the parts needed to rebuild boundaries are modelled. `out geom;` inlines the
//! geometry of every way, both for top-level ways and for ways that are members of a
//! relation. Positions outside a query bbox are delivered as `null` and skipped here.

use anyhow::{Context, Result};
use geoscope_geometry::{Coordinates, LineStringGeometry};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct OverpassResponse {
	#[serde(default)]
	pub elements: Vec<Element>,

	/// Set by Overpass on runtime errors like timeouts, which still answer with `200 OK`.
	#[serde(default)]
	pub remark: Option<String>,
}

impl OverpassResponse {
	pub fn from_json(text: &str) -> Result<Self> {
		serde_json::from_str(text).context("parsing Overpass response")
	}

	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	pub fn relations(&self) -> impl Iterator<Item = &Element> {
		self.elements.iter().filter(|e| e.is_relation())
	}

	pub fn ways(&self) -> impl Iterator<Item = &Element> {
		self.elements.iter().filter(|e| e.is_way())
	}

	/// The relation with `id`. Other relations in the answer are never substituted.
	pub fn find_relation(&self, id: u64) -> Option<&Element> {
		self.relations().find(|e| e.id == id)
	}
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct LatLon {
	pub lat: f64,
	pub lon: f64,
}

impl From<&LatLon> for Coordinates {
	fn from(value: &LatLon) -> Self {
		Coordinates::new(value.lon, value.lat)
	}
}

fn to_line(geometry: &[Option<LatLon>]) -> LineStringGeometry {
	LineStringGeometry(geometry.iter().flatten().map(Coordinates::from).collect())
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Element {
	#[serde(rename = "type")]
	pub kind: String,
	pub id: u64,

	#[serde(default)]
	pub members: Vec<Member>,

	#[serde(default)]
	pub geometry: Vec<Option<LatLon>>,

	#[serde(default)]
	pub tags: BTreeMap<String, String>,

	#[serde(default)]
	pub lat: Option<f64>,
	#[serde(default)]
	pub lon: Option<f64>,
}

impl Element {
	pub fn is_relation(&self) -> bool {
		self.kind == "relation"
	}

	pub fn is_way(&self) -> bool {
		self.kind == "way"
	}

	pub fn tag(&self, key: &str) -> Option<&str> {
		self.tags.get(key).map(String::as_str)
	}

	/// Geometry of a way element, empty for other element types.
	pub fn line(&self) -> LineStringGeometry {
		to_line(&self.geometry)
	}
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Member {
	#[serde(rename = "type")]
	pub kind: String,
	#[serde(rename = "ref")]
	pub reference: u64,

	#[serde(default)]
	pub role: String,

	#[serde(default)]
	pub geometry: Vec<Option<LatLon>>,

	#[serde(default)]
	pub lat: Option<f64>,
	#[serde(default)]
	pub lon: Option<f64>,
}

impl Member {
	pub fn is_way(&self) -> bool {
		self.kind == "way"
	}

	pub fn is_node(&self) -> bool {
		self.kind == "node"
	}

	pub fn is_relation(&self) -> bool {
		self.kind == "relation"
	}

	/// Outer boundary ways are tagged `outer`, but older relations often leave the role empty.
	pub fn is_outer_way(&self) -> bool {
		self.is_way() && (self.role == "outer" || self.role.is_empty())
	}

	pub fn is_inner_way(&self) -> bool {
		self.is_way() && self.role == "inner"
	}

	pub fn line(&self) -> LineStringGeometry {
		to_line(&self.geometry)
	}

	pub fn position(&self) -> Option<Coordinates> {
		Some(Coordinates::new(self.lon?, self.lat?))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	const RELATION_JSON: &str = r#"{
		"version": 0.6,
		"generator": "Overpass API",
		"elements": [{
			"type": "relation",
			"id": 1903516,
			"bounds": { "minlat": 21.0, "minlon": 105.8, "maxlat": 21.1, "maxlon": 105.9 },
			"members": [
				{ "type": "way", "ref": 11, "role": "outer", "geometry": [{ "lat": 21.0, "lon": 105.8 }, { "lat": 21.0, "lon": 105.9 }] },
				{ "type": "way", "ref": 12, "role": "", "geometry": [{ "lat": 21.0, "lon": 105.9 }, null, { "lat": 21.1, "lon": 105.9 }] },
				{ "type": "way", "ref": 13, "role": "inner", "geometry": [] },
				{ "type": "node", "ref": 21, "role": "admin_centre", "lat": 21.03, "lon": 105.85 },
				{ "type": "relation", "ref": 31, "role": "subarea" }
			],
			"tags": { "admin_level": "6", "boundary": "administrative", "name": "Ba Đình" }
		}]
	}"#;

	#[test]
	fn parses_relation_with_members() {
		let response = OverpassResponse::from_json(RELATION_JSON).unwrap();
		assert_eq!(response.elements.len(), 1);
		assert_eq!(response.remark, None);

		let relation = response.find_relation(1903516).unwrap();
		assert!(relation.is_relation());
		assert_eq!(relation.tag("name"), Some("Ba Đình"));
		assert_eq!(relation.tag("wikidata"), None);
		assert_eq!(relation.members.len(), 5);

		let members = &relation.members;
		assert!(members[0].is_outer_way());
		assert!(members[1].is_outer_way());
		assert!(members[2].is_inner_way());
		assert!(members[3].is_node());
		assert!(members[4].is_relation());
		assert_eq!(members[4].role, "subarea");
	}

	#[test]
	fn null_positions_are_skipped() {
		let response = OverpassResponse::from_json(RELATION_JSON).unwrap();
		let line = response.elements[0].members[1].line();
		assert_eq!(line, LineStringGeometry::from(&[[105.9, 21.0], [105.9, 21.1]]));
	}

	#[test]
	fn node_member_position_is_lon_lat() {
		let response = OverpassResponse::from_json(RELATION_JSON).unwrap();
		let node = &response.elements[0].members[3];
		assert_eq!(node.position(), Some(Coordinates::new(105.85, 21.03)));
		assert_eq!(response.elements[0].members[0].position(), None);
	}

	#[test]
	fn find_relation_matches_the_id_only() {
		let response = OverpassResponse::from_json(RELATION_JSON).unwrap();
		assert_eq!(response.find_relation(1903516).map(|e| e.id), Some(1903516));
		assert!(response.find_relation(42).is_none());
		assert!(OverpassResponse::default().find_relation(42).is_none());
	}

	#[test]
	fn parses_ways_and_remark() {
		let response = OverpassResponse::from_json(
			r#"{
				"elements": [
					{ "type": "way", "id": 5, "nodes": [1, 2], "geometry": [{ "lat": 1.0, "lon": 2.0 }, { "lat": 3.0, "lon": 4.0 }], "tags": { "wikidata": "Q1" } }
				],
				"remark": "runtime error: Query timed out"
			}"#,
		)
		.unwrap();
		assert_eq!(response.ways().count(), 1);
		assert_eq!(response.relations().count(), 0);
		assert_eq!(response.elements[0].line(), LineStringGeometry::from(&[[2.0, 1.0], [4.0, 3.0]]));
		assert!(response.remark.unwrap().contains("timed out"));
	}

	#[test]
	fn missing_elements_is_empty() {
		assert!(OverpassResponse::from_json("{}").unwrap().is_empty());
		assert!(OverpassResponse::from_json("not json").is_err());
	}
}
