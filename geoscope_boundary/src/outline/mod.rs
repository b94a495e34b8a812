//! Finds the best available outline for a Wikidata entity.
//!
//! Three Overpass statements are tried in order and the first one that returns any element
//! decides the result:
//!
//! 1. administrative boundary relations tagged with the entity
//! 2. any relation tagged with the entity
//! 3. ways tagged with the entity
//!
//! Relations become polygons when every outer way is a closed ring on its own. Otherwise the
//! raw ways are returned as line strings, so rivers, roads and broken boundaries can still be
//! drawn. [`OutlineSource`] records which statement
//! produced the outline, or why there is none.

use crate::overpass::{BoundarySource, BoundarySourceTrait, Member, OverpassResponse, OverpassSource, query};
use anyhow::Result;
use geoscope_core::{CancellationToken, config::Config};
use geoscope_geometry::{
	CompositeGeometryTrait, Geometry, LineStringGeometry, MultiLineStringGeometry, MultiPolygonGeometry,
	PolygonGeometry, RingGeometry, stitch::close_ring,
};
use serde::Serialize;
use serde_json::{Value, json};
use std::{fmt, sync::Arc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutlineSource {
	/// found by the administrative boundary relation statement
	AdminRelation,
	/// found by the generic relation statement
	Relation,
	/// found by the way statement
	Way,
	/// all statements returned nothing
	EmptyElements,
	/// elements were found but none had usable geometry
	NoGeometry,
	/// all statements failed
	FetchError,
	InvalidIdentifier,
	Cancelled,
}

impl OutlineSource {
	pub fn as_str(&self) -> &'static str {
		match self {
			OutlineSource::AdminRelation => "admin-relation",
			OutlineSource::Relation => "relation",
			OutlineSource::Way => "way",
			OutlineSource::EmptyElements => "empty-elements",
			OutlineSource::NoGeometry => "no-geometry",
			OutlineSource::FetchError => "fetch-error",
			OutlineSource::InvalidIdentifier => "invalid-identifier",
			OutlineSource::Cancelled => "cancelled",
		}
	}
}

impl fmt::Display for OutlineSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
	pub geojson: Option<Geometry>,
	pub source: OutlineSource,
}

impl Outline {
	fn empty(source: OutlineSource) -> Self {
		Outline { geojson: None, source }
	}

	pub fn to_json(&self) -> Value {
		json!({
			"source": self.source.as_str(),
			"geometry": self.geojson.as_ref().map(|g| g.to_json(Some(7))),
		})
	}
}

/// Accepts `Q1858` and `q1858`, returns the canonical `Q1858`.
pub fn normalize_identifier(identifier: &str) -> Option<String> {
	let identifier = identifier.trim();
	let digits = identifier
		.strip_prefix('Q')
		.or_else(|| identifier.strip_prefix('q'))?;
	if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	Some(format!("Q{digits}"))
}

#[derive(Debug, Clone)]
pub struct OutlineResolver {
	source: BoundarySource,
}

impl OutlineResolver {
	pub fn new(source: BoundarySource) -> Self {
		Self { source }
	}

	pub fn from_config(config: &Config) -> Result<Self> {
		let source = Arc::new(OverpassSource::new(&config.overpass, &config.http)?);
		Ok(Self::new(source))
	}

	pub async fn fetch_outline_by_identifier(&self, identifier: &str, cancel: &CancellationToken) -> Outline {
		let Some(qid) = normalize_identifier(identifier) else {
			log::warn!("'{identifier}' is not a Wikidata identifier");
			return Outline::empty(OutlineSource::InvalidIdentifier);
		};

		let attempts = [
			(OutlineSource::AdminRelation, query::admin_relation_by_wikidata(&qid)),
			(OutlineSource::Relation, query::relation_by_wikidata(&qid)),
			(OutlineSource::Way, query::way_by_wikidata(&qid)),
		];

		let mut failures = 0;
		for (source, statement) in &attempts {
			if cancel.is_cancelled() {
				return Outline::empty(OutlineSource::Cancelled);
			}

			match self.source.query(statement, cancel).await {
				Ok(response) if response.is_empty() => {
					log::debug!("no elements for {qid} from {source} statement");
				}
				Ok(response) => {
					return match Self::derive_geometry(&response) {
						Some(geometry) => {
							log::debug!("outline of {qid}: {} from {source} statement", geometry.get_type());
							Outline {
								geojson: Some(geometry),
								source: *source,
							}
						}
						None => {
							log::debug!("elements for {qid} from {source} statement have no usable geometry");
							Outline::empty(OutlineSource::NoGeometry)
						}
					};
				}
				Err(e) if cancel.is_cancelled() => {
					log::debug!("outline query for {qid} was cancelled: {e:#}");
					return Outline::empty(OutlineSource::Cancelled);
				}
				Err(e) => {
					log::warn!("outline query for {qid} failed: {e:#}");
					failures += 1;
				}
			}
		}

		if failures == attempts.len() {
			Outline::empty(OutlineSource::FetchError)
		} else {
			Outline::empty(OutlineSource::EmptyElements)
		}
	}

	/// The first relation wins over ways. Ways are only looked at if the answer has no relation.
	fn derive_geometry(response: &OverpassResponse) -> Option<Geometry> {
		if let Some(relation) = response.relations().next() {
			let outer: Vec<LineStringGeometry> = relation
				.members
				.iter()
				.filter(|m| m.is_outer_way())
				.map(Member::line)
				.filter(|line| line.len() >= 2)
				.collect();
			return Self::outline_from_outer_ways(outer);
		}

		let mut ways: Vec<LineStringGeometry> = response
			.ways()
			.map(|way| way.line())
			.filter(|line| line.len() >= 2)
			.collect();
		match ways.len() {
			0 => None,
			1 => ways.pop().map(Geometry::from),
			_ => Some(Geometry::from(MultiLineStringGeometry(ways))),
		}
	}

	fn outline_from_outer_ways(outer: Vec<LineStringGeometry>) -> Option<Geometry> {
		if outer.is_empty() {
			return None;
		}

		if outer.iter().all(|way| way.is_closed() && way.len() >= 4) {
			return Some(polygons(outer.into_iter().map(close_ring).collect()));
		}

		log::debug!("{} outer ways do not form closed rings, returning them as lines", outer.len());
		Some(Geometry::from(MultiLineStringGeometry(outer)))
	}
}

fn polygons(mut rings: Vec<RingGeometry>) -> Geometry {
	if rings.len() == 1 {
		if let Some(ring) = rings.pop() {
			return Geometry::from(PolygonGeometry::from_exterior(ring));
		}
	}
	Geometry::from(MultiPolygonGeometry(
		rings.into_iter().map(PolygonGeometry::from_exterior).collect(),
	))
}
