//! Turns an OpenStreetMap boundary relation into a polygon with area, population and density.
//!
//! The relation is fetched with the full geometry of its member ways. Outer ways are stitched
//! into one ring, inner ways into holes. The area is measured on the outer ring. Meanwhile the
//! statistics source is asked for population and official area. Both halves run concurrently
//! and never fail: missing data shows up as `None` geometry or `None` statistics.

mod members;
mod stats;

pub use members::*;
pub use stats::*;

use crate::{
	overpass::{BoundarySource, BoundarySourceTrait, Element, OverpassSource, query},
	statistics::{SparqlStatisticsSource, StatisticsSource, fetch_population_data},
};
use anyhow::Result;
use geoscope_core::{CancellationToken, config::Config};
use geoscope_geometry::{
	CompositeGeometryTrait, Coordinates, GeoFeature, Geometry, PolygonGeometry,
	math::round_to,
	stitch::{WayStitcher, close_ring},
};
use serde_json::Value;
use std::{collections::BTreeMap, sync::Arc};

/// Coordinates in GeoJSON output are rounded to 7 decimals, about 1 cm.
const PRECISION: Option<u8> = Some(7);

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBoundary {
	pub relation_id: u64,
	/// `None` if the relation could not be fetched, has no outer way with geometry, or if the
	/// stitched and closed outer ring has fewer than 4 vertices. In the last case the member
	/// counts are still filled in and the calculated area is 0.
	pub geometry: Option<PolygonGeometry>,
	pub members: BoundaryMembers,
	pub stats: BoundaryStats,
	pub tags: BTreeMap<String, String>,
}

impl ResolvedBoundary {
	pub fn name(&self) -> Option<&str> {
		self.tags.get("name").map(String::as_str)
	}

	/// Centroid of the outer ring.
	pub fn center(&self) -> Option<Coordinates> {
		self.geometry.as_ref()?.exterior()?.centroid()
	}

	/// The boundary as GeoJSON `Feature` with the statistics as properties.
	pub fn to_feature(&self) -> Value {
		let mut feature = GeoFeature::new(self.geometry.clone().map(Geometry::from));
		feature.set_id(format!("relation/{}", self.relation_id));
		feature.set_property("id", self.relation_id);
		feature.set_property("name", self.name());
		feature.set_property("admin_level", self.tags.get("admin_level").map(String::as_str));
		feature.set_property("area_km2", round_to(self.stats.calculated_area, 2));
		feature.set_property("population", self.stats.population);
		feature.set_property("official_area_km2", self.stats.official_area);
		feature.set_property("density", self.stats.density);
		feature.set_property("members", self.members.counts().to_json());
		feature.set_property("center", self.center().map(|c| c.to_json(PRECISION)));
		feature.to_json(PRECISION)
	}

	pub fn to_stats_json(&self) -> Value {
		self.stats.to_json()
	}
}

#[derive(Debug, Clone)]
pub struct BoundaryResolver {
	boundary_source: BoundarySource,
	statistics_source: StatisticsSource,
	stitcher: WayStitcher,
}

impl BoundaryResolver {
	pub fn new(boundary_source: BoundarySource, statistics_source: StatisticsSource, stitcher: WayStitcher) -> Self {
		Self {
			boundary_source,
			statistics_source,
			stitcher,
		}
	}

	/// Resolver talking to the Overpass and SPARQL endpoints of `config`.
	pub fn from_config(config: &Config) -> Result<Self> {
		let boundary_source = Arc::new(OverpassSource::new(&config.overpass, &config.http)?);
		let statistics_source = Arc::new(SparqlStatisticsSource::new(&config.statistics, &config.http)?);
		Ok(Self::new(boundary_source, statistics_source, WayStitcher::from(&config.stitch)))
	}

	pub async fn resolve_boundary(&self, relation_id: u64, cancel: &CancellationToken) -> ResolvedBoundary {
		let assemble = async {
			let relation = self.fetch_relation(relation_id, cancel).await;
			let (members, tags) = match relation {
				Some(element) => (BoundaryMembers::partition(&element.members), element.tags),
				None => (BoundaryMembers::default(), BTreeMap::new()),
			};
			let geometry = self.assemble_polygon(relation_id, &members);
			let area = geometry
				.as_ref()
				.and_then(PolygonGeometry::exterior)
				.map_or(0.0, |ring| ring.area_km2());
			(members, tags, geometry, area)
		};
		let enrich = fetch_population_data(self.statistics_source.as_ref(), relation_id, cancel);

		let ((members, tags, geometry, area), data) = tokio::join!(assemble, enrich);

		log::debug!(
			"resolved relation {relation_id}: {:?}, area {area:.2} km²",
			members.counts()
		);

		ResolvedBoundary {
			relation_id,
			geometry,
			members,
			stats: BoundaryStats::new(area, data),
			tags,
		}
	}

	async fn fetch_relation(&self, relation_id: u64, cancel: &CancellationToken) -> Option<Element> {
		let statement = query::relation_by_id(relation_id);
		let response = match self.boundary_source.query(&statement, cancel).await {
			Ok(response) => response,
			Err(e) if cancel.is_cancelled() => {
				log::debug!("fetching relation {relation_id} was cancelled: {e:#}");
				return None;
			}
			Err(e) => {
				log::warn!(
					"failed to fetch relation {relation_id} from '{}': {e:#}",
					self.boundary_source.get_name()
				);
				return None;
			}
		};

		let relation = response.find_relation(relation_id).cloned();
		if relation.is_none() {
			log::warn!("relation {relation_id} not found");
		}
		relation
	}

	fn assemble_polygon(&self, relation_id: u64, members: &BoundaryMembers) -> Option<PolygonGeometry> {
		let outer = close_ring(self.stitcher.connect_ways(&members.outer_geometries()));
		if let Err(e) = outer.verify() {
			log::debug!("relation {relation_id} has no usable outer ring: {e}");
			return None;
		}

		let mut polygon = PolygonGeometry::from_exterior(outer);
		for hole in self.stitcher.stitch_rings(&members.inner_geometries()) {
			polygon.push(hole);
		}
		Some(polygon)
	}
}
