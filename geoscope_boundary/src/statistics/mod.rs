//! Population and official area of a boundary, looked up by its OpenStreetMap relation ID.
//!
//! [`fetch_population_data`] never fails: any problem with the source is logged and
//! reported as missing values, so a boundary can always be shown without statistics.

mod sparql;

pub use sparql::*;

use anyhow::Result;
use async_trait::async_trait;
use geoscope_core::CancellationToken;
use std::{fmt::Debug, sync::Arc};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PopulationData {
	pub population: Option<u64>,
	/// Official area in km²
	pub official_area: Option<f64>,
}

/// Type alias for a shared dynamic implementation of the `StatisticsSourceTrait`.
pub type StatisticsSource = Arc<dyn StatisticsSourceTrait>;

#[async_trait]
pub trait StatisticsSourceTrait: Debug + Send + Sync {
	/// Statistics for the relation. A relation without a matching record yields
	/// `PopulationData::default()`, not an error.
	async fn fetch(&self, relation_id: u64, cancel: &CancellationToken) -> Result<PopulationData>;

	fn get_name(&self) -> &str;
}

pub async fn fetch_population_data(
	source: &dyn StatisticsSourceTrait,
	relation_id: u64,
	cancel: &CancellationToken,
) -> PopulationData {
	match source.fetch(relation_id, cancel).await {
		Ok(data) => {
			log::debug!(
				"statistics for relation {relation_id}: population {:?}, area {:?}",
				data.population,
				data.official_area
			);
			data
		}
		Err(e) if cancel.is_cancelled() => {
			log::debug!("statistics fetch for relation {relation_id} was cancelled: {e:#}");
			PopulationData::default()
		}
		Err(e) => {
			log::warn!("failed to fetch statistics from '{}': {e:#}", source.get_name());
			PopulationData::default()
		}
	}
}
