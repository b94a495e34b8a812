use super::main::verify_url;
use anyhow::{Result, ensure};
use serde::Deserialize;

pub const DEFAULT_STATISTICS_URL: &str = "https://query.wikidata.org/sparql";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct StatisticsConfig {
	/// SPARQL endpoint that answers population and area queries.
	pub endpoint: String,

	/// Request timeout in seconds.
	pub timeout_seconds: u64,
}

impl Default for StatisticsConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_STATISTICS_URL.to_string(),
			timeout_seconds: 20,
		}
	}
}

impl StatisticsConfig {
	pub fn verify(&self) -> Result<()> {
		ensure!(self.timeout_seconds > 0, "statistics.timeout_seconds must be positive");
		verify_url(&self.endpoint)
	}

	pub fn override_optional_endpoint(&mut self, endpoint: &Option<String>) {
		if let Some(endpoint) = endpoint {
			self.endpoint = endpoint.clone();
		}
	}
}
