use super::main::verify_url;
use anyhow::{Result, ensure};
use serde::Deserialize;

pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de/api/interpreter";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct OverpassConfig {
	/// Overpass interpreter endpoints, tried in order until one answers.
	pub endpoints: Vec<String>,

	/// Request timeout in seconds.
	pub timeout_seconds: u64,
}

impl Default for OverpassConfig {
	fn default() -> Self {
		Self {
			endpoints: vec![DEFAULT_OVERPASS_URL.to_string()],
			timeout_seconds: 25,
		}
	}
}

impl OverpassConfig {
	pub fn verify(&self) -> Result<()> {
		ensure!(!self.endpoints.is_empty(), "overpass.endpoints must not be empty");
		ensure!(self.timeout_seconds > 0, "overpass.timeout_seconds must be positive");
		for endpoint in &self.endpoints {
			verify_url(endpoint)?;
		}
		Ok(())
	}

	pub fn override_optional_endpoint(&mut self, endpoint: &Option<String>) {
		if let Some(endpoint) = endpoint {
			self.endpoints = vec![endpoint.clone()];
		}
	}
}
