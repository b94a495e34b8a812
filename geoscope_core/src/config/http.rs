use anyhow::{Result, ensure};
use serde::Deserialize;
use std::time::Duration;

/// Upper bound for `max_retries`. With a doubling backoff the last wait is already 2^9 times the base.
pub const MAX_RETRIES_LIMIT: u32 = 10;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct HttpConfig {
	/// How often a request is retried after connect, timeout or 429/5xx failures.
	pub max_retries: u32,

	/// Wait before the first retry in milliseconds; doubled on every further attempt.
	pub retry_backoff_ms: u64,

	/// Value of the `User-Agent` header. Overpass and Wikidata both ask clients to identify themselves.
	pub user_agent: String,
}

impl Default for HttpConfig {
	fn default() -> Self {
		Self {
			max_retries: 3,
			retry_backoff_ms: 1000,
			user_agent: concat!("geoscope/", env!("CARGO_PKG_VERSION")).to_string(),
		}
	}
}

impl HttpConfig {
	pub fn retry_backoff(&self) -> Duration {
		Duration::from_millis(self.retry_backoff_ms)
	}

	pub fn verify(&self) -> Result<()> {
		ensure!(
			self.max_retries <= MAX_RETRIES_LIMIT,
			"http.max_retries must be at most {MAX_RETRIES_LIMIT}, got {}",
			self.max_retries
		);
		Ok(())
	}
}
