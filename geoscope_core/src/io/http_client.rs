//! A small HTTP client for the two query endpoints geoscope talks to.
//!
//! Overpass expects its query as a form-encoded `data` field in a POST body, SPARQL endpoints
//! take the query as a URL parameter. Both are answered with a text body (JSON), so the client
//! only exposes [`HttpClient::post_form`] and [`HttpClient::get_query`] and returns the body as
//! a `String`.
//!
//! Connect, timeout and body errors as well as `429` and `502`/`503`/`504` answers are retried
//! with exponential backoff. Every request can be aborted through a [`CancellationToken`].

use crate::config::HttpConfig;
use anyhow::{Context, Result, bail};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone)]
pub struct HttpClient {
	client: Client,
	max_retries: u32,
	retry_backoff: Duration,
}

fn is_retryable_error(err: &reqwest::Error) -> bool {
	err.is_connect() || err.is_timeout() || err.is_body()
}

fn is_retryable_status(status: StatusCode) -> bool {
	matches!(
		status,
		StatusCode::TOO_MANY_REQUESTS
			| StatusCode::BAD_GATEWAY
			| StatusCode::SERVICE_UNAVAILABLE
			| StatusCode::GATEWAY_TIMEOUT
	)
}

/// Wait before retry number `attempt` (starting at 1): `base`, then doubled for every further attempt.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
	base.saturating_mul(2u32.saturating_pow(attempt.saturating_sub(1)))
}

impl HttpClient {
	pub fn new(config: &HttpConfig, timeout: Duration) -> Result<HttpClient> {
		config.verify()?;
		let client = Client::builder()
			.timeout(timeout)
			.tcp_keepalive(Duration::from_secs(600))
			.user_agent(config.user_agent.clone())
			.use_rustls_tls()
			.build()
			.context("building HTTP client")?;

		Ok(HttpClient {
			client,
			max_retries: config.max_retries,
			retry_backoff: config.retry_backoff(),
		})
	}

	/// POSTs `fields` form-encoded to `url` and returns the response body.
	pub async fn post_form(&self, url: &Url, fields: &[(&str, &str)], cancel: &CancellationToken) -> Result<String> {
		self
			.run(url, cancel, || self.client.post(url.clone()).form(fields))
			.await
			.with_context(|| format!("POST to '{url}'"))
	}

	/// GETs `url` with `query` appended as URL parameters and returns the response body.
	pub async fn get_query(
		&self,
		url: &Url,
		query: &[(&str, &str)],
		accept: &str,
		cancel: &CancellationToken,
	) -> Result<String> {
		self
			.run(url, cancel, || {
				self.client.get(url.clone()).query(query).header("accept", accept)
			})
			.await
			.with_context(|| format!("GET from '{url}'"))
	}

	async fn run<F>(&self, url: &Url, cancel: &CancellationToken, build: F) -> Result<String>
	where
		F: Fn() -> RequestBuilder,
	{
		tokio::select! {
			biased;
			() = cancel.cancelled() => bail!("request was cancelled"),
			result = self.send_with_retries(url, build) => result,
		}
	}

	async fn send_with_retries<F>(&self, url: &Url, build: F) -> Result<String>
	where
		F: Fn() -> RequestBuilder,
	{
		for attempt in 0..=self.max_retries {
			if attempt > 0 {
				let backoff = backoff_delay(self.retry_backoff, attempt);
				log::warn!(
					"retry attempt {attempt}/{} for '{url}', waiting {backoff:?}",
					self.max_retries
				);
				sleep(backoff).await;
			}

			let response = match build().send().await {
				Ok(r) => r,
				Err(e) if is_retryable_error(&e) && attempt < self.max_retries => {
					log::warn!("retryable error: {e}");
					continue;
				}
				Err(e) => return Err(e.into()),
			};

			let status = response.status();
			if is_retryable_status(status) && attempt < self.max_retries {
				log::warn!("retryable HTTP status {status}");
				continue;
			}
			if !status.is_success() {
				bail!("HTTP request failed with status {status}");
			}

			match response.text().await {
				Ok(body) => return Ok(body),
				Err(e) if is_retryable_error(&e) && attempt < self.max_retries => {
					log::warn!("retryable error reading response body: {e}");
				}
				Err(e) => return Err(e.into()),
			}
		}

		bail!("request failed after {} retries", self.max_retries)
	}
}
