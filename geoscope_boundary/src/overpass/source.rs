use super::{OverpassResponse, query::with_settings};
use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use geoscope_core::{
	CancellationToken,
	config::{HttpConfig, OverpassConfig},
	io::HttpClient,
};
use reqwest::Url;
use std::{fmt::Debug, sync::Arc, time::Duration};

/// Type alias for a shared dynamic implementation of the `BoundarySourceTrait`.
pub type BoundarySource = Arc<dyn BoundarySourceTrait>;

/// Something that answers Overpass QL statements.
///
/// Implemented over HTTP by [`OverpassSource`] and by fixtures in tests.
#[async_trait]
pub trait BoundarySourceTrait: Debug + Send + Sync {
	/// Runs one statement, e.g. `relation(1903516);out geom;`, and returns the parsed answer.
	async fn query(&self, statement: &str, cancel: &CancellationToken) -> Result<OverpassResponse>;

	fn get_name(&self) -> &str;
}

/// Overpass API over HTTP with a list of interchangeable endpoints.
///
/// The statement is sent as form field `data`. If an endpoint fails, the next one is tried.
#[derive(Debug)]
pub struct OverpassSource {
	client: HttpClient,
	endpoints: Vec<Url>,
	timeout_seconds: u64,
	name: String,
}

impl OverpassSource {
	pub fn new(config: &OverpassConfig, http: &HttpConfig) -> Result<OverpassSource> {
		config.verify()?;

		let endpoints = config
			.endpoints
			.iter()
			.map(|e| Url::parse(e).with_context(|| format!("parsing Overpass endpoint '{e}'")))
			.collect::<Result<Vec<Url>>>()?;

		// give the server a moment to report its own timeout before the client gives up
		let client = HttpClient::new(http, Duration::from_secs(config.timeout_seconds + 5))?;

		Ok(OverpassSource {
			client,
			name: config.endpoints.join(", "),
			endpoints,
			timeout_seconds: config.timeout_seconds,
		})
	}

	async fn query_endpoint(&self, endpoint: &Url, data: &str, cancel: &CancellationToken) -> Result<OverpassResponse> {
		let body = self.client.post_form(endpoint, &[("data", data)], cancel).await?;
		let response = OverpassResponse::from_json(&body)?;

		if let Some(remark) = &response.remark {
			if response.is_empty() {
				bail!("Overpass answered without elements: {remark}");
			}
			log::warn!("Overpass endpoint '{endpoint}' remarked: {remark}");
		}
		Ok(response)
	}
}

#[async_trait]
impl BoundarySourceTrait for OverpassSource {
	async fn query(&self, statement: &str, cancel: &CancellationToken) -> Result<OverpassResponse> {
		let data = with_settings(statement, self.timeout_seconds);
		log::trace!("Overpass query: {data}");

		let mut last_error = None;
		for endpoint in &self.endpoints {
			if cancel.is_cancelled() {
				bail!("request was cancelled");
			}
			match self.query_endpoint(endpoint, &data, cancel).await {
				Ok(response) => {
					log::debug!("Overpass endpoint '{endpoint}' returned {} elements", response.elements.len());
					return Ok(response);
				}
				Err(e) => {
					log::warn!("Overpass endpoint '{endpoint}' failed: {e:#}");
					last_error = Some(e);
				}
			}
		}

		Err(last_error.unwrap_or_else(|| anyhow!("no Overpass endpoint configured")))
			.with_context(|| format!("running Overpass query '{statement}'"))
	}

	fn get_name(&self) -> &str {
		&self.name
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{Form, Router, extract::State, http::StatusCode, routing::post};
	use pretty_assertions::assert_eq;
	use std::{
		collections::HashMap,
		sync::atomic::{AtomicUsize, Ordering},
	};

	const ANSWER: &str = r#"{"elements":[{"type":"way","id":5,"geometry":[{"lat":1.0,"lon":2.0},{"lat":3.0,"lon":4.0}]}]}"#;

	async fn spawn_server(router: Router) -> String {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
		let addr = listener.local_addr().unwrap();
		tokio::spawn(async move {
			axum::serve(listener, router).await.unwrap();
		});
		format!("http://{addr}")
	}

	fn source(endpoints: Vec<String>) -> OverpassSource {
		let config = OverpassConfig {
			endpoints,
			timeout_seconds: 3,
		};
		let http = HttpConfig {
			max_retries: 0,
			..HttpConfig::default()
		};
		OverpassSource::new(&config, &http).unwrap()
	}

	#[tokio::test]
	async fn sends_statement_with_settings_header() {
		let router = Router::new().route(
			"/api/interpreter",
			post(|Form(fields): Form<HashMap<String, String>>| async move {
				assert_eq!(fields["data"], "[out:json][timeout:3];relation(7);out geom;");
				ANSWER
			}),
		);
		let base = spawn_server(router).await;
		let source = source(vec![format!("{base}/api/interpreter")]);

		let response = source.query("relation(7);out geom;", &CancellationToken::new()).await.unwrap();
		assert_eq!(response.elements.len(), 1);
		assert_eq!(source.get_name(), format!("{base}/api/interpreter"));
	}

	#[tokio::test]
	async fn falls_back_to_next_endpoint() {
		let calls = Arc::new(AtomicUsize::new(0));
		let router = Router::new()
			.route(
				"/broken",
				post(|State(calls): State<Arc<AtomicUsize>>| async move {
					calls.fetch_add(1, Ordering::SeqCst);
					(StatusCode::INTERNAL_SERVER_ERROR, "boom")
				}),
			)
			.route(
				"/timeout",
				post(|| async { r#"{"elements":[],"remark":"runtime error: Query timed out"}"# }),
			)
			.route("/working", post(|| async { ANSWER }))
			.with_state(calls.clone());
		let base = spawn_server(router).await;
		let source = source(vec![
			format!("{base}/broken"),
			format!("{base}/timeout"),
			format!("{base}/working"),
		]);

		let response = source.query("way(5);out geom;", &CancellationToken::new()).await.unwrap();
		assert_eq!(response.elements[0].id, 5);
		assert_eq!(calls.load(Ordering::SeqCst), 1);
	}

	#[tokio::test]
	async fn reports_last_error_when_all_endpoints_fail() {
		let router = Router::new().route("/broken", post(|| async { (StatusCode::BAD_REQUEST, "syntax error") }));
		let base = spawn_server(router).await;
		let source = source(vec![format!("{base}/broken")]);

		let err = source
			.query("relation(7);out geom;", &CancellationToken::new())
			.await
			.unwrap_err();
		let message = format!("{err:#}");
		assert!(message.contains("running Overpass query 'relation(7);out geom;'"), "{message}");
		assert!(message.contains("400"), "{message}");
	}

	#[tokio::test]
	async fn cancelled_before_start() {
		let source = source(vec!["http://127.0.0.1:9/api/interpreter".to_string()]);
		let cancel = CancellationToken::new();
		cancel.cancel();
		let err = source.query("relation(7);out geom;", &cancel).await.unwrap_err();
		assert!(format!("{err:#}").contains("cancelled"));
	}

	#[test]
	fn rejects_invalid_config() {
		let config = OverpassConfig {
			endpoints: vec![],
			timeout_seconds: 3,
		};
		assert!(OverpassSource::new(&config, &HttpConfig::default()).is_err());
	}
}
