use super::{PopulationData, StatisticsSourceTrait};
use anyhow::{Context, Result};
use async_trait::async_trait;
use geoscope_core::{
	CancellationToken,
	config::{HttpConfig, StatisticsConfig},
	io::HttpClient,
};
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const ACCEPT: &str = "application/sparql-results+json";

/// Looks up population (`P1082`) and area (`P2046`) of the Wikidata item whose
/// OpenStreetMap relation ID (`P402`) matches.
pub fn build_query(relation_id: u64) -> String {
	format!(
		r#"SELECT ?item ?population ?area WHERE {{
  ?item wdt:P402 "{relation_id}" .
  OPTIONAL {{ ?item wdt:P1082 ?population . }}
  OPTIONAL {{ ?item wdt:P2046 ?area . }}
}}
LIMIT 1"#
	)
}

#[derive(Debug, Default, Deserialize)]
struct SparqlResults {
	#[serde(default)]
	results: SparqlBindings,
}

#[derive(Debug, Default, Deserialize)]
struct SparqlBindings {
	#[serde(default)]
	bindings: Vec<serde_json::Map<String, Value>>,
}

fn binding_value<'a>(binding: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a str> {
	binding.get(key)?.get("value")?.as_str()
}

/// Wikidata quantities carry an explicit sign, e.g. `+221893`. Decimal notation is rounded.
fn parse_population(value: &str) -> Option<u64> {
	let value = value.trim();
	let value = value.strip_prefix('+').unwrap_or(value);
	if let Ok(population) = value.parse::<u64>() {
		return Some(population);
	}
	let population = value.parse::<f64>().ok()?;
	(population.is_finite() && population >= 0.0).then(|| population.round() as u64)
}

fn parse_area(value: &str) -> Option<f64> {
	let value = value.trim();
	let area = value.strip_prefix('+').unwrap_or(value).parse::<f64>().ok()?;
	(area.is_finite() && area >= 0.0).then_some(area)
}

/// Extracts population and official area from a SPARQL JSON result document.
///
/// Only the first binding is used. Missing or garbled values become `None` individually;
/// only a document that is not JSON at all is an error.
pub fn parse_sparql_results(text: &str) -> Result<PopulationData> {
	let results: SparqlResults = serde_json::from_str(text).context("parsing SPARQL results")?;

	let Some(binding) = results.results.bindings.first() else {
		return Ok(PopulationData::default());
	};

	Ok(PopulationData {
		population: binding_value(binding, "population").and_then(parse_population),
		official_area: binding_value(binding, "area").and_then(parse_area),
	})
}

/// Statistics from a SPARQL endpoint such as the Wikidata query service.
#[derive(Debug)]
pub struct SparqlStatisticsSource {
	client: HttpClient,
	endpoint: Url,
}

impl SparqlStatisticsSource {
	pub fn new(config: &StatisticsConfig, http: &HttpConfig) -> Result<SparqlStatisticsSource> {
		config.verify()?;
		let endpoint =
			Url::parse(&config.endpoint).with_context(|| format!("parsing statistics endpoint '{}'", config.endpoint))?;
		let client = HttpClient::new(http, Duration::from_secs(config.timeout_seconds))?;
		Ok(SparqlStatisticsSource { client, endpoint })
	}
}

#[async_trait]
impl StatisticsSourceTrait for SparqlStatisticsSource {
	async fn fetch(&self, relation_id: u64, cancel: &CancellationToken) -> Result<PopulationData> {
		let query = build_query(relation_id);
		log::trace!("SPARQL query: {query}");

		let body = self
			.client
			.get_query(&self.endpoint, &[("query", query.as_str()), ("format", "json")], ACCEPT, cancel)
			.await
			.with_context(|| format!("fetching statistics for relation {relation_id}"))?;

		parse_sparql_results(&body).with_context(|| format!("reading statistics for relation {relation_id}"))
	}

	fn get_name(&self) -> &str {
		self.endpoint.as_str()
	}
}
