//! In-memory boundary source for tests.

use super::{BoundarySourceTrait, OverpassResponse};
use anyhow::{Result, bail};
use async_trait::async_trait;
use geoscope_core::CancellationToken;
use std::{collections::HashMap, sync::Mutex};

/// Answers statements from a fixed table; unknown statements get an empty answer.
#[derive(Debug, Default)]
pub struct MockBoundarySource {
	answers: HashMap<String, OverpassResponse>,
	failing: bool,
	queries: Mutex<Vec<String>>,
}

impl MockBoundarySource {
	pub fn failing() -> Self {
		Self {
			failing: true,
			..Self::default()
		}
	}

	pub fn with_answer(mut self, statement: &str, json: &str) -> Self {
		let response = OverpassResponse::from_json(json).unwrap();
		self.answers.insert(statement.to_string(), response);
		self
	}

	/// The statements received so far, in order.
	pub fn queries(&self) -> Vec<String> {
		self.queries.lock().unwrap().clone()
	}
}

#[async_trait]
impl BoundarySourceTrait for MockBoundarySource {
	async fn query(&self, statement: &str, cancel: &CancellationToken) -> Result<OverpassResponse> {
		self.queries.lock().unwrap().push(statement.to_string());
		if cancel.is_cancelled() {
			bail!("request was cancelled");
		}
		if self.failing {
			bail!("connection refused");
		}
		Ok(self.answers.get(statement).cloned().unwrap_or_default())
	}

	fn get_name(&self) -> &str {
		"mock"
	}
}
