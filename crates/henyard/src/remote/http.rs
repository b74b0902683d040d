//! Decision service client over HTTP

use std::time::Duration;

use anyhow::{Context, Result};
use henyard_core::protocol::{GoalUpdate, StateReport};

/// Exchanges one state report for (maybe) a batch of new goals.
///
/// Called from the background worker only, so implementations may block.
pub trait DecisionService: Send + 'static {
    fn exchange(&mut self, report: &StateReport) -> Result<Option<GoalUpdate>>;
}

impl<F> DecisionService for F
where
    F: FnMut(&StateReport) -> Result<Option<GoalUpdate>> + Send + 'static,
{
    fn exchange(&mut self, report: &StateReport) -> Result<Option<GoalUpdate>> {
        self(report)
    }
}

/// Posts reports as JSON and decodes the JSON reply. An empty reply body
/// means "no new goals".
pub struct HttpDecisionService {
    url: String,
    agent: ureq::Agent,
}

impl HttpDecisionService {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DecisionService for HttpDecisionService {
    fn exchange(&mut self, report: &StateReport) -> Result<Option<GoalUpdate>> {
        let response = self
            .agent
            .post(&self.url)
            .send_json(report)
            .with_context(|| format!("Failed to send state report to {}", self.url))?;

        let body = response
            .into_string()
            .context("Failed to read decision service reply")?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let update: GoalUpdate =
            serde_json::from_str(&body).context("Failed to parse goal update")?;
        log::trace!("Goal update with {} agents", update.agents.len());
        Ok(Some(update))
    }
}
