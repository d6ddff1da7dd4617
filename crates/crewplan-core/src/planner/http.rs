use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::{PlanProposal, PlannerError, TaskPlanner};

/// Request body for the planner endpoint. Serialized with serde so embedded
/// quotes and control characters in the prompt survive transmission.
#[derive(Serialize)]
struct PlanRequest<'a> {
    prompt: &'a str,
}

/// HTTP client for the external task-planning service.
///
/// Issues a single POST of `{"prompt": <string>}` to the configured
/// endpoint and decodes the `{status, message, tasks}` response. Every
/// request carries a bounded deadline; there is no retry and no circuit
/// breaker, so each failure is terminal for its request.
#[derive(Debug, Clone)]
pub struct HttpPlanner {
    client: Client,
    endpoint: String,
}

impl HttpPlanner {
    /// Default request deadline for a planner call.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

    /// Build a planner client for the given endpoint with the default
    /// deadline.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, Self::DEFAULT_TIMEOUT)
    }

    /// Build a planner client with an explicit request deadline.
    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build planner HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TaskPlanner for HttpPlanner {
    async fn propose_tasks(&self, prompt: &str) -> Result<PlanProposal, PlannerError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PlanRequest { prompt })
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    PlannerError::Timeout
                } else {
                    PlannerError::Transport(err)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlannerError::Rejected(status));
        }

        response.json::<PlanProposal>().await.map_err(|err| {
            if err.is_timeout() {
                PlannerError::Timeout
            } else {
                PlannerError::Malformed(err)
            }
        })
    }
}
