//! The task-planning seam: wire types shared with the external planner
//! service, the [`TaskPlanner`] trait, and failure classification.

mod http;
mod prompt;

pub use http::HttpPlanner;
pub use prompt::build_prompt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One proposed task: a title and the display name of the employee the
/// planner picked for it. The planner speaks names, not ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAssignment {
    pub task: String,
    pub assigned_to: String,
}

/// The planner's structured response, echoed verbatim to the caller on a
/// successful generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanProposal {
    pub status: String,
    pub message: String,
    pub tasks: Vec<TaskAssignment>,
}

/// Failures of a single planner call, classified so logs can tell a dead
/// service from a slow one from a confused one. All of them surface as a
/// 500 at the HTTP boundary.
#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("planner request timed out")]
    Timeout,

    #[error("planner request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("planner rejected the request with status {0}")]
    Rejected(reqwest::StatusCode),

    #[error("planner returned a malformed response: {0}")]
    Malformed(#[source] reqwest::Error),
}

/// Anything that can turn a prompt into a structured task proposal.
///
/// Production uses [`HttpPlanner`]; tests substitute doubles.
#[async_trait]
pub trait TaskPlanner: Send + Sync {
    /// Issue one synchronous planning call. No retries at this layer.
    async fn propose_tasks(&self, prompt: &str) -> Result<PlanProposal, PlannerError>;
}
