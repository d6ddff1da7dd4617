//! The generate-and-assign workflow.
//!
//! Composes a membership read, one synchronous planner call, and a
//! transactional multi-row task insert into a single request-scoped
//! operation. The write is all-or-nothing: if any proposed task fails to
//! land, the whole batch rolls back and zero tasks persist.

use anyhow::Context;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{info, warn};

use crewplan_db::models::TaskStatus;
use crewplan_db::queries::memberships;

use crate::planner::{PlanProposal, PlannerError, TaskPlanner, build_prompt};

/// Failures of the generation workflow. Every variant maps to a 500 at the
/// HTTP boundary; the distinctions exist for logs.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("task planner call failed: {0}")]
    Planner(#[from] PlannerError),

    #[error("proposed assignee {0:?} does not match any employee")]
    UnknownAssignee(String),

    #[error("proposed assignee {name:?} matches {matches} employees")]
    AmbiguousAssignee { name: String, matches: usize },

    #[error(transparent)]
    Db(#[from] anyhow::Error),
}

/// Generate tasks for a project from a requirements description and commit
/// them in one transaction.
///
/// Steps:
/// 1. Read the project's member roster (names and skill tags). An empty
///    roster does not short-circuit; the planner is called anyway.
/// 2. Build the prompt and issue one planner call. Any planner failure
///    aborts before anything is written.
/// 3. In a single transaction, resolve each proposed assignee name to
///    exactly one employee id and insert a `TODO` task scoped to the
///    project. Zero or multiple name matches abort the transaction.
/// 4. Commit and return the planner's proposal verbatim (not the new task
///    ids).
///
/// Concurrent invocations for the same project are not coordinated against
/// each other; isolation is left to the store.
pub async fn generate_and_assign(
    pool: &PgPool,
    planner: &dyn TaskPlanner,
    project_id: i64,
    requirements: &str,
) -> Result<PlanProposal, GenerateError> {
    let members = memberships::list_member_skills(pool, project_id).await?;
    if members.is_empty() {
        // Kept from the reference behavior: the planner decides what to do
        // with an empty roster.
        warn!(project_id, "generating tasks for a project with no members");
    }

    let prompt = build_prompt(requirements, &members);
    let proposal = planner.propose_tasks(&prompt).await?;

    let mut tx = pool
        .begin()
        .await
        .context("failed to begin task-generation transaction")?;

    for assignment in &proposal.tasks {
        // The planner returns display names; resolve each to exactly one
        // employee before inserting. Resolution is table-wide, not limited
        // to project members.
        let matches: Vec<(i64,)> = sqlx::query_as("SELECT id FROM employees WHERE name = $1")
            .bind(&assignment.assigned_to)
            .fetch_all(&mut *tx)
            .await
            .with_context(|| format!("failed to resolve assignee {:?}", assignment.assigned_to))?;

        let assignee_id = match matches.as_slice() {
            [(id,)] => *id,
            [] => {
                return Err(GenerateError::UnknownAssignee(
                    assignment.assigned_to.clone(),
                ));
            }
            many => {
                return Err(GenerateError::AmbiguousAssignee {
                    name: assignment.assigned_to.clone(),
                    matches: many.len(),
                });
            }
        };

        sqlx::query(
            "INSERT INTO tasks (project_id, assigned_to, title, status) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(project_id)
        .bind(assignee_id)
        .bind(&assignment.task)
        .bind(TaskStatus::Todo)
        .execute(&mut *tx)
        .await
        .with_context(|| format!("failed to insert generated task {:?}", assignment.task))?;
    }

    tx.commit()
        .await
        .context("failed to commit generated tasks")?;

    info!(
        project_id,
        committed = proposal.tasks.len(),
        "generated tasks committed"
    );

    Ok(proposal)
}
