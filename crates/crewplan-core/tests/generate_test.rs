//! Integration tests for the generate-and-assign workflow: commit counts,
//! all-or-nothing rollback, and the empty-roster behavior.

use std::sync::Mutex;

use async_trait::async_trait;
use sqlx::PgPool;

use crewplan_core::generate::{GenerateError, generate_and_assign};
use crewplan_core::planner::{PlanProposal, PlannerError, TaskAssignment, TaskPlanner};
use crewplan_db::models::{EmployeeRole, TaskStatus};
use crewplan_db::queries::{employees, memberships, projects, tasks};
use crewplan_test_utils::{create_test_db, drop_test_db};

// -----------------------------------------------------------------------
// Planner doubles
// -----------------------------------------------------------------------

/// Returns a fixed proposal and records every prompt it sees.
struct StubPlanner {
    proposal: PlanProposal,
    prompts: Mutex<Vec<String>>,
}

impl StubPlanner {
    fn new(proposal: PlanProposal) -> Self {
        Self {
            proposal,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn seen_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskPlanner for StubPlanner {
    async fn propose_tasks(&self, prompt: &str) -> Result<PlanProposal, PlannerError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        Ok(self.proposal.clone())
    }
}

/// Always fails with a timeout.
struct FailingPlanner;

#[async_trait]
impl TaskPlanner for FailingPlanner {
    async fn propose_tasks(&self, _prompt: &str) -> Result<PlanProposal, PlannerError> {
        Err(PlannerError::Timeout)
    }
}

// -----------------------------------------------------------------------
// Fixtures
// -----------------------------------------------------------------------

fn proposal(pairs: &[(&str, &str)]) -> PlanProposal {
    PlanProposal {
        status: "success".to_owned(),
        message: "tasks generated".to_owned(),
        tasks: pairs
            .iter()
            .map(|(task, assigned_to)| TaskAssignment {
                task: (*task).to_owned(),
                assigned_to: (*assigned_to).to_owned(),
            })
            .collect(),
    }
}

async fn seed_employee(pool: &PgPool, name: &str, skills: &[&str]) -> i64 {
    let skills: Vec<String> = skills.iter().map(|s| (*s).to_owned()).collect();
    let email = format!("{}@example.com", name.to_lowercase());
    employees::insert_employee(pool, name, &email, EmployeeRole::Developer, &skills)
        .await
        .expect("insert_employee should succeed")
        .id
}

async fn seed_project_with_members(pool: &PgPool, member_ids: &[i64]) -> i64 {
    let lead = member_ids.first().copied().unwrap_or(1);
    let project = projects::insert_project(pool, "login-revamp", "auth work", lead)
        .await
        .expect("insert_project should succeed");
    for id in member_ids {
        memberships::add_member(pool, *id, project.id)
            .await
            .expect("add_member should succeed");
    }
    project.id
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

#[tokio::test]
async fn commits_one_row_per_resolvable_proposal() {
    let (pool, db_name) = create_test_db().await;

    let alice = seed_employee(&pool, "Alice", &["go", "sql"]).await;
    let bob = seed_employee(&pool, "Bob", &["js"]).await;
    let project_id = seed_project_with_members(&pool, &[alice, bob]).await;

    let planner = StubPlanner::new(proposal(&[
        ("Design UI", "Bob"),
        ("Build schema", "Alice"),
    ]));

    let result = generate_and_assign(&pool, &planner, project_id, "build login page")
        .await
        .expect("generation should succeed");

    // Response echoes the planner payload verbatim.
    assert_eq!(result.status, "success");
    assert_eq!(result.message, "tasks generated");
    assert_eq!(result.tasks.len(), 2);

    // Exactly N rows committed, each TODO and scoped to the project.
    let rows = tasks::list_tasks(&pool).await.expect("list_tasks");
    assert_eq!(rows.len(), 2);
    for task in &rows {
        assert_eq!(task.project_id, project_id);
        assert_eq!(task.status, TaskStatus::Todo);
    }
    let ui_task = rows
        .iter()
        .find(|t| t.title == "Design UI")
        .expect("Design UI should be committed");
    assert_eq!(ui_task.assigned_to, bob);

    // The prompt carried the roster descriptors.
    let prompts = planner.seen_prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Project Requirements: build login page"));
    assert!(prompts[0].contains("Alice: go, sql"));
    assert!(prompts[0].contains("Bob: js"));

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn unknown_assignee_rolls_back_whole_batch() {
    let (pool, db_name) = create_test_db().await;

    let alice = seed_employee(&pool, "Alice", &["go"]).await;
    let project_id = seed_project_with_members(&pool, &[alice]).await;

    // First proposal is valid; the second names nobody in the employee
    // table. Nothing from the batch may persist.
    let planner = StubPlanner::new(proposal(&[
        ("Valid task", "Alice"),
        ("Orphan task", "Carol"),
    ]));

    let err = generate_and_assign(&pool, &planner, project_id, "reqs")
        .await
        .expect_err("generation should fail");
    assert!(matches!(err, GenerateError::UnknownAssignee(name) if name == "Carol"));

    let count = tasks::count_for_project(&pool, project_id)
        .await
        .expect("count_for_project");
    assert_eq!(count, 0, "rollback must leave zero rows");

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn ambiguous_assignee_rolls_back_whole_batch() {
    let (pool, db_name) = create_test_db().await;

    // Two employees share a display name; name-based resolution must refuse
    // to pick one.
    let first = seed_employee(&pool, "Alex", &["go"]).await;
    let _second = employees::insert_employee(
        &pool,
        "Alex",
        "alex2@example.com",
        EmployeeRole::Developer,
        &[],
    )
    .await
    .expect("insert_employee should succeed");
    let project_id = seed_project_with_members(&pool, &[first]).await;

    let planner = StubPlanner::new(proposal(&[("Pick me", "Alex")]));

    let err = generate_and_assign(&pool, &planner, project_id, "reqs")
        .await
        .expect_err("generation should fail");
    assert!(matches!(
        err,
        GenerateError::AmbiguousAssignee { matches: 2, .. }
    ));

    let count = tasks::count_for_project(&pool, project_id)
        .await
        .expect("count_for_project");
    assert_eq!(count, 0);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn planner_failure_writes_nothing() {
    let (pool, db_name) = create_test_db().await;

    let alice = seed_employee(&pool, "Alice", &["go"]).await;
    let project_id = seed_project_with_members(&pool, &[alice]).await;

    let err = generate_and_assign(&pool, &FailingPlanner, project_id, "reqs")
        .await
        .expect_err("generation should fail");
    assert!(matches!(err, GenerateError::Planner(PlannerError::Timeout)));

    let count = tasks::count_for_project(&pool, project_id)
        .await
        .expect("count_for_project");
    assert_eq!(count, 0);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn empty_roster_still_calls_planner() {
    let (pool, db_name) = create_test_db().await;

    let lead = seed_employee(&pool, "Lead", &[]).await;
    let project = projects::insert_project(&pool, "fresh", "no members yet", lead)
        .await
        .expect("insert_project should succeed");

    let planner = StubPlanner::new(proposal(&[]));

    let result = generate_and_assign(&pool, &planner, project.id, "bootstrap")
        .await
        .expect("generation should succeed with an empty roster");
    assert!(result.tasks.is_empty());

    let prompts = planner.seen_prompts();
    assert_eq!(prompts.len(), 1, "planner must be called despite no members");
    assert!(prompts[0].ends_with("Team Members and Skills:\n"));

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn assignee_resolution_is_table_wide() {
    let (pool, db_name) = create_test_db().await;

    // Dana exists but is not a member of the project. The reference system
    // resolves names against the whole employee table, so the insert still
    // lands.
    let alice = seed_employee(&pool, "Alice", &["go"]).await;
    let dana = seed_employee(&pool, "Dana", &["rust"]).await;
    let project_id = seed_project_with_members(&pool, &[alice]).await;

    let planner = StubPlanner::new(proposal(&[("Side quest", "Dana")]));

    generate_and_assign(&pool, &planner, project_id, "reqs")
        .await
        .expect("generation should succeed");

    let rows = tasks::list_tasks(&pool).await.expect("list_tasks");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].assigned_to, dana);

    pool.close().await;
    drop_test_db(&db_name).await;
}
