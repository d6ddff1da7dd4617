use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use crewplan_core::TaskPlanner;

use crate::{employees, projects, tasks};

/// Shared handler state: the connection pool and the planner client, both
/// constructor-injected so tests can substitute doubles.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub planner: Arc<dyn TaskPlanner>,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(pool: PgPool, planner: Arc<dyn TaskPlanner>) -> Router {
    Router::new()
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route(
            "/employees/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .route("/employees/{id}/tasks", get(employees::list_employee_tasks))
        .route(
            "/employees/{id}/tasks/{status}",
            get(employees::list_employee_tasks_by_status),
        )
        .route(
            "/employees/{id}/projects",
            get(employees::list_employee_projects),
        )
        .route(
            "/employees/{id}/projects/{project_id}",
            post(employees::add_membership).delete(employees::remove_membership),
        )
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/{id}",
            get(projects::get_project)
                .put(projects::update_project)
                .delete(projects::delete_project),
        )
        .route("/projects/{id}/employees", get(projects::list_project_members))
        .route("/projects/{id}/generate-tasks", post(projects::generate_tasks))
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .layer(CorsLayer::permissive())
        .with_state(AppState { pool, planner })
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(
    pool: PgPool,
    planner: Arc<dyn TaskPlanner>,
    bind: &str,
    port: u16,
) -> Result<()> {
    let app = build_router(pool, planner);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!("crewplan listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("crewplan shut down");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
