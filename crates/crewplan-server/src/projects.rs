//! Project CRUD handlers and the generate-and-assign endpoint.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crewplan_core::generate_and_assign;
use crewplan_core::planner::PlanProposal;
use crewplan_db::models::{Employee, Project};
use crewplan_db::queries::{employees as employee_db, projects as project_db};

use crate::error::AppError;
use crate::router::AppState;

/// Full project payload for create and full-row replace.
#[derive(Debug, Deserialize)]
pub struct ProjectPayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub lead_id: i64,
}

/// Body of `POST /projects/{id}/generate-tasks`.
#[derive(Debug, Deserialize)]
pub struct GenerateTasksPayload {
    pub requirements: String,
}

pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<ProjectPayload>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let project = project_db::insert_project(
        &state.pool,
        &payload.name,
        &payload.description,
        payload.lead_id,
    )
    .await
    .map_err(AppError::internal)?;

    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, AppError> {
    let project = project_db::get_project(&state.pool, id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(format!("project {id} not found")))?;

    Ok(Json(project))
}

pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, AppError> {
    let projects = project_db::list_projects(&state.pool)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(projects))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProjectPayload>,
) -> Result<Json<Project>, AppError> {
    let project = project_db::update_project(
        &state.pool,
        id,
        &payload.name,
        &payload.description,
        payload.lead_id,
    )
    .await
    .map_err(AppError::internal)?
    .ok_or_else(|| AppError::not_found(format!("project {id} not found")))?;

    Ok(Json(project))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let affected = project_db::delete_project(&state.pool, id)
        .await
        .map_err(AppError::internal)?;

    if affected == 0 {
        return Err(AppError::not_found(format!("project {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_project_members(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = employee_db::list_for_project(&state.pool, id)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(employees))
}

/// The core workflow endpoint: membership read, one planner call, one
/// all-or-nothing transactional write. The success body mirrors the
/// planner's payload, not the freshly-assigned task ids.
pub async fn generate_tasks(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<GenerateTasksPayload>,
) -> Result<Json<PlanProposal>, AppError> {
    let proposal =
        generate_and_assign(&state.pool, state.planner.as_ref(), id, &payload.requirements)
            .await
            .map_err(AppError::from_generate)?;

    Ok(Json(proposal))
}
