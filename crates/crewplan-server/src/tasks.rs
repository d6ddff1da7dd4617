//! Task CRUD handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crewplan_db::models::{Task, TaskStatus};
use crewplan_db::queries::tasks as task_db;

use crate::error::AppError;
use crate::router::AppState;

/// Full task payload for create and full-row replace. Status is validated
/// at this boundary by the [`TaskStatus`] enum.
#[derive(Debug, Deserialize)]
pub struct TaskPayload {
    pub project_id: i64,
    pub assigned_to: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
}

pub async fn create_task(
    State(state): State<AppState>,
    Json(payload): Json<TaskPayload>,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let task = task_db::insert_task(
        &state.pool,
        payload.project_id,
        payload.assigned_to,
        &payload.title,
        &payload.description,
        payload.status,
    )
    .await
    .map_err(AppError::internal)?;

    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, AppError> {
    let task = task_db::get_task(&state.pool, id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(format!("task {id} not found")))?;

    Ok(Json(task))
}

pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = task_db::list_tasks(&state.pool)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(tasks))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Task>, AppError> {
    let task = task_db::update_task(
        &state.pool,
        id,
        payload.project_id,
        payload.assigned_to,
        &payload.title,
        &payload.description,
        payload.status,
    )
    .await
    .map_err(AppError::internal)?
    .ok_or_else(|| AppError::not_found(format!("task {id} not found")))?;

    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let affected = task_db::delete_task(&state.pool, id)
        .await
        .map_err(AppError::internal)?;

    if affected == 0 {
        return Err(AppError::not_found(format!("task {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}
