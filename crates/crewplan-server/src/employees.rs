//! Employee CRUD and relationship handlers, plus project membership.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crewplan_db::models::{Employee, EmployeeRole, Project, Task, TaskStatus};
use crewplan_db::queries::{employees as employee_db, memberships as membership_db,
    projects as project_db, tasks as task_db};

use crate::error::AppError;
use crate::router::AppState;

/// Full employee payload for create and full-row replace.
#[derive(Debug, Deserialize)]
pub struct EmployeePayload {
    pub name: String,
    pub email: String,
    pub role: EmployeeRole,
    #[serde(default)]
    pub skills: Vec<String>,
}

pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeePayload>,
) -> Result<(StatusCode, Json<Employee>), AppError> {
    let employee = employee_db::insert_employee(
        &state.pool,
        &payload.name,
        &payload.email,
        payload.role,
        &payload.skills,
    )
    .await
    .map_err(AppError::internal)?;

    Ok((StatusCode::CREATED, Json(employee)))
}

pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, AppError> {
    let employee = employee_db::get_employee(&state.pool, id)
        .await
        .map_err(AppError::internal)?
        .ok_or_else(|| AppError::not_found(format!("employee {id} not found")))?;

    Ok(Json(employee))
}

pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = employee_db::list_employees(&state.pool)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(employees))
}

pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeePayload>,
) -> Result<Json<Employee>, AppError> {
    let employee = employee_db::update_employee(
        &state.pool,
        id,
        &payload.name,
        &payload.email,
        payload.role,
        &payload.skills,
    )
    .await
    .map_err(AppError::internal)?
    .ok_or_else(|| AppError::not_found(format!("employee {id} not found")))?;

    Ok(Json(employee))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let affected = employee_db::delete_employee(&state.pool, id)
        .await
        .map_err(AppError::internal)?;

    if affected == 0 {
        return Err(AppError::not_found(format!("employee {id} not found")));
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_employee_tasks(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = task_db::list_for_employee(&state.pool, id)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(tasks))
}

pub async fn list_employee_tasks_by_status(
    State(state): State<AppState>,
    Path((id, status)): Path<(i64, TaskStatus)>,
) -> Result<Json<Vec<Task>>, AppError> {
    let tasks = task_db::list_for_employee_by_status(&state.pool, id, status)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(tasks))
}

pub async fn list_employee_projects(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Project>>, AppError> {
    let projects = project_db::list_for_employee(&state.pool, id)
        .await
        .map_err(AppError::internal)?;

    Ok(Json(projects))
}

/// Idempotent: assigning an already-assigned employee is a no-op, not an
/// error.
pub async fn add_membership(
    State(state): State<AppState>,
    Path((id, project_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    membership_db::add_member(&state.pool, id, project_id)
        .await
        .map_err(AppError::internal)?;

    Ok(StatusCode::CREATED)
}

pub async fn remove_membership(
    State(state): State<AppState>,
    Path((id, project_id)): Path<(i64, i64)>,
) -> Result<StatusCode, AppError> {
    let affected = membership_db::remove_member(&state.pool, id, project_id)
        .await
        .map_err(AppError::internal)?;

    if affected == 0 {
        return Err(AppError::not_found(format!(
            "employee {id} is not assigned to project {project_id}"
        )));
    }
    Ok(StatusCode::NO_CONTENT)
}
