//! Database query functions for the `tasks` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::{Task, TaskStatus};

/// Insert a new task row. Returns the inserted task with server-generated
/// defaults (id, created_at).
pub async fn insert_task(
    pool: &PgPool,
    project_id: i64,
    assigned_to: i64,
    title: &str,
    description: &str,
    status: TaskStatus,
) -> Result<Task> {
    let task = sqlx::query_as::<_, Task>(
        "INSERT INTO tasks (project_id, assigned_to, title, description, status) \
         VALUES ($1, $2, $3, $4, $5) \
         RETURNING *",
    )
    .bind(project_id)
    .bind(assigned_to)
    .bind(title)
    .bind(description)
    .bind(status)
    .fetch_one(pool)
    .await
    .context("failed to insert task")?;

    Ok(task)
}

/// Fetch a single task by ID.
pub async fn get_task(pool: &PgPool, id: i64) -> Result<Option<Task>> {
    let task = sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch task")?;

    Ok(task)
}

/// List all tasks, ordered by creation time.
pub async fn list_tasks(pool: &PgPool) -> Result<Vec<Task>> {
    let tasks = sqlx::query_as::<_, Task>("SELECT * FROM tasks ORDER BY created_at ASC")
        .fetch_all(pool)
        .await
        .context("failed to list tasks")?;

    Ok(tasks)
}

/// Replace a task row in full. Returns `None` if the ID does not exist.
pub async fn update_task(
    pool: &PgPool,
    id: i64,
    project_id: i64,
    assigned_to: i64,
    title: &str,
    description: &str,
    status: TaskStatus,
) -> Result<Option<Task>> {
    let task = sqlx::query_as::<_, Task>(
        "UPDATE tasks \
         SET project_id = $1, assigned_to = $2, title = $3, description = $4, status = $5 \
         WHERE id = $6 \
         RETURNING *",
    )
    .bind(project_id)
    .bind(assigned_to)
    .bind(title)
    .bind(description)
    .bind(status)
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("failed to update task")?;

    Ok(task)
}

/// Delete a task by ID. Returns the number of rows affected (0 means the
/// task did not exist).
pub async fn delete_task(pool: &PgPool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .context("failed to delete task")?;

    Ok(result.rows_affected())
}

/// List all tasks assigned to a given employee.
pub async fn list_for_employee(pool: &PgPool, employee_id: i64) -> Result<Vec<Task>> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT * FROM tasks WHERE assigned_to = $1 ORDER BY created_at ASC",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await
    .context("failed to list tasks for employee")?;

    Ok(tasks)
}

/// List all tasks assigned to a given employee with a given status.
pub async fn list_for_employee_by_status(
    pool: &PgPool,
    employee_id: i64,
    status: TaskStatus,
) -> Result<Vec<Task>> {
    let tasks = sqlx::query_as::<_, Task>(
        "SELECT * FROM tasks \
         WHERE assigned_to = $1 AND status = $2 \
         ORDER BY created_at ASC",
    )
    .bind(employee_id)
    .bind(status)
    .fetch_all(pool)
    .await
    .context("failed to list tasks for employee by status")?;

    Ok(tasks)
}

/// Count tasks belonging to a project.
pub async fn count_for_project(pool: &PgPool, project_id: i64) -> Result<i64> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tasks WHERE project_id = $1")
        .bind(project_id)
        .fetch_one(pool)
        .await
        .context("failed to count tasks for project")?;

    Ok(row.0)
}
