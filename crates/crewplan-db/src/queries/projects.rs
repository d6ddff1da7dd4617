//! Database query functions for the `projects` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::Project;

/// Insert a new project row. Returns the inserted project with
/// server-generated defaults (id, created_at).
pub async fn insert_project(
    pool: &PgPool,
    name: &str,
    description: &str,
    lead_id: i64,
) -> Result<Project> {
    let project = sqlx::query_as::<_, Project>(
        "INSERT INTO projects (name, description, lead_id) \
         VALUES ($1, $2, $3) \
         RETURNING *",
    )
    .bind(name)
    .bind(description)
    .bind(lead_id)
    .fetch_one(pool)
    .await
    .context("failed to insert project")?;

    Ok(project)
}

/// Fetch a single project by ID.
pub async fn get_project(pool: &PgPool, id: i64) -> Result<Option<Project>> {
    let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch project")?;

    Ok(project)
}

/// List all projects, ordered by creation time.
pub async fn list_projects(pool: &PgPool) -> Result<Vec<Project>> {
    let projects = sqlx::query_as::<_, Project>("SELECT * FROM projects ORDER BY created_at ASC")
        .fetch_all(pool)
        .await
        .context("failed to list projects")?;

    Ok(projects)
}

/// Replace a project row in full. Returns `None` if the ID does not exist.
pub async fn update_project(
    pool: &PgPool,
    id: i64,
    name: &str,
    description: &str,
    lead_id: i64,
) -> Result<Option<Project>> {
    let project = sqlx::query_as::<_, Project>(
        "UPDATE projects \
         SET name = $1, description = $2, lead_id = $3 \
         WHERE id = $4 \
         RETURNING *",
    )
    .bind(name)
    .bind(description)
    .bind(lead_id)
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("failed to update project")?;

    Ok(project)
}

/// Delete a project by ID. Returns the number of rows affected (0 means the
/// project did not exist).
pub async fn delete_project(pool: &PgPool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .context("failed to delete project")?;

    Ok(result.rows_affected())
}

/// List all projects a given employee is a member of.
pub async fn list_for_employee(pool: &PgPool, employee_id: i64) -> Result<Vec<Project>> {
    let projects = sqlx::query_as::<_, Project>(
        "SELECT p.* \
         FROM projects p \
         JOIN project_members pm ON p.id = pm.project_id \
         WHERE pm.employee_id = $1 \
         ORDER BY p.created_at ASC",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await
    .context("failed to list projects for employee")?;

    Ok(projects)
}
