//! Database query functions for the `project_members` relation.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::MemberSkills;

/// Add an employee to a project.
///
/// Uses `ON CONFLICT DO NOTHING` so this is idempotent: assigning the same
/// (employee, project) pair twice leaves exactly one membership row.
pub async fn add_member(pool: &PgPool, employee_id: i64, project_id: i64) -> Result<()> {
    sqlx::query(
        "INSERT INTO project_members (employee_id, project_id) VALUES ($1, $2) \
         ON CONFLICT DO NOTHING",
    )
    .bind(employee_id)
    .bind(project_id)
    .execute(pool)
    .await
    .context("failed to add project member")?;

    Ok(())
}

/// Remove an employee from a project. Returns the number of rows affected
/// (0 means the membership did not exist).
pub async fn remove_member(pool: &PgPool, employee_id: i64, project_id: i64) -> Result<u64> {
    let result = sqlx::query(
        "DELETE FROM project_members WHERE employee_id = $1 AND project_id = $2",
    )
    .bind(employee_id)
    .bind(project_id)
    .execute(pool)
    .await
    .context("failed to remove project member")?;

    Ok(result.rows_affected())
}

/// Count membership rows for a given (employee, project) pair.
pub async fn count_pair(pool: &PgPool, employee_id: i64, project_id: i64) -> Result<i64> {
    let row: (i64,) = sqlx::query_as(
        "SELECT COUNT(*) FROM project_members WHERE employee_id = $1 AND project_id = $2",
    )
    .bind(employee_id)
    .bind(project_id)
    .fetch_one(pool)
    .await
    .context("failed to count project members")?;

    Ok(row.0)
}

/// Names and skill tags of a project's members, in creation order.
///
/// This is the context-gathering read of the task-generation workflow; an
/// empty result is not an error (projects may have no members yet).
pub async fn list_member_skills(pool: &PgPool, project_id: i64) -> Result<Vec<MemberSkills>> {
    let members = sqlx::query_as::<_, MemberSkills>(
        "SELECT e.name, e.skills \
         FROM employees e \
         JOIN project_members pm ON e.id = pm.employee_id \
         WHERE pm.project_id = $1 \
         ORDER BY e.created_at ASC, e.id ASC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
    .context("failed to list member skills")?;

    Ok(members)
}
