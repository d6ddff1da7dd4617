//! Database query functions for the `employees` table.

use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::models::{Employee, EmployeeRole};

/// Insert a new employee row. Returns the inserted employee with
/// server-generated defaults (id, created_at).
pub async fn insert_employee(
    pool: &PgPool,
    name: &str,
    email: &str,
    role: EmployeeRole,
    skills: &[String],
) -> Result<Employee> {
    let employee = sqlx::query_as::<_, Employee>(
        "INSERT INTO employees (name, email, role, skills) \
         VALUES ($1, $2, $3, $4) \
         RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(role)
    .bind(skills)
    .fetch_one(pool)
    .await
    .context("failed to insert employee")?;

    Ok(employee)
}

/// Fetch a single employee by ID.
pub async fn get_employee(pool: &PgPool, id: i64) -> Result<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .context("failed to fetch employee")?;

    Ok(employee)
}

/// List all employees, ordered by creation time.
pub async fn list_employees(pool: &PgPool) -> Result<Vec<Employee>> {
    let employees =
        sqlx::query_as::<_, Employee>("SELECT * FROM employees ORDER BY created_at ASC")
            .fetch_all(pool)
            .await
            .context("failed to list employees")?;

    Ok(employees)
}

/// Replace an employee row in full. Returns `None` if the ID does not exist.
pub async fn update_employee(
    pool: &PgPool,
    id: i64,
    name: &str,
    email: &str,
    role: EmployeeRole,
    skills: &[String],
) -> Result<Option<Employee>> {
    let employee = sqlx::query_as::<_, Employee>(
        "UPDATE employees \
         SET name = $1, email = $2, role = $3, skills = $4 \
         WHERE id = $5 \
         RETURNING *",
    )
    .bind(name)
    .bind(email)
    .bind(role)
    .bind(skills)
    .bind(id)
    .fetch_optional(pool)
    .await
    .context("failed to update employee")?;

    Ok(employee)
}

/// Delete an employee by ID. Returns the number of rows affected (0 means
/// the employee did not exist).
pub async fn delete_employee(pool: &PgPool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .context("failed to delete employee")?;

    Ok(result.rows_affected())
}

/// List all employees who are members of a given project.
pub async fn list_for_project(pool: &PgPool, project_id: i64) -> Result<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT e.* \
         FROM employees e \
         JOIN project_members pm ON e.id = pm.employee_id \
         WHERE pm.project_id = $1 \
         ORDER BY e.created_at ASC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await
    .context("failed to list employees for project")?;

    Ok(employees)
}
