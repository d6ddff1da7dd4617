//! Integration tests for employee and project CRUD.

use crewplan_db::models::EmployeeRole;
use crewplan_db::queries::{employees, projects};
use crewplan_test_utils::{create_test_db, drop_test_db};

fn skills(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|s| (*s).to_owned()).collect()
}

#[tokio::test]
async fn insert_and_get_employee() {
    let (pool, db_name) = create_test_db().await;

    let employee = employees::insert_employee(
        &pool,
        "Alice",
        "alice@example.com",
        EmployeeRole::Developer,
        &skills(&["go", "sql"]),
    )
    .await
    .expect("insert_employee should succeed");

    assert_eq!(employee.name, "Alice");
    assert_eq!(employee.role, EmployeeRole::Developer);
    assert_eq!(employee.skills, vec!["go", "sql"]);

    let fetched = employees::get_employee(&pool, employee.id)
        .await
        .expect("get_employee should succeed")
        .expect("employee should exist");
    assert_eq!(fetched.id, employee.id);
    assert_eq!(fetched.email, "alice@example.com");

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn get_missing_employee_returns_none() {
    let (pool, db_name) = create_test_db().await;

    let fetched = employees::get_employee(&pool, 9999)
        .await
        .expect("get_employee should succeed");
    assert!(fetched.is_none());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn update_replaces_full_row() {
    let (pool, db_name) = create_test_db().await;

    let employee = employees::insert_employee(
        &pool,
        "Bob",
        "bob@example.com",
        EmployeeRole::Developer,
        &skills(&["js"]),
    )
    .await
    .expect("insert_employee should succeed");

    let updated = employees::update_employee(
        &pool,
        employee.id,
        "Robert",
        "robert@example.com",
        EmployeeRole::ProjectManager,
        &skills(&[]),
    )
    .await
    .expect("update_employee should succeed")
    .expect("employee should exist");

    assert_eq!(updated.id, employee.id);
    assert_eq!(updated.name, "Robert");
    assert_eq!(updated.role, EmployeeRole::ProjectManager);
    assert!(updated.skills.is_empty());
    // Identity and creation timestamp are immutable.
    assert_eq!(updated.created_at, employee.created_at);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn update_missing_employee_returns_none() {
    let (pool, db_name) = create_test_db().await;

    let updated = employees::update_employee(
        &pool,
        424242,
        "Ghost",
        "ghost@example.com",
        EmployeeRole::Developer,
        &[],
    )
    .await
    .expect("update_employee should succeed");
    assert!(updated.is_none());

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn delete_reports_affected_rows() {
    let (pool, db_name) = create_test_db().await;

    let employee = employees::insert_employee(
        &pool,
        "Eve",
        "eve@example.com",
        EmployeeRole::Developer,
        &[],
    )
    .await
    .expect("insert_employee should succeed");

    let affected = employees::delete_employee(&pool, employee.id)
        .await
        .expect("delete_employee should succeed");
    assert_eq!(affected, 1);

    let affected = employees::delete_employee(&pool, employee.id)
        .await
        .expect("delete_employee should succeed");
    assert_eq!(affected, 0);

    pool.close().await;
    drop_test_db(&db_name).await;
}

#[tokio::test]
async fn project_crud_roundtrip() {
    let (pool, db_name) = create_test_db().await;

    let lead = employees::insert_employee(
        &pool,
        "Lead",
        "lead@example.com",
        EmployeeRole::ProjectManager,
        &[],
    )
    .await
    .expect("insert_employee should succeed");

    let project = projects::insert_project(&pool, "portal", "customer portal", lead.id)
        .await
        .expect("insert_project should succeed");
    assert_eq!(project.name, "portal");
    assert_eq!(project.lead_id, lead.id);

    let updated = projects::update_project(&pool, project.id, "portal-v2", "rewrite", lead.id)
        .await
        .expect("update_project should succeed")
        .expect("project should exist");
    assert_eq!(updated.name, "portal-v2");

    let all = projects::list_projects(&pool)
        .await
        .expect("list_projects should succeed");
    assert_eq!(all.len(), 1);

    let affected = projects::delete_project(&pool, project.id)
        .await
        .expect("delete_project should succeed");
    assert_eq!(affected, 1);
    assert!(
        projects::get_project(&pool, project.id)
            .await
            .expect("get_project should succeed")
            .is_none()
    );

    pool.close().await;
    drop_test_db(&db_name).await;
}
