use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Role of an employee.
///
/// Stored and serialized as the upper-case wire values the frontend already
/// speaks (`PROJECT_MANAGER`, `DEVELOPER`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeRole {
    ProjectManager,
    Developer,
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ProjectManager => "PROJECT_MANAGER",
            Self::Developer => "DEVELOPER",
        };
        f.write_str(s)
    }
}

impl FromStr for EmployeeRole {
    type Err = EmployeeRoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PROJECT_MANAGER" => Ok(Self::ProjectManager),
            "DEVELOPER" => Ok(Self::Developer),
            other => Err(EmployeeRoleParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`EmployeeRole`] string.
#[derive(Debug, Clone)]
pub struct EmployeeRoleParseError(pub String);

impl fmt::Display for EmployeeRoleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid employee role: {:?}", self.0)
    }
}

impl std::error::Error for EmployeeRoleParseError {}

// ---------------------------------------------------------------------------

/// Status of a task.
///
/// The reference system stored this as a free-form string; it is constrained
/// to three variants here, with the wire values unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "text", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        };
        f.write_str(s)
    }
}

impl FromStr for TaskStatus {
    type Err = TaskStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            other => Err(TaskStatusParseError(other.to_owned())),
        }
    }
}

/// Error returned when parsing an invalid [`TaskStatus`] string.
#[derive(Debug, Clone)]
pub struct TaskStatusParseError(pub String);

impl fmt::Display for TaskStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid task status: {:?}", self.0)
    }
}

impl std::error::Error for TaskStatusParseError {}

// ---------------------------------------------------------------------------
// Row structs
// ---------------------------------------------------------------------------

/// An employee. `skills` is a free-form tag set consulted only for prompt
/// construction during task generation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: EmployeeRole,
    pub skills: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A project. `lead_id` references an employee but is not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub lead_id: i64,
    pub created_at: DateTime<Utc>,
}

/// A task scoped to a project and assigned to an employee.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub assigned_to: i64,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// A row of the employee<->project membership relation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectMember {
    pub employee_id: i64,
    pub project_id: i64,
}

/// Name and skill tags of a project member, as consumed by prompt
/// construction.
#[derive(Debug, Clone, FromRow)]
pub struct MemberSkills {
    pub name: String,
    pub skills: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
