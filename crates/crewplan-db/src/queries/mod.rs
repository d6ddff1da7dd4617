//! Query functions, one module per table.

pub mod employees;
pub mod memberships;
pub mod projects;
pub mod tasks;
