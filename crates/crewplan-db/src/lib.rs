//! Entity store for crewplan: connection pooling, embedded migrations, row
//! models, and query functions for the employees / projects / tasks tables
//! and the project membership relation.

pub mod config;
pub mod models;
pub mod pool;
pub mod queries;
