//! Core workflow for crewplan: the planner client seam and the
//! generate-and-assign service that turns a free-text requirements
//! description into committed task rows.

pub mod generate;
pub mod planner;

pub use generate::{GenerateError, generate_and_assign};
pub use planner::{HttpPlanner, PlanProposal, PlannerError, TaskAssignment, TaskPlanner};
