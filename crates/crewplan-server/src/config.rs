//! Planner endpoint resolution: CLI flag > env var > default.

/// Default planner endpoint, matching the companion chat service.
pub const DEFAULT_PLANNER_URL: &str = "http://localhost:8000/chat";

/// Environment variable overriding the planner endpoint.
pub const PLANNER_URL_ENV: &str = "CREWPLAN_PLANNER_URL";

/// Resolve the planner endpoint from an optional CLI flag, the environment,
/// or the compile-time default, in that order.
pub fn resolve_planner_url(flag: Option<String>) -> String {
    flag.or_else(|| std::env::var(PLANNER_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_PLANNER_URL.to_owned())
}
