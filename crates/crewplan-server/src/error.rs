use axum::http::StatusCode;
use axum::response::IntoResponse;

use crewplan_core::GenerateError;

/// Plain-text error responses with a status in {400, 404, 500}.
///
/// Store and planner failures are not distinguished on the wire, only in
/// logs.
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
        }
    }

    pub fn internal(err: anyhow::Error) -> Self {
        tracing::error!("request failed: {err:#}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("{err:#}"),
        }
    }

    /// Map a generation failure. All variants are 500s; the classification
    /// (planner timeout vs rejection vs resolution failure) lands in logs.
    pub fn from_generate(err: GenerateError) -> Self {
        tracing::error!("task generation failed: {err}");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("task generation failed: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
