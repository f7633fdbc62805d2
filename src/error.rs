use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Problems found while validating a single activity record
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ActivityError {
    #[error("activity at index {index} is missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("activity at index {index} has an invalid `{field}`: {reason}")]
    MalformedActivity {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

impl ActivityError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ActivityError::MissingField { field, .. }
            | ActivityError::MalformedActivity { field, .. } => field,
        }
    }

    /// Position of the offending record in `all_activities`
    pub fn index(&self) -> usize {
        match self {
            ActivityError::MissingField { index, .. }
            | ActivityError::MalformedActivity { index, .. } => *index,
        }
    }
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Activity(#[from] ActivityError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message used when the request body is absent
    pub const NO_DATA: &'static str = "No data provided";

    pub fn no_data() -> Self {
        AppError::InvalidRequest(Self::NO_DATA.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::InvalidRequest(msg) if msg == Self::NO_DATA => {
                (StatusCode::BAD_REQUEST, msg.clone(), None)
            }
            AppError::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Invalid request".to_string(),
                Some(msg.clone()),
            ),
            AppError::Activity(ActivityError::MissingField { .. }) => (
                StatusCode::BAD_REQUEST,
                "Missing field".to_string(),
                Some(self.to_string()),
            ),
            AppError::Activity(ActivityError::MalformedActivity { .. }) => (
                StatusCode::BAD_REQUEST,
                "Malformed activity".to_string(),
                Some(self.to_string()),
            ),
            // Details stay in the logs, the caller only learns that it failed
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = match details {
            Some(details) => json!({ "error": error, "details": details }),
            None => json!({ "error": error }),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
