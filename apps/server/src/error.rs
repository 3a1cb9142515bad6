use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

/// Application errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Data source error: {0}")]
    DataFetch(String),

    #[error("Malformed ticket data: {0}")]
    MalformedData(String),

    #[error("Ticket {ticket_id} has invalid priority {priority} (expected 0-4)")]
    InvalidPriority { ticket_id: String, priority: i64 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable error type name used in JSON error bodies
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::DataFetch(_) => "DataFetchError",
            AppError::MalformedData(_) => "MalformedDataError",
            AppError::InvalidPriority { .. } => "InvalidPriorityError",
            AppError::Validation(_) => "ValidationError",
            AppError::Internal(_) => "InternalError",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::DataFetch(_) => StatusCode::BAD_GATEWAY,
            AppError::MalformedData(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidPriority { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let response = ErrorResponse {
            error: ErrorDetail {
                error_type: self.error_type().to_string(),
                message: self.to_string(),
            },
        };

        HttpResponse::build(self.status_code()).json(response)
    }
}

/// Result type alias for handlers and services
pub type AppResult<T> = Result<T, AppError>;
