use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde_json::json;
use thiserror::Error;

/// Errors a route can answer with
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0:?} is not a course code")]
    InvalidCourseCode(String),

    #[error("the request took too long")]
    Timeout,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCourseCode(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{self}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
