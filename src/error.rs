// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;
use crate::services::flow_client::FlowError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),

    #[error("Internal server error: {0}")]
    Flow(#[from] FlowError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidBody(rejection) => rejection.status(),
            // Upstream status codes are not propagated.
            AppError::Flow(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Flow(cause) => tracing::error!(error = ?cause, "run_flow failed"),
            _ => tracing::debug!(%status, error = %self, "rejected request"),
        }

        let body = ErrorBody { detail: self.to_string() };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flow_errors_collapse_to_500() {
        let err = AppError::from(FlowError::Upstream {
            status: StatusCode::UNAUTHORIZED,
            body: "bad token".to_string(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error: Error: 401, bad token");
    }

    #[test]
    fn bad_request_keeps_message() {
        let err = AppError::BadRequest("Message cannot be empty".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Message cannot be empty");
    }
}
