//! Application error type mapping service failures to HTTP responses.
//!
//! Errors are rendered as `{"detail": "..."}`, the shape the widget's
//! fetch code already understands.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use chatwidget_core::service::ServiceError;

#[derive(Debug)]
pub enum AppError {
    Service(ServiceError),
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        AppError::Service(e)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Service(ServiceError::EmptyMessage) => StatusCode::BAD_REQUEST,
            AppError::Service(ServiceError::Provider(_)) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let AppError::Service(error) = self;
        (status, Json(json!({ "detail": error.to_string() }))).into_response()
    }
}
