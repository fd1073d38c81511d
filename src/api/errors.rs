use crate::errors::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Wire shape for a request the store failed. Absent identifiers never
/// construct one of these; handlers answer those with a bare empty-body
/// 404, so every `ApiError` is a 500.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// What the store reported
    pub error: String,
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(self)).into_response()
    }
}
