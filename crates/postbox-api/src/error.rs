use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use postbox_db::StoreError;
use postbox_types::api::ErrorResponse;

/// The two ways `POST /api/messages` can fail.
///
/// The display strings are the exact bodies the caller sees; a store
/// failure never carries its cause past this boundary (the gateway already
/// logged it for operators).
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("All fields are required")]
    Validation,
    #[error("Failed to save message")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
