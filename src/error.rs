use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Every failure an announcement operation surfaces to a caller. Nothing is
/// retried internally; a failed operation leaves stored state unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthenticated,
    #[error("Invalid teacher credentials")]
    InvalidCredentials,
    #[error("Invalid {0} datetime format. Use ISO format.")]
    InvalidDatetime(&'static str),
    #[error("Expires datetime must be in the future.")]
    ExpiresNotInFuture,
    #[error("No fields to update")]
    NoFieldsProvided,
    #[error("Invalid announcement id")]
    InvalidId,
    #[error("Announcement not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated | ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::InvalidDatetime(_)
            | ApiError::ExpiresNotInFuture
            | ApiError::NoFieldsProvided
            | ApiError::InvalidId => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
