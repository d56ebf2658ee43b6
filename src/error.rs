use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("ValidationError: {0}")]
    Validation(String),
    #[error("NotFoundError: {0}")]
    NotFound(String),
    #[error("StorageError: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ApiError {
    pub fn missing_field(field: &str) -> Self {
        ApiError::Validation(format!("'{}' is required", field))
    }

    pub fn rating_out_of_range() -> Self {
        ApiError::Validation("'rating' must be a number between 0 and 5".to_string())
    }

    pub fn empty_update() -> Self {
        ApiError::Validation(
            "Request body must contain either 'title', 'url', 'description' or 'rating'".to_string(),
        )
    }

    pub fn bookmark_not_found() -> Self {
        ApiError::NotFound("Bookmark not found".to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(msg) | ApiError::NotFound(msg) => {
                tracing::error!(status = status.as_u16(), "{}", msg);
                ErrorResponse::new(msg)
            }
            ApiError::Storage(e) => {
                tracing::error!(error = %crate::unpack_error(&**e), "storage failure");
                ErrorResponse::new("server error")
            }
        };

        (status, Json(body)).into_response()
    }
}
