use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use flashquiz_core::CoreError;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("required argument \"{0}\" was missing")]
    Missing(&'static str),

    #[error("required argument \"{0}\" was malformed")]
    Malformed(&'static str),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Missing(_) | ApiError::Malformed(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, msg.to_string())
            }
            ApiError::Core(CoreError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "name not found".to_string())
            }
            ApiError::Core(e) => {
                error!(error = %e, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, body).into_response()
    }
}
