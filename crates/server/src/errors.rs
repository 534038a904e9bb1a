use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ApiResponse;
use service::errors::ServiceError;
use tracing::error;

/// Transport wrapper for service errors: the single place a [`ServiceError`]
/// kind becomes an HTTP status and an error envelope.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ServiceError::Conflict(_)
            | ServiceError::Hash(_)
            | ServiceError::Token(_)
            | ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        error!(error = %self.0, "request failed");
        (status, Json(ApiResponse::<()>::error(self.0.to_string()))).into_response()
    }
}

/// Request-shape validation failures surface before any service runs.
pub fn validation_failure(err: validator::ValidationErrors) -> ApiError {
    ApiError(ServiceError::Validation(err.to_string()))
}
