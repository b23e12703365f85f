use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::ServiceError;
use thiserror::Error;
use tracing::error;

/// Service failure on its way out as an HTTP response.
///
/// `OutOfRange` maps to 400, `NotFound` to 404; every other failure is
/// reported as a generic 400.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            ServiceError::OutOfRange(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Persistence(_) | ServiceError::Unknown(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self(e) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.0.to_string();
        error!(status = status.as_u16(), error = %msg, "request failed");
        (status, Json(ErrorBody::new(msg))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("database unavailable: {0}")]
    Database(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ApiError(ServiceError::out_of_range("price")).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError(ServiceError::not_found("product")).status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError(ServiceError::Unknown("boom".into())).status(), StatusCode::BAD_REQUEST);
    }
}
