use crate::http::responses::ErrorResponse;
use crate::openweather::errors::UpstreamError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

/// Every way an API request can fail. Each one is rendered as `{"error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No location provided")]
    NoLocationProvided,
    #[error("Latitude or longitude missing")]
    CoordinatesMissing,
    #[error("Location not found")]
    LocationNotFound,
    #[error("{0}")]
    Upstream(String),
    #[error("Server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoLocationProvided | Self::CoordinatesMissing => StatusCode::BAD_REQUEST,
            Self::LocationNotFound => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::Request(description) => Self::Upstream(description),
            UpstreamError::Decode(description) => Self::Internal(description),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "Request failed.");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
