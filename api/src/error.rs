//! RFC-7807 problem-details mapping for [`common::GatewayError`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub struct ApiError {
    inner: common::GatewayError,
    request_id: String,
}

impl ApiError {
    pub fn new(inner: common::GatewayError) -> Self {
        Self { inner, request_id: uuid::Uuid::new_v4().to_string() }
    }

    fn status(&self) -> StatusCode {
        match &self.inner {
            common::GatewayError::InputInvalid(_) => StatusCode::BAD_REQUEST,
            common::GatewayError::ModelUnavailable(_) | common::GatewayError::AssetMissing(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            // 499 isn't a registered IANA status; axum exposes it via from_u16.
            common::GatewayError::Cancelled => StatusCode::from_u16(499).unwrap(),
            common::GatewayError::InferenceFailure(_) | common::GatewayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Serialize)]
struct ProblemDetails {
    #[serde(rename = "type")]
    problem_type: String,
    title: String,
    status: u16,
    detail: String,
    request_id: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(request_id = %self.request_id, kind = self.inner.kind(), error = %self.inner, "request failed");
        let body = ProblemDetails {
            problem_type: format!("https://tabagent.dev/errors/{}", self.inner.kind()),
            title: self.inner.kind().replace('_', " "),
            status: status.as_u16(),
            detail: self.inner.to_string(),
            request_id: self.request_id,
        };
        (status, Json(body)).into_response()
    }
}

impl From<common::GatewayError> for ApiError {
    fn from(inner: common::GatewayError) -> Self {
        Self::new(inner)
    }
}

impl From<appstate::ModelServiceError> for ApiError {
    fn from(e: appstate::ModelServiceError) -> Self {
        Self::new(e.into())
    }
}

impl From<embedding::EmbeddingError> for ApiError {
    fn from(e: embedding::EmbeddingError) -> Self {
        Self::new(e.into())
    }
}

impl From<chat::ChatError> for ApiError {
    fn from(e: chat::ChatError) -> Self {
        Self::new(e.into())
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
