//! Gateway-wide error taxonomy.
//!
//! One `thiserror` enum shared by every backend so the HTTP layer can apply
//! a single, stable status-code mapping regardless of which backend raised
//! the error. Backends never swallow an `InferenceFailure`; they log it with
//! structured fields and return it up the call chain.

use thiserror::Error;

/// The gateway's error taxonomy.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Empty input batch, batch over the configured limit, prompt exceeds
    /// context, malformed message roles, etc.
    #[error("invalid input: {0}")]
    InputInvalid(String),

    /// Requested `model_id` not loaded and no task default available.
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    /// A referenced on-disk artifact was not found at load time.
    #[error("asset missing: {0}")]
    AssetMissing(String),

    /// An ONNX `run` raised or produced wrong-shaped outputs.
    #[error("inference failure: {0}")]
    InferenceFailure(String),

    /// The caller's deadline elapsed or the request was abandoned.
    #[error("cancelled")]
    Cancelled,

    /// An invariant was violated (e.g. pooled vector length != declared dimension).
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// A short machine-stable tag for the error's taxonomy bucket, used in
    /// structured log fields and RFC-7807 `type` URIs.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::InputInvalid(_) => "input_invalid",
            GatewayError::ModelUnavailable(_) => "model_unavailable",
            GatewayError::AssetMissing(_) => "asset_missing",
            GatewayError::InferenceFailure(_) => "inference_failure",
            GatewayError::Cancelled => "cancelled",
            GatewayError::Internal(_) => "internal",
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
