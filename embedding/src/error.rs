use thiserror::Error;

pub type Result<T> = std::result::Result<T, EmbeddingError>;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Tokenization(#[from] tabagent_tokenization::TokenizationError),

    #[error(transparent)]
    Onnx(#[from] tabagent_onnx_loader::OnnxError),

    #[error("invariant violation: {0}")]
    Internal(String),
}

impl From<EmbeddingError> for common::GatewayError {
    fn from(e: EmbeddingError) -> Self {
        match e {
            EmbeddingError::InvalidInput(m) => common::GatewayError::InputInvalid(m),
            EmbeddingError::Internal(m) => common::GatewayError::Internal(m),
            other => common::GatewayError::InferenceFailure(other.to_string()),
        }
    }
}
