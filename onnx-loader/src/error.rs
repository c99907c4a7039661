use thiserror::Error;

pub type Result<T> = std::result::Result<T, OnnxError>;

#[derive(Error, Debug)]
pub enum OnnxError {
    #[error("failed to load model: {0}")]
    ModelLoadFailed(String),

    #[error("failed to create session: {0}")]
    SessionCreationFailed(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),

    #[error("tokenization error: {0}")]
    TokenizationError(#[from] tabagent_tokenization::TokenizationError),

    #[error("tokenizer load failed: {0}")]
    TokenizerLoadFailed(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("model not loaded")]
    ModelNotLoaded,

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}
