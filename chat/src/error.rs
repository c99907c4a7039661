use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("invalid input: {0}")]
    InputInvalid(String),

    #[error("prompt of {prompt_tokens} tokens meets or exceeds context limit of {context_limit}")]
    PromptTooLong { prompt_tokens: usize, context_limit: usize },

    #[error(transparent)]
    Tokenization(#[from] tabagent_tokenization::TokenizationError),

    #[error(transparent)]
    Onnx(#[from] tabagent_onnx_loader::OnnxError),

    #[error("generation cancelled")]
    Cancelled,

    #[error("invariant violation: {0}")]
    Internal(String),
}

impl From<ChatError> for common::GatewayError {
    fn from(e: ChatError) -> Self {
        let msg = e.to_string();
        match e {
            ChatError::InputInvalid(m) => common::GatewayError::InputInvalid(m),
            ChatError::PromptTooLong { .. } => common::GatewayError::InputInvalid(msg),
            ChatError::Cancelled => common::GatewayError::Cancelled,
            ChatError::Internal(m) => common::GatewayError::Internal(m),
            _ => common::GatewayError::InferenceFailure(msg),
        }
    }
}
