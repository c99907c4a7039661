//! Chat generation pipeline: prompt build -> prefill -> KV-cache threaded
//! autoregressive decode -> sampling -> stop handling.
//!
//! Mirrors the `embedding` crate's shape: a narrow [`ChatBackend`] trait with
//! [`OnnxChatBackend`] as the concrete implementation, composed by the Model
//! Service without sharing state across model instances.

pub mod backend;
pub mod error;
pub mod kv_cache;
pub mod perf;
pub mod prompt;
pub mod sampler;

pub use backend::{
    ChatBackend, ChatRequest, ChatResult, FinishReason, OnnxChatBackend, CHAT_PROVIDER, DEFAULT_CONTEXT_LIMIT,
    DEFAULT_MAX_NEW_TOKENS,
};
pub use error::{ChatError, Result};
pub use perf::ChatPerf;
pub use prompt::{build_prompt, ChatMessage, Role};
pub use sampler::Sampler;
