//! OpenAI-compatible request/response envelopes for the HTTP surface.
//!
//! Plain serde DTOs rather than a polymorphic request/response abstraction:
//! this gateway exposes exactly two inference endpoints, so a generic
//! dispatch layer would be overhead without a second consumer to justify it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingInput {
    One(String),
    Many(Vec<String>),
}

impl EmbeddingInput {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            EmbeddingInput::One(s) => vec![s],
            EmbeddingInput::Many(v) => v,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingsRequest {
    pub input: EmbeddingInput,
    pub model: Option<String>,
    #[serde(default)]
    pub encoding_format: Option<String>,
    #[serde(default)]
    pub dimensions: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct EmbeddingDatum {
    pub object: &'static str,
    pub index: usize,
    pub embedding: Vec<f32>,
}

#[derive(Debug, Serialize)]
pub struct EmbeddingsUsage {
    pub prompt_tokens: usize,
    pub total_tokens: usize,
}

#[derive(Debug, Serialize)]
pub struct EmbeddingsResponse {
    pub object: &'static str,
    pub data: Vec<EmbeddingDatum>,
    pub model: String,
    pub usage: EmbeddingsUsage,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl From<MessageRole> for chat::Role {
    fn from(role: MessageRole) -> Self {
        match role {
            MessageRole::System => chat::Role::System,
            MessageRole::User => chat::Role::User,
            MessageRole::Assistant => chat::Role::Assistant,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: Option<String>,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<usize>,
    #[serde(default)]
    pub top_p: Option<f32>,
    #[serde(default)]
    pub stop: Option<Vec<String>>,
    /// Accepted but ignored: streaming always produces a single-shot response (§6).
    #[serde(default)]
    pub stream: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct ResponseMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatChoice {
    pub index: usize,
    pub message: ResponseMessage,
    pub finish_reason: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ChatUsage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: &'static str,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatChoice>,
    pub usage: ChatUsage,
}

#[derive(Debug, Serialize)]
pub struct ModelDatum {
    pub id: String,
    pub object: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ModelsListResponse {
    pub object: &'static str,
    pub data: Vec<ModelDatum>,
}

#[derive(Debug, Serialize)]
pub struct RegistryEntry {
    pub id: String,
    pub task: String,
    pub backend: String,
    pub dimension: Option<usize>,
    pub license: Option<String>,
    pub revision: Option<String>,
    pub notes: Option<String>,
    pub capabilities: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct MemoryUsage {
    pub used_gb: f64,
    pub total_gb: f64,
    pub percent: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub npu_available: bool,
    pub models_loaded: Vec<String>,
    pub memory_usage: MemoryUsage,
    pub uptime_seconds: u64,
    pub performance_stats: serde_json::Value,
}

pub fn finish_reason_str(reason: chat::FinishReason) -> &'static str {
    match reason {
        chat::FinishReason::Stop => "stop",
        chat::FinishReason::Length => "length",
        chat::FinishReason::Cancelled => "cancelled",
    }
}
