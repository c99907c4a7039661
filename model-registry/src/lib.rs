//! Static catalog of known models.
//!
//! The registry is the process-wide, immutable source of truth for *what
//! models the gateway knows how to serve*. It does not load anything --
//! loading sessions and owning backend instances is the Model Service's job
//! (see the `appstate` crate). The registry only answers "does this id
//! exist, and what are its static properties".

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The two workload families the gateway serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Task {
    Embedding,
    Chat,
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Task::Embedding => write!(f, "embedding"),
            Task::Chat => write!(f, "chat"),
        }
    }
}

/// Implementation tag for a model's backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// Local ONNX Runtime session(s).
    Onnx,
}

/// Immutable descriptor of a known model.
///
/// Seeded at startup and never mutated; `model_id` is the stable key callers
/// address the model by, independent of what the on-disk artifact actually
/// is (see `phi-3-mini-4k` below for why that distinction matters).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    pub model_id: String,
    pub task: Task,
    pub backend: Backend,
    /// Embedding dimension; `None` for chat models.
    pub dimension: Option<usize>,
    pub path: PathBuf,
    /// Free-form capability map: context length, batch-optimal hint, pooling
    /// mode, etc. Kept as JSON so new capability keys don't require a schema
    /// migration.
    pub capabilities: serde_json::Map<String, serde_json::Value>,
    pub revision: Option<String>,
    pub license: Option<String>,
    pub notes: Option<String>,
}

impl ModelSpec {
    pub fn capability(&self, key: &str) -> Option<&serde_json::Value> {
        self.capabilities.get(key)
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("model not found: {0}")]
    NotFound(String),
}

/// Static `model_id -> ModelSpec` catalog.
///
/// Insertion order is the declaration order below, which `list()` preserves.
pub struct ModelRegistry {
    entries: Vec<ModelSpec>,
}

impl ModelRegistry {
    /// Builds the catalog matching the shipped model assets.
    pub fn seeded() -> Self {
        let mut caps = serde_json::Map::new();
        caps.insert("pooling".into(), serde_json::json!("cls"));
        caps.insert("max_sequence_length".into(), serde_json::json!(512));
        caps.insert("batch_optimal_hint".into(), serde_json::json!(4));

        let embedding = ModelSpec {
            model_id: "bge-small-en-v1.5".to_string(),
            task: Task::Embedding,
            backend: Backend::Onnx,
            dimension: Some(384),
            path: PathBuf::from("models/bge-small-en-v1.5"),
            capabilities: caps,
            revision: None,
            license: Some("MIT".to_string()),
            notes: None,
        };

        let mut chat_caps = serde_json::Map::new();
        chat_caps.insert("context_length".into(), serde_json::json!(32_768));
        chat_caps.insert("kv_layers".into(), serde_json::json!(30));
        chat_caps.insert("kv_heads".into(), serde_json::json!(2));
        chat_caps.insert("kv_head_dim".into(), serde_json::json!(256));

        let chat = ModelSpec {
            model_id: "phi-3-mini-4k".to_string(),
            task: Task::Chat,
            backend: Backend::Onnx,
            dimension: None,
            path: PathBuf::from("models/phi-3-mini-4k"),
            capabilities: chat_caps,
            revision: None,
            license: Some("MIT".to_string()),
            // The registry id is a legacy label that predates the current
            // export: the actual on-disk artifact and KV-cache shape are a
            // thirty-layer Gemma-family decoder (see chat::kv_cache). Kept
            // rather than silently renamed so existing callers that address
            // the model by `phi-3-mini-4k` keep working. See DESIGN.md.
            notes: Some(
                "on-disk artifact and runtime shape are Gemma-family (30 layers, head_dim 256, \
                 context 32768); registry id kept for backward compatibility"
                    .to_string(),
            ),
        };

        Self {
            entries: vec![embedding, chat],
        }
    }

    pub fn get(&self, id: &str) -> Result<&ModelSpec, RegistryError> {
        self.entries
            .iter()
            .find(|m| m.model_id == id)
            .ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }

    /// Lists entries, optionally filtered by task, preserving declaration order.
    pub fn list(&self, task: Option<Task>) -> Vec<&ModelSpec> {
        self.entries
            .iter()
            .filter(|m| task.map_or(true, |t| m.task == t))
            .collect()
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_registry_has_both_tasks() {
        let reg = ModelRegistry::seeded();
        assert!(reg.get("bge-small-en-v1.5").is_ok());
        assert!(reg.get("phi-3-mini-4k").is_ok());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let reg = ModelRegistry::seeded();
        assert!(matches!(reg.get("nope"), Err(RegistryError::NotFound(_))));
    }

    #[test]
    fn list_filters_by_task() {
        let reg = ModelRegistry::seeded();
        let embeddings = reg.list(Some(Task::Embedding));
        assert_eq!(embeddings.len(), 1);
        assert_eq!(embeddings[0].model_id, "bge-small-en-v1.5");

        let chat = reg.list(Some(Task::Chat));
        assert_eq!(chat.len(), 1);
        assert_eq!(chat[0].model_id, "phi-3-mini-4k");
    }

    #[test]
    fn list_preserves_declaration_order() {
        let reg = ModelRegistry::seeded();
        let all = reg.list(None);
        assert_eq!(all[0].model_id, "bge-small-en-v1.5");
        assert_eq!(all[1].model_id, "phi-3-mini-4k");
    }

    #[test]
    fn embedding_dimension_is_set_chat_is_not() {
        let reg = ModelRegistry::seeded();
        assert_eq!(reg.get("bge-small-en-v1.5").unwrap().dimension, Some(384));
        assert_eq!(reg.get("phi-3-mini-4k").unwrap().dimension, None);
    }
}
