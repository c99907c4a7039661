//! The Model Service: a process-wide `model_id -> LoadedModel` map.
//!
//! Loading and unloading hold a single process-wide lock so two concurrent
//! loads of the same id never double-initialize sessions; reads clone a
//! cheap `Arc` handle under the same lock and release it immediately.

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use parking_lot::Mutex;
use tabagent_model_registry::{ModelRegistry, ModelSpec, Task};

use chat::{ChatBackend, OnnxChatBackend};
use embedding::{EmbeddingBackend, OnnxEmbeddingBackend};
use tabagent_tokenization::DEFAULT_MAX_SEQ_LEN;

use crate::error::{ModelServiceError, Result};

/// Default LRU capacity for a freshly loaded embedding model.
const DEFAULT_EMBEDDING_CACHE_CAPACITY: usize = 1024;

#[derive(Clone)]
pub enum LoadedBackend {
    Embedding(Arc<dyn EmbeddingBackend>),
    Chat(Arc<dyn ChatBackend>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStatus {
    Loaded,
    Error(String),
}

#[derive(Clone)]
pub struct ModelEntry {
    pub spec: ModelSpec,
    pub status: ModelStatus,
    pub backend: Option<LoadedBackend>,
}

pub struct ModelService {
    registry: ModelRegistry,
    entries: Mutex<HashMap<String, ModelEntry>>,
    chat_seed: AtomicU64,
}

impl ModelService {
    pub fn new(registry: ModelRegistry) -> Self {
        Self {
            registry,
            entries: Mutex::new(HashMap::new()),
            chat_seed: AtomicU64::new(0x9E37_79B9_7F4A_7C15),
        }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Loads `id` from `model_dir`. Idempotent: a call for an id already at
    /// status `Loaded` returns immediately without reloading.
    pub fn load(&self, id: &str, model_dir: impl AsRef<Path>) -> Result<()> {
        let spec = self.registry.get(id)?.clone();
        let mut entries = self.entries.lock();

        if let Some(existing) = entries.get(id) {
            if existing.status == ModelStatus::Loaded {
                return Ok(());
            }
        }

        let model_dir = model_dir.as_ref();
        let loaded = match spec.task {
            Task::Embedding => {
                let dimension = spec.dimension.unwrap_or(0);
                let max_seq_len = spec
                    .capability("max_sequence_length")
                    .and_then(|v| v.as_u64())
                    .map(|v| v as usize)
                    .unwrap_or(DEFAULT_MAX_SEQ_LEN);
                OnnxEmbeddingBackend::load(model_dir, dimension, max_seq_len, DEFAULT_EMBEDDING_CACHE_CAPACITY)
                    .map(|b| LoadedBackend::Embedding(Arc::new(b) as Arc<dyn EmbeddingBackend>))
                    .map_err(|e| e.to_string())
            }
            Task::Chat => {
                let seed = self.chat_seed.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                OnnxChatBackend::load(model_dir, seed)
                    .map(|b| LoadedBackend::Chat(Arc::new(b) as Arc<dyn ChatBackend>))
                    .map_err(|e| e.to_string())
            }
        };

        match loaded {
            Ok(backend) => {
                entries.insert(
                    id.to_string(),
                    ModelEntry { spec, status: ModelStatus::Loaded, backend: Some(backend) },
                );
                tracing::info!(model_id = id, "model loaded");
                Ok(())
            }
            Err(reason) => {
                entries.insert(
                    id.to_string(),
                    ModelEntry { spec, status: ModelStatus::Error(reason.clone()), backend: None },
                );
                tracing::error!(model_id = id, error = %reason, "model load failed");
                Err(ModelServiceError::LoadFailed { model_id: id.to_string(), reason })
            }
        }
    }

    /// Releases a loaded model's sessions and drops its entry.
    pub fn unload(&self, id: &str) -> Result<()> {
        let mut entries = self.entries.lock();
        if entries.remove(id).is_none() {
            return Err(ModelServiceError::NotLoaded(id.to_string()));
        }
        tracing::info!(model_id = id, "model unloaded");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<ModelEntry> {
        self.entries.lock().get(id).cloned()
    }

    /// Loaded-state entries, optionally filtered by task, in registry
    /// declaration order.
    pub fn list(&self, task: Option<Task>) -> Vec<ModelEntry> {
        let entries = self.entries.lock();
        self.registry
            .list(task)
            .into_iter()
            .filter_map(|spec| entries.get(&spec.model_id).cloned())
            .collect()
    }

    /// The first successfully loaded model for `task`, in registry
    /// declaration order.
    pub fn default_for(&self, task: Task) -> Result<LoadedBackend> {
        let entries = self.entries.lock();
        for spec in self.registry.list(Some(task)) {
            if let Some(entry) = entries.get(&spec.model_id) {
                if entry.status == ModelStatus::Loaded {
                    if let Some(backend) = &entry.backend {
                        return Ok(backend.clone());
                    }
                }
            }
        }
        Err(ModelServiceError::NoDefaultForTask(task.to_string()))
    }

    /// Resolves a request's model id: the given id if loaded, else the task
    /// default. Falls back to the requested id string in the error so the
    /// router can report it in a 503.
    pub fn resolve(&self, requested: Option<&str>, task: Task) -> Result<LoadedBackend> {
        if let Some(id) = requested {
            let entries = self.entries.lock();
            if let Some(entry) = entries.get(id) {
                if entry.status == ModelStatus::Loaded {
                    if let Some(backend) = &entry.backend {
                        return Ok(backend.clone());
                    }
                }
                return Err(ModelServiceError::NotLoaded(id.to_string()));
            }
            drop(entries);
        }
        self.default_for(task)
    }
}
