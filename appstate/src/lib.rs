//! The Model Service: process-wide model lifecycle management composing the
//! model registry with the embedding and chat backends.
//!
//! `appstate` sits between the HTTP router and the inference backends:
//!
//! ```text
//! api (router, HTTP surface)
//!      |
//! appstate (this crate: ModelService + AppState)
//!      |
//! embedding, chat, tabagent-model-registry, tabagent-hardware
//! ```

pub mod error;
pub mod service;

pub use error::{ModelServiceError, Result};
pub use service::{LoadedBackend, ModelEntry, ModelService, ModelStatus};

use std::sync::Arc;
use std::time::Instant;

use tabagent_hardware::SystemInfo;
use tabagent_model_registry::ModelRegistry;

/// Shared state handed to every HTTP handler: the Model Service plus
/// process-level facts the `/health` endpoint reports.
#[derive(Clone)]
pub struct AppState {
    pub models: Arc<ModelService>,
    pub hardware: Arc<SystemInfo>,
    started_at: Instant,
}

impl AppState {
    pub fn new(hardware: SystemInfo) -> Self {
        Self {
            models: Arc::new(ModelService::new(ModelRegistry::seeded())),
            hardware: Arc::new(hardware),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
