//! ONNX session management with integrated execution-provider selection.

use crate::error::{OnnxError, Result};
use crate::providers_bridge;
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tabagent_execution_providers::ExecutionProvider;

/// A thin wrapper around `ort::Session`: adds hardware-aware provider
/// selection and sensible defaults, while still exposing the raw session for
/// task-specific tensor wiring (embedding pooling, KV-cache decode steps,
/// etc. each live in the crate that owns that shape contract).
#[derive(Clone)]
pub struct OnnxSession {
    model_path: PathBuf,
    session: Arc<Mutex<Session>>,
}

impl OnnxSession {
    /// Loads an ONNX model, auto-selecting execution providers for the
    /// current hardware.
    pub fn load<P: AsRef<Path>>(model_path: P) -> Result<Self> {
        let providers = providers_bridge::auto_select_providers()?;
        Self::load_with_ort_providers(model_path, providers)
    }

    /// Loads an ONNX model with an explicit provider list.
    pub fn load_with_providers<P: AsRef<Path>>(
        model_path: P,
        providers: Vec<Arc<dyn ExecutionProvider>>,
    ) -> Result<Self> {
        let ort_providers = providers_bridge::bridge_to_ort(&providers)?;
        Self::load_with_ort_providers(model_path, ort_providers)
    }

    fn load_with_ort_providers<P: AsRef<Path>>(
        model_path: P,
        ort_providers: Vec<ort::execution_providers::ExecutionProviderDispatch>,
    ) -> Result<Self> {
        let model_path = model_path.as_ref();
        if !model_path.exists() {
            return Err(OnnxError::ModelLoadFailed(format!(
                "model file not found: {:?}",
                model_path
            )));
        }

        log::info!(
            "loading onnx model from {:?} with {} execution providers",
            model_path,
            ort_providers.len()
        );

        let session = Session::builder()
            .map_err(|e| OnnxError::SessionCreationFailed(e.to_string()))?
            .with_execution_providers(&ort_providers)
            .map_err(|e| {
                OnnxError::SessionCreationFailed(format!("failed to set execution providers: {}", e))
            })?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| {
                OnnxError::SessionCreationFailed(format!("failed to set optimization level: {}", e))
            })?
            .with_intra_threads(4)
            .map_err(|e| OnnxError::SessionCreationFailed(format!("failed to set intra threads: {}", e)))?
            .with_inter_threads(2)
            .map_err(|e| OnnxError::SessionCreationFailed(format!("failed to set inter threads: {}", e)))?
            .with_parallel_execution(true)
            .map_err(|e| {
                OnnxError::SessionCreationFailed(format!("failed to enable parallel execution: {}", e))
            })?
            .with_memory_pattern(true)
            .map_err(|e| {
                OnnxError::SessionCreationFailed(format!("failed to enable memory pattern: {}", e))
            })?
            .commit_from_file(model_path)
            .map_err(|e| OnnxError::ModelLoadFailed(e.to_string()))?;

        Ok(Self {
            model_path: model_path.to_path_buf(),
            session: Arc::new(Mutex::new(session)),
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    /// Direct access to the underlying `ort::Session` for task-specific
    /// input/output wiring.
    pub fn session(&self) -> Arc<Mutex<Session>> {
        Arc::clone(&self.session)
    }
}
