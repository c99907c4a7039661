use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelServiceError>;

#[derive(Debug, Error)]
pub enum ModelServiceError {
    #[error("model not found: {0}")]
    NotFound(String),

    #[error("no loaded default model for task {0}")]
    NoDefaultForTask(String),

    #[error("model {model_id} failed to load: {reason}")]
    LoadFailed { model_id: String, reason: String },

    #[error("model {0} is not currently loaded")]
    NotLoaded(String),

    #[error("model {model_id} is registered for task {registered}, requested as {requested}")]
    TaskMismatch {
        model_id: String,
        registered: &'static str,
        requested: &'static str,
    },
}

impl From<tabagent_model_registry::RegistryError> for ModelServiceError {
    fn from(e: tabagent_model_registry::RegistryError) -> Self {
        match e {
            tabagent_model_registry::RegistryError::NotFound(id) => ModelServiceError::NotFound(id),
        }
    }
}

impl From<ModelServiceError> for common::GatewayError {
    fn from(e: ModelServiceError) -> Self {
        let msg = e.to_string();
        match e {
            ModelServiceError::NotFound(m) => common::GatewayError::ModelUnavailable(m),
            ModelServiceError::NoDefaultForTask(t) => common::GatewayError::ModelUnavailable(format!(
                "no default model loaded for task {t}"
            )),
            ModelServiceError::NotLoaded(m) => common::GatewayError::ModelUnavailable(m),
            ModelServiceError::LoadFailed { model_id, reason } => {
                common::GatewayError::AssetMissing(format!("{model_id}: {reason}"))
            }
            ModelServiceError::TaskMismatch { .. } => common::GatewayError::InputInvalid(msg),
        }
    }
}
