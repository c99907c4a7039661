use axum::extract::State;
use axum::Json;

use tabagent_model_registry::Task;

use crate::dto::{ModelDatum, ModelsListResponse, RegistryEntry};
use crate::router::RouterState;

/// `GET /v1/models` — OpenAI-shaped listing of every registry entry,
/// regardless of load state (a model not yet loaded is still addressable).
pub async fn list_models(State(state): State<RouterState>) -> Json<ModelsListResponse> {
    let data = state
        .app
        .models
        .registry()
        .list(None)
        .into_iter()
        .map(|spec| ModelDatum { id: spec.model_id.clone(), object: "model" })
        .collect();

    Json(ModelsListResponse { object: "list", data })
}

/// `GET /v1/models/registry` — the extended catalog view (§6): static
/// descriptors plus capability map, independent of current load state.
pub async fn list_registry(State(state): State<RouterState>) -> Json<Vec<RegistryEntry>> {
    let entries = state
        .app
        .models
        .registry()
        .list(None)
        .into_iter()
        .map(|spec| RegistryEntry {
            id: spec.model_id.clone(),
            task: task_str(spec.task).to_string(),
            backend: "onnx".to_string(),
            dimension: spec.dimension,
            license: spec.license.clone(),
            revision: spec.revision.clone(),
            notes: spec.notes.clone(),
            capabilities: spec.capabilities.clone(),
        })
        .collect();

    Json(entries)
}

fn task_str(task: Task) -> &'static str {
    match task {
        Task::Embedding => "embedding",
        Task::Chat => "chat",
    }
}
