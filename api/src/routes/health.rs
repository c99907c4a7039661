use axum::extract::State;
use axum::Json;

use crate::dto::{HealthResponse, MemoryUsage};
use crate::router::RouterState;

/// Probes whether an Apple Neural Engine (CoreML) or Windows NPU-capable
/// (DirectML) execution provider is usable on this host.
fn npu_available() -> bool {
    use tabagent_execution_providers::{CoreMLExecutionProvider, DirectMLExecutionProvider};

    let coreml = CoreMLExecutionProvider::new().build();
    let directml = DirectMLExecutionProvider::new().build();
    coreml.is_available().unwrap_or(false) || directml.is_available().unwrap_or(false)
}

pub async fn health(State(state): State<RouterState>) -> Json<HealthResponse> {
    let models_loaded: Vec<String> =
        state.app.models.list(None).into_iter().map(|entry| entry.spec.model_id).collect();

    let mem = &state.app.hardware.memory;
    let total_gb = mem.total_ram_mb as f64 / 1024.0;
    let used_gb = mem.used_ram_mb as f64 / 1024.0;
    let percent = if mem.total_ram_mb > 0 {
        (mem.used_ram_mb as f64 / mem.total_ram_mb as f64) * 100.0
    } else {
        0.0
    };

    // §10.5: aggregate the last-seen perf map from every loaded backend,
    // embedding and chat alike, rather than a separate metrics pipeline.
    let mut performance_stats = serde_json::Map::new();
    for entry in state.app.models.list(None) {
        let perf_json = match &entry.backend {
            Some(appstate::LoadedBackend::Embedding(backend)) => {
                backend.last_perf().and_then(|perf| serde_json::to_value(&perf).ok())
            }
            Some(appstate::LoadedBackend::Chat(backend)) => {
                backend.last_perf().and_then(|perf| serde_json::to_value(&perf).ok())
            }
            None => None,
        };
        if let Some(value) = perf_json {
            performance_stats.insert(entry.spec.model_id, value);
        }
    }

    Json(HealthResponse {
        status: "ok",
        npu_available: npu_available(),
        models_loaded,
        memory_usage: MemoryUsage { used_gb, total_gb, percent },
        uptime_seconds: state.app.uptime_secs(),
        performance_stats: serde_json::Value::Object(performance_stats),
    })
}
