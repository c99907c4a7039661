//! Gateway server binary wiring: CLI parsing, tracing init, model loading
//! and HTTP server startup. Business logic lives in `appstate` and `api`.

pub mod config;

pub use config::CliArgs;

use anyhow::Context;

use appstate::AppState;
use tabagent_api::ApiConfig;
use tabagent_model_registry::Task;

/// Initializes structured logging per §10.1: `EnvFilter` from `RUST_LOG`
/// (or `args.log_level` as a default directive), `fmt` layer, `tower_http`
/// defaulted to `debug` so request spans are visible without extra flags.
pub fn init_tracing(log_level: &str) {
    common::logging::init_tracing(&format!("{log_level},tower_http=debug"));
}

/// Builds the process `AppState` and eagerly loads whichever models were
/// resolved from configuration. A model that fails to load is recorded at
/// `ModelStatus::Error` rather than aborting startup -- the gateway still
/// serves `/health` and the other task's model.
pub async fn build_app_state(args: &CliArgs) -> anyhow::Result<AppState> {
    let hardware = tabagent_hardware::detect_system().context("failed to detect system hardware")?;
    let app = AppState::new(hardware);

    if let Some(path) = args.resolved_embedding_model_path() {
        let registry_id =
            app.models.registry().list(Some(Task::Embedding)).first().map(|spec| spec.model_id.clone());
        if let Some(id) = registry_id {
            if let Err(e) = app.models.load(&id, &path) {
                tracing::warn!(model_id = %id, path = %path.display(), error = %e, "embedding model failed to load");
            }
        }
    } else {
        tracing::warn!("no embedding model path resolved; /v1/embeddings will return 503 until one is loaded");
    }

    if let Some(path) = args.resolved_chat_model_path() {
        let registry_id = app.models.registry().list(Some(Task::Chat)).first().map(|spec| spec.model_id.clone());
        if let Some(id) = registry_id {
            if let Err(e) = app.models.load(&id, &path) {
                tracing::warn!(model_id = %id, path = %path.display(), error = %e, "chat model failed to load");
            }
        }
    } else {
        tracing::warn!("no chat model path resolved; /v1/chat/completions will return 503 until one is loaded");
    }

    Ok(app)
}

/// Runs the gateway until the process receives a shutdown signal.
pub async fn run(args: CliArgs) -> anyhow::Result<()> {
    let app = build_app_state(&args).await.context("failed to initialize model service")?;

    let api_config = ApiConfig {
        host: args.host.clone(),
        port: args.port,
        cors_origins: vec!["*".to_string()],
        api_key: args.api_key.clone(),
        chat_timeout: std::time::Duration::from_secs(args.chat_timeout_secs),
        embedding_timeout: std::time::Duration::from_secs(args.embedding_timeout_secs),
    };

    tabagent_api::run_server(app, api_config).await
}
