//! Router assembly: binds the Model Service state to the HTTP surface.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use appstate::AppState;

use crate::config::ApiConfig;
use crate::middleware::auth::require_api_key;
use crate::routes;

/// Shared state every handler extracts: the Model Service, the API-key the
/// auth middleware checks incoming requests against, and the per-route
/// request deadlines (§5 "Cancellation and timeouts").
#[derive(Clone)]
pub struct RouterState {
    pub app: Arc<AppState>,
    pub api_key: Option<Arc<str>>,
    pub chat_timeout: std::time::Duration,
    pub embedding_timeout: std::time::Duration,
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.cors_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config.cors_origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

/// Builds the full router: routes, tracing, CORS, and the bearer-token guard.
///
/// Middleware is layered before `.with_state` so the auth layer can see the
/// typed `RouterState` rather than an erased request body.
pub fn build_router(app: AppState, config: &ApiConfig) -> Router {
    let state = RouterState {
        app: Arc::new(app),
        api_key: config.api_key.clone().map(Arc::from),
        chat_timeout: config.chat_timeout,
        embedding_timeout: config.embedding_timeout,
    };

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/v1/models", get(routes::models::list_models))
        .route("/v1/models/registry", get(routes::models::list_registry))
        .route("/v1/embeddings", post(routes::embeddings::create_embeddings))
        .route("/v1/chat/completions", post(routes::chat::create_chat_completion))
        .layer(axum::middleware::from_fn_with_state(state.clone(), require_api_key))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(false))
                .on_response(DefaultOnResponse::new()),
        )
        .layer(cors_layer(config))
        .with_state(state)
}
