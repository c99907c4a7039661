//! HTTP surface for the inference gateway: two OpenAI-compatible endpoints
//! (`/v1/embeddings`, `/v1/chat/completions`) plus model listing and health
//! (§4.8 Request Router, §6 External Interfaces).

pub mod config;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use router::{build_router, RouterState};

use std::net::SocketAddr;

use appstate::AppState;

/// Binds and serves the router until the process is terminated.
pub async fn run_server(app: AppState, config: ApiConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "gateway listening");

    let router = build_router(app, &config);
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_app() -> AppState {
        AppState::new(tabagent_hardware::detect_system().expect("hardware detection"))
    }

    #[tokio::test]
    async fn health_is_reachable_without_auth() {
        let config = ApiConfig { api_key: Some("secret".to_string()), ..Default::default() };
        let router = build_router(test_app(), &config);
        let response =
            router.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap()).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
    }

    #[tokio::test]
    async fn protected_route_rejects_missing_bearer_token() {
        let config = ApiConfig { api_key: Some("secret".to_string()), ..Default::default() };
        let router = build_router(test_app(), &config);
        let body = Body::from(r#"{"input":"hello"}"#);
        let request = Request::builder()
            .method("POST")
            .uri("/v1/embeddings")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn embeddings_without_loaded_model_returns_service_unavailable() {
        let router = build_router(test_app(), &ApiConfig::default());
        let body = Body::from(r#"{"input":"hello"}"#);
        let request = Request::builder()
            .method("POST")
            .uri("/v1/embeddings")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::SERVICE_UNAVAILABLE);
    }
}
