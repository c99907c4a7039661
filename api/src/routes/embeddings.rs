use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use appstate::LoadedBackend;
use tabagent_model_registry::Task;

use crate::dto::{EmbeddingDatum, EmbeddingsRequest, EmbeddingsResponse, EmbeddingsUsage};
use crate::error::{ApiError, ApiResult};
use crate::router::RouterState;

/// `POST /v1/embeddings`.
///
/// Embedding inference is a single ONNX call with no internal loop to
/// interrupt mid-flight, so the request deadline (§5) is enforced by racing
/// the blocking-pool call: on elapse the handler reports `Cancelled` to the
/// client and abandons the in-flight task rather than blocking the response.
pub async fn create_embeddings(
    State(state): State<RouterState>,
    Json(request): Json<EmbeddingsRequest>,
) -> ApiResult<Json<EmbeddingsResponse>> {
    let texts = request.input.into_vec();
    embedding::validate_batch(&texts).map_err(ApiError::from)?;

    let backend = state.app.models.resolve(request.model.as_deref(), Task::Embedding)?;
    let LoadedBackend::Embedding(backend) = backend else {
        return Err(ApiError::new(common::GatewayError::Internal(
            "resolved model is not an embedding backend".to_string(),
        )));
    };

    let backend_for_task = Arc::clone(&backend);
    let texts_for_task = texts.clone();
    let handle = tokio::task::spawn_blocking(move || backend_for_task.embed(&texts_for_task));

    let result = match tokio::time::timeout(state.embedding_timeout, handle).await {
        Ok(joined) => joined
            .map_err(|e| ApiError::new(common::GatewayError::Internal(format!("embedding task panicked: {e}"))))?
            .map_err(ApiError::from)?,
        Err(_) => {
            tracing::warn!(timeout_secs = state.embedding_timeout.as_secs(), batch_size = texts.len(), "embedding deadline elapsed");
            return Err(ApiError::new(common::GatewayError::Cancelled));
        }
    };

    let model_id = request.model.unwrap_or_else(|| "bge-small-en-v1.5".to_string());
    let prompt_tokens = result.perf.tokens.total;

    let data = result
        .vectors
        .into_iter()
        .enumerate()
        .map(|(index, embedding)| EmbeddingDatum { object: "embedding", index, embedding })
        .collect();

    Ok(Json(EmbeddingsResponse {
        object: "list",
        data,
        model: model_id,
        usage: EmbeddingsUsage { prompt_tokens, total_tokens: prompt_tokens },
    }))
}
