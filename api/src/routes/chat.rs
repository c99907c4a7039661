use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use appstate::LoadedBackend;
use tabagent_model_registry::Task;

use crate::dto::{
    finish_reason_str, ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatUsage, ResponseMessage,
};
use crate::error::{ApiError, ApiResult};
use crate::router::RouterState;

/// `POST /v1/chat/completions`.
///
/// `stream` is accepted but ignored: this gateway always returns a
/// single-shot response (§6). Generation runs on a blocking-pool thread so
/// the request's deadline (§5) can race it: on elapse, a shared cancel flag
/// is raised and the decode loop returns whatever text it had assembled,
/// with `finish_reason = "cancelled"`.
pub async fn create_chat_completion(
    State(state): State<RouterState>,
    Json(request): Json<ChatCompletionRequest>,
) -> ApiResult<Json<ChatCompletionResponse>> {
    if request.messages.is_empty() {
        return Err(ApiError::new(common::GatewayError::InputInvalid("messages must not be empty".to_string())));
    }

    let backend = state.app.models.resolve(request.model.as_deref(), Task::Chat)?;
    let LoadedBackend::Chat(backend) = backend else {
        return Err(ApiError::new(common::GatewayError::Internal("resolved model is not a chat backend".to_string())));
    };

    let messages =
        request.messages.into_iter().map(|m| chat::ChatMessage { role: m.role.into(), content: m.content }).collect();

    let chat_request =
        chat::ChatRequest { messages, max_tokens: request.max_tokens, temperature: request.temperature, top_p: request.top_p, stop: request.stop };

    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_for_task = Arc::clone(&cancel);
    let backend_for_task = Arc::clone(&backend);
    let mut handle =
        tokio::task::spawn_blocking(move || backend_for_task.generate(&chat_request, &cancel_for_task));

    let result = tokio::select! {
        joined = &mut handle => {
            joined.map_err(|e| ApiError::new(common::GatewayError::Internal(format!("generation task panicked: {e}"))))?
        }
        _ = tokio::time::sleep(state.chat_timeout) => {
            tracing::warn!(timeout_secs = state.chat_timeout.as_secs(), "chat generation deadline elapsed, requesting cancellation");
            cancel.store(true, Ordering::Relaxed);
            handle.await.map_err(|e| ApiError::new(common::GatewayError::Internal(format!("generation task panicked: {e}"))))?
        }
    };
    let result = result.map_err(ApiError::from)?;

    let model_id = request.model.unwrap_or_else(|| "phi-3-mini-4k".to_string());

    Ok(Json(ChatCompletionResponse {
        id: format!("chatcmpl-{}", uuid::Uuid::new_v4()),
        object: "chat.completion",
        created: chrono::Utc::now().timestamp(),
        model: model_id,
        choices: vec![ChatChoice {
            index: 0,
            message: ResponseMessage { role: "assistant", content: result.text },
            finish_reason: finish_reason_str(result.finish_reason),
        }],
        usage: ChatUsage {
            prompt_tokens: result.prompt_tokens,
            completion_tokens: result.completion_tokens,
            total_tokens: result.prompt_tokens + result.completion_tokens,
        },
    }))
}
