//! Performance telemetry emitted alongside a chat generation, mirroring
//! `embedding::perf::EmbedPerf`'s shape so `/health`'s `performance_stats`
//! (§10.5) can aggregate both backends uniformly.

use serde::Serialize;

use crate::backend::FinishReason;

#[derive(Debug, Clone, Serialize)]
pub struct ChatPerf {
    pub provider: String,
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_ms: f64,
    pub tokens_per_sec: f64,
    pub finish_reason: &'static str,
}

impl ChatPerf {
    pub fn new(
        provider: String,
        prompt_tokens: usize,
        completion_tokens: usize,
        total_ms: f64,
        finish_reason: FinishReason,
    ) -> Self {
        let tokens_per_sec = if total_ms > 0.0 { completion_tokens as f64 / (total_ms / 1000.0) } else { 0.0 };
        let finish_reason = match finish_reason {
            FinishReason::Stop => "stop",
            FinishReason::Length => "length",
            FinishReason::Cancelled => "cancelled",
        };
        Self { provider, prompt_tokens, completion_tokens, total_ms, tokens_per_sec, finish_reason }
    }
}
