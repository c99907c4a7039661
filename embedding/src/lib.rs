//! Embedding pipeline: tokenizer -> batched ONNX execute -> pooled,
//! normalized vectors -> LRU cache -> perf telemetry.
//!
//! The embedding backend is polymorphic over a narrow [`EmbeddingBackend`]
//! interface; [`OnnxEmbeddingBackend`] is the concrete (and, today, only)
//! implementation. The Model Service in `appstate` composes instances
//! behind the model registry without sharing state across them.

pub mod backend;
pub mod cache;
pub mod error;
pub mod perf;

pub use backend::{EmbeddingBackend, EmbeddingResult, OnnxEmbeddingBackend, ALTERNATE_PROVIDER, PRIMARY_PROVIDER};
pub use cache::EmbeddingCache;
pub use error::{EmbeddingError, Result};
pub use perf::{EmbedPerf, TokenStats};

/// Upper bound on the number of texts accepted in a single embedding
/// request (§3 EmbeddingBatchInput: 1 <= N <= 100).
pub const MAX_BATCH_SIZE: usize = 100;

/// Validates an embedding batch input per the §3 EmbeddingBatchInput
/// contract: non-empty, at most [`MAX_BATCH_SIZE`] entries, every element a
/// non-empty string.
pub fn validate_batch(texts: &[String]) -> Result<()> {
    if texts.is_empty() {
        return Err(EmbeddingError::InvalidInput("input batch must contain at least one text".to_string()));
    }
    if texts.len() > MAX_BATCH_SIZE {
        return Err(EmbeddingError::InvalidInput(format!(
            "input batch of {} exceeds the maximum of {}",
            texts.len(),
            MAX_BATCH_SIZE
        )));
    }
    if texts.iter().any(|t| t.is_empty()) {
        return Err(EmbeddingError::InvalidInput("input batch entries must be non-empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_rejected() {
        assert!(validate_batch(&[]).is_err());
    }

    #[test]
    fn batch_at_limit_accepted() {
        let texts: Vec<String> = (0..MAX_BATCH_SIZE).map(|i| format!("text {i}")).collect();
        assert!(validate_batch(&texts).is_ok());
    }

    #[test]
    fn batch_over_limit_rejected() {
        let texts: Vec<String> = (0..MAX_BATCH_SIZE + 1).map(|i| format!("text {i}")).collect();
        assert!(validate_batch(&texts).is_err());
    }

    #[test]
    fn empty_string_entry_rejected() {
        assert!(validate_batch(&["hello".to_string(), String::new()]).is_err());
    }
}
