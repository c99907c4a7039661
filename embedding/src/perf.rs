//! Performance telemetry emitted alongside every embedding result.

use serde::Serialize;

/// Per-text token counts plus their p50/p95 distribution.
#[derive(Debug, Clone, Serialize)]
pub struct TokenStats {
    pub per_text: Vec<usize>,
    pub total: usize,
    pub p50: f64,
    pub p95: f64,
    pub avg: f64,
}

impl TokenStats {
    pub fn compute(per_text: Vec<usize>) -> Self {
        let total: usize = per_text.iter().sum();
        let n = per_text.len().max(1);
        let avg = total as f64 / n as f64;
        let mut sorted = per_text.clone();
        sorted.sort_unstable();
        let p50 = percentile(&sorted, 0.50);
        let p95 = percentile(&sorted, 0.95);
        Self { per_text, total, p50, p95, avg }
    }
}

/// Nearest-rank percentile over an already-sorted slice.
fn percentile(sorted: &[usize], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let rank = ((p * sorted.len() as f64).ceil() as usize).clamp(1, sorted.len());
    sorted[rank - 1] as f64
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedPerf {
    pub provider: String,
    pub pooling: String,
    pub tokenizer: String,
    pub batch_size: usize,
    pub total_ms: f64,
    pub tokenize_ms: f64,
    pub inference_ms: f64,
    pub avg_ms_per_text: f64,
    pub throughput_texts_per_sec: f64,
    pub tokens: TokenStats,
    pub tokens_per_sec: f64,
    pub cache_hits: usize,
    pub cache_misses: usize,
    pub cache_hit_ratio: f64,
}

impl EmbedPerf {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        provider: String,
        pooling: String,
        tokenizer: String,
        batch_size: usize,
        total_ms: f64,
        tokenize_ms: f64,
        inference_ms: f64,
        tokens: TokenStats,
        cache_hits: usize,
        cache_misses: usize,
    ) -> Self {
        let avg_ms_per_text = if batch_size > 0 { total_ms / batch_size as f64 } else { 0.0 };
        let throughput_texts_per_sec = if total_ms > 0.0 { batch_size as f64 / (total_ms / 1000.0) } else { 0.0 };
        let tokens_per_sec = if total_ms > 0.0 { tokens.total as f64 / (total_ms / 1000.0) } else { 0.0 };
        let total_lookups = cache_hits + cache_misses;
        let cache_hit_ratio = if total_lookups > 0 { cache_hits as f64 / total_lookups as f64 } else { 0.0 };

        Self {
            provider,
            pooling,
            tokenizer,
            batch_size,
            total_ms,
            tokenize_ms,
            inference_ms,
            avg_ms_per_text,
            throughput_texts_per_sec,
            tokens,
            tokens_per_sec,
            cache_hits,
            cache_misses,
            cache_hit_ratio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentiles_match_golden_corpus() {
        let stats = TokenStats::compute(vec![5, 11, 18, 8, 20, 3, 11, 29]);
        assert_eq!(stats.total, 105);
        assert!((stats.avg - 13.125).abs() < 1e-6);
        assert!(stats.p50 <= stats.p95);
    }

    #[test]
    fn hit_ratio_is_zero_with_no_lookups() {
        let tokens = TokenStats::compute(vec![]);
        let perf = EmbedPerf::new(
            "primary".into(),
            "cls".into(),
            "heuristic".into(),
            0,
            0.0,
            0.0,
            0.0,
            tokens,
            0,
            0,
        );
        assert_eq!(perf.cache_hit_ratio, 0.0);
    }
}
