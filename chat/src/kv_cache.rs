//! KV-cache layout for the thirty-layer decoder.
//!
//! Conceptually `Layer { key: Tensor, value: Tensor }`, each shaped
//! `(batch=1, heads=KV_HEADS, seq, head_dim=KV_HEAD_DIM)`. The cache is
//! allocated fresh per generation with `seq = 0` and grows as the runtime
//! appends each step's presents; a past cache is never mutated in place --
//! each step's presents entirely replace the prior past for the next step.

/// Decoder layer count for the registered chat model (Gemma-family runtime
/// shape; see `tabagent_model_registry`'s `phi-3-mini-4k` notes).
pub const KV_LAYERS: usize = 30;
pub const KV_HEADS: usize = 2;
pub const KV_HEAD_DIM: usize = 256;
const KV_BATCH: usize = 1;

#[derive(Debug, Clone, Default)]
pub struct LayerKv {
    /// Flattened `(batch, heads, seq, head_dim)` row-major buffer.
    pub key: Vec<f32>,
    pub value: Vec<f32>,
}

#[derive(Debug, Clone)]
pub struct KvCache {
    pub layers: Vec<LayerKv>,
    seq_len: usize,
}

impl KvCache {
    /// An empty cache (`seq = 0`) for `num_layers` layers, ready for prefill.
    pub fn empty(num_layers: usize) -> Self {
        Self {
            layers: vec![LayerKv::default(); num_layers],
            seq_len: 0,
        }
    }

    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    pub fn shape_for_layer(&self) -> [i64; 4] {
        [KV_BATCH as i64, KV_HEADS as i64, self.seq_len as i64, KV_HEAD_DIM as i64]
    }

    /// Replaces the cache with the next step's presents, asserting every
    /// layer shares the same `seq` dimension (the §3 KV Cache Entry
    /// invariant).
    pub fn advance(&mut self, next_layers: Vec<LayerKv>, next_seq_len: usize) -> Result<(), String> {
        if next_layers.len() != self.layers.len() {
            return Err(format!(
                "present layer count {} does not match cache layer count {}",
                next_layers.len(),
                self.layers.len()
            ));
        }
        let expected_len = KV_BATCH * KV_HEADS * next_seq_len * KV_HEAD_DIM;
        for (i, layer) in next_layers.iter().enumerate() {
            if layer.key.len() != expected_len || layer.value.len() != expected_len {
                return Err(format!(
                    "layer {i} present key/value length mismatch: expected {expected_len}, got key={} value={}",
                    layer.key.len(),
                    layer.value.len()
                ));
            }
        }
        self.layers = next_layers;
        self.seq_len = next_seq_len;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cache_has_zero_seq() {
        let cache = KvCache::empty(KV_LAYERS);
        assert_eq!(cache.seq_len(), 0);
        assert_eq!(cache.layers.len(), KV_LAYERS);
    }

    #[test]
    fn advance_rejects_layer_count_mismatch() {
        let mut cache = KvCache::empty(KV_LAYERS);
        let bad = vec![LayerKv::default(); KV_LAYERS - 1];
        assert!(cache.advance(bad, 1).is_err());
    }

    #[test]
    fn advance_rejects_wrong_shaped_present() {
        let mut cache = KvCache::empty(2);
        let bad = vec![LayerKv { key: vec![0.0; 3], value: vec![0.0; 3] }; 2];
        assert!(cache.advance(bad, 5).is_err());
    }

    #[test]
    fn advance_accepts_matching_shape_and_updates_seq() {
        let mut cache = KvCache::empty(1);
        let len = KV_HEADS * 4 * KV_HEAD_DIM;
        let good = vec![LayerKv { key: vec![0.0; len], value: vec![0.0; len] }];
        assert!(cache.advance(good, 4).is_ok());
        assert_eq!(cache.seq_len(), 4);
    }
}
