//! Shared tokenization layer for all inference backends.
//!
//! Wraps HuggingFace's fast tokenizers for consistent, high-performance
//! tokenization across the embedding and chat backends, with a deterministic
//! whitespace-heuristic fallback for environments missing a fast tokenizer
//! artifact.

pub mod batch;
pub mod error;
pub mod heuristic;

use std::path::Path;
pub use tokenizers::{Encoding, Tokenizer as HfTokenizer};

pub use batch::{pad_and_truncate, TokenBatch};
pub use error::{Result, TokenizationError};
pub use heuristic::HeuristicTokenizer;

/// Default max sequence length when a caller doesn't specify one.
pub const DEFAULT_MAX_SEQ_LEN: usize = 512;

/// Tokenizer wrapper providing a consistent interface over the fast
/// tokenizer, with a heuristic fallback when no `tokenizer.json` is
/// available. Which path is active is exposed via [`Tokenizer::identity`]
/// for perf/drift telemetry.
pub enum Tokenizer {
    Fast { inner: HfTokenizer, source: String },
    Heuristic(HeuristicTokenizer),
}

impl Tokenizer {
    /// Load tokenizer from file (tokenizer.json).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let inner = HfTokenizer::from_file(path)
            .map_err(|e| TokenizationError::LoadFailed(e.to_string()))?;
        Ok(Self::Fast {
            inner,
            source: path.display().to_string(),
        })
    }

    /// Load tokenizer from file if present, otherwise fall back to the
    /// whitespace heuristic. This is the constructor backends should call:
    /// it matches the tokenizer adapter contract, which never hard-fails
    /// outright for a missing artifact. The heuristic path probes for a
    /// `vocab.txt` sidecar next to `path` and uses it for the word-id lookup
    /// table when present (§4.2).
    pub fn from_file_or_heuristic<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match HfTokenizer::from_file(path) {
            Ok(inner) => Self::Fast {
                inner,
                source: path.display().to_string(),
            },
            Err(e) => {
                log::warn!(
                    "no fast tokenizer at {:?} ({}); falling back to whitespace heuristic",
                    path,
                    e
                );
                let vocab_path = path.parent().map(|dir| dir.join("vocab.txt"));
                let heuristic = match vocab_path {
                    Some(vocab_path) if vocab_path.exists() => HeuristicTokenizer::with_vocab_file(vocab_path),
                    _ => HeuristicTokenizer::new(),
                };
                Self::Heuristic(heuristic)
            }
        }
    }

    pub fn from_pretrained(_identifier: &str, _auth_token: Option<&str>) -> Result<Self> {
        Err(TokenizationError::LoadFailed(
            "from_pretrained not supported; download tokenizer.json and use from_file() instead"
                .to_string(),
        ))
    }

    /// Tokenizer identity for perf/drift telemetry: source path for the fast
    /// tokenizer, or the literal `"heuristic"` fallback marker.
    pub fn identity(&self) -> String {
        match self {
            Tokenizer::Fast { source, .. } => source.clone(),
            Tokenizer::Heuristic(_) => "heuristic".to_string(),
        }
    }

    pub fn is_heuristic(&self) -> bool {
        matches!(self, Tokenizer::Heuristic(_))
    }

    pub fn encode(&self, text: &str, add_special_tokens: bool) -> Result<Vec<u32>> {
        match self {
            Tokenizer::Fast { inner, .. } => {
                let encoding = inner
                    .encode(text, add_special_tokens)
                    .map_err(|e| TokenizationError::EncodeFailed(e.to_string()))?;
                Ok(encoding.get_ids().to_vec())
            }
            Tokenizer::Heuristic(h) => Ok(h.encode(text)),
        }
    }

    /// Encodes a batch of texts into the fixed-shape Token Batch: three
    /// aligned (N, `max_len`) matrices, right-padded with id/mask 0 and
    /// truncated to the first `max_len` tokens.
    pub fn encode_batch_padded(
        &self,
        texts: &[&str],
        max_len: usize,
        add_special_tokens: bool,
    ) -> Result<TokenBatch> {
        let rows = match self {
            Tokenizer::Fast { inner, .. } => {
                let encodings = inner
                    .encode_batch(texts.to_vec(), add_special_tokens)
                    .map_err(|e| TokenizationError::EncodeFailed(e.to_string()))?;
                encodings
                    .into_iter()
                    .map(|e| e.get_ids().to_vec())
                    .collect()
            }
            Tokenizer::Heuristic(h) => h.encode_batch(texts),
        };
        Ok(pad_and_truncate(rows, max_len))
    }

    /// Encodes a single chat prompt to a one-dimensional id sequence
    /// (unpadded), as fed to the decoder's prefill step.
    pub fn encode_prompt(&self, prompt: &str) -> Result<Vec<u32>> {
        self.encode(prompt, true)
    }

    pub fn decode(&self, ids: &[u32], skip_special_tokens: bool) -> Result<String> {
        match self {
            Tokenizer::Fast { inner, .. } => inner
                .decode(ids, skip_special_tokens)
                .map_err(|e| TokenizationError::DecodeFailed(e.to_string())),
            Tokenizer::Heuristic(_) => {
                Ok(ids.iter().map(|id| format!("[{}]", id)).collect::<Vec<_>>().join(" "))
            }
        }
    }

    pub fn decode_batch(&self, sequences: &[&[u32]], skip_special_tokens: bool) -> Result<Vec<String>> {
        sequences
            .iter()
            .map(|s| self.decode(s, skip_special_tokens))
            .collect()
    }

    pub fn vocab_size(&self) -> usize {
        match self {
            Tokenizer::Fast { inner, .. } => inner.get_vocab_size(false),
            Tokenizer::Heuristic(_) => 30_016,
        }
    }

    pub fn bos_token_id(&self) -> Option<u32> {
        match self {
            Tokenizer::Fast { inner, .. } => inner
                .token_to_id("<s>")
                .or_else(|| inner.token_to_id("<bos>"))
                .or_else(|| inner.token_to_id("[CLS]")),
            Tokenizer::Heuristic(_) => None,
        }
    }

    pub fn eos_token_id(&self) -> Option<u32> {
        match self {
            Tokenizer::Fast { inner, .. } => inner
                .token_to_id("</s>")
                .or_else(|| inner.token_to_id("<eos>"))
                .or_else(|| inner.token_to_id("[SEP]")),
            Tokenizer::Heuristic(_) => None,
        }
    }

    pub fn pad_token_id(&self) -> Option<u32> {
        match self {
            Tokenizer::Fast { inner, .. } => inner
                .token_to_id("<pad>")
                .or_else(|| inner.token_to_id("[PAD]")),
            Tokenizer::Heuristic(_) => Some(0),
        }
    }

    pub fn unk_token_id(&self) -> Option<u32> {
        match self {
            Tokenizer::Fast { inner, .. } => inner
                .token_to_id("<unk>")
                .or_else(|| inner.token_to_id("[UNK]")),
            Tokenizer::Heuristic(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heuristic_fallback_is_flagged() {
        let tok = Tokenizer::from_file_or_heuristic("/nonexistent/tokenizer.json");
        assert!(tok.is_heuristic());
        assert_eq!(tok.identity(), "heuristic");
    }

    #[test]
    fn heuristic_batch_padding_matches_contract() {
        let tok = Tokenizer::Heuristic(HeuristicTokenizer::new());
        let batch = tok.encode_batch_padded(&["a b c", "d"], 6, false).unwrap();
        assert_eq!(batch.batch_size(), 2);
        assert_eq!(batch.input_ids[0].len(), 6);
        // "a b c" -> [CLS] a b c [SEP] = 5 tokens, one pad slot
        assert_eq!(batch.attention_mask[0], vec![1, 1, 1, 1, 1, 0]);
        // "d" -> [CLS] d [SEP] = 3 tokens, three pad slots
        assert_eq!(batch.attention_mask[1], vec![1, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn heuristic_encode_is_deterministic_across_calls() {
        let tok = Tokenizer::Heuristic(HeuristicTokenizer::new());
        assert_eq!(tok.encode("same text", false).unwrap(), tok.encode("same text", false).unwrap());
    }
}
