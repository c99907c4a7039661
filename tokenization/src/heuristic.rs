//! Whitespace-heuristic fallback used when no fast tokenizer artifact is
//! available. Deterministic and dependency-free: wraps whitespace tokens
//! with `[CLS]`/`[SEP]` sentinels, maps each word through an optional
//! `vocab.txt` line-number table, falling back to a stable string hash
//! modulo a fixed vocab size for words the table doesn't cover. Identical
//! input text always produces byte-identical ids.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::Path;

/// Sentinel ids, matching the convention of the BERT-family `vocab.txt`
/// layout (`[PAD]=0, [UNK]=1, [CLS]=2, [SEP]=3, ...`).
pub const CLS_ID: u32 = 2;
pub const SEP_ID: u32 = 3;

/// Ids produced by the hash fallback are kept inside this range so they
/// plausibly coexist with a real model vocabulary without colliding with the
/// low special-token ids (0..10).
const VOCAB_SIZE: u64 = 30_000;
const VOCAB_OFFSET: u64 = 16;

pub struct HeuristicTokenizer {
    /// Optional `token -> id` table loaded from a `vocab.txt` sidecar (one
    /// token per line, line number = id). `None` when no such file was found.
    vocab: Option<HashMap<String, u32>>,
}

impl HeuristicTokenizer {
    pub fn new() -> Self {
        Self { vocab: None }
    }

    /// Loads a `vocab.txt` sidecar if present at `path`; falls back to a pure
    /// hash lookup when the file is missing or unreadable.
    pub fn with_vocab_file(path: impl AsRef<Path>) -> Self {
        let vocab = fs::read_to_string(path)
            .ok()
            .map(|contents| contents.lines().enumerate().map(|(i, line)| (line.trim().to_string(), i as u32)).collect());
        Self { vocab }
    }

    fn word_id(&self, word: &str) -> u32 {
        if let Some(vocab) = &self.vocab {
            if let Some(&id) = vocab.get(word) {
                return id;
            }
        }
        let mut hasher = DefaultHasher::new();
        word.hash(&mut hasher);
        (VOCAB_OFFSET + hasher.finish() % VOCAB_SIZE) as u32
    }

    /// Splits on ASCII whitespace, lowercases for vocabulary stability, and
    /// wraps the result with `[CLS]`/`[SEP]` sentinels per the heuristic
    /// tokenizer contract.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        let mut ids = Vec::with_capacity(2 + text.split_whitespace().count());
        ids.push(CLS_ID);
        ids.extend(text.split_whitespace().map(|w| self.word_id(&w.to_lowercase())));
        ids.push(SEP_ID);
        ids
    }

    pub fn encode_batch(&self, texts: &[&str]) -> Vec<Vec<u32>> {
        texts.iter().map(|t| self.encode(t)).collect()
    }
}

impl Default for HeuristicTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_text_is_deterministic() {
        let tok = HeuristicTokenizer::new();
        assert_eq!(tok.encode("hello world"), tok.encode("hello world"));
    }

    #[test]
    fn encode_wraps_with_cls_and_sep() {
        let tok = HeuristicTokenizer::new();
        let ids = tok.encode("hello world");
        assert_eq!(ids.first(), Some(&CLS_ID));
        assert_eq!(ids.last(), Some(&SEP_ID));
        assert_eq!(ids.len(), 4); // [CLS] hello world [SEP]
    }

    #[test]
    fn word_ids_avoid_low_special_token_range() {
        let tok = HeuristicTokenizer::new();
        let ids = tok.encode("the quick brown fox");
        for id in &ids[1..ids.len() - 1] {
            assert!(*id >= VOCAB_OFFSET as u32);
        }
    }

    #[test]
    fn case_insensitive() {
        let tok = HeuristicTokenizer::new();
        assert_eq!(tok.encode("Hello"), tok.encode("hello"));
    }

    #[test]
    fn vocab_file_lookup_takes_precedence_over_hash() {
        let dir = tempfile::tempdir().expect("tempdir");
        let vocab_path = dir.path().join("vocab.txt");
        fs::write(&vocab_path, "[PAD]\n[UNK]\n[CLS]\n[SEP]\nhello\nworld\n").expect("write vocab");

        let tok = HeuristicTokenizer::with_vocab_file(&vocab_path);
        let ids = tok.encode("hello world");
        assert_eq!(ids, vec![CLS_ID, 4, 5, SEP_ID]);
    }

    #[test]
    fn missing_vocab_file_falls_back_to_hash() {
        let tok = HeuristicTokenizer::with_vocab_file("/nonexistent/vocab.txt");
        assert_eq!(tok.encode("same text"), HeuristicTokenizer::new().encode("same text"));
    }
}
