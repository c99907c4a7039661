//! Deterministic fingerprinting for vector batches.
//!
//! Used by regression tests and benchmark artifacts to detect drift in
//! embedding output across model builds, tokenizer versions, or refactors.
//! Not part of the external HTTP API.

use sha2::{Digest as _, Sha256};

/// Rounds every element to six decimals, serializes as `|`-joined rows, and
/// returns the SHA-256 hex digest of the result (first 32 hex chars if `short`).
///
/// `head_dims`, if given, restricts each vector to its first N dimensions
/// before serialization -- handy for committing a short baseline string
/// without embedding the full vector in a test file.
pub fn digest(vectors: &[Vec<f32>], short: bool, head_dims: Option<usize>) -> String {
    let mut rows = String::new();
    for (i, v) in vectors.iter().enumerate() {
        if i > 0 {
            rows.push('|');
        }
        let slice = match head_dims {
            Some(n) => &v[..n.min(v.len())],
            None => &v[..],
        };
        for (j, x) in slice.iter().enumerate() {
            if j > 0 {
                rows.push(',');
            }
            rows.push_str(&format!("{:.6}", round6(*x)));
        }
    }

    let mut hasher = Sha256::new();
    hasher.update(rows.as_bytes());
    let hex = format!("{:x}", hasher.finalize());

    if short {
        hex[..32].to_string()
    } else {
        hex
    }
}

fn round6(x: f32) -> f32 {
    (x * 1_000_000.0).round() / 1_000_000.0
}

/// Compares two vector batches for equal shape and element-wise closeness.
pub fn compare(a: &[Vec<f32>], b: &[Vec<f32>], tolerance: f32) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b.iter()).all(|(va, vb)| {
        va.len() == vb.len() && va.iter().zip(vb.iter()).all(|(x, y)| (x - y).abs() <= tolerance)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_deterministic() {
        let v = vec![vec![0.123_456_7, -0.5, 1.0]];
        assert_eq!(digest(&v, true, None), digest(&v, true, None));
    }

    #[test]
    fn digest_respects_head_dims() {
        let v = vec![vec![1.0, 2.0, 3.0, 4.0]];
        let full = digest(&v, false, None);
        let head2 = digest(&v, false, Some(2));
        assert_ne!(full, head2);
    }

    #[test]
    fn short_digest_is_32_hex_chars() {
        let v = vec![vec![0.0]];
        let d = digest(&v, true, None);
        assert_eq!(d.len(), 32);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn compare_detects_shape_mismatch() {
        let a = vec![vec![1.0, 2.0]];
        let b = vec![vec![1.0]];
        assert!(!compare(&a, &b, 1e-6));
    }

    #[test]
    fn compare_within_tolerance() {
        let a = vec![vec![1.0, 2.0]];
        let b = vec![vec![1.0000001, 2.0000002]];
        assert!(compare(&a, &b, 1e-5));
        assert!(!compare(&a, &b, 1e-9));
    }
}
