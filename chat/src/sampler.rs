//! Converts a single logits row into a next-token id.
//!
//! Greedy (argmax) when `temperature <= 0`; otherwise temperature-scaled
//! softmax, optionally restricted to a nucleus (top-p) prefix before
//! sampling. The PRNG is seeded once per backend instance so repeated runs
//! at the same temperature are reproducible within a process, while
//! `temperature = 0` is fully deterministic regardless of seed.

use parking_lot::Mutex;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

pub struct Sampler {
    rng: Mutex<Pcg64>,
}

impl Sampler {
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(Pcg64::seed_from_u64(seed)) }
    }

    /// Samples the next token id from `logits` (length = vocab size).
    pub fn sample(&self, logits: &[f32], temperature: f32, top_p: Option<f32>) -> u32 {
        if temperature <= 0.0 {
            return argmax(logits);
        }

        let adjusted_temp = temperature.max(1e-5);
        let max_logit = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
        let mut probs: Vec<f32> = logits
            .iter()
            .map(|&l| ((l - max_logit) / adjusted_temp).exp())
            .collect();
        let sum: f32 = probs.iter().sum();
        for p in probs.iter_mut() {
            *p /= sum;
        }

        let candidates: Vec<(u32, f32)> = match top_p {
            Some(p) if p > 0.0 && p < 1.0 => nucleus_prefix(&probs, p),
            _ => probs.iter().enumerate().map(|(i, &p)| (i as u32, p)).collect(),
        };

        sample_from(&candidates, &self.rng)
    }
}

fn argmax(logits: &[f32]) -> u32 {
    logits
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i as u32)
        .unwrap_or(0)
}

/// Sorts by descending probability, accumulates until the running sum first
/// exceeds `top_p`, keeps that prefix (at least one token), and renormalizes.
fn nucleus_prefix(probs: &[f32], top_p: f32) -> Vec<(u32, f32)> {
    let mut indexed: Vec<(u32, f32)> = probs.iter().enumerate().map(|(i, &p)| (i as u32, p)).collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut kept = Vec::new();
    let mut running = 0.0f32;
    for (id, p) in indexed {
        kept.push((id, p));
        running += p;
        if running > top_p {
            break;
        }
    }
    if kept.is_empty() {
        // probs is never empty for a real logits row, but guard anyway.
        return vec![(0, 1.0)];
    }
    let kept_sum: f32 = kept.iter().map(|(_, p)| p).sum();
    kept.into_iter().map(|(id, p)| (id, p / kept_sum)).collect()
}

fn sample_from(candidates: &[(u32, f32)], rng: &Mutex<Pcg64>) -> u32 {
    let draw: f32 = rng.lock().random();
    let mut cumulative = 0.0f32;
    for (id, p) in candidates {
        cumulative += p;
        if draw <= cumulative {
            return *id;
        }
    }
    candidates.last().map(|(id, _)| *id).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_zero_is_argmax() {
        let sampler = Sampler::new(42);
        let logits = vec![0.1, 5.0, -2.0, 3.0];
        assert_eq!(sampler.sample(&logits, 0.0, None), 1);
        // repeated calls are identical at temperature 0 regardless of PRNG state
        assert_eq!(sampler.sample(&logits, 0.0, None), 1);
    }

    #[test]
    fn missing_temperature_treated_as_greedy() {
        let sampler = Sampler::new(1);
        let logits = vec![-1.0, -0.5, 2.0];
        assert_eq!(sampler.sample(&logits, -1.0, None), 2);
    }

    #[test]
    fn nucleus_prefix_keeps_at_least_one_token() {
        let probs = vec![0.9, 0.05, 0.05];
        let kept = nucleus_prefix(&probs, 0.01);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].0, 0);
    }

    #[test]
    fn nucleus_prefix_renormalizes_to_one() {
        let probs = vec![0.5, 0.3, 0.2];
        let kept = nucleus_prefix(&probs, 0.6);
        let sum: f32 = kept.iter().map(|(_, p)| p).sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }

    #[test]
    fn sampled_token_is_always_in_vocab_range() {
        let sampler = Sampler::new(7);
        let logits: Vec<f32> = (0..50).map(|i| i as f32 * 0.1).collect();
        for _ in 0..20 {
            let id = sampler.sample(&logits, 0.8, Some(0.9));
            assert!((id as usize) < logits.len());
        }
    }
}
