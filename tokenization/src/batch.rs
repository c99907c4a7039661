//! Fixed-shape token batches shared by the embedding and chat backends.

/// Three aligned (N, L) integer matrices: `input_ids`, `attention_mask`,
/// `token_type_ids`. Padding uses id 0 / mask 0; truncation keeps the first
/// `max_len` tokens of each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBatch {
    pub input_ids: Vec<Vec<u32>>,
    pub attention_mask: Vec<Vec<u32>>,
    pub token_type_ids: Vec<Vec<u32>>,
    pub max_len: usize,
}

impl TokenBatch {
    pub fn batch_size(&self) -> usize {
        self.input_ids.len()
    }

    /// Flattens `input_ids` row-major into an (N*L) buffer, the shape
    /// `ort::Tensor::from_array` expects alongside `(N, L)`.
    pub fn input_ids_flat(&self) -> Vec<i64> {
        self.input_ids
            .iter()
            .flat_map(|row| row.iter().map(|&id| id as i64))
            .collect()
    }

    pub fn attention_mask_flat(&self) -> Vec<i64> {
        self.attention_mask
            .iter()
            .flat_map(|row| row.iter().map(|&id| id as i64))
            .collect()
    }

    pub fn token_type_ids_flat(&self) -> Vec<i64> {
        self.token_type_ids
            .iter()
            .flat_map(|row| row.iter().map(|&id| id as i64))
            .collect()
    }
}

/// Pads/truncates a ragged batch of token-id rows (with an all-ones mask and
/// all-zero type ids as produced by single-segment encodings) into a
/// `TokenBatch` of shape (N, `max_len`).
pub fn pad_and_truncate(rows: Vec<Vec<u32>>, max_len: usize) -> TokenBatch {
    let mut input_ids = Vec::with_capacity(rows.len());
    let mut attention_mask = Vec::with_capacity(rows.len());
    let mut token_type_ids = Vec::with_capacity(rows.len());

    for row in rows {
        let mut ids: Vec<u32> = row.into_iter().take(max_len).collect();
        let mut mask = vec![1u32; ids.len()];
        let pad_needed = max_len - ids.len();
        ids.extend(std::iter::repeat(0u32).take(pad_needed));
        mask.extend(std::iter::repeat(0u32).take(pad_needed));

        input_ids.push(ids);
        attention_mask.push(mask);
        token_type_ids.push(vec![0u32; max_len]);
    }

    TokenBatch {
        input_ids,
        attention_mask,
        token_type_ids,
        max_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_rows_with_zeros() {
        let batch = pad_and_truncate(vec![vec![1, 2, 3]], 5);
        assert_eq!(batch.input_ids[0], vec![1, 2, 3, 0, 0]);
        assert_eq!(batch.attention_mask[0], vec![1, 1, 1, 0, 0]);
        assert_eq!(batch.token_type_ids[0], vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn truncates_long_rows_keeping_prefix() {
        let batch = pad_and_truncate(vec![vec![1, 2, 3, 4, 5, 6]], 4);
        assert_eq!(batch.input_ids[0], vec![1, 2, 3, 4]);
        assert_eq!(batch.attention_mask[0], vec![1, 1, 1, 1]);
    }

    #[test]
    fn flattens_row_major() {
        let batch = pad_and_truncate(vec![vec![1, 2], vec![3, 4]], 2);
        assert_eq!(batch.input_ids_flat(), vec![1, 2, 3, 4]);
    }
}
