use anyhow::{anyhow, Result};

/// Returns the number of bits a pass sweep needs to cover keys in `0..=max_value`.
pub fn bit_width(max_value: usize) -> u32 {
    usize::BITS - max_value.leading_zeros()
}

/// LSD radix sorter over indices into a key array.
///
/// Keys are unsigned and `0` is the sentinel, so positions padded past the end of a text sort
/// before every real symbol. Each pass is a stable partition on one bit.
pub struct RadixRanker {
    scratch: Vec<usize>,
}

impl RadixRanker {
    /// Creates a ranker able to sort up to `capacity` indices without reallocating.
    pub fn new(capacity: usize) -> Result<Self> {
        let mut scratch = Vec::new();
        scratch.try_reserve_exact(capacity).map_err(|e| {
            anyhow!(
                "failed to allocate radix scratch for {} indices: {}",
                capacity,
                e
            )
        })?;
        scratch.resize(capacity, 0);
        Ok(Self { scratch })
    }

    /// Sorts `keys` so that the tuples `values[k..k + element_width]` are non-decreasing.
    ///
    /// The first element of a tuple is the most significant. Only the low `bit_width` bits of
    /// each value are examined.
    ///
    /// # Arguments
    ///
    /// * `keys` - Indices into `values`, reordered in place.
    /// * `values` - Key array; `k + element_width - 1` must be in bounds for every `k` in `keys`.
    /// * `bit_width` - Number of significant bits of each value.
    /// * `element_width` - Number of consecutive values composing one tuple.
    pub fn sort(
        &mut self,
        keys: &mut [usize],
        values: &[usize],
        bit_width: u32,
        element_width: usize,
    ) {
        if keys.len() <= 1 {
            return;
        }
        if self.scratch.len() < keys.len() {
            self.scratch.resize(keys.len(), 0);
        }
        for element in (0..element_width).rev() {
            for bit in 0..bit_width {
                self.partition(keys, values, element, bit);
            }
        }
    }

    /// Stably moves indices whose key has `bit` cleared in front of those that have it set.
    fn partition(&mut self, keys: &mut [usize], values: &[usize], element: usize, bit: u32) {
        let is_set = |k: usize| (values[k + element] >> bit) & 1 == 1;

        let n_zeros = keys.iter().filter(|&&k| !is_set(k)).count();
        if n_zeros == 0 || n_zeros == keys.len() {
            return;
        }

        let scratch = &mut self.scratch[..keys.len()];
        let (mut zeros, mut ones) = (0, n_zeros);
        for &k in keys.iter() {
            if is_set(k) {
                scratch[ones] = k;
                ones += 1;
            } else {
                scratch[zeros] = k;
                zeros += 1;
            }
        }
        keys.copy_from_slice(scratch);
    }
}
