//! Reference construction and verification of suffix arrays.
use anyhow::{bail, Result};

/// Builds a suffix array by comparison sorting all suffixes.
///
/// This takes `O(n^2 log n)` time in the worst case and is meant as a reference.
pub fn build_naive<T: Ord>(text: &[T]) -> Vec<usize> {
    let mut suffixes: Vec<usize> = (0..text.len()).collect();
    suffixes.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    suffixes
}

/// Verifies that `suffixes` is the suffix array of `text`.
///
/// Runs in linear time: two adjacent suffixes are ordered iff their first symbols are
/// increasing, or equal and the suffixes one position later are ordered.
pub fn verify<T: Ord>(text: &[T], suffixes: &[usize]) -> Result<()> {
    let n = text.len();
    if suffixes.len() != n {
        bail!(
            "suffix array has {} entries but the text has {} symbols.",
            suffixes.len(),
            n
        );
    }

    let mut inverse = vec![n; n];
    for (rank, &pos) in suffixes.iter().enumerate() {
        if pos >= n {
            bail!("position {} at slot {} is out of the text.", pos, rank);
        }
        if inverse[pos] != n {
            bail!("position {} appears at slots {} and {}.", pos, inverse[pos], rank);
        }
        inverse[pos] = rank;
    }

    // Running off the end of the text is smaller than any suffix.
    let next_rank = |pos: usize| inverse.get(pos + 1).copied();
    for (slot, pair) in suffixes.windows(2).enumerate() {
        let (a, b) = (pair[0], pair[1]);
        let ordered = match text[a].cmp(&text[b]) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Equal => next_rank(a) < next_rank(b),
            std::cmp::Ordering::Greater => false,
        };
        if !ordered {
            bail!(
                "suffixes {} and {} at slots {} and {} are out of order.",
                a,
                b,
                slot,
                slot + 1
            );
        }
    }
    Ok(())
}
