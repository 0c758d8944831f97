//! The skew (DC3) suffix sorting algorithm of Kärkkäinen and Sanders.
//!
//! Each level sorts the suffixes starting at positions `≢ 0 (mod 3)` by recursing on a
//! sequence two thirds as long, sorts the remaining positions from those ranks, and merges
//! both lists in linear time.
use anyhow::{anyhow, Result};

use crate::radixsort::{bit_width, RadixRanker};

/// Rank reserved for positions past the end of a text.
const SENTINEL: usize = 0;

/// Recursive suffix sorter over dense symbol ranks.
pub struct SkewSorter {
    threshold: usize,
    verbose: bool,
}

impl SkewSorter {
    pub fn new(threshold: usize, verbose: bool) -> Self {
        Self {
            threshold: threshold.max(1),
            verbose,
        }
    }

    /// Returns the suffix array of `text`.
    pub fn sort<T: Ord>(&self, text: &[T]) -> Result<Vec<usize>> {
        let (ranks, alphabet_size) = compress_alphabet(text)?;
        if self.verbose {
            eprintln!("Text length: {:?}", text.len());
            eprintln!("Alphabet size: {:?}", alphabet_size);
        }
        self.sort_level(&ranks, alphabet_size, 0)
    }

    /// Sorts the suffixes of `text`, whose symbols are in `1..=alphabet_size`.
    fn sort_level(
        &self,
        text: &[usize],
        alphabet_size: usize,
        level: usize,
    ) -> Result<Vec<usize>> {
        let n = text.len();
        if n <= self.threshold {
            let mut suffixes = allocate(n, "suffixes")?;
            suffixes.iter_mut().enumerate().for_each(|(i, p)| *p = i);
            suffixes.sort_unstable_by(|&a, &b| text[a..].cmp(&text[b..]));
            return Ok(suffixes);
        }

        let n0 = (n + 2) / 3;
        let n1 = (n + 1) / 3;
        let n2 = n / 3;
        let n12 = n0 + n2;

        let mut padded = allocate(n + 3, "padded text")?;
        padded[..n].copy_from_slice(text);

        // Sample positions. If n % 3 == 1, the dummy position n (three sentinels) is included
        // so that the class-1 block of the reduced text ends on a unique minimal name.
        let mut sample = allocate(n12, "sample positions")?;
        for (slot, pos) in (0..n + n0 - n1).filter(|p| p % 3 != 0).enumerate() {
            sample[slot] = pos;
        }
        let mut ranker = RadixRanker::new(n12)?;
        ranker.sort(&mut sample, &padded, bit_width(alphabet_size), 3);

        let mut reduced = allocate(n12, "reduced text")?;
        let mut n_names = 0;
        let mut previous: Option<&[usize]> = None;
        for &pos in sample.iter() {
            let window = &padded[pos..pos + 3];
            if previous != Some(window) {
                n_names += 1;
                previous = Some(window);
            }
            reduced[reduced_index(pos, n0)] = n_names;
        }

        if self.verbose {
            eprintln!(
                "Level {}: length {}, sample {}, names {}",
                level, n, n12, n_names
            );
        }

        let reduced_order = if n_names < n12 {
            self.sort_level(&reduced, n_names, level + 1)?
        } else {
            // Names are unique, so they already are the ranks.
            let mut order = allocate(n12, "sample order")?;
            for (i, &name) in reduced.iter().enumerate() {
                order[name - 1] = i;
            }
            order
        };
        drop(reduced);

        let mut rank = allocate(n + 3, "ranks")?;
        for (r, &i) in reduced_order.iter().enumerate() {
            let pos = sample_position(i, n0);
            rank[pos] = r + 1;
            sample[r] = pos;
        }
        drop(reduced_order);

        // Non-sample positions, by (symbol, rank of the next suffix).
        let mut nonsample = allocate(n0, "non-sample positions")?;
        for (i, pos) in nonsample.iter_mut().enumerate() {
            *pos = 3 * i;
        }
        ranker.sort(&mut nonsample, &rank[1..], bit_width(n12), 1);
        ranker.sort(&mut nonsample, &padded, bit_width(alphabet_size), 1);

        let mut suffixes = reserve(n, "suffixes")?;
        let mut nonsample = nonsample.into_iter().peekable();
        let mut sample = sample.into_iter().filter(|&p| p < n).peekable();
        loop {
            let heads = (nonsample.peek().copied(), sample.peek().copied());
            match heads {
                (Some(i), Some(j)) => {
                    if nonsample_precedes(&padded, &rank, i, j) {
                        suffixes.push(i);
                        nonsample.next();
                    } else {
                        suffixes.push(j);
                        sample.next();
                    }
                }
                (Some(_), None) => {
                    suffixes.extend(nonsample);
                    break;
                }
                (None, _) => {
                    suffixes.extend(sample);
                    break;
                }
            }
        }
        debug_assert_eq!(suffixes.len(), n);
        Ok(suffixes)
    }
}

/// Compares the suffix at non-sample position `i` with the suffix at sample position `j`.
///
/// Both tuples end in the rank of a sample position, which is already known.
fn nonsample_precedes(padded: &[usize], rank: &[usize], i: usize, j: usize) -> bool {
    if j % 3 == 1 {
        (padded[i], rank[i + 1]) < (padded[j], rank[j + 1])
    } else {
        (padded[i], padded[i + 1], rank[i + 2]) < (padded[j], padded[j + 1], rank[j + 2])
    }
}

/// Index of sample position `pos` in the reduced text: class 1 first, then class 2.
fn reduced_index(pos: usize, n0: usize) -> usize {
    if pos % 3 == 1 {
        pos / 3
    } else {
        pos / 3 + n0
    }
}

/// Inverse of [`reduced_index`].
fn sample_position(i: usize, n0: usize) -> usize {
    if i < n0 {
        3 * i + 1
    } else {
        3 * (i - n0) + 2
    }
}

/// Maps each symbol to its rank among the distinct symbols of `text`, starting at 1.
///
/// Returns the mapped text and the number of distinct symbols.
fn compress_alphabet<T: Ord>(text: &[T]) -> Result<(Vec<usize>, usize)> {
    let mut symbols: Vec<&T> = Vec::new();
    symbols
        .try_reserve_exact(text.len())
        .map_err(|e| anyhow!("failed to allocate alphabet for {} symbols: {}", text.len(), e))?;
    symbols.extend(text.iter());
    symbols.sort_unstable();
    symbols.dedup();

    let mut ranks = allocate(text.len(), "symbol ranks")?;
    for (rank, symbol) in ranks.iter_mut().zip(text) {
        // Every symbol of the text is in the alphabet.
        let index = symbols.binary_search(&symbol).unwrap_or_else(|i| i);
        *rank = SENTINEL + 1 + index;
    }
    Ok((ranks, symbols.len()))
}

/// Returns an empty buffer with room for `len` positions.
fn reserve(len: usize, what: &str) -> Result<Vec<usize>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|e| anyhow!("failed to allocate {} for {} positions: {}", what, len, e))?;
    Ok(buf)
}

/// Returns a buffer of `len` sentinels.
pub(crate) fn allocate(len: usize, what: &str) -> Result<Vec<usize>> {
    let mut buf = reserve(len, what)?;
    buf.resize(len, SENTINEL);
    Ok(buf)
}
