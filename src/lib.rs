//! # Linear-time suffix arrays
//!
//! This crate builds suffix arrays with the skew (DC3) algorithm of Kärkkäinen and Sanders
//! and locates patterns in the indexed text by binary search.
//!
//! ## Example
//!
//! ```
//! use skew_sa::SuffixArrayBuilder;
//!
//! let text = b"banana";
//! let sa = SuffixArrayBuilder::new(text).build().unwrap();
//! assert_eq!(sa.suffixes(), &[5, 3, 1, 0, 4, 2]);
//!
//! let mut positions = sa.occurrences(b"ana").to_vec();
//! positions.sort_unstable();
//! assert_eq!(positions, vec![1, 3]);
//! ```
use std::ops::Range;

use anyhow::Result;

mod naive;
mod query;
mod radixsort;
mod skew;

pub use naive::{build_naive, verify};
pub use query::query;
pub use radixsort::{bit_width, RadixRanker};

use skew::SkewSorter;

/// Levels at most this long are sorted by comparison instead of recursion.
pub const DEFAULT_THRESHOLD: usize = 3;

/// Builds the suffix array of `text`.
///
/// Fails only when a working buffer cannot be allocated.
pub fn build<T: Ord>(text: &[T]) -> Result<Vec<usize>> {
    SkewSorter::new(DEFAULT_THRESHOLD, false).sort(text)
}

/// Builder of [`SuffixArray`].
pub struct SuffixArrayBuilder<'a, T> {
    text: &'a [T],
    threshold: usize,
    verbose: bool,
}

impl<'a, T: Ord> SuffixArrayBuilder<'a, T> {
    pub fn new(text: &'a [T]) -> Self {
        Self {
            text,
            threshold: DEFAULT_THRESHOLD,
            verbose: false,
        }
    }

    /// Sets the length at or below which a level is sorted by comparison.
    ///
    /// Values below 1 are treated as 1.
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(&self) -> Result<SuffixArray<'a, T>> {
        let suffixes = SkewSorter::new(self.threshold, self.verbose).sort(self.text)?;
        Ok(SuffixArray {
            text: self.text,
            suffixes,
        })
    }
}

/// A text together with its suffix array.
#[derive(Clone, Debug)]
pub struct SuffixArray<'a, T> {
    text: &'a [T],
    suffixes: Vec<usize>,
}

impl<'a, T: Ord> SuffixArray<'a, T> {
    pub fn text(&self) -> &'a [T] {
        self.text
    }

    /// Returns the start positions of the suffixes in lexicographic order.
    pub fn suffixes(&self) -> &[usize] {
        &self.suffixes
    }

    pub fn into_suffixes(self) -> Vec<usize> {
        self.suffixes
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// Returns the suffix of rank `rank`, or `None` if `rank` is out of range.
    pub fn suffix(&self, rank: usize) -> Option<&'a [T]> {
        self.suffixes.get(rank).map(|&pos| &self.text[pos..])
    }

    /// Returns the rank of the suffix starting at each text position.
    ///
    /// Fails only when the result cannot be allocated.
    pub fn inverse(&self) -> Result<Vec<usize>> {
        let mut inverse = skew::allocate(self.suffixes.len(), "inverse suffix array")?;
        for (rank, &pos) in self.suffixes.iter().enumerate() {
            inverse[pos] = rank;
        }
        Ok(inverse)
    }

    /// Returns the range of ranks whose suffixes start with `pattern`.
    pub fn search(&self, pattern: &[T]) -> Range<usize> {
        query(&self.suffixes, self.text, pattern)
    }

    /// Returns the text positions where `pattern` occurs, in suffix order.
    pub fn occurrences(&self, pattern: &[T]) -> &[usize] {
        &self.suffixes[self.search(pattern)]
    }

    pub fn count(&self, pattern: &[T]) -> usize {
        self.search(pattern).len()
    }

    pub fn contains(&self, pattern: &[T]) -> bool {
        !self.search(pattern).is_empty()
    }
}
