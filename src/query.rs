use std::ops::Range;

/// Returns the slots of `suffixes` whose suffixes of `text` start with `pattern`.
///
/// The text positions of the occurrences are `suffixes[range]`, in suffix order. An empty
/// pattern, a pattern longer than the text, and a pattern that does not occur all give `0..0`.
///
/// # Arguments
///
/// * `suffixes` - Suffix array of `text`.
/// * `text` - The indexed text.
/// * `pattern` - The pattern to be located.
pub fn query<T: Ord>(suffixes: &[usize], text: &[T], pattern: &[T]) -> Range<usize> {
    debug_assert_eq!(suffixes.len(), text.len());

    let n = text.len();
    let m = pattern.len();
    if m == 0 || m > n {
        return 0..0;
    }

    // Within [lo, hi) all suffixes agree with the pattern before `offset`, so the symbols at
    // `offset` are non-decreasing. A suffix ending before `offset` reads `None`, which is
    // smaller than every symbol; that excludes every start position past n - m.
    let (mut lo, mut hi) = (0, suffixes.len());
    for (offset, symbol) in pattern.iter().enumerate() {
        let symbol = Some(symbol);
        let at = |p: usize| text.get(p + offset);
        lo += suffixes[lo..hi].partition_point(|&p| at(p) < symbol);
        hi = lo + suffixes[lo..hi].partition_point(|&p| at(p) <= symbol);
        if lo == hi {
            return 0..0;
        }
    }
    lo..hi
}
