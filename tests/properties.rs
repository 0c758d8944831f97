use proptest::prelude::*;

use skew_sa::{build, build_naive, query, verify, SuffixArrayBuilder};

fn arb_text() -> impl Strategy<Value = Vec<u8>> {
    // Small alphabets produce the repeats that drive the recursion.
    (1u8..=4).prop_flat_map(|sigma| proptest::collection::vec(0..sigma, 0..300))
}

fn arb_text_and_pattern() -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    arb_text().prop_flat_map(|text| {
        let n = text.len();
        (Just(text), proptest::collection::vec(0u8..4, 0..=n.min(6) + 1))
    })
}

fn arb_wide_text() -> impl Strategy<Value = Vec<u32>> {
    // Mixes a few small symbols, which repeat, with symbols up to 2^30, so the radix passes
    // sweep wide keys while the reduced texts still recurse.
    proptest::collection::vec(prop_oneof![0u32..3, 0u32..1 << 30], 0..300)
}

fn arb_wide_text_and_pattern() -> impl Strategy<Value = (Vec<u32>, Vec<u32>)> {
    arb_wide_text().prop_flat_map(|text| {
        let n = text.len();
        (Just(text), 0..=n, 0usize..8, proptest::option::of(0u32..1 << 30)).prop_map(
            |(text, start, len, extra)| {
                let end = (start + len).min(text.len());
                let mut pattern = text[start..end].to_vec();
                pattern.extend(extra);
                (text, pattern)
            },
        )
    })
}

fn occurrences_naive<T: Ord>(text: &[T], pattern: &[T]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return vec![];
    }
    (0..=text.len() - pattern.len())
        .filter(|&p| &text[p..p + pattern.len()] == pattern)
        .collect()
}

proptest::proptest! {
    #[test]
    fn matches_reference(text in arb_text()) {
        let returned = build(&text[..]).unwrap();
        assert_eq!(build_naive(&text[..]), returned, "text={:?}", text);
    }

    #[test]
    fn permutation_and_sorted(text in arb_text(), threshold in 0usize..8) {
        let sa = SuffixArrayBuilder::new(&text[..]).threshold(threshold).build().unwrap();
        let mut positions = sa.suffixes().to_vec();
        positions.sort_unstable();
        assert!(positions.iter().copied().eq(0..text.len()));
        for pair in sa.suffixes().windows(2) {
            assert!(text[pair[0]..] < text[pair[1]..]);
        }
        verify(&text[..], sa.suffixes()).unwrap();
    }

    #[test]
    fn matches_reference_wide(text in arb_wide_text(), threshold in 0usize..5) {
        let sa = SuffixArrayBuilder::new(&text[..]).threshold(threshold).build().unwrap();
        assert_eq!(build_naive(&text[..]), sa.suffixes(), "text={:?}", text);
        verify(&text[..], sa.suffixes()).unwrap();
    }

    #[test]
    fn idempotent(text in arb_text()) {
        assert_eq!(build(&text[..]).unwrap(), build(&text[..]).unwrap());
    }

    #[test]
    fn query_finds_every_occurrence((text, pattern) in arb_text_and_pattern()) {
        let suffixes = build(&text[..]).unwrap();
        let range = query(&suffixes, &text[..], &pattern[..]);
        let mut returned = suffixes[range.clone()].to_vec();
        returned.sort_unstable();
        let expected = occurrences_naive(&text[..], &pattern[..]);
        assert_eq!(expected, returned, "text={:?} pattern={:?}", text, pattern);
        if expected.is_empty() {
            assert_eq!(range, 0..0);
        }
    }

    #[test]
    fn query_finds_every_occurrence_wide((text, pattern) in arb_wide_text_and_pattern()) {
        let suffixes = build(&text[..]).unwrap();
        let range = query(&suffixes, &text[..], &pattern[..]);
        let mut returned = suffixes[range.clone()].to_vec();
        returned.sort_unstable();
        let expected = occurrences_naive(&text[..], &pattern[..]);
        assert_eq!(expected, returned, "text={:?} pattern={:?}", text, pattern);
        if expected.is_empty() {
            assert_eq!(range, 0..0);
        }
    }

    #[test]
    fn query_every_substring(text in arb_text()) {
        let sa = SuffixArrayBuilder::new(&text[..]).build().unwrap();
        for start in 0..text.len() {
            for len in 1..=(text.len() - start).min(4) {
                let pattern = &text[start..start + len];
                assert!(sa.occurrences(pattern).contains(&start));
            }
        }
    }
}

#[test]
fn banana() {
    let text = b"banana";
    let suffixes = build(text).unwrap();
    assert_eq!(suffixes, vec![5, 3, 1, 0, 4, 2]);
    let mut positions = suffixes[query(&suffixes, text, b"ana")].to_vec();
    positions.sort_unstable();
    assert_eq!(positions, vec![1, 3]);
    assert_eq!(query(&suffixes, text, b"xyz"), 0..0);
}

#[test]
fn repeated_symbol() {
    let text = b"aaaa";
    let suffixes = build(text).unwrap();
    assert_eq!(suffixes, vec![3, 2, 1, 0]);
    let mut positions = suffixes[query(&suffixes, text, b"aa")].to_vec();
    positions.sort_unstable();
    assert_eq!(positions, vec![0, 1, 2]);
}

#[test]
fn periodic_wide_text() {
    let text: Vec<u32> = (0..20_001u32).map(|i| (i % 5) << 28).collect();
    let sa = SuffixArrayBuilder::new(&text[..]).threshold(1).build().unwrap();
    verify(&text[..], sa.suffixes()).unwrap();
    let pattern = [0u32, 1 << 28, 2 << 28];
    assert_eq!(sa.count(&pattern), 4000);
}

#[test]
fn boundaries() {
    assert!(build::<u8>(&[]).unwrap().is_empty());
    assert_eq!(query::<u8>(&[], &[], &[]), 0..0);
    let suffixes = build(b"banana").unwrap();
    assert_eq!(query(&suffixes, b"banana", b"too-long-pattern"), 0..0);
}
