//! Property: the heap output equals the top-k of the input by score,
//! ties broken by insertion order.

use proptest::prelude::*;
use sql_arena::TopKHeap;

fn naive_top_k(scores: &[u32], k: usize) -> Vec<usize> {
    let mut indexed: Vec<(usize, u32)> = scores.iter().copied().enumerate().collect();
    // Stable sort: equal scores keep insertion order.
    indexed.sort_by(|l, r| r.1.cmp(&l.1));
    indexed.truncate(k);
    indexed.into_iter().map(|(i, _)| i).collect()
}

proptest! {
    #[test]
    fn matches_naive_selection(
        scores in prop::collection::vec(0u32..50, 0..200),
        k in 1usize..12,
    ) {
        let mut heap = TopKHeap::with_capacity(k);
        for (value, &score) in scores.iter().enumerate() {
            heap.insert(value, score);
        }
        let got: Vec<usize> = heap.into_sorted().into_iter().map(|(v, _)| v).collect();
        prop_assert_eq!(got, naive_top_k(&scores, k));
    }
}
