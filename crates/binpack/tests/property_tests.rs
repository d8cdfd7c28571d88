//! Property tests for windowed packing.
//!
//! ## Test Organization
//!
//! 1. **Bin Capacity** - Weight bookkeeping and the oversized exception
//! 2. **Conservation** - Every item is emitted exactly once, for both directions
//! 3. **Window Bound** - At most `lookback + 1` bins open
//! 4. **Reverse Symmetry** - `pack_end` mirrors forward packing
//! 5. **Difference** - Set-difference identities

use std::cell::Cell;

use binpack::prelude::*;
use proptest::prelude::*;

fn arb_eviction() -> impl Strategy<Value = EvictionPolicy> {
    prop_oneof![Just(Fifo), Just(LargestFirst)]
}

fn arb_packer() -> impl Strategy<Value = WindowedPacker> {
    (-5_i64..40, 0_usize..6, arb_eviction())
        .prop_map(|(target, lookback, eviction)| WindowedPacker::new(target, lookback, eviction))
}

/// Weights tagged with their input position.
fn arb_items() -> impl Strategy<Value = Vec<(usize, i64)>> {
    prop::collection::vec(0_i64..25, 0..80)
        .prop_map(|weights| weights.into_iter().enumerate().collect())
}

fn sorted_ids(bins: &[Vec<(usize, i64)>]) -> Vec<usize> {
    let mut ids: Vec<usize> = bins.iter().flatten().map(|(id, _)| *id).collect();
    ids.sort_unstable();
    ids
}

// ============================================================================
// Bin Capacity
// ============================================================================

proptest! {
    #[test]
    fn bins_respect_target_or_hold_one_item(packer in arb_packer(), items in arb_items()) {
        for bin in packer.pack(items, |(_, w)| *w) {
            let weight: i64 = bin.iter().map(|(_, w)| w).sum();
            prop_assert!(!bin.is_empty());
            prop_assert!(weight <= packer.target_weight() || bin.len() == 1);
        }
    }

    #[test]
    fn items_keep_input_order_within_bins(packer in arb_packer(), items in arb_items()) {
        for bin in packer.pack(items, |(_, w)| *w) {
            prop_assert!(bin.windows(2).all(|pair| pair[0].0 < pair[1].0));
        }
    }
}

// ============================================================================
// Conservation
// ============================================================================

proptest! {
    #[test]
    fn forward_emits_every_item_once(packer in arb_packer(), items in arb_items()) {
        let expected: Vec<usize> = (0..items.len()).collect();
        let bins: Vec<_> = packer.pack(items, |(_, w)| *w).collect();

        prop_assert_eq!(sorted_ids(&bins), expected);
    }

    #[test]
    fn reverse_emits_every_item_once(packer in arb_packer(), items in arb_items()) {
        let expected: Vec<usize> = (0..items.len()).collect();
        let bins = packer.pack_end(items, |(_, w)| *w);

        prop_assert_eq!(sorted_ids(&bins), expected);
    }

    #[test]
    fn weigher_runs_once_per_item(packer in arb_packer(), items in arb_items()) {
        let calls = Cell::new(0_usize);
        let n = items.len();
        let emitted: usize = packer
            .pack(items, |(_, w)| {
                calls.set(calls.get() + 1);
                *w
            })
            .map(|bin| bin.len())
            .sum();

        prop_assert_eq!(emitted, n);
        prop_assert_eq!(calls.get(), n);
    }
}

// ============================================================================
// Window Bound
// ============================================================================

proptest! {
    #[test]
    fn open_bins_never_exceed_lookback_plus_one(packer in arb_packer(), items in arb_items()) {
        let mut bins = packer.pack(items, |(_, w)| *w);
        while bins.next().is_some() {
            prop_assert!(bins.open_bins() <= packer.lookback());
        }

        let stats = bins.stats();
        prop_assert!(stats.peak_open_bins <= packer.lookback() + 1);
        prop_assert_eq!(stats.bins_created, stats.bins_emitted);
    }
}

// ============================================================================
// Reverse Symmetry
// ============================================================================

proptest! {
    #[test]
    fn pack_end_mirrors_forward_over_reversed_input(packer in arb_packer(), items in arb_items()) {
        let mut reversed = items.clone();
        reversed.reverse();

        let mut mirrored: Vec<Vec<(usize, i64)>> =
            packer.pack(reversed, |(_, w)| *w).collect();
        mirrored.reverse();
        for bin in &mut mirrored {
            bin.reverse();
        }

        prop_assert_eq!(packer.pack_end(items, |(_, w)| *w), mirrored);
    }
}

// ============================================================================
// Difference
// ============================================================================

proptest! {
    #[test]
    fn difference_identities(a in prop::collection::vec("[a-e]{1,2}", 0..20)) {
        prop_assert!(difference(&a, &a).is_empty());
        prop_assert_eq!(difference(&a, &[]), a);
    }

    #[test]
    fn difference_excludes_exactly_b(
        a in prop::collection::vec("[a-e]", 0..20),
        b in prop::collection::vec("[a-e]", 0..5),
    ) {
        let diff = difference(&a, &b);
        let expected: Vec<String> = a.iter().filter(|s| !b.contains(*s)).cloned().collect();
        prop_assert_eq!(diff, expected);
    }
}
