//! Reverse adapter: packing from the tail of the input.
//!
//! The forward algorithm runs over the input back to front; the resulting
//! bins, and the items inside each bin, are then put back into input order.
//! Items near the end of the input are therefore grouped first, which can
//! produce a different grouping than forward packing.
//!
//! The input is reversed by iteration, so the caller's storage is left as is.
//! Because the first bin depends on the whole input, the result is collected.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::adapters::forward;
use crate::engine::config::PackConfig;
use crate::primitives::weight::Weight;

/// Pack `items` starting from their tail.
pub fn pack_end<I, F, W>(config: PackConfig<W>, items: I, weigher: F) -> Vec<Vec<I::Item>>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(&I::Item) -> W,
    W: Weight,
{
    let mut bins: Vec<Vec<I::Item>> = forward::pack(config, items.into_iter().rev(), weigher).collect();
    bins.reverse();
    for bin in &mut bins {
        bin.reverse();
    }
    bins
}
