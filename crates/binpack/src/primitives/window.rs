//! Window of open bins.
//!
//! Holds the bins that are still accepting items, in creation order. The
//! packer bounds its length by the configured lookback; this type only stores
//! and hands out bins.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

// Internal dependencies
use crate::primitives::bin::Bin;
use crate::primitives::weight::Weight;

// Upper bound on slots reserved up front; larger windows grow on demand.
const MAX_PREALLOCATED_BINS: usize = 64;

// Open bins ordered by creation time (front = oldest).
#[derive(Debug, Clone)]
pub struct OpenBins<T, W> {
    bins: VecDeque<Bin<T, W>>,
}

impl<T, W: Weight> Default for OpenBins<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W: Weight> OpenBins<T, W> {
    // Create an empty window.
    pub fn new() -> Self {
        Self {
            bins: VecDeque::new(),
        }
    }

    // Create an empty window sized for `lookback` bins plus the overflow slot.
    pub fn with_lookback(lookback: usize) -> Self {
        Self {
            bins: VecDeque::with_capacity(lookback.saturating_add(1).min(MAX_PREALLOCATED_BINS)),
        }
    }

    // Number of open bins.
    #[inline]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    // True once the window holds more bins than `lookback` allows.
    #[inline]
    pub fn exceeds(&self, lookback: usize) -> bool {
        self.bins.len() > lookback
    }

    // Iterate open bins oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Bin<T, W>> {
        self.bins.iter()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Bin<T, W>> {
        self.bins.get_mut(index)
    }

    // Open a new bin as the youngest entry.
    pub fn push(&mut self, bin: Bin<T, W>) {
        self.bins.push_back(bin);
    }

    // Close the bin at `index`, preserving the order of the rest.
    pub fn remove(&mut self, index: usize) -> Option<Bin<T, W>> {
        self.bins.remove(index)
    }

    // Total number of items held across all open bins.
    pub fn item_count(&self) -> usize {
        self.bins.iter().map(Bin::len).sum()
    }
}
