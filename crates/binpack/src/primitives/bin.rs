//! Weight-bounded accumulator of items.
//!
//! ## Purpose
//!
//! This module defines [`Bin`], the unit of output of the packer: an ordered
//! group of items together with their accumulated weight and the capacity the
//! group was opened with.
//!
//! ## Design notes
//!
//! * **Order-preserving**: Items keep their insertion order.
//! * **Unchecked adds**: `add` never refuses an item; callers consult
//!   `can_add` first. The first item of a bin is placed unconditionally.
//! * **Generics**: Generic over the item type and any primitive integer weight.
//!
//! ## Invariants
//!
//! * `weight()` equals the sum of the weights passed to `add` (clamped at the
//!   numeric bounds of `W`).
//! * If every add after the first was guarded by `can_add`, the weight exceeds
//!   the target only when the bin holds a single oversized item.
//!
//! ## Non-goals
//!
//! * This module does not compute item weights.
//! * This module does not decide which bin an item goes to.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::weight::{accumulate, fits_within, Weight};

// ============================================================================
// Bin
// ============================================================================

/// An ordered group of items with a running weight and a fixed capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bin<T, W = i64> {
    weight: W,
    target_weight: W,
    items: Vec<T>,
}

impl<T, W: Weight> Bin<T, W> {
    /// Create an empty bin with the given capacity.
    pub fn new(target_weight: W) -> Self {
        Self {
            weight: W::zero(),
            target_weight,
            items: Vec::new(),
        }
    }

    /// Create a bin holding `item`, regardless of whether it fits.
    pub fn with_item(target_weight: W, item: T, weight: W) -> Self {
        let mut bin = Self::new(target_weight);
        bin.add(item, weight);
        bin
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Accumulated weight of the items in the bin.
    #[inline]
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Capacity the bin was opened with.
    #[inline]
    pub fn target_weight(&self) -> W {
        self.target_weight
    }

    /// Whether an item of `weight` still fits: `weight() + weight <= target_weight()`.
    #[inline]
    pub fn can_add(&self, weight: W) -> bool {
        fits_within(self.weight, weight, self.target_weight)
    }

    /// Whether the accumulated weight is above capacity.
    pub fn is_oversized(&self) -> bool {
        self.weight > self.target_weight
    }

    /// Number of items in the bin.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the bin holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Append `item` and add `weight` to the total. Does not check capacity.
    #[inline]
    pub fn add(&mut self, item: T, weight: W) {
        self.weight = accumulate(self.weight, weight);
        self.items.push(item);
    }

    /// Consume the bin, returning its items in insertion order.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
