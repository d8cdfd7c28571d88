//! Eviction policies for the open-bin window.
//!
//! ## Purpose
//!
//! When more bins are open than the lookback allows, and again when the input
//! runs out, the packer closes one bin at a time. This module decides which.
//!
//! ## Key concepts
//!
//! * **FIFO**: Close the oldest open bin. Bins leave in creation order.
//! * **Largest-first**: Close the heaviest open bin. Among equally heavy bins
//!   the oldest one is chosen, so the outcome is deterministic.
//!
//! ## Invariants
//!
//! * Selection never reorders the window.
//! * Selection on an empty window yields `None`.

// Internal dependencies
use crate::primitives::weight::Weight;
use crate::primitives::window::OpenBins;

// ============================================================================
// Eviction Policy
// ============================================================================

/// Which open bin to close when the window overflows or drains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EvictionPolicy {
    /// Close the earliest-created open bin.
    #[default]
    Fifo,

    /// Close the open bin with the greatest weight (earliest on ties).
    LargestFirst,
}

impl EvictionPolicy {
    /// Map the boolean `largest_bin_first` switch to a policy.
    pub fn from_largest_bin_first(largest_bin_first: bool) -> Self {
        if largest_bin_first {
            Self::LargestFirst
        } else {
            Self::Fifo
        }
    }

    /// Whether this policy closes the heaviest bin first.
    pub fn is_largest_first(self) -> bool {
        matches!(self, Self::LargestFirst)
    }

    /// Index of the bin to close next, if any bin is open.
    pub fn select<T, W: Weight>(self, open: &OpenBins<T, W>) -> Option<usize> {
        match self {
            Self::Fifo => (!open.is_empty()).then_some(0),
            Self::LargestFirst => {
                let mut best: Option<(usize, W)> = None;
                for (idx, bin) in open.iter().enumerate() {
                    // Strict comparison keeps the first maximum.
                    match best {
                        Some((_, heaviest)) if bin.weight() <= heaviest => {}
                        _ => best = Some((idx, bin.weight())),
                    }
                }
                best.map(|(idx, _)| idx)
            }
        }
    }
}

impl From<bool> for EvictionPolicy {
    fn from(largest_bin_first: bool) -> Self {
        Self::from_largest_bin_first(largest_bin_first)
    }
}
