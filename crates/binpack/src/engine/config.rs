//! Resolved configuration for a packing run.

// Internal dependencies
use crate::algorithms::eviction::EvictionPolicy;
use crate::primitives::weight::Weight;

/// Parameters shared by every run of a packer.
///
/// No range checks are applied. A non-positive `target_weight` leaves room
/// only for items that do not raise a bin above it, and a `lookback` of zero
/// closes each bin as soon as it is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackConfig<W> {
    /// Capacity of each bin.
    pub target_weight: W,

    /// Number of bins allowed to stay open before one is evicted.
    pub lookback: usize,

    /// Which bin to close on overflow and while draining.
    pub eviction: EvictionPolicy,
}

impl<W: Weight> PackConfig<W> {
    /// Create a configuration from its three parameters.
    pub fn new(target_weight: W, lookback: usize, eviction: EvictionPolicy) -> Self {
        Self {
            target_weight,
            lookback,
            eviction,
        }
    }
}

impl<W: Weight> Default for PackConfig<W> {
    fn default() -> Self {
        Self::new(W::max_value(), 1, EvictionPolicy::default())
    }
}
