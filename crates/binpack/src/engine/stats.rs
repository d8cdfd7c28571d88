//! Statistics for a packing run.
//!
//! ## Purpose
//!
//! This module accumulates counters while a run is in progress so callers can
//! inspect how the input was batched and confirm that the window stayed
//! bounded.
//!
//! ## Design notes
//!
//! * **Cumulative**: Counters are updated in place as items are consumed and
//!   bins are emitted; a snapshot can be taken at any time.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `bins_emitted <= bins_created`.
//! * `oversized_bins <= bins_emitted`.
//! * `peak_open_bins <= lookback + 1` for the run's configuration.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::bin::Bin;
use crate::primitives::weight::{accumulate, Weight};

// ============================================================================
// Statistics Structure
// ============================================================================

/// Counters describing a packing run so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackStats<W> {
    /// Items pulled from the input and weighed.
    pub items_consumed: usize,

    /// Bins opened.
    pub bins_created: usize,

    /// Bins closed and handed to the consumer.
    pub bins_emitted: usize,

    /// Emitted bins whose weight exceeded the target (single oversized items).
    pub oversized_bins: usize,

    /// Sum of the weights of all emitted bins.
    pub weight_emitted: W,

    /// Largest number of bins open at the same time.
    pub peak_open_bins: usize,
}

impl<W: Weight> Default for PackStats<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> PackStats<W> {
    /// Create zeroed statistics.
    pub fn new() -> Self {
        Self {
            items_consumed: 0,
            bins_created: 0,
            bins_emitted: 0,
            oversized_bins: 0,
            weight_emitted: W::zero(),
            peak_open_bins: 0,
        }
    }

    // Record one item read from the input.
    #[inline]
    pub(crate) fn record_item(&mut self) {
        self.items_consumed += 1;
    }

    // Record a new bin; `open_bins` is the window length after the push.
    #[inline]
    pub(crate) fn record_created(&mut self, open_bins: usize) {
        self.bins_created += 1;
        self.peak_open_bins = self.peak_open_bins.max(open_bins);
    }

    // Record a bin leaving the window.
    pub(crate) fn record_emitted<T>(&mut self, bin: &Bin<T, W>) {
        self.bins_emitted += 1;
        if bin.is_oversized() {
            self.oversized_bins += 1;
        }
        self.weight_emitted = accumulate(self.weight_emitted, bin.weight());
    }

    /// Bins opened but not yet emitted.
    pub fn bins_open(&self) -> usize {
        self.bins_created - self.bins_emitted
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<W: Weight> Display for PackStats<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Items consumed:  {}", self.items_consumed)?;
        writeln!(f, "  Bins created:    {}", self.bins_created)?;
        writeln!(f, "  Bins emitted:    {}", self.bins_emitted)?;
        writeln!(f, "  Oversized bins:  {}", self.oversized_bins)?;
        writeln!(f, "  Weight emitted:  {}", self.weight_emitted)?;
        write!(f, "  Peak open bins:  {}", self.peak_open_bins)
    }
}
