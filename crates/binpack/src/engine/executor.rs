//! Lazy packing loop.
//!
//! ## Purpose
//!
//! This module implements [`PackIter`], the iterator that drives windowed
//! first-fit packing. Each call to `next` reads just enough input to close one
//! bin and returns that bin's items.
//!
//! ## Design notes
//!
//! * **Pull-based**: All work happens inside `next`. A consumer that stops
//!   pulling (or drops the iterator) stops the packer; nothing is read ahead.
//! * **Bounded memory**: Only the open-bin window is held, at most
//!   `lookback + 1` bins, independent of the input length.
//! * **Single pass**: Every item is weighed exactly once, in input order.
//!
//! ## Key concepts
//!
//! For each item, in input order:
//!
//! 1. Weigh the item.
//! 2. Add it to the first open bin with room (creation order).
//! 3. Otherwise open a new bin holding the item, even if it is oversized.
//! 4. Only after opening a bin: if more than `lookback` bins are open, evict
//!    one by policy and yield it.
//!
//! When the input is exhausted the remaining bins are evicted one per call,
//! using the same policy, until the window is empty.
//!
//! ## Invariants
//!
//! * Items within a yielded bin are in input order.
//! * Every input item appears in exactly one yielded bin once the iterator is
//!   exhausted.
//! * The window never holds more than `lookback + 1` bins.
//!
//! ## Non-goals
//!
//! * This module does not search for an optimal packing.
//! * This module does not share a run across threads.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{self, Debug, Formatter};
use core::iter::FusedIterator;
use tracing::{debug, trace};

// Internal dependencies
use crate::algorithms::first_fit::first_fit;
use crate::engine::config::PackConfig;
use crate::engine::stats::PackStats;
use crate::primitives::bin::Bin;
use crate::primitives::weight::Weight;
use crate::primitives::window::OpenBins;

// ============================================================================
// Pack Iterator
// ============================================================================

/// Iterator over the bins produced by a packing run.
///
/// Created by [`WindowedPacker::pack`](crate::prelude::WindowedPacker::pack).
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PackIter<I, F, W>
where
    I: Iterator,
{
    input: I,
    weigher: F,
    config: PackConfig<W>,
    open: OpenBins<I::Item, W>,
    stats: PackStats<W>,
    exhausted: bool,
}

impl<I, F, W> PackIter<I, F, W>
where
    I: Iterator,
    F: FnMut(&I::Item) -> W,
    W: Weight,
{
    /// Start a run over `input`, weighing items with `weigher`.
    pub fn new(config: PackConfig<W>, input: I, weigher: F) -> Self {
        Self {
            input,
            weigher,
            config,
            open: OpenBins::with_lookback(config.lookback),
            stats: PackStats::new(),
            exhausted: false,
        }
    }

    /// Configuration of this run.
    pub fn config(&self) -> &PackConfig<W> {
        &self.config
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &PackStats<W> {
        &self.stats
    }

    /// Number of bins currently open.
    pub fn open_bins(&self) -> usize {
        self.open.len()
    }

    /// Whether the input has been fully read (remaining bins are draining).
    pub fn is_draining(&self) -> bool {
        self.exhausted
    }

    // Place one item, returning whether a new bin was opened.
    fn place(&mut self, item: I::Item) -> bool {
        let weight = (self.weigher)(&item);
        self.stats.record_item();

        if let Some(bin) = first_fit(&self.open, weight).and_then(|idx| self.open.get_mut(idx)) {
            bin.add(item, weight);
            return false;
        }

        self.open
            .push(Bin::with_item(self.config.target_weight, item, weight));
        self.stats.record_created(self.open.len());
        true
    }

    // Close one bin chosen by the eviction policy.
    fn evict(&mut self) -> Option<Vec<I::Item>> {
        let idx = self.config.eviction.select(&self.open)?;
        let bin = self.open.remove(idx)?;
        self.stats.record_emitted(&bin);

        trace!(
            policy = ?self.config.eviction,
            draining = self.exhausted,
            index = idx,
            weight = %bin.weight(),
            items = bin.len(),
            open_bins = self.open.len(),
            "evicted bin"
        );

        Some(bin.into_items())
    }
}

impl<I, F, W> Iterator for PackIter<I, F, W>
where
    I: Iterator,
    F: FnMut(&I::Item) -> W,
    W: Weight,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            let Some(item) = self.input.next() else {
                self.exhausted = true;
                debug!(
                    items = self.stats.items_consumed,
                    bins_created = self.stats.bins_created,
                    open_bins = self.open.len(),
                    buffered_items = self.open.item_count(),
                    "input exhausted, draining open bins"
                );
                break;
            };

            if self.place(item) && self.open.exceeds(self.config.lookback) {
                return self.evict();
            }
        }

        let bin = self.evict();
        if bin.is_some() && self.open.is_empty() {
            debug!(
                bins_emitted = self.stats.bins_emitted,
                oversized_bins = self.stats.oversized_bins,
                weight_emitted = %self.stats.weight_emitted,
                peak_open_bins = self.stats.peak_open_bins,
                "packing finished"
            );
        }
        bin
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (self.open.len(), Some(self.open.len()))
        } else {
            let (_, upper) = self.input.size_hint();
            // Open bins are all emitted eventually; each remaining item opens at most one more.
            (
                self.open.len(),
                upper.and_then(|n| n.checked_add(self.open.len())),
            )
        }
    }
}

impl<I, F, W> FusedIterator for PackIter<I, F, W>
where
    I: Iterator,
    F: FnMut(&I::Item) -> W,
    W: Weight,
{
}

impl<I, F, W> Debug for PackIter<I, F, W>
where
    I: Iterator,
    W: Weight,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackIter")
            .field("config", &self.config)
            .field("open_bins", &self.open.len())
            .field("stats", &self.stats)
            .field("exhausted", &self.exhausted)
            .finish_non_exhaustive()
    }
}
