//! High-level API for windowed bin packing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the three packing parameters and the resulting
//! [`WindowedPacker`], which runs forward, push-based and reverse packing.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every parameter.
//! * **Literal**: Parameter values are taken as given; only repeated setters
//!   are reported, when `.build()` is called.
//! * **Type-Safe**: Generic over any primitive integer weight.
//! * **Reusable**: A built packer is a small `Copy` value; each call starts an
//!   independent run.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PackerBuilder`] via `Packer::new()`.
//! 2. Chain configuration methods (`.target_weight()`, `.lookback()`, ...).
//! 3. Call `.build()` to obtain a [`WindowedPacker`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::ops::ControlFlow;

// Internal dependencies
use crate::adapters::{forward, reverse};

// Publicly re-exported types
pub use crate::algorithms::eviction::EvictionPolicy;
pub use crate::engine::config::PackConfig;
pub use crate::engine::executor::PackIter;
pub use crate::engine::stats::PackStats;
pub use crate::primitives::bin::Bin;
#[cfg(feature = "std")]
pub use crate::primitives::difference::difference;
pub use crate::primitives::errors::PackError;
pub use crate::primitives::weight::Weight;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`WindowedPacker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackerBuilder<W> {
    /// Capacity of each bin (default: `W::max_value()`).
    pub target_weight: Option<W>,

    /// Bins kept open before one is evicted (default: 1).
    pub lookback: Option<usize>,

    /// Eviction policy (default: FIFO).
    pub eviction: Option<EvictionPolicy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<W: Weight> Default for PackerBuilder<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> PackerBuilder<W> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            target_weight: None,
            lookback: None,
            eviction: None,
            duplicate_param: None,
        }
    }

    /// Set the capacity of each bin.
    pub fn target_weight(mut self, target_weight: W) -> Self {
        if self.target_weight.is_some() {
            self.duplicate_param = Some("target_weight");
        }
        self.target_weight = Some(target_weight);
        self
    }

    /// Set how many bins may stay open before one is evicted.
    pub fn lookback(mut self, lookback: usize) -> Self {
        if self.lookback.is_some() {
            self.duplicate_param = Some("lookback");
        }
        self.lookback = Some(lookback);
        self
    }

    /// Set the eviction policy.
    pub fn eviction(mut self, policy: EvictionPolicy) -> Self {
        if self.eviction.is_some() {
            self.duplicate_param = Some("eviction");
        }
        self.eviction = Some(policy);
        self
    }

    /// Evict the heaviest open bin instead of the oldest one.
    ///
    /// Shorthand for `.eviction(LargestFirst)` / `.eviction(Fifo)`; it counts
    /// as setting `eviction`.
    pub fn largest_bin_first(self, enabled: bool) -> Self {
        self.eviction(EvictionPolicy::from_largest_bin_first(enabled))
    }

    /// Build the packer.
    pub fn build(self) -> Result<WindowedPacker<W>, PackError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(PackError::DuplicateParameter { parameter });
        }

        let defaults = PackConfig::<W>::default();
        Ok(WindowedPacker::from_config(PackConfig {
            target_weight: self.target_weight.unwrap_or(defaults.target_weight),
            lookback: self.lookback.unwrap_or(defaults.lookback),
            eviction: self.eviction.unwrap_or(defaults.eviction),
        }))
    }
}

// ============================================================================
// Windowed Packer
// ============================================================================

/// Greedy first-fit packer with a bounded window of open bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowedPacker<W = i64> {
    config: PackConfig<W>,
}

impl<W: Weight> Default for WindowedPacker<W> {
    fn default() -> Self {
        Self::from_config(PackConfig::default())
    }
}

impl<W: Weight> WindowedPacker<W> {
    /// Create a packer from its three parameters.
    pub fn new(target_weight: W, lookback: usize, eviction: EvictionPolicy) -> Self {
        Self::from_config(PackConfig::new(target_weight, lookback, eviction))
    }

    /// Create a packer from a resolved configuration.
    pub fn from_config(config: PackConfig<W>) -> Self {
        Self { config }
    }

    /// Resolved configuration.
    pub fn config(&self) -> &PackConfig<W> {
        &self.config
    }

    /// Capacity of each bin.
    pub fn target_weight(&self) -> W {
        self.config.target_weight
    }

    /// Bins kept open before one is evicted.
    pub fn lookback(&self) -> usize {
        self.config.lookback
    }

    /// Eviction policy.
    pub fn eviction(&self) -> EvictionPolicy {
        self.config.eviction
    }

    // ========================================================================
    // Packing
    // ========================================================================

    /// Pack `items` lazily, yielding each bin's items in input order.
    ///
    /// `weigher` is called exactly once per item. The returned iterator reads
    /// input only while it is being advanced.
    pub fn pack<I, F>(&self, items: I, weigher: F) -> PackIter<I::IntoIter, F, W>
    where
        I: IntoIterator,
        F: FnMut(&I::Item) -> W,
    {
        forward::pack(self.config, items, weigher)
    }

    /// Pack `items`, handing each bin to `sink` as soon as it is closed.
    ///
    /// Packing stops the moment `sink` returns `ControlFlow::Break`, and the
    /// break value is returned.
    ///
    /// ```rust
    /// use binpack::prelude::*;
    /// use std::ops::ControlFlow;
    ///
    /// let packer = Packer::new().target_weight(5_i64).lookback(1).build()?;
    ///
    /// let mut written = Vec::new();
    /// let flow = packer.pack_with(vec![3, 3, 3, 3], |w| *w, |bin| {
    ///     written.push(bin);
    ///     if written.len() == 2 {
    ///         ControlFlow::Break("buffer full")
    ///     } else {
    ///         ControlFlow::Continue(())
    ///     }
    /// });
    ///
    /// assert_eq!(flow, ControlFlow::Break("buffer full"));
    /// assert_eq!(written, vec![vec![3], vec![3]]);
    /// # Result::<(), PackError>::Ok(())
    /// ```
    pub fn pack_with<I, F, S, B>(&self, items: I, weigher: F, sink: S) -> ControlFlow<B>
    where
        I: IntoIterator,
        F: FnMut(&I::Item) -> W,
        S: FnMut(Vec<I::Item>) -> ControlFlow<B>,
    {
        forward::pack_with(self.config, items, weigher, sink)
    }

    /// Pack `items` starting from their tail.
    ///
    /// Bins are returned in input order, with items in input order inside each
    /// bin, but grouping decisions are made from the end of the input.
    pub fn pack_end<I, F>(&self, items: I, weigher: F) -> Vec<Vec<I::Item>>
    where
        I: IntoIterator,
        I::IntoIter: DoubleEndedIterator,
        F: FnMut(&I::Item) -> W,
    {
        reverse::pack_end(self.config, items, weigher)
    }
}
