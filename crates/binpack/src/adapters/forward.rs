//! Forward adapter for windowed packing.
//!
//! ## Purpose
//!
//! This module exposes the engine in the two consumption styles a pipeline
//! typically needs: a pull iterator, and a push loop that hands every bin to a
//! sink which may stop the run.
//!
//! ## Design notes
//!
//! * **Pull**: `pack` returns the engine iterator unchanged.
//! * **Push**: `pack_with` drives the iterator and stops as soon as the sink
//!   returns `ControlFlow::Break`; the break value is returned to the caller.
//! * **Cancellation**: In both styles no input is read after the consumer
//!   stops.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::ops::ControlFlow;
use tracing::debug;

// Internal dependencies
use crate::engine::config::PackConfig;
use crate::engine::executor::PackIter;
use crate::primitives::weight::Weight;

/// Pack `items` lazily from the head of the input.
pub fn pack<I, F, W>(config: PackConfig<W>, items: I, weigher: F) -> PackIter<I::IntoIter, F, W>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> W,
    W: Weight,
{
    PackIter::new(config, items.into_iter(), weigher)
}

/// Pack `items` and hand each bin to `sink` until it breaks or the input ends.
pub fn pack_with<I, F, W, S, B>(
    config: PackConfig<W>,
    items: I,
    weigher: F,
    mut sink: S,
) -> ControlFlow<B>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> W,
    W: Weight,
    S: FnMut(Vec<I::Item>) -> ControlFlow<B>,
{
    let mut bins = pack(config, items, weigher);
    while let Some(bin) = bins.next() {
        if let ControlFlow::Break(value) = sink(bin) {
            debug!(
                items = bins.stats().items_consumed,
                bins_emitted = bins.stats().bins_emitted,
                open_bins = bins.open_bins(),
                "sink stopped packing"
            );
            return ControlFlow::Break(value);
        }
    }
    ControlFlow::Continue(())
}
