//! # binpack: Streaming Windowed Bin Packing for Rust
//!
//! Groups a sequence of weighted items into weight-bounded batches ("bins")
//! in a single pass, keeping only a bounded number of bins open at a time and
//! emitting finished bins lazily as the input is consumed.
//!
//! ## What is windowed bin packing?
//!
//! Each incoming item is placed into the first open bin that still has room
//! for it (first-fit). When no open bin has room, a new bin is opened. Once the
//! number of open bins exceeds the configured *lookback*, one bin is closed and
//! handed to the consumer, either the oldest one (FIFO) or the heaviest one
//! (largest-first). Memory use is bounded by the lookback window, not by the
//! length of the input, so the packer can split unbounded record streams into
//! size-capped write batches.
//!
//! ## Quick Start
//!
//! ```rust
//! use binpack::prelude::*;
//!
//! let sizes: Vec<i64> = vec![3, 3, 3, 3];
//!
//! let packer = Packer::new()
//!     .target_weight(5)   // Capacity of each bin
//!     .lookback(1)        // At most one bin kept open
//!     .build()?;
//!
//! let bins: Vec<Vec<i64>> = packer.pack(sizes, |size| *size).collect();
//! assert_eq!(bins, vec![vec![3], vec![3], vec![3], vec![3]]);
//! # Result::<(), PackError>::Ok(())
//! ```
//!
//! ### Lazy Consumption
//!
//! `pack` returns an iterator. Bins are produced on demand and the consumer
//! may stop at any time; no further input is read once it stops pulling.
//!
//! ```rust
//! use binpack::prelude::*;
//!
//! let packer = Packer::<i64>::new().target_weight(10).lookback(2).build()?;
//!
//! let records = (0..1_000_000_u32).map(|i| format!("record-{i}"));
//! let mut batches = packer.pack(records, |r| r.len() as i64);
//!
//! let first = batches.next().unwrap();
//! assert!(!first.is_empty());
//! assert!(batches.stats().items_consumed < 100);
//! # Result::<(), PackError>::Ok(())
//! ```
//!
//! ### Packing From the Tail
//!
//! `pack_end` applies the same algorithm starting from the end of the input,
//! so the items closest to the end are grouped first.
//!
//! ```rust
//! use binpack::prelude::*;
//!
//! let packer = Packer::new().target_weight(4_i64).lookback(1).build()?;
//!
//! let head = packer.pack(vec![1, 3, 1], |w| *w).collect::<Vec<_>>();
//! let tail = packer.pack_end(vec![1, 3, 1], |w| *w);
//!
//! assert_eq!(head, vec![vec![1, 3], vec![1]]);
//! assert_eq!(tail, vec![vec![1], vec![3, 1]]);
//! # Result::<(), PackError>::Ok(())
//! ```
//!
//! ### Eviction Policies
//!
//! ```rust
//! use binpack::prelude::*;
//!
//! let packer = Packer::new()
//!     .target_weight(10_i64)
//!     .lookback(2)
//!     .eviction(LargestFirst)  // Close the heaviest open bin first
//!     .build()?;
//!
//! let bins: Vec<_> = packer.pack(vec![2, 9, 5], |w| *w).collect();
//! assert_eq!(bins, vec![vec![9], vec![2, 5]]);
//! # Result::<(), PackError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Packing itself never fails: out-of-range configuration (a non-positive
//! target weight, a lookback of zero) produces degenerate but well-defined
//! batches. The only error surfaced by the crate is [`prelude::PackError`],
//! returned by the builder when a parameter is configured twice.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency. The
//! `difference` helper requires `std`.
//!
//! ```toml
//! [dependencies]
//! binpack = { version = "0.3", default-features = false }
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`trace` per evicted bin, `debug` at the
//! end of a run). Install any subscriber in the host application to see them.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - weights, bins and the open-bin window.
mod primitives;

// Layer 2: Algorithms - bin selection and eviction policies.
mod algorithms;

// Layer 3: Engine - the lazy packing loop and run statistics.
mod engine;

// Layer 4: Adapters - forward and reverse packing.
mod adapters;

// High-level fluent API.
mod api;

// Standard binpack prelude.
pub mod prelude {
    pub use crate::api::{
        Bin, EvictionPolicy,
        EvictionPolicy::{Fifo, LargestFirst},
        PackConfig, PackError, PackIter, PackStats, PackerBuilder as Packer, Weight,
        WindowedPacker,
    };

    #[cfg(feature = "std")]
    pub use crate::api::difference;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
