//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive data structures used throughout the
//! crate: the weight bound, the `Bin` accumulator, the window of open bins and
//! the shared error type. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Weight type bound and overflow-free accumulation.
pub mod weight;

/// Weight-bounded item accumulator.
pub mod bin;

/// Ordered window of open bins.
pub mod window;

/// Shared error types.
pub mod errors;

/// Order-preserving set difference.
#[cfg(feature = "std")]
pub mod difference;
