//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer decides where items go and which bin leaves the window:
//!
//! - **First-fit**: the oldest open bin with room receives the item
//! - **Eviction**: FIFO or largest-first selection of the bin to close
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
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// First-fit bin selection.
pub mod first_fit;

/// Eviction policies.
pub mod eviction;
