//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer runs the packing loop: it pulls items, weighs them, assigns
//! them to bins, evicts bins when the window overflows and drains the window
//! once the input is exhausted. It also tracks run statistics.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Resolved packing configuration.
pub mod config;

/// Lazy packing iterator.
pub mod executor;

/// Run statistics.
pub mod stats;
