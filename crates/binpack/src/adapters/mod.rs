//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides the two packing directions on top of the engine:
//!
//! - **Forward**: Lazy packing from the head of the input, pulled or pushed
//! - **Reverse**: Packing from the tail of the input
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Packing from the head of the input.
pub mod forward;

/// Packing from the tail of the input.
pub mod reverse;
