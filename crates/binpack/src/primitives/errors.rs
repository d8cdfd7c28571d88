//! Error types for packer configuration.
//!
//! ## Purpose
//!
//! Packing itself is infallible: any weight or configuration value produces
//! defined output. The only failure the crate reports is a misuse of the
//! builder, caught when `build()` is called.
//!
//! ## Design notes
//!
//! * **Deferred**: Errors are recorded during builder configuration and
//!   surfaced by `build()`.
//! * **No-std**: No allocation is needed to describe an error.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for packer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PackError {}
