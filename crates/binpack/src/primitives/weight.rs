//! Weight type bound for packing.
//!
//! Weights are plain primitive integers supplied by the caller. Accumulation
//! never panics: sums that would overflow clamp to the type's bounds.

// External dependencies
use core::fmt::{Debug, Display};
use num_traits::{CheckedAdd, PrimInt};

/// Integer type usable as an item weight (`i64` unless configured otherwise).
pub trait Weight: PrimInt + Debug + Display {}

impl<W: PrimInt + Debug + Display> Weight for W {}

// Add `weight` to `acc`, clamping at the numeric bounds instead of overflowing.
#[inline]
pub fn accumulate<W: Weight>(acc: W, weight: W) -> W {
    match CheckedAdd::checked_add(&acc, &weight) {
        Some(sum) => sum,
        None if weight < W::zero() => W::min_value(),
        None => W::max_value(),
    }
}

// Check `acc + weight <= limit` without materializing an overflowing sum.
#[inline]
pub fn fits_within<W: Weight>(acc: W, weight: W, limit: W) -> bool {
    match CheckedAdd::checked_add(&acc, &weight) {
        Some(sum) => sum <= limit,
        // Underflow: the true sum is below every representable limit.
        None => weight < W::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulate_clamps_on_overflow() {
        assert_eq!(accumulate(i64::MAX - 1, 5), i64::MAX);
        assert_eq!(accumulate(i64::MIN + 1, -5), i64::MIN);
        assert_eq!(accumulate(2_u8, 3), 5);
    }

    #[test]
    fn fits_within_handles_overflow() {
        assert!(!fits_within(i64::MAX, 1, i64::MAX));
        assert!(fits_within(i64::MIN, -1, 0));
        assert!(fits_within(3_i32, 2, 5));
        assert!(!fits_within(3_i32, 3, 5));
    }
}
