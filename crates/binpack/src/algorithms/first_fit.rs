//! First-fit bin selection.
//!
//! Open bins are scanned in creation order and the first one with room wins.
//! The window is expected to be small, so a linear scan is all that is needed.

// Internal dependencies
use crate::primitives::weight::Weight;
use crate::primitives::window::OpenBins;

// Index of the oldest open bin that can take an item of `weight`.
#[inline]
pub fn first_fit<T, W: Weight>(open: &OpenBins<T, W>, weight: W) -> Option<usize> {
    open.iter().position(|bin| bin.can_add(weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::bin::Bin;

    fn window(weights: &[i64], target: i64) -> OpenBins<usize, i64> {
        let mut open = OpenBins::new();
        for (i, &w) in weights.iter().enumerate() {
            open.push(Bin::with_item(target, i, w));
        }
        open
    }

    #[test]
    fn picks_oldest_bin_with_room() {
        // Both bins 1 and 2 could take weight 3; the older one wins over the emptier one.
        let open = window(&[9, 6, 1], 10);
        assert_eq!(first_fit(&open, 3), Some(1));
    }

    #[test]
    fn exact_fit_is_accepted() {
        let open = window(&[7], 10);
        assert_eq!(first_fit(&open, 3), Some(0));
        assert_eq!(first_fit(&open, 4), None);
    }

    #[test]
    fn empty_window_has_no_fit() {
        let open = window(&[], 10);
        assert_eq!(first_fit(&open, 0), None);
    }
}
