//! Order-preserving set difference.

// External dependencies
use std::collections::HashSet;
use std::hash::Hash;

/// Elements of `a` that do not occur in `b`, in `a`'s order.
///
/// Runs in `O(len(a) + len(b))` using a hash set built from `b`. Duplicates in
/// `a` are kept.
///
/// ```rust
/// use binpack::prelude::difference;
///
/// assert_eq!(difference(&["a", "b", "c"], &["b"]), vec!["a", "c"]);
/// ```
pub fn difference<T>(a: &[T], b: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let exclude: HashSet<&T> = b.iter().collect();
    a.iter()
        .filter(|item| !exclude.contains(item))
        .cloned()
        .collect()
}
