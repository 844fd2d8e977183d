//! Integer-keyed comparison sorts.
//!
//! Every sort in this crate orders a mutable slice ascending by an `i64` key
//! extracted per item. Callers pick the algorithm through the [`KeySort`]
//! trait; the priority list in `lingo_lexer` uses [`QuickSort`] for bulk
//! construction, where inputs are small and stability is not required.
//!
//! # Algorithms
//!
//! | sort | stable | extra memory | notes |
//! |---|---|---|---|
//! | [`QuickSort`] | no | O(log n) stack | Lomuto partition, recurses on the smaller side |
//! | [`MergeSort`] | yes | O(n) | sorts `(key, index)` pairs, then permutes in place |
//! | [`InsertionSort`] | yes | O(1) | quadratic, for short or nearly sorted inputs |
//!
//! Items never need `Clone`: all algorithms move elements with `swap`.

mod insertion;
mod merge;
mod quick;

pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;

/// Sorts a slice in place, ascending by an integer key.
///
/// The key function may be called many times per item; keep it cheap.
pub trait KeySort {
    /// Sort `items` ascending by `key`.
    fn sort_by_key<T, F>(&self, items: &mut [T], key: F)
    where
        F: FnMut(&T) -> i64;
}

/// Returns `true` if `items` is ascending by `key` (equal keys allowed).
pub fn is_sorted_by_key<T, F>(items: &[T], mut key: F) -> bool
where
    F: FnMut(&T) -> i64,
{
    let mut previous: Option<i64> = None;
    for item in items {
        let current = key(item);
        if previous.is_some_and(|p| p > current) {
            return false;
        }
        previous = Some(current);
    }
    true
}

#[cfg(test)]
mod tests;
