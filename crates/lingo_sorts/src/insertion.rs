use crate::KeySort;

/// Stable insertion sort. Quadratic; use for short or nearly sorted input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertionSort;

impl KeySort for InsertionSort {
    fn sort_by_key<T, F>(&self, items: &mut [T], mut key: F)
    where
        F: FnMut(&T) -> i64,
    {
        for i in 1..items.len() {
            let mut j = i;
            while j > 0 && key(&items[j - 1]) > key(&items[j]) {
                items.swap(j - 1, j);
                j -= 1;
            }
        }
    }
}
