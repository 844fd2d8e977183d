use crate::KeySort;

/// Unstable quicksort with a Lomuto partition around the last element.
///
/// Recurses into the smaller partition and loops over the larger one, so
/// stack depth stays logarithmic even on already-sorted input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QuickSort;

impl KeySort for QuickSort {
    fn sort_by_key<T, F>(&self, items: &mut [T], mut key: F)
    where
        F: FnMut(&T) -> i64,
    {
        quick_sort(items, &mut key);
    }
}

fn quick_sort<T, F>(items: &mut [T], key: &mut F)
where
    F: FnMut(&T) -> i64,
{
    let mut items = items;
    while items.len() > 1 {
        let pivot = partition(items, key);
        let (left, right) = std::mem::take(&mut items).split_at_mut(pivot);
        // `right[0]` is the pivot, already in its final place.
        let right = &mut right[1..];
        if left.len() < right.len() {
            quick_sort(left, key);
            items = right;
        } else {
            quick_sort(right, key);
            items = left;
        }
    }
}

/// Partition around `items[last]`; returns the pivot's final index.
fn partition<T, F>(items: &mut [T], key: &mut F) -> usize
where
    F: FnMut(&T) -> i64,
{
    let high = items.len() - 1;
    let pivot = key(&items[high]);
    let mut store = 0;
    for j in 0..high {
        if key(&items[j]) < pivot {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}
