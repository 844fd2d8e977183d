use crate::KeySort;

/// Stable top-down merge sort.
///
/// Keys are extracted exactly once into `(key, original_index)` pairs, the
/// pairs are merge-sorted, and the resulting permutation is applied to the
/// items by following cycles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSort;

impl KeySort for MergeSort {
    fn sort_by_key<T, F>(&self, items: &mut [T], mut key: F)
    where
        F: FnMut(&T) -> i64,
    {
        if items.len() < 2 {
            return;
        }

        let mut pairs: Vec<(i64, usize)> = items
            .iter()
            .enumerate()
            .map(|(index, item)| (key(item), index))
            .collect();
        let mut scratch = pairs.clone();
        merge_sort(&mut pairs, &mut scratch);

        let order = pairs.into_iter().map(|(_, index)| index).collect();
        apply_permutation(items, order);
    }
}

fn merge_sort(pairs: &mut [(i64, usize)], scratch: &mut [(i64, usize)]) {
    let len = pairs.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    {
        let (left, right) = pairs.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        merge_sort(left, left_scratch);
        merge_sort(right, right_scratch);
    }

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < len {
        // `<=` keeps equal keys in their original order.
        if pairs[i].0 <= pairs[j].0 {
            scratch[k] = pairs[i];
            i += 1;
        } else {
            scratch[k] = pairs[j];
            j += 1;
        }
        k += 1;
    }
    while i < mid {
        scratch[k] = pairs[i];
        i += 1;
        k += 1;
    }
    while j < len {
        scratch[k] = pairs[j];
        j += 1;
        k += 1;
    }
    pairs.copy_from_slice(&scratch[..len]);
}

/// Rearrange `items` so that `items[i]` becomes the old `items[order[i]]`.
fn apply_permutation<T>(items: &mut [T], mut order: Vec<usize>) {
    for start in 0..items.len() {
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            items.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}
