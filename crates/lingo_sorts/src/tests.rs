use super::*;
use pretty_assertions::assert_eq;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Item {
    key: i64,
    tag: char,
}

fn items(pairs: &[(i64, char)]) -> Vec<Item> {
    pairs.iter().map(|&(key, tag)| Item { key, tag }).collect()
}

fn keys(items: &[Item]) -> Vec<i64> {
    items.iter().map(|item| item.key).collect()
}

fn tags(items: &[Item]) -> String {
    items.iter().map(|item| item.tag).collect()
}

// === is_sorted_by_key ===

#[test]
fn empty_and_single_are_sorted() {
    let empty: [i64; 0] = [];
    assert!(is_sorted_by_key(&empty, |v| *v));
    assert!(is_sorted_by_key(&[7_i64], |v| *v));
}

#[test]
fn equal_keys_are_sorted() {
    assert!(is_sorted_by_key(&[1_i64, 1, 2, 2, 2], |v| *v));
}

#[test]
fn descending_pair_is_not_sorted() {
    assert!(!is_sorted_by_key(&[1_i64, 3, 2], |v| *v));
}

// === QuickSort ===

#[test]
fn quick_sorts_mixed_keys() {
    let mut data = items(&[(5, 'a'), (-2, 'b'), (9, 'c'), (0, 'd'), (5, 'e')]);
    QuickSort.sort_by_key(&mut data, |item| item.key);
    assert_eq!(keys(&data), vec![-2, 0, 5, 5, 9]);
}

#[test]
fn quick_handles_sorted_and_reversed_input() {
    let mut ascending: Vec<i64> = (0..500).collect();
    QuickSort.sort_by_key(&mut ascending, |v| *v);
    assert!(is_sorted_by_key(&ascending, |v| *v));

    let mut descending: Vec<i64> = (0..500).rev().collect();
    QuickSort.sort_by_key(&mut descending, |v| *v);
    assert_eq!(descending, (0..500).collect::<Vec<_>>());
}

#[test]
fn quick_sorts_extreme_keys_last() {
    let mut data = vec![i64::MAX, 3, i64::MAX, 1];
    QuickSort.sort_by_key(&mut data, |v| *v);
    assert_eq!(data, vec![1, 3, i64::MAX, i64::MAX]);
}

// === MergeSort ===

#[test]
fn merge_is_stable() {
    let mut data = items(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]);
    MergeSort.sort_by_key(&mut data, |item| item.key);
    assert_eq!(tags(&data), "ebdac");
}

#[test]
fn merge_calls_key_once_per_item() {
    let mut data = vec![4_i64, 3, 2, 1];
    let mut calls = 0;
    MergeSort.sort_by_key(&mut data, |v| {
        calls += 1;
        *v
    });
    assert_eq!(calls, 4);
    assert_eq!(data, vec![1, 2, 3, 4]);
}

// === InsertionSort ===

#[test]
fn insertion_is_stable() {
    let mut data = items(&[(3, 'a'), (1, 'b'), (3, 'c'), (1, 'd')]);
    InsertionSort.sort_by_key(&mut data, |item| item.key);
    assert_eq!(tags(&data), "bdac");
}

#[test]
fn all_sorts_accept_empty_input() {
    let mut empty: Vec<Item> = Vec::new();
    QuickSort.sort_by_key(&mut empty, |item| item.key);
    MergeSort.sort_by_key(&mut empty, |item| item.key);
    InsertionSort.sort_by_key(&mut empty, |item| item.key);
    assert!(empty.is_empty());
}

// === Properties ===

mod proptest_sorts {
    use super::super::*;
    use proptest::prelude::*;

    fn reference(mut values: Vec<(i64, usize)>) -> Vec<(i64, usize)> {
        values.sort_by_key(|&(key, _)| key);
        values
    }

    proptest! {
        #[test]
        fn quick_matches_std(values in proptest::collection::vec(-50_i64..50, 0..200)) {
            let mut sorted = values.clone();
            QuickSort.sort_by_key(&mut sorted, |v| *v);
            let mut expected = values;
            expected.sort_unstable();
            prop_assert_eq!(sorted, expected);
        }

        #[test]
        fn merge_matches_stable_std(values in proptest::collection::vec(-20_i64..20, 0..200)) {
            let tagged: Vec<(i64, usize)> = values.iter().copied().zip(0..).collect();
            let mut sorted = tagged.clone();
            MergeSort.sort_by_key(&mut sorted, |&(key, _)| key);
            prop_assert_eq!(sorted, reference(tagged));
        }

        #[test]
        fn insertion_matches_stable_std(values in proptest::collection::vec(-20_i64..20, 0..64)) {
            let tagged: Vec<(i64, usize)> = values.iter().copied().zip(0..).collect();
            let mut sorted = tagged.clone();
            InsertionSort.sort_by_key(&mut sorted, |&(key, _)| key);
            prop_assert_eq!(sorted, reference(tagged));
        }
    }
}
