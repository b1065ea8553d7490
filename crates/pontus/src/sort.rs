//! Stable merge sort for [`DynArray`] values.
//!
//! Result sets are ordered with a caller-supplied comparator and an
//! explicit direction flag. Stability matters here: analyzer output is
//! compared across runs, so equal-key elements must keep their load
//! order in both directions. Descending order inverts the comparator
//! rather than reversing the output, which preserves that guarantee.

use std::cmp::Ordering;

use crate::array::DynArray;

/// Sort `array` in place using `compare`, ascending or descending.
///
/// Runs in O(n log n) time with O(n) auxiliary space. Elements that
/// compare equal retain their relative input order in both directions.
pub fn merge_sort<T, F>(array: &mut DynArray<T>, compare: F, ascending: bool)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let items = array.as_mut_slice();
    if items.len() < 2 {
        return;
    }

    let directed = |a: &T, b: &T| {
        let ordering = compare(a, b);
        if ascending { ordering } else { ordering.reverse() }
    };

    let mut aux = Vec::with_capacity(items.len());
    sort_slice(items, &mut aux, &directed);
}

fn sort_slice<T, F>(items: &mut [T], aux: &mut Vec<T>, compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = items.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    sort_slice(&mut items[..mid], aux, compare);
    sort_slice(&mut items[mid..], aux, compare);
    merge(items, mid, aux, compare);
}

fn merge<T, F>(items: &mut [T], mid: usize, aux: &mut Vec<T>, compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    aux.clear();
    aux.extend_from_slice(items);
    let (left, right) = aux.split_at(mid);

    let mut i = 0;
    let mut j = 0;
    for slot in items.iter_mut() {
        // Take from the left run on ties to keep the sort stable.
        let take_left =
            i < left.len() && (j >= right.len() || compare(&left[i], &right[j]) != Ordering::Greater);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}
