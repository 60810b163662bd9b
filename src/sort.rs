use std::cmp::Ordering;

use itertools::Itertools;

use crate::heap::MinHeap;

/// Heap-sorts the input into a new vector, ascending by the natural `Ord` order.
pub fn heap_sort<T: Ord>(input: Vec<T>) -> Vec<T> {
    heap_sort_by(input, |a, b| a.cmp(b))
}

/// Heap-sorts the input into a new vector, ordered by `compare`.
///
/// O(n) heapify followed by n extractions. Not a stable sort: elements that
/// compare equal may come out in a different relative order than they went in.
pub fn heap_sort_by<T, F>(input: Vec<T>, compare: F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    MinHeap::from_vec_by(input, compare).into_sorted_vec()
}

/// Heap-sorts the slice in place, ascending by the natural `Ord` order.
pub fn sort_in_place<T: Ord>(items: &mut [T]) {
    sort_in_place_by(items, |a, b| a.cmp(b));
}

/// Heap-sorts the slice in place, ordered by `compare`. Allocation-free.
///
/// Builds a max-heap over the slice, then repeatedly swaps the root with the
/// last active slot and shrinks the active range by one. The freed tail slots
/// accumulate the sorted output, largest first, so the slice ends up ascending.
pub fn sort_in_place_by<T, F>(items: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let len = items.len();

    for idx in (0..len / 2).rev() {
        sift_down_max(items, len, idx, &compare);
    }

    for active in (1..len).rev() {
        items.swap(0, active);
        sift_down_max(items, active, 0, &compare);
    }
}

/// Sift-down over the active prefix `items[..active]`, moving the element at
/// `idx` below any larger child. The largest active element ends up at the root.
fn sift_down_max<T, F>(items: &mut [T], active: usize, mut idx: usize, compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    loop {
        let left = (idx << 1) + 1;
        if left >= active {
            break;
        }
        let right = left + 1;

        let mut largest = idx;
        if compare(&items[left], &items[largest]) == Ordering::Greater {
            largest = left;
        }
        if right < active && compare(&items[right], &items[largest]) == Ordering::Greater {
            largest = right;
        }

        if largest == idx {
            break;
        }

        items.swap(idx, largest);
        idx = largest;
    }
}

/// Verifies that `output` is `input` sorted by `compare`: same length, no
/// descending adjacent pair, and element-for-element equivalence with the
/// reference sort of the input.
pub fn verify_sorted_by<T, F>(input: &[T], output: &[T], compare: F) -> Result<(), String>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if input.len() != output.len() {
        return Err(format!(
            "Length mismatch: {} elements in, {} out.",
            input.len(),
            output.len()
        ));
    }

    if let Some(idx) = output
        .iter()
        .tuple_windows()
        .position(|(a, b)| compare(b, a) == Ordering::Less)
    {
        return Err(format!("Output is not ordered at index {}.", idx + 1));
    }

    let mut reference: Vec<T> = input.to_vec();
    reference.sort_by(|a, b| compare(a, b));
    for (idx, (a, b)) in reference.iter().zip(output).enumerate() {
        if compare(a, b) != Ordering::Equal {
            return Err(format!(
                "Output is not a permutation of the input (first difference at index {}).",
                idx
            ));
        }
    }

    Ok(())
}
