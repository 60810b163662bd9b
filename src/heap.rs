use std::cmp::Ordering;

/// Error returned by operations that require at least one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyHeap;

impl std::fmt::Display for EmptyHeap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "operation requires a non-empty heap")
    }
}

impl std::error::Error for EmptyHeap {}

/// Natural ascending order, the default comparator.
fn natural_order<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// An array-backed binary min-heap, ordered by a caller-supplied comparator.
///
/// The comparator must be a total order over the element type; the heap does
/// not validate this. For index `i`, the parent lives at `(i - 1) / 2` and the
/// children at `2i + 1` and `2i + 2`. After every public mutation, no element
/// compares less than its parent.
pub struct MinHeap<T, F = fn(&T, &T) -> Ordering>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// The array representation of the heap.
    data: Vec<T>,
    compare: F,
}

impl<T: Ord> MinHeap<T> {
    /// Creates a new empty MinHeap with the natural `Ord` ordering.
    pub fn new() -> Self {
        MinHeap {
            data: Vec::new(),
            compare: natural_order::<T>,
        }
    }

    /// Creates a new empty MinHeap with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        MinHeap {
            data: Vec::with_capacity(capacity),
            compare: natural_order::<T>,
        }
    }

    /// Builds a heap from arbitrary input, using the natural `Ord` ordering.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self::from_vec_by(data, natural_order::<T>)
    }
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates a new empty MinHeap ordered by `compare`.
    pub fn with_comparator(compare: F) -> Self {
        MinHeap {
            data: Vec::new(),
            compare,
        }
    }

    /// Builds a heap from arbitrary input in O(n), ordered by `compare`.
    ///
    /// Bottom-up heapify: sift down every parent, starting at the last one.
    /// Cheaper than inserting the elements one by one (O(n log n)).
    pub fn from_vec_by(data: Vec<T>, compare: F) -> Self {
        let mut heap = MinHeap { data, compare };
        for idx in (0..heap.data.len() / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks whether the heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the backing storage can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The heap-ordered backing array.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Inserts an element into the heap. O(log n).
    pub fn insert(&mut self, value: T) {
        let idx = self.data.len();
        self.data.push(value);
        self.sift_up(idx);
    }

    /// Returns the minimum element without removing it.
    pub fn peek(&self) -> Result<&T, EmptyHeap> {
        self.data.first().ok_or(EmptyHeap)
    }

    /// Removes and returns the minimum element. O(log n).
    ///
    /// The last element moves into the root slot and sifts down over the
    /// shrunk range.
    pub fn extract_min(&mut self) -> Result<T, EmptyHeap> {
        if self.data.is_empty() {
            return Err(EmptyHeap);
        }

        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Consumes the heap, draining it into a vector in comparator order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(value) = self.extract_min() {
            sorted.push(value);
        }
        sorted
    }

    /// Sifts the element at `idx` up the heap to restore the heap property.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = parent_of(idx);
            if (self.compare)(&self.data[idx], &self.data[parent]) != Ordering::Less {
                break; // Not less than the parent => heap property satisfied
            }
            self.data.swap(idx, parent);
            idx = parent;
        }
    }

    /// Sifts the element at `idx` down the heap to restore the heap property.
    /// When both children compare equal, the left child wins, so heap layouts
    /// are deterministic for a given input.
    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = left_child_of(idx);
            if left >= self.data.len() {
                break; // No children
            }
            let right = left + 1;

            let mut smallest = idx;
            if (self.compare)(&self.data[left], &self.data[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < self.data.len()
                && (self.compare)(&self.data[right], &self.data[smallest]) == Ordering::Less
            {
                smallest = right;
            }

            if smallest == idx {
                break; // Neither child is smaller => heap property satisfied
            }

            self.data.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        MinHeap::new()
    }
}

impl<T: Ord> From<Vec<T>> for MinHeap<T> {
    fn from(data: Vec<T>) -> Self {
        MinHeap::from_vec(data)
    }
}

#[inline(always)]
fn parent_of(idx: usize) -> usize {
    (idx - 1) >> 1
}

#[inline(always)]
fn left_child_of(idx: usize) -> usize {
    (idx << 1) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks that no element compares less than its parent.
    fn assert_heap_property(data: &[i32], context: &str) {
        for i in 1..data.len() {
            let parent = (i - 1) / 2;
            assert!(
                data[parent] <= data[i],
                "Heap property violated {}: data[{}]={} > data[{}]={} (heap: {:?})",
                context,
                parent,
                data[parent],
                i,
                data[i],
                data
            );
        }
    }

    #[test]
    fn test_empty_heap_errors() {
        let mut heap = MinHeap::<i32>::from_vec(vec![]);
        assert_eq!(heap.len(), 0);
        assert!(heap.is_empty());
        assert_eq!(heap.peek(), Err(EmptyHeap));
        assert_eq!(heap.extract_min(), Err(EmptyHeap));
    }

    #[test]
    fn test_insert_updates_minimum_and_size() {
        let mut heap = MinHeap::new();

        let inserts: Vec<(i32, i32)> = vec![(10, 10), (5, 5), (15, 5), (3, 3), (4, 3)];
        for (k, (value, expected_min)) in inserts.into_iter().enumerate() {
            heap.insert(value);
            assert_eq!(heap.len(), k + 1);
            assert_eq!(heap.peek(), Ok(&expected_min), "After inserting {}", value);
            assert_heap_property(heap.as_slice(), "after insert");
        }
    }

    #[test]
    fn test_heapify_from_vec() {
        let cases: Vec<Vec<i32>> = vec![
            vec![],
            vec![1],
            vec![2, 1],
            vec![5, 3, 8, 1, 9, 2],
            vec![1, 2, 3, 4, 5, 6, 7],
            vec![7, 6, 5, 4, 3, 2, 1],
            vec![4, 4, 4, 4],
        ];

        for input in cases {
            let heap = MinHeap::from_vec(input.clone());
            assert_eq!(heap.len(), input.len());
            assert_heap_property(heap.as_slice(), "after from_vec");

            // Same multiset as the input
            let mut contents = heap.as_slice().to_vec();
            contents.sort_unstable();
            let mut expected = input.clone();
            expected.sort_unstable();
            assert_eq!(contents, expected, "Heapify lost elements of {:?}", input);
        }
    }

    #[test]
    fn test_extract_min_drains_ascending() {
        let mut heap = MinHeap::from_vec(vec![5, 3, 8, 1, 9, 2]);

        for expected in [1, 2, 3, 5, 8] {
            assert_eq!(heap.extract_min(), Ok(expected));
            assert_heap_property(heap.as_slice(), "after extract_min");
        }

        assert_eq!(heap.len(), 1);
        assert_eq!(heap.peek(), Ok(&9));
    }

    #[test]
    fn test_extraction_order_on_random_input() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);

        for round in 0..10 {
            let input: Vec<i32> = (0..200).map(|_| rng.i32(-1000..1000)).collect();
            let mut expected = input.clone();
            expected.sort_unstable();

            let mut heap = MinHeap::from_vec(input);
            let mut drained = Vec::with_capacity(expected.len());
            while let Ok(value) = heap.extract_min() {
                drained.push(value);
            }

            assert_eq!(drained, expected, "Round {}", round);
            // The heap is exhausted: one more extraction must fail
            assert_eq!(heap.extract_min(), Err(EmptyHeap));
        }
    }

    #[test]
    fn test_extract_decreases_size_by_one() {
        let mut heap = MinHeap::from_vec(vec![4, 2, 7, 1]);
        assert_eq!(heap.len(), 4);
        heap.extract_min().unwrap();
        assert_eq!(heap.len(), 3);
        heap.insert(0);
        assert_eq!(heap.len(), 4);
    }

    #[test]
    fn test_duplicates() {
        let mut heap = MinHeap::new();
        for value in [7, 7, 3, 3, 5, 5] {
            heap.insert(value);
        }

        assert_eq!(heap.peek(), Ok(&3));
        assert_eq!(heap.into_sorted_vec(), vec![3, 3, 5, 5, 7, 7]);
    }

    #[test]
    fn test_custom_comparator() {
        // Reversed comparator turns the structure into a max-heap
        let heap = MinHeap::from_vec_by(vec![5, 3, 8, 1, 9, 2], |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(heap.into_sorted_vec(), vec![9, 8, 5, 3, 2, 1]);
    }

    #[test]
    fn test_incremental_build_matches_heapify() {
        let input = vec![12, 3, 25, 7, 9, 1, 14, 0, 6];

        let mut incremental = MinHeap::with_capacity(input.len());
        for &value in &input {
            incremental.insert(value);
        }

        let bulk = MinHeap::from_vec(input);
        // Layouts may differ; the drained order may not.
        assert_eq!(incremental.into_sorted_vec(), bulk.into_sorted_vec());
    }
}
