//! Heap sort.

/// Build a max heap, then repeatedly swap the root behind the heap.
pub fn heap_sort(input: &[i64]) -> Vec<i64> {
    let mut values = input.to_vec();
    let n = values.len();

    for i in (0..n / 2).rev() {
        sift_down(&mut values, n, i);
    }
    for end in (1..n).rev() {
        values.swap(0, end);
        sift_down(&mut values, end, 0);
    }
    values
}

/// Restore the heap property below `root` within `values[..len]`.
fn sift_down(values: &mut [i64], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;
        if left < len && values[left] > values[largest] {
            largest = left;
        }
        if right < len && values[right] > values[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }
        values.swap(root, largest);
        root = largest;
    }
}
