//! Top-down merge sort.

/// Stable merge sort; returns a sorted copy.
pub fn merge_sort(input: &[i64]) -> Vec<i64> {
    let mut values = input.to_vec();
    let mut scratch = vec![0; values.len()];
    sort_range(&mut values, &mut scratch);
    values
}

fn sort_range(values: &mut [i64], scratch: &mut [i64]) {
    let len = values.len();
    if len < 2 {
        return;
    }
    let mid = len / 2;
    sort_range(&mut values[..mid], &mut scratch[..mid]);
    sort_range(&mut values[mid..], &mut scratch[mid..]);

    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < len {
        // `<=` keeps equal keys in input order
        if values[i] <= values[j] {
            scratch[k] = values[i];
            i += 1;
        } else {
            scratch[k] = values[j];
            j += 1;
        }
        k += 1;
    }
    scratch[k..k + mid - i].copy_from_slice(&values[i..mid]);
    k += mid - i;
    scratch[k..len].copy_from_slice(&values[j..len]);
    values.copy_from_slice(&scratch[..len]);
}
