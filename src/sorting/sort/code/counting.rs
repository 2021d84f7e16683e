//! Counting sort over a bounded integer range.

/// Largest key range (`max - min + 1`) the frequency table may span.
pub const MAX_KEY_RANGE: usize = 1 << 22;

/// Frequency table over `max - min + 1` buckets, cumulative sums, then
/// stable placement walking the input backwards.
///
/// Memory is proportional to the key range, not the input length.
///
/// # Panics
/// Panics if `max - min + 1` exceeds [`MAX_KEY_RANGE`].
pub fn counting_sort(input: &[i64]) -> Vec<i64> {
    let (Some(&min), Some(&max)) = (input.iter().min(), input.iter().max()) else {
        return Vec::new();
    };

    let range = max
        .checked_sub(min)
        .and_then(|span| usize::try_from(span).ok())
        .and_then(|span| span.checked_add(1))
        .filter(|&range| range <= MAX_KEY_RANGE);
    assert!(
        range.is_some(),
        "Key range {}..={} exceeds the counting sort limit of {} buckets",
        min,
        max,
        MAX_KEY_RANGE
    );

    let bucket = |v: i64| (v - min) as usize;
    let mut counts = vec![0usize; bucket(max) + 1];
    for &v in input {
        counts[bucket(v)] += 1;
    }
    for i in 1..counts.len() {
        counts[i] += counts[i - 1];
    }

    let mut sorted = vec![0; input.len()];
    for &v in input.iter().rev() {
        let slot = &mut counts[bucket(v)];
        *slot -= 1;
        sorted[*slot] = v;
    }
    sorted
}
