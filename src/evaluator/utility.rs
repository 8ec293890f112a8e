/// Computes the arithmetic mean of a slice of scores. Returns 0.0 for empty input.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<i64>() as f64 / values.len() as f64
}

/// Rounds a value to two decimal places, ties away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Returns the minimum and maximum of a slice. Returns (0, 0) for empty input.
pub fn min_max(values: &[i64]) -> (i64, i64) {
    let mut iter = values.iter().copied();
    let Some(first) = iter.next() else {
        return (0, 0);
    };
    iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
}
