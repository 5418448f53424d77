/// Computes the arithmetic mean of a slice of values.
///
/// # Arguments
/// * `values` - The values to average.
///
/// # Returns
/// * `Some(mean)` for a non-empty slice, `None` for an empty one. Callers decide what
///   an empty input means; the engine maps it to its empty-peer-set policy.
pub fn arithmetic_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().sum::<f64>() / values.len() as f64)
}
