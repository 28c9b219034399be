const EPSILON: f32 = 1e-9;

/// Normalize each value by the vector's own maximum, with a tiny epsilon to
/// avoid division by zero when every value is zero (or negative).
pub(crate) fn max_normalize(values: &[f32]) -> Vec<f32> {
    let max = values.iter().cloned().fold(f32::MIN, f32::max);
    values.iter().map(|&x| x / (max + EPSILON)).collect()
}
