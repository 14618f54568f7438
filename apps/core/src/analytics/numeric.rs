//! Shared numeric helpers.
//!
//! Every rounded field produced by the engine goes through [`round_to`], so
//! golden values stay consistent across components.

/// Round `value` to `decimals` decimal places, halves rounding toward +inf.
///
/// `round_to(-0.125, 2)` is `-0.12`, not `-0.13`.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor + 0.5).floor() / factor
}

/// Arithmetic mean, `0.0` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Fraction `count / total`, `0.0` when `total` is zero.
pub fn ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}
