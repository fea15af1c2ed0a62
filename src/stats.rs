//! Small numeric helpers shared by the dimension calculators.

use std::f64::consts::SQRT_2;

use statrs::function::erf::erf;

/// Lowest and highest percentile ever reported.
pub const PERCENTILE_FLOOR: u8 = 1;
pub const PERCENTILE_CEIL: u8 = 99;

/// One scored answer and its importance within a dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedValue {
    pub value: f64,
    pub weight: f64,
}

impl WeightedValue {
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// Weighted mean of `items`, or `None` when nothing carries weight.
///
/// Non-finite entries and non-positive weights are ignored.
pub fn calculate_weighted_average(items: &[WeightedValue]) -> Option<f64> {
    let (sum, total_weight) = items
        .iter()
        .filter(|it| it.value.is_finite() && it.weight.is_finite() && it.weight > 0.0)
        .fold((0.0, 0.0), |(s, w), it| (s + it.value * it.weight, w + it.weight));
    if total_weight <= 0.0 {
        return None;
    }
    Some(sum / total_weight)
}

pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Percentile of `value` against a normal population, clamped to [1, 99].
///
/// A zero (or unusable) standard deviation short-circuits to 50.
pub fn calculate_percentile(value: f64, mean: f64, std_dev: f64) -> u8 {
    if !std_dev.is_finite() || std_dev <= 0.0 || !value.is_finite() || !mean.is_finite() {
        return 50;
    }
    let z = (value - mean) / std_dev;
    let pct = (normal_cdf(z) * 100.0).round();
    pct.clamp(PERCENTILE_FLOOR as f64, PERCENTILE_CEIL as f64) as u8
}

pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weighted_average_ignores_dead_entries() {
        let items = [
            WeightedValue::new(5.0, 2.0),
            WeightedValue::new(1.0, 1.0),
            WeightedValue::new(f64::NAN, 3.0),
            WeightedValue::new(4.0, 0.0),
        ];
        let avg = calculate_weighted_average(&items).unwrap();
        assert!((avg - 11.0 / 3.0).abs() < 1e-12);
        assert_eq!(calculate_weighted_average(&[]), None);
        assert_eq!(calculate_weighted_average(&[WeightedValue::new(3.0, 0.0)]), None);
    }

    #[test]
    fn normal_cdf_reference_points() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((normal_cdf(1.0) - 0.841_344_746).abs() < 1e-7);
        assert!((normal_cdf(-1.96) - 0.024_997_895).abs() < 1e-7);
    }

    #[test]
    fn percentile_guards_and_clamps() {
        assert_eq!(calculate_percentile(4.0, 3.0, 0.0), 50);
        assert_eq!(calculate_percentile(4.0, 3.0, -1.0), 50);
        assert_eq!(calculate_percentile(3.0, 3.0, 1.0), 50);
        assert_eq!(calculate_percentile(4.0, 3.0, 1.0), 84);
        assert_eq!(calculate_percentile(5.0, 1.0, 0.5), 99);
        assert_eq!(calculate_percentile(1.0, 5.0, 0.5), 1);
    }
}
