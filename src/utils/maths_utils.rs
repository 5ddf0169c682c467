/// Rounds to two decimal places, matching typical quote-display precision.
#[inline]
pub fn round_2dp(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

#[inline]
pub fn mean_and_stddev(data: &[f64]) -> (f64, f64) {
    let count = data.len();
    if count == 0 {
        return (0.0, 0.0);
    }

    let sum: f64 = data.iter().sum();
    let mean = sum / count as f64;

    let variance: f64 = data
        .iter()
        .map(|value| {
            let diff = mean - *value;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_2dp_truncates_to_cents() {
        assert_eq!(round_2dp(1.2345), 1.23);
        assert_eq!(round_2dp(53_123.4567), 53_123.46);
        assert_eq!(round_2dp(-0.004), 0.0);
    }

    #[test]
    fn mean_and_stddev_of_empty_is_zero() {
        assert_eq!(mean_and_stddev(&[]), (0.0, 0.0));
    }

    #[test]
    fn mean_and_stddev_basic() {
        let (mean, sd) = mean_and_stddev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((mean - 5.0).abs() < 1e-12);
        assert!((sd - 2.0).abs() < 1e-12);
    }
}
