//! Normal-distribution helpers
//!
//! The Gauss error function uses the Abramowitz & Stegun 7.1.26 rational
//! approximation (maximum absolute error about 1.5e-7). The constants are kept
//! as-is so displayed percentiles stay stable.

use std::f64::consts::SQRT_2;

const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Gauss error function
pub fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    let t = 1.0 / (1.0 + P * x);
    let poly = ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t;
    sign * (1.0 - poly * (-x * x).exp())
}

/// Standard-normal cumulative distribution function
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / SQRT_2))
}

/// Percentile (0-100) of `value` in a normal distribution
pub fn percentile(value: f64, mean: f64, std_dev: f64) -> f64 {
    let z = (value - mean) / std_dev;
    (normal_cdf(z) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erf_reference_values() {
        assert!(erf(0.0).abs() < 1e-7);
        assert!((erf(0.5) - 0.520_499_877_8).abs() < 2e-7);
        assert!((erf(1.0) - 0.842_700_792_9).abs() < 2e-7);
        assert!((erf(-1.0) + 0.842_700_792_9).abs() < 2e-7);
        assert!((erf(3.0) - 0.999_977_909_5).abs() < 2e-7);
    }

    #[test]
    fn test_normal_cdf() {
        assert!((normal_cdf(0.0) - 0.5).abs() < 1e-7);
        assert!((normal_cdf(1.96) - 0.975).abs() < 1e-4);
        assert!((normal_cdf(-1.0) - 0.158_655).abs() < 1e-5);
    }

    #[test]
    fn test_percentile_bounds() {
        assert!((percentile(176.0, 176.0, 7.0) - 50.0).abs() < 1e-5);
        assert!(percentile(400.0, 176.0, 7.0) <= 100.0);
        assert!(percentile(10.0, 176.0, 7.0) >= 0.0);
    }
}
