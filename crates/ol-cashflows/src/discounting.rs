//! Discrete discounting.

use ol_core::{DiscountFactor, Rate, Real};

/// Discount factor over `periods` periods at `rate` per period:
/// `1 / (1 + r)^n`.
pub fn discount(rate: Rate, periods: Real) -> DiscountFactor {
    1.0 / (1.0 + rate).powf(periods)
}

/// Present value of `value` received after `periods` periods.
pub fn npv(value: Real, rate: Rate, periods: Real) -> Real {
    value * discount(rate, periods)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn two_year_discount() {
        assert_abs_diff_eq!(discount(0.05, 2.0), 0.90703, epsilon = 1e-5);
        assert_abs_diff_eq!(discount(0.05, 2.0), 1.0 / 1.1025, epsilon = 1e-15);
    }

    #[test]
    fn npv_of_ten_year_payment() {
        assert_abs_diff_eq!(npv(10_000.0, 0.025, 10.0), 7811.98401, epsilon = 1e-5);
    }

    #[test]
    fn zero_periods_is_par() {
        assert_eq!(discount(0.07, 0.0), 1.0);
        assert_eq!(npv(250.0, 0.07, 0.0), 250.0);
    }

    #[test]
    fn zero_rate_does_not_discount() {
        assert_eq!(discount(0.0, 30.0), 1.0);
    }

    #[test]
    fn fractional_periods() {
        assert_abs_diff_eq!(discount(0.21, 0.5), 1.0 / 1.1, epsilon = 1e-15);
    }
}
