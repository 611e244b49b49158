//! Level-payment mortgage amortization.
//!
//! A loan of `M0` at periodic rate `c` repaid over `n` equal payments `B`:
//!
//! ```text
//! B      = c (1 + c)^n M0 / ((1 + c)^n − 1)
//! M_k    = M0 ((1 + c)^n − (1 + c)^k) / ((1 + c)^n − 1)
//! M_k+1  = M_k (1 + c) − B
//! ```
//!
//! At a zero rate the formulas degenerate to straight-line repayment
//! `B = M0 / n`, which is what these functions return.

use ol_core::{ensure, Rate, Real, Result};

/// Periodic payment that amortizes `principal` over `periods` payments.
///
/// # Errors
/// [`Error::Precondition`](ol_core::Error::Precondition) if `periods == 0`.
pub fn payment(principal: Real, rate: Rate, periods: u32) -> Result<Real> {
    ensure!(periods > 0, "a mortgage needs at least one payment");
    if rate == 0.0 {
        return Ok(principal / Real::from(periods));
    }
    let growth = (1.0 + rate).powf(Real::from(periods));
    Ok((rate * growth * principal) / (growth - 1.0))
}

/// Outstanding balance after `k` of `periods` payments.
///
/// # Errors
/// [`Error::Precondition`](ol_core::Error::Precondition) if `periods == 0`
/// or `k > periods`.
pub fn remaining_principal(principal: Real, rate: Rate, periods: u32, k: u32) -> Result<Real> {
    ensure!(periods > 0, "a mortgage needs at least one payment");
    ensure!(k <= periods, "payment {k} is past the last payment {periods}");
    if rate == 0.0 {
        return Ok(principal * Real::from(periods - k) / Real::from(periods));
    }
    let total = (1.0 + rate).powf(Real::from(periods));
    let elapsed = (1.0 + rate).powf(Real::from(k));
    Ok(principal * (total - elapsed) / (total - 1.0))
}

/// Balance after one more payment: accrue one period of interest on
/// `current`, then subtract `payment`.
pub fn next_remaining_principal(current: Real, rate: Rate, payment: Real) -> Real {
    current * (1.0 + rate) - payment
}

/// One row of an amortization table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationPeriod {
    /// Payment number, starting at 1.
    pub period: u32,
    /// Level payment made this period.
    pub payment: Real,
    /// Interest part of the payment.
    pub interest: Real,
    /// Principal part of the payment.
    pub principal: Real,
    /// Balance after the payment.
    pub remaining: Real,
}

/// Period-by-period amortization table, produced lazily.
///
/// Each row is derived from the previous balance with
/// [`next_remaining_principal`].
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    rate: Rate,
    periods: u32,
    payment: Real,
    balance: Real,
    current: u32,
}

impl AmortizationSchedule {
    /// Schedule for `principal` at `rate` per period over `periods` payments.
    pub fn new(principal: Real, rate: Rate, periods: u32) -> Result<Self> {
        Ok(Self {
            rate,
            periods,
            payment: payment(principal, rate, periods)?,
            balance: principal,
            current: 0,
        })
    }

    /// The level payment.
    pub fn payment(&self) -> Real {
        self.payment
    }

    /// Total number of payments.
    pub fn periods(&self) -> u32 {
        self.periods
    }
}

impl Iterator for AmortizationSchedule {
    type Item = AmortizationPeriod;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current >= self.periods {
            return None;
        }
        self.current += 1;
        let interest = self.balance * self.rate;
        let remaining = next_remaining_principal(self.balance, self.rate, self.payment);
        self.balance = remaining;
        Some(AmortizationPeriod {
            period: self.current,
            payment: self.payment,
            interest,
            principal: self.payment - interest,
            remaining,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.periods - self.current) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for AmortizationSchedule {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn five_year_monthly_payment() {
        let b = payment(150_000.0, 0.04 / 12.0, 60).unwrap();
        assert_abs_diff_eq!(b, 2762.4783, epsilon = 1e-4);
    }

    #[test]
    fn remaining_principal_endpoints() {
        let (m0, c, n) = (200_000.0, 0.05 / 12.0, 360);
        assert_abs_diff_eq!(remaining_principal(m0, c, n, 0).unwrap(), m0, epsilon = 1e-8);
        assert_abs_diff_eq!(remaining_principal(m0, c, n, n).unwrap(), 0.0, epsilon = 1e-8);
    }

    #[test]
    fn one_step_matches_closed_form() {
        let (m0, c, n) = (150_000.0, 0.04 / 12.0, 60);
        let b = payment(m0, c, n).unwrap();
        let m1 = next_remaining_principal(m0, c, b);
        assert_abs_diff_eq!(m1, remaining_principal(m0, c, n, 1).unwrap(), epsilon = 1e-8);
    }

    #[test]
    fn zero_rate_is_straight_line() {
        assert_eq!(payment(1200.0, 0.0, 12).unwrap(), 100.0);
        assert_eq!(remaining_principal(1200.0, 0.0, 12, 3).unwrap(), 900.0);
    }

    #[test]
    fn invalid_periods() {
        assert!(payment(1000.0, 0.01, 0).is_err());
        assert!(remaining_principal(1000.0, 0.01, 12, 13).is_err());
        assert!(AmortizationSchedule::new(1000.0, 0.01, 0).is_err());
    }

    #[test]
    fn schedule_has_one_row_per_payment() {
        let schedule = AmortizationSchedule::new(10_000.0, 0.01, 24).unwrap();
        assert_eq!(schedule.len(), 24);
        let rows: Vec<_> = schedule.collect();
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[0].period, 1);
        assert_eq!(rows[23].period, 24);
        assert_abs_diff_eq!(rows[0].interest, 100.0, epsilon = 1e-12);
    }
}
