//! Option payoffs.
//!
//! A payoff is the value of exercising an option immediately, as a function
//! of the underlying price.  Lattice pricing evaluates it at every node.

use ol_core::Real;
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// `Call` when `is_call` is true, `Put` otherwise.
    pub fn from_is_call(is_call: bool) -> Self {
        if is_call {
            OptionType::Call
        } else {
            OptionType::Put
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Base trait for option payoffs.
pub trait Payoff: fmt::Debug + Send + Sync {
    /// Compute the payoff given the underlying price at exercise/expiry.
    fn value(&self, price: Real) -> Real;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> String {
        self.name().to_string()
    }
}

/// Plain vanilla exercise value.
///
/// `payoff = max(φ(S − K), 0)` where `φ = +1` for Call, `−1` for Put.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainVanillaPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl PlainVanillaPayoff {
    /// Create a new plain vanilla payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }

    /// Call payoff `max(S − K, 0)`.
    pub fn call(strike: Real) -> Self {
        Self::new(OptionType::Call, strike)
    }

    /// Put payoff `max(K − S, 0)`.
    pub fn put(strike: Real) -> Self {
        Self::new(OptionType::Put, strike)
    }
}

impl Payoff for PlainVanillaPayoff {
    fn value(&self, price: Real) -> Real {
        (self.option_type.sign() * (price - self.strike)).max(0.0)
    }

    fn name(&self) -> &str {
        "Vanilla"
    }

    fn description(&self) -> String {
        format!("{} {} @ {}", self.name(), self.option_type, self.strike)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn call_and_put_values() {
        let call = PlainVanillaPayoff::call(110.0);
        let put = PlainVanillaPayoff::put(110.0);
        assert_abs_diff_eq!(call.value(125.0), 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(call.value(100.0), 0.0);
        assert_abs_diff_eq!(put.value(100.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(put.value(125.0), 0.0);
    }

    #[test]
    fn at_the_money_is_worthless() {
        assert_eq!(PlainVanillaPayoff::call(100.0).value(100.0), 0.0);
        assert_eq!(PlainVanillaPayoff::put(100.0).value(100.0), 0.0);
    }

    #[test]
    fn description_names_type_and_strike() {
        let p = PlainVanillaPayoff::put(95.5);
        assert_eq!(p.description(), "Vanilla Put @ 95.5");
        assert_eq!(PlainVanillaPayoff::call(100.0).description(), "Vanilla Call @ 100");
    }

    #[test]
    fn from_is_call() {
        assert_eq!(OptionType::from_is_call(true), OptionType::Call);
        assert_eq!(OptionType::from_is_call(false), OptionType::Put);
    }

    proptest! {
        #[test]
        fn call_minus_put_is_forward(s in 1.0f64..500.0, k in 1.0f64..500.0) {
            let c = PlainVanillaPayoff::call(k).value(s);
            let p = PlainVanillaPayoff::put(k).value(s);
            prop_assert!(c >= 0.0 && p >= 0.0);
            prop_assert!((c - p - (s - k)).abs() < 1e-9);
        }
    }
}
