//! Continuous market inputs → discrete lattice parameters.
//!
//! Cox-Ross-Rubinstein parameterisation adjusted for a continuous cost of
//! carry `c`:
//!
//! ```text
//! R = exp(r·T/n)
//! u = exp(σ·√(T/n)),   d = 1/u
//! q = (exp((r − c)·T/n) − d) / (u − d)
//! ```

use ol_core::{ensure, Error, Probability, Rate, Real, Result, Time, Volatility};

/// Per-step parameters of a recombining binomial lattice.
///
/// `up · down = 1` by construction.  `probability` is a valid risk-neutral
/// measure only when it lies in `[0, 1]`; that is checked by the model, not
/// here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteParameters {
    /// Initial spot price `S0`.
    pub spot: Real,
    /// Up factor `u`.
    pub up: Real,
    /// Down factor `d = 1/u`.
    pub down: Real,
    /// Risk-neutral up-probability `q`.
    pub probability: Probability,
    /// Per-step riskless growth factor `R`, the inverse of the discount.
    pub growth: Real,
    /// Number of lattice steps `n`.
    pub steps: usize,
}

/// Convert continuous-time inputs to discrete lattice parameters.
///
/// # Arguments
/// * `maturity` — time to maturity `T` in years
/// * `spot` — spot price `S0`
/// * `rate` — continuously compounded risk-free rate `r`
/// * `volatility` — annualised volatility `σ`
/// * `carry` — continuous dividend yield / cost of carry `c`
/// * `steps` — number of lattice steps `n`
///
/// # Errors
/// * [`Error::InvalidStepCount`] if `steps == 0`
/// * [`Error::Precondition`] for a non-positive maturity or spot, a negative
///   volatility, or non-finite rates
/// * [`Error::IllDefinedProbability`] if `u == d` (zero volatility), which
///   leaves `q` undefined
pub fn convert_to_discrete(
    maturity: Time,
    spot: Real,
    rate: Rate,
    volatility: Volatility,
    carry: Rate,
    steps: usize,
) -> Result<DiscreteParameters> {
    if steps == 0 {
        return Err(Error::InvalidStepCount(steps));
    }
    ensure!(
        maturity.is_finite() && maturity > 0.0,
        "maturity must be positive, got {maturity}"
    );
    ensure!(spot.is_finite() && spot > 0.0, "spot must be positive, got {spot}");
    ensure!(
        volatility.is_finite() && volatility >= 0.0,
        "volatility must be non-negative, got {volatility}"
    );
    ensure!(
        rate.is_finite() && carry.is_finite(),
        "rates must be finite, got r = {rate}, c = {carry}"
    );

    let n = steps as Real;
    let growth = (rate * maturity / n).exp();
    let up = (volatility * (maturity / n).sqrt()).exp();
    let down = 1.0 / up;
    let carry_growth = ((rate - carry) * maturity / n).exp();
    let probability = (carry_growth - down) / (up - down);

    if !probability.is_finite() {
        return Err(Error::IllDefinedProbability {
            up,
            down,
            growth: carry_growth,
        });
    }

    Ok(DiscreteParameters {
        spot,
        up,
        down,
        probability,
        growth,
        steps,
    })
}
