//! Error types for optlattice.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum below.  Invalid numerical inputs are
//! reported as errors instead of surfacing later as NaN or infinity.  The
//! [`ensure!`](crate::ensure) and [`fail!`](crate::fail) macros cover the
//! common precondition / runtime cases.

use std::fmt;

use thiserror::Error;

/// A named quantity stored on a lattice node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quantity {
    /// Price of the underlying stock, fixed at construction.
    Stock,
    /// Futures fair value, filled by backward induction on demand.
    Futures,
    /// Option value from the most recent pricing pass.
    Option,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Stock => write!(f, "stock"),
            Quantity::Futures => write!(f, "futures"),
            Quantity::Option => write!(f, "option"),
        }
    }
}

/// The top-level error type used throughout optlattice.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error (see [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A lattice needs at least one step.
    #[error("invalid step count ({0}): a lattice needs at least one step")]
    InvalidStepCount(usize),

    /// The risk-neutral probability could not be computed, typically
    /// because the up and down factors coincide (zero volatility).
    #[error("ill-defined risk-neutral probability (up = {up}, down = {down}, carry growth = {growth})")]
    IllDefinedProbability {
        /// Up factor.
        up: f64,
        /// Down factor.
        down: f64,
        /// Per-step growth factor: `exp((r − c)·Δt)` from the converter, or
        /// the riskless factor passed to a model.
        growth: f64,
    },

    /// The risk-neutral probability lies outside `[0, 1]` and the model
    /// settings reject such inputs.
    #[error("probability {probability} outside [0, 1]: inputs admit arbitrage")]
    ArbitrageViolation {
        /// The offending probability.
        probability: f64,
    },

    /// A node quantity was read before the pass that computes it ran.
    #[error("{quantity} value at node ({step}, {index}) not yet computed")]
    ValueNotYetComputed {
        /// Which quantity was requested.
        quantity: Quantity,
        /// Layer (time step) of the node.
        step: usize,
        /// Position within the layer (number of up-moves).
        index: usize,
    },

    /// Index out of range.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The index that was out of range.
        index: usize,
        /// The size of the container.
        size: usize,
    },
}

/// Shorthand `Result` type used throughout optlattice.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ol_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ol_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use ol_core::{fail, errors::Error};
/// fn always_err() -> ol_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_sqrt(x: f64) -> Result<f64> {
        crate::ensure!(x >= 0.0, "negative argument {x}");
        Ok(x.sqrt())
    }

    #[test]
    fn ensure_maps_to_precondition() {
        assert_eq!(checked_sqrt(4.0), Ok(2.0));
        assert_eq!(
            checked_sqrt(-1.0),
            Err(Error::Precondition("negative argument -1".into()))
        );
    }

    #[test]
    fn not_yet_computed_message_names_node() {
        let err = Error::ValueNotYetComputed {
            quantity: Quantity::Futures,
            step: 3,
            index: 1,
        };
        assert_eq!(err.to_string(), "futures value at node (3, 1) not yet computed");
    }

    #[test]
    fn step_count_message() {
        assert_eq!(
            Error::InvalidStepCount(0).to_string(),
            "invalid step count (0): a lattice needs at least one step"
        );
    }
}
