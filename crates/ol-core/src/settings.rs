//! Lattice model settings.
//!
//! [`LatticeSettings`] travels with each model instead of living in a
//! process-wide singleton, so two models in the same process can apply
//! different policies without locking.
//!
//! Enable the `serde` feature to load settings from a configuration file.

use crate::errors::{Error, Result};
use crate::Probability;

/// What a model does when its risk-neutral probability falls outside
/// `[0, 1]`, i.e. when the inputs admit arbitrage (`u > R > d` fails).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArbitragePolicy {
    /// Accept the probability silently.
    Permissive,
    /// Accept the probability and log a warning.
    #[default]
    Warn,
    /// Reject the model with [`Error::ArbitrageViolation`].
    Enforce,
}

/// Settings consulted by a lattice model at construction and pricing time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LatticeSettings {
    /// Treatment of probabilities outside `[0, 1]`.
    pub arbitrage_policy: ArbitragePolicy,
    /// Whether pricing records which nodes exercise early.
    pub record_exercise_boundary: bool,
}

impl Default for LatticeSettings {
    fn default() -> Self {
        Self {
            arbitrage_policy: ArbitragePolicy::Warn,
            record_exercise_boundary: true,
        }
    }
}

impl LatticeSettings {
    /// Settings that reject arbitrage-admitting inputs.
    pub fn strict() -> Self {
        Self {
            arbitrage_policy: ArbitragePolicy::Enforce,
            ..Self::default()
        }
    }

    /// Return a copy with a different arbitrage policy.
    pub fn with_arbitrage_policy(mut self, policy: ArbitragePolicy) -> Self {
        self.arbitrage_policy = policy;
        self
    }

    /// Return a copy with boundary recording switched on or off.
    pub fn with_exercise_boundary(mut self, record: bool) -> Self {
        self.record_exercise_boundary = record;
        self
    }

    /// Check `probability` against the arbitrage policy.
    ///
    /// Returns `Ok(true)` when the probability is a valid measure,
    /// `Ok(false)` when it is not but the policy lets it through, and
    /// [`Error::ArbitrageViolation`] when the policy is
    /// [`ArbitragePolicy::Enforce`].  Logging is left to the caller.
    pub fn check_probability(&self, probability: Probability) -> Result<bool> {
        if (0.0..=1.0).contains(&probability) {
            return Ok(true);
        }
        match self.arbitrage_policy {
            ArbitragePolicy::Enforce => Err(Error::ArbitrageViolation { probability }),
            ArbitragePolicy::Warn | ArbitragePolicy::Permissive => Ok(false),
        }
    }
}
