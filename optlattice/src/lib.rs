//! # optlattice
//!
//! American option pricing on recombining binomial lattices, with the small
//! discounting and amortization toolkit that usually travels with it.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ol-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use optlattice::{convert_to_discrete, BinomialModel};
//!
//! let params = convert_to_discrete(0.25, 100.0, 0.02, 0.30, 0.01, 15)?;
//! let mut model = BinomialModel::from_parameters(&params)?;
//!
//! let put = model.american_put(110.0, None)?;
//! assert!((put.value - 12.359784797).abs() < 1e-8);
//! assert_eq!(put.early_exercise_step, 5);
//! # Ok::<(), optlattice::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, settings, and error definitions.
pub use ol_core as core;

/// Option types and payoffs.
pub use ol_instruments as instruments;

/// Numerical methods (binomial lattices).
pub use ol_methods as methods;

/// Discounting and mortgage amortization.
pub use ol_cashflows as cashflows;

pub use ol_core::{ArbitragePolicy, Error, LatticeSettings, Quantity, Result};
pub use ol_instruments::OptionType;
pub use ol_methods::{
    convert_to_discrete, BinomialModel, DiscreteParameters, Lattice, LatticePrice, Node,
};
