//! # ol-methods
//!
//! Numerical methods: recombining binomial lattices and backward-induction
//! pricing of American options on spot and futures underlyings.
//!
//! # Modules
//!
//! * [`lattice`] — parameter conversion, lattice arena, binomial model

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Lattice methods: parameter conversion, binomial lattice, backward induction.
pub mod lattice;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use lattice::{
    convert_to_discrete, BinomialModel, DiscreteParameters, Lattice, LatticePrice, Node,
};
