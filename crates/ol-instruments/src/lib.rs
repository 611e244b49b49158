//! # ol-instruments
//!
//! Option definitions: the call/put flag and the payoff used as the
//! exercise value at every lattice node.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod payoff;

pub use payoff::{OptionType, Payoff, PlainVanillaPayoff};
