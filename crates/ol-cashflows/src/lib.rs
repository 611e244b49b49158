//! # ol-cashflows
//!
//! Closed-form cash-flow arithmetic used alongside the lattice engine:
//! present-value discounting and level-payment mortgage amortization.
//!
//! Rates here are per-period and compounded once per period, unlike the
//! continuously compounded rates of the lattice model.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Discount factors and net present value.
pub mod discounting;

/// Level-payment mortgage amortization.
pub mod mortgage;

pub use discounting::{discount, npv};
pub use mortgage::{
    next_remaining_principal, payment, remaining_principal, AmortizationPeriod,
    AmortizationSchedule,
};
