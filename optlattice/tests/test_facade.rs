//! End-to-end use of the public API through the façade crate.

use approx::assert_abs_diff_eq;
use optlattice::cashflows::{discount, npv, payment};
use optlattice::{convert_to_discrete, BinomialModel, OptionType};

#[test]
fn price_call_and_put_from_market_inputs() {
    let params = convert_to_discrete(0.25, 100.0, 0.02, 0.30, 0.01, 15).unwrap();
    let mut model = BinomialModel::from_parameters(&params).unwrap();

    let (call, call_step): (f64, usize) = model
        .american_option(110.0, OptionType::from_is_call(true), None)
        .unwrap()
        .into();
    assert_abs_diff_eq!(call, 2.604077133, epsilon = 1e-9);
    assert_eq!(call_step, 15);

    let (put, put_step): (f64, usize) = model
        .american_option(110.0, OptionType::from_is_call(false), None)
        .unwrap()
        .into();
    assert_abs_diff_eq!(put, 12.359784797, epsilon = 1e-9);
    assert_eq!(put_step, 5);
}

#[test]
fn collaborator_functions() {
    assert_abs_diff_eq!(discount(0.05, 2.0), 0.90703, epsilon = 1e-5);
    assert_abs_diff_eq!(npv(10_000.0, 0.025, 10.0), 7811.98401, epsilon = 1e-5);
    assert_abs_diff_eq!(payment(150_000.0, 0.04 / 12.0, 60).unwrap(), 2762.4783, epsilon = 1e-4);
}
