//! Shrinkage adjuster tests.

use staffing_core::{
    rng::{PlanRng, StreamSlot},
    shrinkage::{effective, ShrinkageFactors},
};

#[test]
fn zero_percentages_are_identity() {
    for raw in [0.0, 1.0, 17.5, 1234.0] {
        assert_eq!(effective(raw, 0.0, 0.0, 0.0), raw);
    }
    assert_eq!(ShrinkageFactors::none().apply(42.0), 42.0);
}

#[test]
fn full_shrinkage_on_any_factor_zeroes_result() {
    assert_eq!(effective(250.0, 100.0, 12.0, 7.0), 0.0);
    assert_eq!(effective(250.0, 12.0, 100.0, 7.0), 0.0);
    assert_eq!(effective(250.0, 12.0, 7.0, 100.0), 0.0);
}

/// 20 agents, 30% out-of-office, 10% in-office, 5% billable break.
#[test]
fn rostered_agents_scenario() {
    let factors = ShrinkageFactors::new(30.0, 10.0, 5.0);
    let effective_agents = factors.apply(20.0);
    assert!(
        (effective_agents - 11.97).abs() < 1e-9,
        "expected 11.97 effective agents, got {effective_agents}"
    );
}

#[test]
fn breakdown_steps_shrink_monotonically() {
    let factors = ShrinkageFactors::new(34.88, 0.0, 5.88);
    let steps = factors.breakdown(100.0);
    assert!(steps.after_out_of_office <= steps.raw);
    assert!(steps.after_in_office <= steps.after_out_of_office);
    assert!(steps.after_billable_break <= steps.after_in_office);
    assert!((steps.removed() - (100.0 - factors.apply(100.0))).abs() < 1e-12);
    assert!((factors.retention() - factors.apply(1.0)).abs() < 1e-15);
}

/// Shrinkage never adds capacity, for any percentages in [0, 100).
#[test]
fn effective_never_exceeds_raw() {
    let mut rng = PlanRng::new(7, StreamSlot::Sampling);
    for _ in 0..500 {
        let raw = rng.range_f64(0.0, 5000.0);
        let a = rng.range_f64(0.0, 100.0);
        let b = rng.range_f64(0.0, 100.0);
        let c = rng.range_f64(0.0, 100.0);
        let value = effective(raw, a, b, c);
        assert!(
            (0.0..=raw).contains(&value),
            "effective({raw}, {a}, {b}, {c}) = {value} outside [0, raw]"
        );
    }
}
