//! Configuration boundary tests: invalid input never reaches the engine.

use staffing_core::{
    config::PlanConfig,
    error::PlanError,
    report::PlanReport,
    scenario::Scenario,
};

#[test]
fn percentages_must_be_below_one_hundred() {
    let mut config = PlanConfig::default_test();
    config.out_of_office_shrinkage = 100.0;
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        PlanError::InvalidPercentage { field: "outOfOfficeShrinkage", .. }
    ));

    let mut config = PlanConfig::default_test();
    config.billable_break = -1.0;
    assert!(matches!(
        config.validate().unwrap_err(),
        PlanError::InvalidPercentage { field: "billableBreak", .. }
    ));
}

#[test]
fn sla_target_range() {
    for bad in [0.0, -5.0, 100.5] {
        let mut config = PlanConfig::default_test();
        config.sla_target = bad;
        assert!(
            matches!(config.validate().unwrap_err(), PlanError::InvalidSlaTarget { .. }),
            "slaTarget {bad} should be rejected"
        );
    }

    let mut config = PlanConfig::default_test();
    config.sla_target = 100.0;
    assert!(config.validate().is_ok());
}

#[test]
fn durations_must_be_positive() {
    let mut config = PlanConfig::default_test();
    config.planned_aht = 0.0;
    assert!(matches!(
        config.validate().unwrap_err(),
        PlanError::NonPositiveDuration { field: "plannedAHT", .. }
    ));

    let mut config = PlanConfig::default_test();
    config.service_time = -3.0;
    assert!(matches!(
        config.validate().unwrap_err(),
        PlanError::NonPositiveDuration { field: "serviceTime", .. }
    ));
}

#[test]
fn non_finite_values_are_rejected() {
    let mut config = PlanConfig::default_test();
    config.in_office_shrinkage = f64::NAN;
    assert!(matches!(
        config.validate().unwrap_err(),
        PlanError::NonFinite { field: "inOfficeShrinkage" }
    ));
}

#[test]
fn report_surfaces_configuration_errors() {
    let mut scenario = Scenario::synthetic(1, 4);
    scenario.config.sla_target = 150.0;
    let err = PlanReport::build(&scenario).unwrap_err();
    assert!(err.to_string().contains("SLA target"), "message: {err}");
}
