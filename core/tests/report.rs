//! Report assembly and presentation rounding tests.

use staffing_core::{
    config::PlanConfig,
    horizon::PlanningHorizon,
    interval::Interval,
    report::{round_half_up, PlanReport},
    roster::RosterGrid,
    scenario::Scenario,
};

#[test]
fn rounding_is_half_up() {
    assert_eq!(round_half_up(2.25, 1), 2.3);
    assert_eq!(round_half_up(-0.25, 1), -0.2);
    assert_eq!(round_half_up(119.5, 0), 120.0);
    assert_eq!(round_half_up(-3.96, 1), -4.0);
}

fn hundred_call_scenario() -> Scenario {
    let slot = Interval::new(20).unwrap();
    let mut config = PlanConfig::without_shrinkage();
    config.planned_aht = 300.0;
    config.service_time = 20.0;
    let mut scenario = Scenario::new(config, PlanningHorizon::default());
    scenario.set_volume(0, slot, 100);
    scenario.set_aht(0, slot, 300);
    let mut rows = vec![vec![0u32; 2]; 48];
    rows[20] = vec![6, 6];
    scenario.roster_grid = RosterGrid::from_rows(rows);
    scenario
}

#[test]
fn display_values_round_only_at_the_boundary() {
    let report = PlanReport::build(&hundred_call_scenario()).unwrap();
    assert_eq!(report.display.len(), 1);

    let row = &report.display[0];
    assert_eq!(row.time, "10:30", "slot 10:00 is labelled by its end");
    assert_eq!(row.actual, 12.0);
    assert_eq!(row.requirement, 12.0);
    assert_eq!(row.variance, 0.0);
    assert_eq!(row.call_trend, 100.0);
    assert_eq!(row.aht_minutes, 5.0);
    assert_eq!(row.service_level, 86.2);
    assert_eq!(row.occupancy, 69.4);
    assert_eq!(row.influx, 200);
    assert_eq!(row.agent_distribution_ratio, 100.0);

    // Unrounded values are kept alongside.
    let record = &report.records[0];
    assert!((record.service_level - 86.218_850_236).abs() < 1e-6);
}

#[test]
fn daily_summary_covers_every_day_of_horizon() {
    let report = PlanReport::build(&hundred_call_scenario()).unwrap();
    assert_eq!(report.daily.len(), 28);
    assert_eq!(report.daily[0].date, report.horizon.from);
    assert_eq!(report.daily[0].total_volume, 100);
    assert_eq!(report.daily[0].peak_interval, Interval::new(20));
    assert_eq!(report.daily[1].total_volume, 0);
    assert_eq!(report.daily[1].peak_interval, None);
}

#[test]
fn report_serializes_to_json() {
    let report = PlanReport::build(&hundred_call_scenario()).unwrap();
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["display"][0]["serviceLevel"], 86.2);
    assert_eq!(value["records"][0]["required_agents"], 12.0);
    assert_eq!(value["config"]["plannedAHT"], 300.0);
}
