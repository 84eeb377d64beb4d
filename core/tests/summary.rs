//! Run summary tests.

use staffing_core::{
    config::PlanConfig,
    horizon::PlanningHorizon,
    interval::Interval,
    report::PlanReport,
    roster::RosterGrid,
    scenario::Scenario,
    summary::PlanSummary,
};

#[test]
fn empty_run_summarises_to_zero() {
    let summary = PlanSummary::from_records(&[], 80.0);
    assert_eq!(summary.intervals, 0);
    assert_eq!(summary.service_level, 0.0);
    assert_eq!(summary.occupancy, 0.0);
    assert_eq!(summary.average_staffing, 0.0);
}

#[test]
fn service_level_is_volume_weighted() {
    let mut config = PlanConfig::without_shrinkage();
    config.planned_aht = 300.0;
    config.service_time = 20.0;
    let mut scenario = Scenario::new(config, PlanningHorizon::default());

    let busy = Interval::new(20).unwrap();
    let light = Interval::new(21).unwrap();
    scenario.set_volume(0, busy, 300);
    scenario.set_volume(0, light, 100);
    let mut rows = vec![vec![0u32; 1]; 48];
    rows[20][0] = 30;
    rows[21][0] = 4;
    scenario.roster_grid = RosterGrid::from_rows(rows);

    let report = PlanReport::build(&scenario).unwrap();
    let records = &report.records;
    assert_eq!(records.len(), 2);

    let expected_sl = (records[0].service_level * 300.0 + records[1].service_level * 100.0) / 400.0;
    let expected_occ = (records[0].occupancy * 30.0 + records[1].occupancy * 4.0) / 34.0;
    let s = &report.summary;
    assert!((s.service_level - expected_sl).abs() < 1e-9);
    assert!((s.occupancy - expected_occ).abs() < 1e-9);
    assert_eq!(s.total_raw_volume, 400);
    assert!((s.average_staffing - 34.0 / 48.0).abs() < 1e-12);

    // 30 agents on 25 Erlangs clear 80/20; 4 agents on 8.33 Erlangs cannot.
    assert!(records[0].service_level >= 80.0);
    assert_eq!(records[1].service_level, 0.0);
    assert_eq!(s.intervals_below_target, 1);
    assert_eq!(s.unreachable_intervals, 0);
}
