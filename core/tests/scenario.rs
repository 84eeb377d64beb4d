//! Scenario loading tests.

use staffing_core::{
    config::StaffingModel,
    error::PlanError,
    interval::Interval,
    report::PlanReport,
    scenario::Scenario,
};

fn sample_path() -> String {
    format!("{}/../tools/data/sample_scenario.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn sample_file_loads_and_runs() {
    let scenario = Scenario::load(&sample_path()).expect("sample scenario");
    assert_eq!(scenario.config.planned_aht, 300.0);
    assert_eq!(scenario.config.model, StaffingModel::ErlangC);
    assert_eq!(scenario.horizon.days(), 28);

    let slot = Interval::new(18).unwrap();
    assert_eq!(scenario.roster_grid.headcount(slot), 18);

    let report = PlanReport::build(&scenario).unwrap();
    // Rostered rows 14..24; volume rows 16..22 all fall inside.
    assert_eq!(report.records.len(), 10);
    assert!(report.records.iter().all(|r| r.target_met));
}

#[test]
fn missing_file_names_the_path() {
    let err = Scenario::load("/nonexistent/scenario.json").unwrap_err();
    assert!(matches!(err, PlanError::Other(_)));
    assert!(err.to_string().contains("/nonexistent/scenario.json"));
}

#[test]
fn saved_scenario_loads_back() {
    let path = std::env::temp_dir().join(format!("plan-scenario-{}.json", std::process::id()));
    let path = path.to_str().expect("utf-8 temp path").to_string();
    let scenario = Scenario::synthetic(5, 4);

    scenario.save(&path).unwrap();
    let back = Scenario::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(scenario, back);
}

#[test]
fn save_into_missing_directory_is_io_error() {
    let err = Scenario::synthetic(5, 4)
        .save("/nonexistent/dir/scenario.json")
        .unwrap_err();
    assert!(matches!(err, PlanError::Io(_)));
}

#[test]
fn minimal_json_uses_defaults() {
    let json = r#"{
        "config": {
            "plannedAHT": 240, "slaTarget": 90, "serviceTime": 15,
            "inOfficeShrinkage": 0, "outOfOfficeShrinkage": 0, "billableBreak": 0,
            "model": "linear"
        }
    }"#;
    let scenario = Scenario::from_json(json).unwrap();
    assert_eq!(scenario.config.model, StaffingModel::Linear);
    assert!(scenario.volume_matrix.is_empty());
    assert_eq!(scenario.horizon.weeks(), 4);

    let report = PlanReport::build(&scenario).unwrap();
    assert!(report.records.is_empty());
}

#[test]
fn scenario_survives_json_round_trip() {
    let scenario = Scenario::synthetic(11, 4);
    let json = scenario.to_json().unwrap();
    let back = Scenario::from_json(&json).unwrap();
    assert_eq!(scenario, back);
}
