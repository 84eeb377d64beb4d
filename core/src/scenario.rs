//! Scenario: one complete set of engine inputs.
//!
//! The wire shape matches what the planning grids export:
//! `{ config, horizon, volumeMatrix, ahtMatrix, rosterGrid }`.

use crate::{
    config::{PlanConfig, ValidatedConfig},
    error::PlanResult,
    horizon::PlanningHorizon,
    interval::Interval,
    pipeline::PlanInputs,
    rng::{PlanRng, StreamSlot},
    roster::RosterGrid,
    types::{SampleMatrix, DEFAULT_SHIFT_LENGTH, INTERVALS_PER_DAY},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub config:        PlanConfig,
    #[serde(default)]
    pub horizon:       PlanningHorizon,
    #[serde(default)]
    pub volume_matrix: SampleMatrix,
    #[serde(default)]
    pub aht_matrix:    SampleMatrix,
    #[serde(default)]
    pub roster_grid:   RosterGrid,
}

impl Scenario {
    pub fn new(config: PlanConfig, horizon: PlanningHorizon) -> Self {
        Self {
            config,
            horizon,
            volume_matrix: Vec::new(),
            aht_matrix: Vec::new(),
            roster_grid: RosterGrid::default(),
        }
    }

    /// Read a scenario JSON file.
    pub fn load(path: &str) -> PlanResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let scenario: Scenario = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        log::debug!(
            "Loaded scenario {path}: {} volume rows, {} roster rows",
            scenario.volume_matrix.len(),
            scenario.roster_grid.rows().len()
        );
        Ok(scenario)
    }

    /// Write the scenario as pretty JSON, replacing any existing file.
    pub fn save(&self, path: &str) -> PlanResult<()> {
        std::fs::write(path, self.to_json()?)?;
        log::debug!("Saved scenario to {path}");
        Ok(())
    }

    pub fn from_json(json: &str) -> PlanResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> PlanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Boundary check for the whole scenario. The returned config is
    /// the only form the pipeline accepts.
    pub fn validate(&self) -> PlanResult<ValidatedConfig> {
        self.horizon.validate()?;
        self.config.validate()
    }

    pub fn inputs(&self) -> PlanInputs<'_> {
        PlanInputs {
            volume: &self.volume_matrix,
            aht:    &self.aht_matrix,
            roster: &self.roster_grid,
            days:   self.horizon.days(),
        }
    }

    /// Set one volume sample, growing the matrix as needed.
    pub fn set_volume(&mut self, day: usize, interval: Interval, calls: u32) {
        set_sample(&mut self.volume_matrix, day, interval, calls);
    }

    /// Set one AHT sample (seconds), growing the matrix as needed.
    pub fn set_aht(&mut self, day: usize, interval: Interval, seconds: u32) {
        set_sample(&mut self.aht_matrix, day, interval, seconds);
    }

    /// Deterministic demo data: a two-peak intraday curve with weekend
    /// dip and per-day noise, AHT jitter around the planned value, and
    /// a handful of staggered day shifts. Same seed, same scenario.
    pub fn synthetic(seed: u64, weeks: u32) -> Self {
        let config = PlanConfig::default_test();
        let horizon = PlanningHorizon::with_weeks(PlanningHorizon::default().from, weeks);
        let days = horizon.days();

        let mut volume_rng = PlanRng::new(seed, StreamSlot::Volume);
        let mut aht_rng = PlanRng::new(seed, StreamSlot::Aht);
        let mut roster_rng = PlanRng::new(seed, StreamSlot::Roster);

        let mut volume_matrix = vec![vec![0u32; INTERVALS_PER_DAY]; days];
        let mut aht_matrix = vec![vec![0u32; INTERVALS_PER_DAY]; days];

        for day in 0..days {
            let weekday_factor = if day % 7 >= 5 { 0.6 } else { 1.0 };
            for interval in Interval::all() {
                let expected = intraday_curve(interval) * weekday_factor;
                if expected < 0.3 {
                    continue;
                }
                let calls = volume_rng.jitter(expected, 0.25).round().max(0.0) as u32;
                volume_matrix[day][interval.index()] = calls;
                if calls > 0 {
                    let aht = aht_rng.jitter(config.planned_aht, 0.15).round().max(1.0);
                    aht_matrix[day][interval.index()] = aht as u32;
                }
            }
        }

        let mut roster_grid = RosterGrid::empty(0);
        for start in [14usize, 16, 18, 20, 24, 28] {
            let agents = 8 + roster_rng.next_u64_below(10) as u32;
            roster_grid.fill_shift(start, agents, DEFAULT_SHIFT_LENGTH);
        }

        Self { config, horizon, volume_matrix, aht_matrix, roster_grid }
    }
}

fn set_sample(matrix: &mut SampleMatrix, day: usize, interval: Interval, value: u32) {
    if matrix.len() <= day {
        matrix.resize(day + 1, Vec::new());
    }
    let row = &mut matrix[day];
    if row.len() < INTERVALS_PER_DAY {
        row.resize(INTERVALS_PER_DAY, 0);
    }
    row[interval.index()] = value;
}

/// Expected calls per day for an interval: morning and afternoon peaks.
fn intraday_curve(interval: Interval) -> f64 {
    let hour = interval.start_minutes() as f64 / 60.0 + 0.25;
    let bump = |centre: f64, width: f64, height: f64| {
        height * (-((hour - centre) / width).powi(2) / 2.0).exp()
    };
    bump(10.5, 2.0, 6.0) + bump(15.0, 2.5, 4.5)
}
