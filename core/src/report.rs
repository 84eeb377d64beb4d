//! Report assembly and the presentation rounding boundary.
//!
//! Rounding is half-up (toward +∞ on exact halves), matching the
//! reference spreadsheet, so −0.25 rounds to −0.2 and not −0.3.

use crate::{
    aggregate::IntervalAggregator,
    config::PlanConfig,
    error::PlanResult,
    horizon::PlanningHorizon,
    pipeline::{IntervalMetricRecord, MetricsPipeline},
    scenario::Scenario,
    summary::{daily_summaries, DailySummary, PlanSummary},
};
use serde::{Deserialize, Serialize};

pub fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale + 0.5).floor() / scale
}

fn round1(value: f64) -> f64 {
    round_half_up(value, 1)
}

/// Display values of one interval, as shown in the metrics table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    /// Slot end in 24h form, the spreadsheet column heading.
    pub time:                     String,
    pub actual:                   f64,
    pub requirement:              f64,
    pub variance:                 f64,
    pub call_trend:               f64,
    pub aht_minutes:              f64,
    pub service_level:            f64,
    pub occupancy:                f64,
    pub influx:                   i64,
    pub agent_distribution_ratio: f64,
    pub target_met:               bool,
}

impl IntervalMetricRecord {
    pub fn rounded(&self) -> DisplayRecord {
        DisplayRecord {
            time:                     self.interval.end_label(),
            actual:                   round1(self.actual_agents),
            requirement:              round1(self.required_agents),
            variance:                 round1(self.variance),
            call_trend:               round1(self.call_trend),
            aht_minutes:              round1(self.avg_aht / 60.0),
            service_level:            round1(self.service_level),
            occupancy:                round1(self.occupancy),
            influx:                   round_half_up(self.influx, 0) as i64,
            agent_distribution_ratio: round1(self.agent_distribution_ratio),
            target_met:               self.target_met,
        }
    }
}

/// Everything one calculation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub config:  PlanConfig,
    pub horizon: PlanningHorizon,
    pub records: Vec<IntervalMetricRecord>,
    pub display: Vec<DisplayRecord>,
    pub summary: PlanSummary,
    pub daily:   Vec<DailySummary>,
}

impl PlanReport {
    /// Validate the scenario, run the pipeline and roll up the results.
    /// Configuration errors are the only failure.
    pub fn build(scenario: &Scenario) -> PlanResult<Self> {
        let config = scenario.validate()?;
        let sla_target = config.sla_target();
        let planned_aht = config.planned_aht();
        let pipeline = MetricsPipeline::new(config);

        let inputs = scenario.inputs();
        let records = pipeline.run(&inputs);
        let display = records.iter().map(IntervalMetricRecord::rounded).collect();
        let summary = PlanSummary::from_records(&records, sla_target);

        let aggregator =
            IntervalAggregator::new(inputs.volume, inputs.aht, inputs.days, planned_aht);
        let daily = daily_summaries(&scenario.horizon, &aggregator);

        log::debug!(
            "Report built: {} intervals, SL {:.1}%, occupancy {:.1}%, {} unreachable",
            summary.intervals,
            summary.service_level,
            summary.occupancy,
            summary.unreachable_intervals
        );

        Ok(Self {
            config: scenario.config.clone(),
            horizon: scenario.horizon,
            records,
            display,
            summary,
            daily,
        })
    }

    pub fn to_json(&self) -> PlanResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
