//! The metrics pipeline: one authoritative pass from raw matrices to
//! interval metric records.
//!
//! EXECUTION ORDER per interval (fixed, never reordered):
//!   1. Aggregate volume / AHT / roster          (aggregate.rs, roster.rs)
//!   2. Effective volume via shrinkage           (shrinkage.rs)
//!   3. Effective actual agents via shrinkage
//!   4. Traffic intensity A = volume × AHT / 3600
//!   5. Required agents                          (erlang.rs or linear mode)
//!   6. Variance = actual − required
//!   7. Service level and occupancy on actual agents
//!   8. Call trend = effective ÷ raw volume × 100
//!   9. Influx = effective volume ÷ 0.5 h
//!  10. Distribution ratio = actual ÷ roster total × 100
//!
//! RULES:
//!   - Full f64 precision throughout. Rounding happens only in
//!     report.rs, at the presentation boundary.
//!   - Every division guards its zero denominator and yields 0.
//!   - An interval with no volume and no rostered agents emits nothing.

use crate::{
    aggregate::{IntervalAggregator, IntervalLoad},
    config::{StaffingModel, ValidatedConfig},
    erlang::{AgentRequirement, ErlangC},
    interval::Interval,
    roster::RosterGrid,
    shrinkage::ShrinkageBreakdown,
    types::{INTERVAL_HOURS, SECONDS_PER_HOUR},
};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of the grids for one calculation run.
#[derive(Debug, Clone, Copy)]
pub struct PlanInputs<'a> {
    pub volume: &'a [Vec<u32>],
    pub aht:    &'a [Vec<u32>],
    pub roster: &'a RosterGrid,
    /// Day rows in scope (weeks × 7).
    pub days:   usize,
}

/// Unrounded metrics for one interval.
/// Percentages are 0..=100; agents are fractional headcounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalMetricRecord {
    pub interval:                 Interval,
    pub raw_volume:               u64,
    pub avg_aht:                  f64,
    pub effective_volume:         f64,
    pub volume_breakdown:         ShrinkageBreakdown,
    pub raw_agents:               u64,
    pub actual_agents:            f64,
    pub traffic_intensity:        f64,
    pub required_agents:          f64,
    pub target_met:               bool,
    pub variance:                 f64,
    pub service_level:            f64,
    pub occupancy:                f64,
    pub call_trend:               f64,
    pub influx:                   f64,
    pub agent_distribution_ratio: f64,
    pub model:                    StaffingModel,
}

impl IntervalMetricRecord {
    pub fn is_overstaffed(&self) -> bool {
        self.actual_agents > self.required_agents
    }

    /// Distance between scheduled and required agents.
    pub fn gap(&self) -> f64 {
        self.variance.abs()
    }
}

pub struct MetricsPipeline {
    config: ValidatedConfig,
}

impl MetricsPipeline {
    pub fn new(config: ValidatedConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }

    /// Records for every non-empty interval, in ascending interval order.
    pub fn run(&self, inputs: &PlanInputs<'_>) -> Vec<IntervalMetricRecord> {
        let aggregator = IntervalAggregator::new(
            inputs.volume,
            inputs.aht,
            inputs.days,
            self.config.planned_aht(),
        );
        let total_agents = inputs.roster.total();

        let records: Vec<_> = Interval::all()
            .filter_map(|interval| {
                let load = aggregator.aggregate(interval);
                let raw_agents = inputs.roster.headcount(interval);
                self.compute_interval(load, raw_agents, total_agents)
            })
            .collect();

        log::debug!(
            "Pipeline emitted {} intervals ({} empty skipped) over {} days",
            records.len(),
            Interval::all().count() - records.len(),
            inputs.days
        );
        records
    }

    /// Metrics for one aggregated interval. `total_agents` is the raw
    /// roster total over all intervals. Returns None for an empty
    /// interval.
    pub fn compute_interval(
        &self,
        load: IntervalLoad,
        raw_agents: u64,
        total_agents: u64,
    ) -> Option<IntervalMetricRecord> {
        if load.total_volume == 0 && raw_agents == 0 {
            return None;
        }

        let shrinkage = self.config.shrinkage();
        let raw_volume = load.total_volume as f64;
        let volume_breakdown = shrinkage.breakdown(raw_volume);
        let effective_volume = volume_breakdown.effective();
        let actual_agents = shrinkage.apply(raw_agents as f64);

        let traffic_intensity = effective_volume * load.avg_aht / SECONDS_PER_HOUR;
        let erlang = ErlangC::new(traffic_intensity, load.avg_aht, self.config.service_time());

        let (requirement, occupancy) = match self.config.model() {
            StaffingModel::ErlangC => {
                let requirement = erlang.required_agents(self.config.sla_fraction());
                (requirement_value(requirement), erlang.occupancy(actual_agents) * 100.0)
            }
            StaffingModel::Linear => self.linear_requirement(traffic_intensity, actual_agents),
        };
        let (required_agents, target_met) = requirement;

        let service_level = erlang.service_level_at(actual_agents) * 100.0;

        let call_trend = if raw_volume > 0.0 {
            effective_volume / raw_volume * 100.0
        } else {
            0.0
        };

        let agent_distribution_ratio = if total_agents > 0 {
            actual_agents / total_agents as f64 * 100.0
        } else {
            0.0
        };

        Some(IntervalMetricRecord {
            interval: load.interval,
            raw_volume: load.total_volume,
            avg_aht: load.avg_aht,
            effective_volume,
            volume_breakdown,
            raw_agents,
            actual_agents,
            traffic_intensity,
            required_agents,
            target_met,
            variance: actual_agents - required_agents,
            service_level,
            occupancy,
            call_trend,
            influx: effective_volume / INTERVAL_HOURS,
            agent_distribution_ratio,
            model: self.config.model(),
        })
    }

    /// Legacy workload / work-hours mode. Returns ((required, met), occupancy).
    fn linear_requirement(&self, workload_hours: f64, actual_agents: f64) -> ((f64, bool), f64) {
        let shrinkage = self.config.shrinkage();
        let work_hours =
            INTERVAL_HOURS * (1.0 - (shrinkage.out_of_office + shrinkage.billable_break) / 100.0);
        if work_hours <= 0.0 {
            return ((0.0, true), 0.0);
        }

        let required = workload_hours / work_hours;
        let occupancy = if actual_agents > 0.0 {
            (workload_hours / (actual_agents * work_hours) * 100.0).min(100.0)
        } else {
            0.0
        };
        ((required, true), occupancy)
    }
}

fn requirement_value(requirement: AgentRequirement) -> (f64, bool) {
    (f64::from(requirement.agents), requirement.target_met)
}
