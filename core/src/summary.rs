//! Run-level and per-day roll-ups over the interval records.
//!
//! Weighted means guard empty weights and report 0.

use crate::{
    aggregate::IntervalAggregator,
    horizon::PlanningHorizon,
    interval::Interval,
    pipeline::IntervalMetricRecord,
    types::INTERVALS_PER_DAY,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub intervals:              usize,
    /// Effective-volume-weighted mean of interval service levels, 0..=100.
    pub service_level:          f64,
    /// Actual-agent-weighted mean of interval occupancy, 0..=100.
    pub occupancy:              f64,
    pub total_raw_volume:       u64,
    pub total_effective_volume: f64,
    /// Mean effective agents per slot across the whole day.
    pub average_staffing:       f64,
    pub total_required_agents:  f64,
    /// Intervals carrying volume whose service level is under target.
    pub intervals_below_target: usize,
    /// Intervals where the agent search hit its ceiling.
    pub unreachable_intervals:  usize,
}

impl PlanSummary {
    /// `sla_target` is a percentage, 0..=100.
    pub fn from_records(records: &[IntervalMetricRecord], sla_target: f64) -> Self {
        let mut sl_weighted = 0.0;
        let mut volume_weight = 0.0;
        let mut occ_weighted = 0.0;
        let mut agent_weight = 0.0;
        let mut total_raw_volume = 0;
        let mut total_required_agents = 0.0;
        let mut intervals_below_target = 0;
        let mut unreachable_intervals = 0;

        for record in records {
            sl_weighted += record.service_level * record.effective_volume;
            volume_weight += record.effective_volume;
            occ_weighted += record.occupancy * record.actual_agents;
            agent_weight += record.actual_agents;
            total_raw_volume += record.raw_volume;
            total_required_agents += record.required_agents;

            if record.effective_volume > 0.0 && record.service_level < sla_target {
                intervals_below_target += 1;
            }
            if !record.target_met {
                unreachable_intervals += 1;
            }
        }

        Self {
            intervals: records.len(),
            service_level: weighted_mean(sl_weighted, volume_weight),
            occupancy: weighted_mean(occ_weighted, agent_weight),
            total_raw_volume,
            total_effective_volume: volume_weight,
            average_staffing: agent_weight / INTERVALS_PER_DAY as f64,
            total_required_agents,
            intervals_below_target,
            unreachable_intervals,
        }
    }
}

fn weighted_mean(weighted: f64, weight: f64) -> f64 {
    if weight > 0.0 {
        weighted / weight
    } else {
        0.0
    }
}

/// Volume roll-up of one calendar day of the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date:          NaiveDate,
    pub total_volume:  u64,
    pub peak_volume:   u32,
    /// Earliest interval holding the peak; None on a day without calls.
    pub peak_interval: Option<Interval>,
}

pub fn daily_summaries(
    horizon: &PlanningHorizon,
    aggregator: &IntervalAggregator<'_>,
) -> Vec<DailySummary> {
    horizon
        .day_dates()
        .enumerate()
        .map(|(day, date)| {
            let mut peak: Option<(Interval, u32)> = None;
            for interval in Interval::all() {
                let volume = aggregator.volume_at(day, interval);
                if volume > 0 && peak.map_or(true, |(_, best)| volume > best) {
                    peak = Some((interval, volume));
                }
            }
            DailySummary {
                date,
                total_volume: aggregator.day_volume(day),
                peak_volume: peak.map_or(0, |(_, v)| v),
                peak_interval: peak.map(|(i, _)| i),
            }
        })
        .collect()
}
