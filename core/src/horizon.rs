//! Planning horizon: the reference date range whose day rows feed the
//! volume and AHT matrices.
//!
//! The dashboard plans in whole blocks of 4, 8 or 12 weeks. Any range
//! snaps up to the next block; the aggregated day count is weeks × 7.

use crate::error::{PlanError, PlanResult};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const WEEK_BLOCKS: [u32; 3] = [4, 8, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanningHorizon {
    pub from: NaiveDate,
    pub to:   NaiveDate,
}

impl PlanningHorizon {
    pub fn new(from: NaiveDate, to: NaiveDate) -> PlanResult<Self> {
        let horizon = Self { from, to };
        horizon.validate()?;
        Ok(horizon)
    }

    /// `weeks` whole weeks starting at `from`; `to` is the last day.
    pub fn with_weeks(from: NaiveDate, weeks: u32) -> Self {
        let span = i64::from(weeks.max(1)) * 7 - 1;
        Self { from, to: from + Duration::days(span) }
    }

    pub fn validate(&self) -> PlanResult<()> {
        if self.to < self.from {
            return Err(PlanError::InvalidDateRange { from: self.from, to: self.to });
        }
        Ok(())
    }

    /// Calendar days covered, inclusive of both ends.
    pub fn span_days(&self) -> i64 {
        self.to.signed_duration_since(self.from).num_days() + 1
    }

    /// Range length in weeks, snapped up to 4, 8 or 12.
    pub fn weeks(&self) -> u32 {
        let elapsed = self.to.signed_duration_since(self.from).num_days().unsigned_abs();
        let weeks = elapsed.div_ceil(7);
        WEEK_BLOCKS
            .iter()
            .copied()
            .find(|&block| weeks <= u64::from(block))
            .unwrap_or(12)
    }

    /// Day rows aggregated by the pipeline.
    pub fn days(&self) -> usize {
        self.weeks() as usize * 7
    }

    /// One date per aggregated day row, starting at `from`.
    pub fn day_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days() as i64).map(move |offset| self.from + Duration::days(offset))
    }
}

impl Default for PlanningHorizon {
    fn default() -> Self {
        let from = NaiveDate::from_ymd_opt(2025, 6, 29).unwrap_or(NaiveDate::MIN);
        Self::with_weeks(from, 4)
    }
}
