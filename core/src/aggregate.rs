//! Interval aggregation: collapse (day × interval) samples into one
//! representative load per interval.
//!
//! Volume is summed over every configured day. AHT is the plain mean
//! over the days whose volume is strictly positive; quiet days do not
//! dilute it. With no busy day the planned AHT stands in.

use crate::{interval::Interval, types::DayIndex};
use serde::{Deserialize, Serialize};

/// The aggregated offered load of one interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalLoad {
    pub interval:     Interval,
    pub total_volume: u64,
    /// Seconds.
    pub avg_aht:      f64,
    /// Days with positive volume in this interval.
    pub busy_days:    usize,
}

pub struct IntervalAggregator<'a> {
    volume:      &'a [Vec<u32>],
    aht:         &'a [Vec<u32>],
    days:        usize,
    planned_aht: f64,
}

impl<'a> IntervalAggregator<'a> {
    /// `days` is the number of day rows in scope; rows beyond the
    /// matrices read as missing.
    pub fn new(volume: &'a [Vec<u32>], aht: &'a [Vec<u32>], days: usize, planned_aht: f64) -> Self {
        Self {
            volume,
            aht,
            days,
            planned_aht: planned_aht.max(1.0),
        }
    }

    /// Missing entries read as 0.
    pub fn volume_at(&self, day: DayIndex, interval: Interval) -> u32 {
        self.volume
            .get(day)
            .and_then(|row| row.get(interval.index()))
            .copied()
            .unwrap_or(0)
    }

    /// Missing or zero entries read as the planned AHT.
    pub fn aht_at(&self, day: DayIndex, interval: Interval) -> f64 {
        match self.aht.get(day).and_then(|row| row.get(interval.index())) {
            Some(&secs) if secs > 0 => f64::from(secs),
            _ => self.planned_aht,
        }
    }

    pub fn aggregate(&self, interval: Interval) -> IntervalLoad {
        let mut total_volume: u64 = 0;
        let mut aht_sum = 0.0;
        let mut busy_days = 0;

        for day in 0..self.days {
            let volume = self.volume_at(day, interval);
            if volume > 0 {
                total_volume += u64::from(volume);
                aht_sum += self.aht_at(day, interval);
                busy_days += 1;
            }
        }

        let avg_aht = if busy_days > 0 {
            aht_sum / busy_days as f64
        } else {
            self.planned_aht
        };

        IntervalLoad { interval, total_volume, avg_aht, busy_days }
    }

    /// Total volume of one day across all 48 intervals.
    pub fn day_volume(&self, day: DayIndex) -> u64 {
        Interval::all().map(|i| u64::from(self.volume_at(day, i))).sum()
    }
}
