//! The 48 fixed half-hour slots of a planning day.

use crate::types::{IntervalIndex, INTERVALS_PER_DAY, INTERVAL_MINUTES};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval(IntervalIndex);

impl Interval {
    /// Returns None for indices outside 0..48.
    pub fn new(index: IntervalIndex) -> Option<Self> {
        (index < INTERVALS_PER_DAY).then_some(Self(index))
    }

    /// All slots in ascending order.
    pub fn all() -> impl Iterator<Item = Interval> {
        (0..INTERVALS_PER_DAY).map(Interval)
    }

    pub fn index(self) -> IntervalIndex {
        self.0
    }

    /// Minutes since midnight at the start of the slot.
    pub fn start_minutes(self) -> u32 {
        self.0 as u32 * INTERVAL_MINUTES
    }

    /// 24h clock of the slot start, e.g. "07:30".
    pub fn start_label(self) -> String {
        clock_label(self.start_minutes())
    }

    /// 24h clock of the slot end, wrapping the last slot to "00:00".
    /// This is the column heading style of the reference spreadsheet.
    pub fn end_label(self) -> String {
        clock_label(self.start_minutes() + INTERVAL_MINUTES)
    }

    /// 12h clock of the slot start, e.g. "07:30 AM".
    pub fn display_label(self) -> String {
        let minutes = self.start_minutes();
        let hour = minutes / 60;
        let minute = minutes % 60;
        let twelve = if hour % 12 == 0 { 12 } else { hour % 12 };
        let meridiem = if hour < 12 { "AM" } else { "PM" };
        format!("{twelve:02}:{minute:02} {meridiem}")
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.start_label())
    }
}

fn clock_label(minutes: u32) -> String {
    let hour = (minutes / 60) % 24;
    let minute = minutes % 60;
    format!("{hour:02}:{minute:02}")
}
