//! Shared primitive types and constants used across the engine.

/// Index of a half-hour slot within a day, 0..48.
pub type IntervalIndex = usize;

/// Index of a day row within a volume or AHT matrix.
pub type DayIndex = usize;

/// A (day x interval) matrix of non-negative integer samples.
/// Rows are days, columns are intervals. Short rows are padded with
/// the matrix default when read.
pub type SampleMatrix = Vec<Vec<u32>>;

pub const INTERVALS_PER_DAY: usize = 48;
pub const INTERVAL_MINUTES: u32 = 30;
/// Interval width expressed in hours.
pub const INTERVAL_HOURS: f64 = 0.5;
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Shift columns in a freshly initialised roster grid.
pub const DEFAULT_SHIFT_COLUMNS: usize = 17;
/// Consecutive intervals covered by one shift (8.5 hours).
pub const DEFAULT_SHIFT_LENGTH: usize = 17;
