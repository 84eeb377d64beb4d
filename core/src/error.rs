use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid percentage for {field}: {value} (expected 0 <= value < 100)")]
    InvalidPercentage { field: &'static str, value: f64 },

    #[error("Invalid SLA target: {value} (expected 0 < value <= 100)")]
    InvalidSlaTarget { value: f64 },

    #[error("{field} must be positive, got {value}")]
    NonPositiveDuration { field: &'static str, value: f64 },

    #[error("{field} is not a finite number")]
    NonFinite { field: &'static str },

    #[error("Invalid date range: {to} is before {from}")]
    InvalidDateRange {
        from: chrono::NaiveDate,
        to:   chrono::NaiveDate,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
