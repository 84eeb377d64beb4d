//! Calculation-run configuration and its validation boundary.
//!
//! RULE: the pipeline only accepts a ValidatedConfig. Range checks
//! happen once, here, before any interval is computed. The engine
//! itself never re-validates.

use crate::{
    error::{PlanError, PlanResult},
    shrinkage::ShrinkageFactors,
};
use serde::{Deserialize, Serialize};

/// Which staffing model produces required agents and occupancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffingModel {
    /// Erlang-C search and offered-load occupancy. Authoritative.
    #[default]
    ErlangC,
    /// Legacy workload / work-hours ratio. Simplified; kept so older
    /// dashboards can be reproduced side by side.
    Linear,
}

/// Configuration as supplied by the input form or a scenario file.
/// Percentages are 0..100, durations are seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanConfig {
    #[serde(rename = "plannedAHT", alias = "plannedAht")]
    pub planned_aht:             f64,
    pub sla_target:              f64,
    pub service_time:            f64,
    pub in_office_shrinkage:     f64,
    pub out_of_office_shrinkage: f64,
    pub billable_break:          f64,
    #[serde(default)]
    pub model:                   StaffingModel,
}

impl PlanConfig {
    /// Stock values of the input screen. Used by tests and the demo runner.
    pub fn default_test() -> Self {
        Self {
            planned_aht:             1560.0,
            sla_target:              80.0,
            service_time:            30.0,
            in_office_shrinkage:     0.0,
            out_of_office_shrinkage: 34.88,
            billable_break:          5.88,
            model:                   StaffingModel::ErlangC,
        }
    }

    /// Same as default_test() with every shrinkage factor at zero.
    pub fn without_shrinkage() -> Self {
        Self {
            in_office_shrinkage:     0.0,
            out_of_office_shrinkage: 0.0,
            billable_break:          0.0,
            ..Self::default_test()
        }
    }

    pub fn validate(&self) -> PlanResult<ValidatedConfig> {
        let planned_aht = finite("plannedAHT", self.planned_aht)?;
        let service_time = finite("serviceTime", self.service_time)?;
        let sla_target = finite("slaTarget", self.sla_target)?;

        if planned_aht <= 0.0 {
            return Err(PlanError::NonPositiveDuration { field: "plannedAHT", value: planned_aht });
        }
        if service_time <= 0.0 {
            return Err(PlanError::NonPositiveDuration { field: "serviceTime", value: service_time });
        }
        if sla_target <= 0.0 || sla_target > 100.0 {
            return Err(PlanError::InvalidSlaTarget { value: sla_target });
        }

        let out_of_office = percentage("outOfOfficeShrinkage", self.out_of_office_shrinkage)?;
        let in_office = percentage("inOfficeShrinkage", self.in_office_shrinkage)?;
        let billable_break = percentage("billableBreak", self.billable_break)?;

        Ok(ValidatedConfig {
            raw: self.clone(),
            shrinkage: ShrinkageFactors::new(out_of_office, in_office, billable_break),
        })
    }
}

/// A configuration that passed `PlanConfig::validate`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    raw:       PlanConfig,
    shrinkage: ShrinkageFactors,
}

impl ValidatedConfig {
    pub fn planned_aht(&self) -> f64 {
        self.raw.planned_aht
    }

    /// SLA target as a percentage, 0..=100.
    pub fn sla_target(&self) -> f64 {
        self.raw.sla_target
    }

    /// SLA target as a probability, 0..=1.
    pub fn sla_fraction(&self) -> f64 {
        self.raw.sla_target / 100.0
    }

    pub fn service_time(&self) -> f64 {
        self.raw.service_time
    }

    pub fn shrinkage(&self) -> ShrinkageFactors {
        self.shrinkage
    }

    pub fn model(&self) -> StaffingModel {
        self.raw.model
    }
}

fn finite(field: &'static str, value: f64) -> PlanResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PlanError::NonFinite { field })
    }
}

fn percentage(field: &'static str, value: f64) -> PlanResult<f64> {
    let value = finite(field, value)?;
    if (0.0..100.0).contains(&value) {
        Ok(value)
    } else {
        Err(PlanError::InvalidPercentage { field, value })
    }
}
