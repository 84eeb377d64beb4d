//! Shrinkage adjustment: raw volume or headcount to its effective value.
//!
//! Three independent percentage reductions, always applied in the same
//! order: out-of-office, in-office, billable break. Percentages are
//! range-checked by `PlanConfig::validate`, not here.

use serde::{Deserialize, Serialize};

/// `raw × (1 − a/100) × (1 − b/100) × (1 − c/100)`.
pub fn effective(raw: f64, pct_a: f64, pct_b: f64, pct_c: f64) -> f64 {
    raw * retained(pct_a) * retained(pct_b) * retained(pct_c)
}

fn retained(pct: f64) -> f64 {
    1.0 - pct / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ShrinkageFactors {
    pub out_of_office:  f64,
    pub in_office:      f64,
    pub billable_break: f64,
}

impl ShrinkageFactors {
    pub fn new(out_of_office: f64, in_office: f64, billable_break: f64) -> Self {
        Self { out_of_office, in_office, billable_break }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn apply(&self, raw: f64) -> f64 {
        effective(raw, self.out_of_office, self.in_office, self.billable_break)
    }

    /// Share of the raw quantity that survives all three factors, 0..=1.
    pub fn retention(&self) -> f64 {
        self.apply(1.0)
    }

    /// Step-by-step values for "show your work" tooltips.
    pub fn breakdown(&self, raw: f64) -> ShrinkageBreakdown {
        let after_out_of_office = raw * retained(self.out_of_office);
        let after_in_office = after_out_of_office * retained(self.in_office);
        let after_billable_break = after_in_office * retained(self.billable_break);
        ShrinkageBreakdown {
            raw,
            after_out_of_office,
            after_in_office,
            after_billable_break,
        }
    }
}

/// Intermediate values of one shrinkage application.
/// `after_billable_break` equals `ShrinkageFactors::apply(raw)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShrinkageBreakdown {
    pub raw:                  f64,
    pub after_out_of_office:  f64,
    pub after_in_office:      f64,
    pub after_billable_break: f64,
}

impl ShrinkageBreakdown {
    pub fn effective(&self) -> f64 {
        self.after_billable_break
    }

    pub fn removed(&self) -> f64 {
        self.raw - self.after_billable_break
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_ends_at_effective_value() {
        let factors = ShrinkageFactors::new(30.0, 10.0, 5.0);
        let steps = factors.breakdown(20.0);
        assert!((steps.after_out_of_office - 14.0).abs() < 1e-9);
        assert!((steps.after_in_office - 12.6).abs() < 1e-9);
        assert!((steps.effective() - factors.apply(20.0)).abs() < 1e-12);
    }
}
