//! Deterministic random streams for synthetic scenarios and sampled
//! checks.
//!
//! RULE: nothing in this crate calls a platform RNG. Each stream is
//! seeded from (master_seed XOR slot), so adding a slot never shifts
//! the values an existing slot produces.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct PlanRng {
    pub name: &'static str,
    inner:    Pcg64Mcg,
}

impl PlanRng {
    pub fn new(master_seed: u64, slot: StreamSlot) -> Self {
        let derived_seed = master_seed ^ (slot as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            name:  slot.name(),
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Uniform float in [low, high).
    pub fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }

    /// `base` scaled by a uniform factor in [1 − spread, 1 + spread).
    pub fn jitter(&mut self, base: f64, spread: f64) -> f64 {
        base * (1.0 + spread * (2.0 * self.next_f64() - 1.0))
    }
}

/// Stable stream assignments. Append only; reordering changes every
/// synthetic scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum StreamSlot {
    Volume = 0,
    Aht = 1,
    Roster = 2,
    Sampling = 3,
}

impl StreamSlot {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Volume => "volume",
            Self::Aht => "aht",
            Self::Roster => "roster",
            Self::Sampling => "sampling",
        }
    }
}
