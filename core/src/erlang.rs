//! Erlang-C multi-server queueing model.
//!
//! Inputs share one set of units: traffic intensity `A` in Erlangs,
//! service-time threshold `t` and mean handle time `h` in seconds.
//!
//! The wait probability is evaluated through the Erlang-B recursion
//!   B(0) = 1,  B(k) = A·B(k−1) / (k + A·B(k−1))
//! which carries the ratio (A^N/N!) / Σ A^k/k! forward one `A/k` step at
//! a time, so no factorial or power is ever formed. Erlang-C follows as
//!   Pw = N·B / (N − A·(1 − B)).
//! Every intermediate stays in [0, 1], so large server counts cannot
//! overflow.
//!
//! RULE: a server count N ≤ A is unstable. Pw is 1 and the service
//! level is 0; no refinement is attempted.

use serde::{Deserialize, Serialize};

/// How far above the offered load the agent search may go before the
/// target is declared unreachable.
pub const SEARCH_HEADROOM: f64 = 1000.0;

/// Largest offered load the agent search accepts. Above it the ceiling
/// no longer fits an agent count and the search reports unreachable
/// without iterating.
pub const MAX_SEARCH_TRAFFIC: f64 = u32::MAX as f64 - SEARCH_HEADROOM;

/// Outcome of the required-agents search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentRequirement {
    pub agents:     u32,
    /// False when the search hit its ceiling; `agents` is then the
    /// ceiling value, a best-effort figure.
    pub target_met: bool,
}

impl AgentRequirement {
    pub fn none() -> Self {
        Self { agents: 0, target_met: true }
    }
}

/// Erlang-C model for one offered load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErlangC {
    traffic:      f64,
    aht:          f64,
    service_time: f64,
}

impl ErlangC {
    /// `aht` is floored at one second so the exponent stays defined.
    pub fn new(traffic: f64, aht: f64, service_time: f64) -> Self {
        Self {
            traffic: traffic.max(0.0),
            aht: aht.max(1.0),
            service_time: service_time.max(0.0),
        }
    }

    pub fn traffic(&self) -> f64 {
        self.traffic
    }

    /// Probability that an arriving contact has to wait.
    pub fn wait_probability(&self, agents: u32) -> f64 {
        if self.traffic <= 0.0 {
            return 0.0;
        }
        let mut recursion = BlockingRecursion::new(self.traffic);
        recursion.advance_to(agents);
        recursion.wait_probability()
    }

    /// Probability of answering within the service-time threshold, 0..=1.
    pub fn service_level(&self, agents: u32) -> f64 {
        if self.traffic <= 0.0 {
            return 1.0;
        }
        let mut recursion = BlockingRecursion::new(self.traffic);
        recursion.advance_to(agents);
        self.service_level_from(&recursion)
    }

    /// Service level for a fractional headcount. Integer counts are
    /// exact; anything in between is interpolated linearly between the
    /// neighbouring whole server counts. A headcount at or below the
    /// offered load is unstable and scores 0 like any integer count.
    pub fn service_level_at(&self, agents: f64) -> f64 {
        if self.traffic <= 0.0 {
            return 1.0;
        }
        if !(agents > self.traffic) {
            return 0.0;
        }
        let lower = agents.floor();
        let upper = agents.ceil();
        let at_lower = self.service_level(lower as u32);
        if upper == lower {
            return at_lower;
        }
        let at_upper = self.service_level(upper as u32);
        at_lower + (at_upper - at_lower) * (agents - lower)
    }

    /// Offered load over servers, 0..=1. Zero servers give 0.
    pub fn occupancy(&self, agents: f64) -> f64 {
        occupancy(self.traffic, agents)
    }

    /// Smallest whole agent count whose service level reaches `target`
    /// (a probability, 0..=1).
    pub fn required_agents(&self, target: f64) -> AgentRequirement {
        if self.traffic <= 0.0 {
            return AgentRequirement::none();
        }
        if !(self.traffic <= MAX_SEARCH_TRAFFIC) {
            log::warn!(
                "Offered load {:.0} Erlangs exceeds the searchable range",
                self.traffic
            );
            return AgentRequirement { agents: u32::MAX, target_met: false };
        }

        // floor(A) + 1 is the smallest count strictly above A. Every
        // count below it is unstable and scores 0.
        let first = (self.traffic.floor() as u32).saturating_add(1);
        let ceiling = (self.traffic + SEARCH_HEADROOM).floor() as u32;

        let mut recursion = BlockingRecursion::new(self.traffic);
        recursion.advance_to(first);
        loop {
            if self.service_level_from(&recursion) >= target {
                return AgentRequirement { agents: recursion.servers, target_met: true };
            }
            if recursion.servers >= ceiling {
                break;
            }
            recursion.advance();
        }

        log::warn!(
            "SLA target {:.1}% unreachable for {:.2} Erlangs within {} agents",
            target * 100.0,
            self.traffic,
            ceiling
        );
        AgentRequirement { agents: ceiling, target_met: false }
    }

    fn service_level_from(&self, recursion: &BlockingRecursion) -> f64 {
        let servers = recursion.servers as f64;
        if servers <= self.traffic {
            return 0.0;
        }
        let decay = (-(servers - self.traffic) * (self.service_time / self.aht)).exp();
        (1.0 - recursion.wait_probability() * decay).clamp(0.0, 1.0)
    }
}

/// Running Erlang-B state. Stepping from N to N+1 is O(1), which keeps
/// the agent search linear overall.
struct BlockingRecursion {
    traffic:  f64,
    servers:  u32,
    blocking: f64,
}

impl BlockingRecursion {
    fn new(traffic: f64) -> Self {
        Self { traffic, servers: 0, blocking: 1.0 }
    }

    fn advance(&mut self) {
        self.servers += 1;
        let carried = self.traffic * self.blocking;
        self.blocking = carried / (self.servers as f64 + carried);
    }

    fn advance_to(&mut self, servers: u32) {
        while self.servers < servers {
            self.advance();
        }
    }

    fn wait_probability(&self) -> f64 {
        let servers = self.servers as f64;
        if servers <= self.traffic {
            return 1.0;
        }
        let denominator = servers - self.traffic * (1.0 - self.blocking);
        (servers * self.blocking / denominator).clamp(0.0, 1.0)
    }
}

/// Erlang-C wait probability `Pw(A, N)`.
pub fn wait_probability(traffic: f64, agents: u32) -> f64 {
    ErlangC::new(traffic, 1.0, 0.0).wait_probability(agents)
}

/// `SL(A, N, t, h)` as a probability, 0..=1.
pub fn service_level(traffic: f64, agents: u32, service_time: f64, aht: f64) -> f64 {
    ErlangC::new(traffic, aht, service_time).service_level(agents)
}

/// `A / N` clamped to 0..=1, with 0 for `N = 0`.
pub fn occupancy(traffic: f64, agents: f64) -> f64 {
    if !(agents > 0.0) {
        return 0.0;
    }
    (traffic / agents).clamp(0.0, 1.0)
}

/// Minimum agents meeting `target` (0..=1) within `service_time` seconds.
pub fn erlang_agents(target: f64, service_time: f64, traffic: f64, aht: f64) -> AgentRequirement {
    ErlangC::new(traffic, aht, service_time).required_agents(target)
}
