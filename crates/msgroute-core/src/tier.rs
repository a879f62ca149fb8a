//! Throughput tiers and the schedule they form.
//!
//! A tier is a batch capacity paired with the IP prefix its batches are
//! addressed to. The schedule lists tiers by strictly descending capacity
//! and always ends with a capacity-1 tier, so any recipient count can be
//! decomposed into whole batches.

use serde::{Deserialize, Serialize};

use crate::error::{RouteError, RouteResult};

/// A single throughput tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Recipients carried by one batch at this tier.
    pub capacity: usize,
    /// Destination prefix; the 1-based batch index is appended to it.
    pub prefix: String,
}

impl Tier {
    pub fn new(capacity: usize, prefix: impl Into<String>) -> Self {
        Self {
            capacity,
            prefix: prefix.into(),
        }
    }

    /// Destination for the `index`-th batch (1-based) of this tier.
    pub fn destination(&self, index: usize) -> String {
        format!("{}{}", self.prefix, index)
    }
}

/// Validated, immutable tier schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierSchedule {
    tiers: Vec<Tier>,
}

impl TierSchedule {
    /// Build a schedule, rejecting anything the allocator cannot decompose against.
    pub fn new(tiers: Vec<Tier>) -> RouteResult<Self> {
        let capacities: Vec<usize> = tiers.iter().map(|t| t.capacity).collect();
        validate_capacities(&capacities)?;
        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Capacities in descending order.
    pub fn capacities(&self) -> impl Iterator<Item = usize> + '_ {
        self.tiers.iter().map(|t| t.capacity)
    }

    pub fn get(&self, capacity: usize) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.capacity == capacity)
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl Default for TierSchedule {
    /// 25 → 10.0.4., 10 → 10.0.3., 5 → 10.0.2., 1 → 10.0.1.
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}

/// The built-in tier table.
pub fn default_tiers() -> Vec<Tier> {
    vec![
        Tier::new(25, "10.0.4."),
        Tier::new(10, "10.0.3."),
        Tier::new(5, "10.0.2."),
        Tier::new(1, "10.0.1."),
    ]
}

/// Check that capacities are non-empty, strictly descending and end in 1.
///
/// Strict descent also rules out duplicates and (given the trailing 1) zero.
pub fn validate_capacities(capacities: &[usize]) -> RouteResult<()> {
    let Some(&last) = capacities.last() else {
        return Err(RouteError::InvalidSchedule("schedule has no tiers".to_string()));
    };

    if let Some(pair) = capacities.windows(2).find(|w| w[0] <= w[1]) {
        return Err(RouteError::InvalidSchedule(format!(
            "capacities must be strictly descending, found {} before {}",
            pair[0], pair[1]
        )));
    }

    if last != 1 {
        return Err(RouteError::InvalidSchedule(format!(
            "smallest tier must have capacity 1, found {last}"
        )));
    }

    Ok(())
}
