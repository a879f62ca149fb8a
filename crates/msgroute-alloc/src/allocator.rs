//! Greedy tier allocation.
//!
//! Splits a recipient count across the schedule largest tier first: each
//! tier takes as many whole batches as fit in the remainder, and the rest
//! falls through to the next tier. The trailing capacity-1 tier absorbs
//! whatever is left, so the decomposition is always exact.

use std::collections::BTreeMap;

use msgroute_core::TierSchedule;
use tracing::debug;

/// Batches per tier, in schedule order (descending capacity).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    counts: Vec<(usize, usize)>,
}

impl Allocation {
    /// Number of batches assigned to the tier with this capacity.
    pub fn count_for(&self, capacity: usize) -> usize {
        self.counts
            .iter()
            .find(|(c, _)| *c == capacity)
            .map_or(0, |(_, n)| *n)
    }

    /// `(capacity, batch count)` pairs in schedule order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Recipients covered: Σ capacity × count.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(c, n)| c * n).sum()
    }

    /// Number of batches across all tiers.
    pub fn batch_count(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    pub fn to_map(&self) -> BTreeMap<usize, usize> {
        self.counts.iter().copied().collect()
    }
}

/// Decompose `total` recipients into the fewest batches the schedule allows.
pub fn allocate(total: usize, schedule: &TierSchedule) -> Allocation {
    let mut counts: Vec<(usize, usize)> = schedule.capacities().map(|c| (c, 0)).collect();

    let mut remainder = total;
    for (capacity, count) in counts.iter_mut() {
        if remainder == 0 {
            break;
        }
        *count = remainder / *capacity;
        remainder %= *capacity;
    }

    let allocation = Allocation { counts };
    debug!(
        total,
        batches = allocation.batch_count(),
        "allocated recipients across tiers"
    );
    allocation
}
