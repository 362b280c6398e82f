//! Frequency Table: per-issue histogram of observed values.

use std::collections::BTreeMap;

use parley_core::types::collections::FxHashMap;
use parley_core::{IssueId, IssueValue, Offer};

/// Counts of every value observed on every issue, plus the round counter.
///
/// Counts only grow and entries are never removed.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: FxHashMap<IssueId, FxHashMap<IssueValue, u64>>,
    rounds: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        counts: &BTreeMap<IssueId, BTreeMap<IssueValue, u64>>,
        rounds: u64,
    ) -> Self {
        let counts = counts
            .iter()
            .map(|(issue, values)| {
                let values = values
                    .iter()
                    .filter(|(_, count)| **count > 0)
                    .map(|(value, count)| (value.clone(), *count))
                    .collect();
                (*issue, values)
            })
            .collect();
        Self { counts, rounds }
    }

    /// Count every value of `offer` and advance the round counter by one.
    pub fn record(&mut self, offer: &Offer) {
        for (issue, value) in offer.iter() {
            *self
                .counts
                .entry(issue)
                .or_default()
                .entry(value.clone())
                .or_insert(0) += 1;
        }
        self.rounds += 1;
    }

    /// Number of recorded offers.
    pub fn rounds(&self) -> u64 {
        self.rounds
    }

    /// How often `value` was offered on `issue`; 0 if never.
    pub fn count(&self, issue: IssueId, value: &IssueValue) -> u64 {
        self.counts
            .get(&issue)
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or(0)
    }

    /// Fraction of all recorded offers that carried `value` on `issue`.
    ///
    /// `None` before the first offer or when the value was never seen.
    pub fn estimate(&self, issue: IssueId, value: &IssueValue) -> Option<f64> {
        if self.rounds == 0 {
            return None;
        }
        match self.count(issue, value) {
            0 => None,
            count => Some(count as f64 / self.rounds as f64),
        }
    }

    /// Value counts for one issue, if it was ever observed.
    pub fn issue(&self, issue: IssueId) -> Option<&FxHashMap<IssueValue, u64>> {
        self.counts.get(&issue)
    }

    pub fn issues(&self) -> impl Iterator<Item = IssueId> + '_ {
        self.counts.keys().copied()
    }

    /// Copy of all counts in issue/value order.
    pub fn to_sorted(&self) -> BTreeMap<IssueId, BTreeMap<IssueValue, u64>> {
        self.counts
            .iter()
            .map(|(issue, values)| {
                let values = values.iter().map(|(v, c)| (v.clone(), *c)).collect();
                (*issue, values)
            })
            .collect()
    }
}
