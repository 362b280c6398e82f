//! Weight Tracker: one adaptive weight per issue.
//!
//! An opponent that keeps re-offering the same value on an issue is treated
//! as caring about that issue, so its weight grows by `delta`. With the
//! penalty enabled, a value that already appeared anywhere in the previous
//! offer looks generic and loses `multa` instead.
//!
//! Weights are raw running sums: never clamped, never normalized here.

use std::collections::BTreeMap;

use parley_core::config::{ModelConfig, WeightSeeding};
use parley_core::tracing_setup::events;
use parley_core::types::collections::{FxHashMap, FxHashSet};
use parley_core::{IssueId, Offer};

#[derive(Debug, Clone)]
pub struct WeightTracker {
    weights: FxHashMap<IssueId, f64>,
    /// Issues declared at initialization. Only these ever carry a weight.
    domain: FxHashSet<IssueId>,
    prior: f64,
    delta: f64,
    multa: f64,
    penalty: bool,
    seeding: WeightSeeding,
}

impl WeightTracker {
    /// Create a tracker for `issues`. With uniform seeding every issue starts
    /// at `1 / issues.len()`; with lazy seeding the table starts empty.
    pub fn new(issues: &[IssueId], config: &ModelConfig) -> Self {
        let domain: FxHashSet<IssueId> = issues.iter().copied().collect();
        let prior = if domain.is_empty() {
            0.0
        } else {
            1.0 / domain.len() as f64
        };

        let weights = match config.seeding {
            WeightSeeding::Uniform => domain.iter().map(|issue| (*issue, prior)).collect(),
            WeightSeeding::Lazy => FxHashMap::default(),
        };

        Self {
            weights,
            domain,
            prior,
            delta: config.delta,
            multa: config.multa,
            penalty: config.penalty.is_enabled(),
            seeding: config.seeding,
        }
    }

    /// Rebuild a tracker around previously learned weights.
    pub(crate) fn from_parts(
        issues: &[IssueId],
        config: &ModelConfig,
        weights: &BTreeMap<IssueId, f64>,
    ) -> Self {
        let mut tracker = Self::new(issues, config);
        for (issue, weight) in weights {
            if tracker.domain.contains(issue) {
                tracker.weights.insert(*issue, *weight);
            }
        }
        tracker
    }

    /// Adjust weights for `offer` given the offer received just before it.
    ///
    /// Returns the number of issues whose weight changed. Nothing changes on
    /// the first offer of a negotiation (`previous == None`).
    pub fn observe(&mut self, previous: Option<&Offer>, offer: &Offer) -> usize {
        if self.seeding == WeightSeeding::Lazy {
            for issue in offer.issues() {
                if self.domain.contains(&issue) {
                    self.weights.entry(issue).or_insert(self.prior);
                }
            }
        }

        let Some(previous) = previous else {
            return 0;
        };

        let mut adjusted = 0;
        for (issue, value) in offer.iter() {
            let Some(weight) = self.weights.get_mut(&issue) else {
                continue;
            };

            // Penalty takes precedence over the increment.
            if self.penalty && previous.contains_value(value) {
                let before = *weight;
                *weight -= self.multa;
                adjusted += 1;
                if before >= 0.0 && *weight < 0.0 {
                    events::weight_went_negative(issue, *weight);
                }
            } else if previous.get(issue) == Some(value) {
                *weight += self.delta;
                adjusted += 1;
            }
        }
        adjusted
    }

    pub fn get(&self, issue: IssueId) -> Option<f64> {
        self.weights.get(&issue).copied()
    }

    pub fn sum(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Divide every weight by their sum if the sum exceeds 1.
    ///
    /// Returns the sum that triggered the rescale, if any.
    pub fn rescale_if_needed(&mut self) -> Option<f64> {
        let sum = self.sum();
        if sum > 1.0 {
            for weight in self.weights.values_mut() {
                *weight /= sum;
            }
            Some(sum)
        } else {
            None
        }
    }

    /// The weights `rescale_if_needed` would produce, without storing them.
    pub fn normalized(&self) -> FxHashMap<IssueId, f64> {
        let sum = self.sum();
        if sum > 1.0 {
            self.weights.iter().map(|(k, w)| (*k, w / sum)).collect()
        } else {
            self.weights.clone()
        }
    }

    pub fn as_map(&self) -> &FxHashMap<IssueId, f64> {
        &self.weights
    }

    /// Copy of the weights in issue order.
    pub fn to_sorted(&self) -> BTreeMap<IssueId, f64> {
        self.weights.iter().map(|(k, w)| (*k, *w)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issues() -> Vec<IssueId> {
        vec![IssueId(1), IssueId(2)]
    }

    #[test]
    fn test_uniform_seed() {
        let tracker = WeightTracker::new(&issues(), &ModelConfig::new(0.1));
        assert_eq!(tracker.get(IssueId(1)), Some(0.5));
        assert_eq!(tracker.get(IssueId(2)), Some(0.5));
        assert_eq!(tracker.sum(), 1.0);
    }

    #[test]
    fn test_lazy_seed_waits_for_first_mention() {
        let config = ModelConfig::new(0.1).with_seeding(WeightSeeding::Lazy);
        let mut tracker = WeightTracker::new(&issues(), &config);
        assert_eq!(tracker.get(IssueId(1)), None);

        tracker.observe(None, &Offer::new().with(1, "x"));
        assert_eq!(tracker.get(IssueId(1)), Some(0.5));
        assert_eq!(tracker.get(IssueId(2)), None);
    }

    #[test]
    fn test_first_offer_adjusts_nothing() {
        let mut tracker = WeightTracker::new(&issues(), &ModelConfig::new(0.1));
        let adjusted = tracker.observe(None, &Offer::new().with(1, "x").with(2, "p"));
        assert_eq!(adjusted, 0);
        assert_eq!(tracker.get(IssueId(1)), Some(0.5));
    }

    #[test]
    fn test_repeated_value_gains_delta() {
        let mut tracker = WeightTracker::new(&issues(), &ModelConfig::new(0.1));
        let first = Offer::new().with(1, "x").with(2, "p");
        let second = Offer::new().with(1, "x").with(2, "q");

        assert_eq!(tracker.observe(Some(&first), &second), 1);
        assert_eq!(tracker.get(IssueId(1)), Some(0.5 + 0.1));
        assert_eq!(tracker.get(IssueId(2)), Some(0.5));
    }

    #[test]
    fn test_penalty_takes_precedence() {
        let config = ModelConfig::new(0.1).with_penalty(0.2);
        let mut tracker = WeightTracker::new(&issues(), &config);
        let first = Offer::new().with(1, "x").with(2, "p");
        // issue 1 repeats "x"; issue 2 now offers "x", which issue 1 used last round.
        let second = Offer::new().with(1, "x").with(2, "x");

        tracker.observe(Some(&first), &second);
        assert_eq!(tracker.get(IssueId(1)), Some(0.5 - 0.2));
        assert_eq!(tracker.get(IssueId(2)), Some(0.5 - 0.2));
    }

    #[test]
    fn test_undeclared_issue_is_ignored() {
        let mut tracker = WeightTracker::new(&issues(), &ModelConfig::new(0.1));
        let offer = Offer::new().with(9, "z");
        tracker.observe(Some(&offer), &offer);
        assert_eq!(tracker.get(IssueId(9)), None);
    }

    #[test]
    fn test_rescale_only_above_one() {
        let mut tracker = WeightTracker::new(&issues(), &ModelConfig::new(0.1));
        assert_eq!(tracker.rescale_if_needed(), None);

        let offer = Offer::new().with(1, "x").with(2, "p");
        tracker.observe(Some(&offer), &offer);
        let sum = tracker.rescale_if_needed().unwrap();
        assert!((sum - 1.2).abs() < 1e-12);
        assert!((tracker.sum() - 1.0).abs() < 1e-12);
    }
}
