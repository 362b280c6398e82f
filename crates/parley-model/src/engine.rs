//! FrequencyModel: implements OpponentModel, owns the weight tracker and the
//! frequency table.

use std::collections::{BTreeMap, HashMap};

use parley_core::config::defaults;
use parley_core::tracing_setup::events;
use parley_core::{
    IssueId, IssueValue, ModelConfig, ModelError, ModelResult, Offer, OpponentModel, ParameterSpec,
    PenaltyMode,
};
use tracing::debug;

use crate::frequency::FrequencyTable;
use crate::scoring::{self, UtilityBreakdown};
use crate::snapshot::ModelSnapshot;
use crate::weights::WeightTracker;

const NAME: &str = "Frequency Model";
const NAME_PENALIZED: &str = "Frequency Model (penalized)";

/// Online opponent-preference estimator.
///
/// Every received offer first adjusts issue weights against the previous
/// offer, then is counted in the frequency table. Scoring combines both:
/// `U(X) = Σ w_i × #X_i / r`, with weights lazily rescaled whenever their
/// sum exceeds 1.
#[derive(Debug, Clone)]
pub struct FrequencyModel {
    issues: Vec<IssueId>,
    config: ModelConfig,
    tracker: WeightTracker,
    table: FrequencyTable,
    last_offer: Option<Offer>,
}

impl FrequencyModel {
    /// Create a model over the domain's issues.
    ///
    /// Duplicate issue ids are collapsed; an empty domain is rejected.
    pub fn new(
        issues: impl IntoIterator<Item = IssueId>,
        config: ModelConfig,
    ) -> ModelResult<Self> {
        config.validate()?;

        let mut declared: Vec<IssueId> = Vec::new();
        for issue in issues {
            if !declared.contains(&issue) {
                declared.push(issue);
            }
        }
        if declared.is_empty() {
            return Err(ModelError::EmptyDomain);
        }

        let tracker = WeightTracker::new(&declared, &config);
        let model = Self {
            issues: declared,
            config,
            tracker,
            table: FrequencyTable::new(),
            last_offer: None,
        };

        events::model_initialized(
            model.name(),
            model.issues.len(),
            model.config.delta,
            model.config.penalty.is_enabled(),
        );
        Ok(model)
    }

    /// Create a model from the host's parameter map (`delta`, `multa`).
    pub fn from_parameters(
        issues: impl IntoIterator<Item = IssueId>,
        parameters: &HashMap<String, f64>,
        penalty: PenaltyMode,
    ) -> ModelResult<Self> {
        let config = ModelConfig::from_parameters(parameters, penalty)?;
        Self::new(issues, config)
    }

    /// Rebuild a model from a snapshot taken with [`FrequencyModel::snapshot`].
    pub fn restore(snapshot: ModelSnapshot) -> ModelResult<Self> {
        let ModelSnapshot {
            issues,
            config,
            rounds,
            weights,
            frequencies,
            last_offer,
        } = snapshot;

        // Each round counts at most one value per issue.
        for (issue, values) in &frequencies {
            let total = values
                .values()
                .try_fold(0u64, |sum, count| sum.checked_add(*count));
            if total.map_or(true, |total| total > rounds) {
                return Err(ModelError::InvalidSnapshot(format!(
                    "{issue} counts more values than the round counter ({rounds})"
                )));
            }
        }
        if rounds == 0 && last_offer.is_some() {
            return Err(ModelError::InvalidSnapshot(
                "last offer recorded but no rounds".to_string(),
            ));
        }
        if rounds > 0 && last_offer.is_none() {
            return Err(ModelError::InvalidSnapshot(
                "rounds recorded but no last offer".to_string(),
            ));
        }

        let mut model = Self::new(issues, config)?;
        model.tracker = WeightTracker::from_parts(&model.issues, &model.config, &weights);
        model.table = FrequencyTable::from_parts(&frequencies, rounds);
        model.last_offer = last_offer;
        Ok(model)
    }

    /// Learn from one received offer: weights first, then frequencies.
    pub fn receive_offer(&mut self, offer: &Offer) {
        let adjusted = self.tracker.observe(self.last_offer.as_ref(), offer);
        self.table.record(offer);
        self.last_offer = Some(offer.clone());

        events::offer_received(self.table.rounds(), offer.len(), adjusted);
    }

    /// Estimated opponent utility of `candidate`.
    ///
    /// Rescales the stored weights first when their sum exceeds 1, and keeps
    /// the rescaled values. Fails with [`ModelError::NoOffersObserved`]
    /// before the first received offer, leaving the weights untouched.
    pub fn evaluate(&mut self, candidate: &Offer) -> ModelResult<f64> {
        self.rescale_for_scoring()?;
        scoring::score(self.tracker.as_map(), &self.table, candidate)
    }

    /// Explain what [`FrequencyModel::evaluate`] would return, without
    /// rescaling anything.
    pub fn breakdown(&self, candidate: &Offer) -> ModelResult<UtilityBreakdown> {
        scoring::compute_breakdown(self.tracker.as_map(), &self.table, candidate)
    }

    /// Score every candidate and order them best first.
    ///
    /// Weights are rescaled once up front, so every candidate is scored with
    /// the same weights. Returns `(index into candidates, utility)`; equal
    /// utilities keep their input order.
    pub fn rank(&mut self, candidates: &[Offer]) -> ModelResult<Vec<(usize, f64)>> {
        self.rescale_for_scoring()?;

        let mut ranked = Vec::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            let utility = scoring::score(self.tracker.as_map(), &self.table, candidate)?;
            ranked.push((index, utility));
        }
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));

        debug!(candidates = candidates.len(), "candidates ranked");
        Ok(ranked)
    }

    fn rescale_for_scoring(&mut self) -> ModelResult<()> {
        if self.table.rounds() == 0 {
            events::evaluation_before_first_offer();
            return Err(ModelError::NoOffersObserved);
        }
        if let Some(sum) = self.tracker.rescale_if_needed() {
            events::weights_rescaled(sum);
        }
        Ok(())
    }

    /// Forget everything learned, keeping the domain and config.
    pub fn reset(&mut self) {
        self.tracker = WeightTracker::new(&self.issues, &self.config);
        self.table = FrequencyTable::new();
        self.last_offer = None;
    }

    // ---- Inspection ----

    pub fn issues(&self) -> &[IssueId] {
        &self.issues
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Current raw weight of an issue.
    pub fn weight(&self, issue: IssueId) -> Option<f64> {
        self.tracker.get(issue)
    }

    /// Copy of the raw weight table.
    pub fn weights(&self) -> BTreeMap<IssueId, f64> {
        self.tracker.to_sorted()
    }

    /// The weights scoring would use right now.
    pub fn normalized_weights(&self) -> BTreeMap<IssueId, f64> {
        self.tracker.normalized().into_iter().collect()
    }

    pub fn weights_sum(&self) -> f64 {
        self.tracker.sum()
    }

    /// `#value / rounds` for one issue.
    pub fn value_estimate(&self, issue: IssueId, value: &IssueValue) -> Option<f64> {
        self.table.estimate(issue, value)
    }

    pub fn count(&self, issue: IssueId, value: &IssueValue) -> u64 {
        self.table.count(issue, value)
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn round_count(&self) -> u64 {
        self.table.rounds()
    }

    pub fn last_offer(&self) -> Option<&Offer> {
        self.last_offer.as_ref()
    }

    pub fn snapshot(&self) -> ModelSnapshot {
        ModelSnapshot {
            issues: self.issues.clone(),
            config: self.config.clone(),
            rounds: self.table.rounds(),
            weights: self.tracker.to_sorted(),
            frequencies: self.table.to_sorted(),
            last_offer: self.last_offer.clone(),
        }
    }
}

impl OpponentModel for FrequencyModel {
    fn name(&self) -> &'static str {
        if self.config.penalty.is_enabled() {
            NAME_PENALIZED
        } else {
            NAME
        }
    }

    fn parameter_spec(&self) -> Vec<ParameterSpec> {
        let mut spec = vec![ParameterSpec::new(
            defaults::PARAM_DELTA,
            defaults::DEFAULT_DELTA,
            "Weight increment",
        )];
        if self.config.penalty.is_enabled() {
            spec.push(ParameterSpec::new(
                defaults::PARAM_MULTA,
                defaults::DEFAULT_MULTA,
                "Weight decrement",
            ));
        }
        spec
    }

    fn receive_offer(&mut self, offer: &Offer) {
        FrequencyModel::receive_offer(self, offer)
    }

    fn evaluate(&mut self, candidate: &Offer) -> ModelResult<f64> {
        FrequencyModel::evaluate(self, candidate)
    }
}
