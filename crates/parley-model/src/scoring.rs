use parley_core::types::collections::FxHashMap;
use parley_core::{IssueId, IssueValue, ModelError, ModelResult, Offer};
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;

/// Additive utility estimate.
///
/// ```text
/// U(X) = Σ_i  w_i × #X_i / r
/// ```
///
/// where `#X_i` is how often the candidate's value on issue `i` was received
/// and `r` the number of received offers. Issues with no weight or an unseen
/// value contribute 0. Weights are used as given; rescaling is the caller's
/// job.
pub fn score(
    weights: &FxHashMap<IssueId, f64>,
    table: &FrequencyTable,
    candidate: &Offer,
) -> ModelResult<f64> {
    ensure_observed(table)?;
    Ok(issue_terms(weights, table, candidate)
        .map(|(_, _, weight, estimate)| term(weight, estimate))
        .sum())
}

/// One issue's share of a utility estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueContribution {
    pub issue: IssueId,
    pub value: IssueValue,
    /// Weight used for scoring (after any rescale); `None` for undeclared issues.
    pub weight: Option<f64>,
    /// `#X_i / r`; `None` when the value was never received.
    pub estimate: Option<f64>,
    pub contribution: f64,
}

/// Explanation of a utility estimate, issue by issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilityBreakdown {
    /// Sum of the stored weights before scoring.
    pub weights_sum: f64,
    /// Whether scoring rescales the stored weights (`weights_sum > 1`).
    pub rescaled: bool,
    /// Σ raw weight × estimate, ignoring the rescale.
    pub raw_utility: f64,
    /// The value scoring returns.
    pub utility: f64,
    pub contributions: Vec<IssueContribution>,
}

/// Compute a breakdown from the raw (stored) weights without mutating them.
pub fn compute_breakdown(
    raw_weights: &FxHashMap<IssueId, f64>,
    table: &FrequencyTable,
    candidate: &Offer,
) -> ModelResult<UtilityBreakdown> {
    ensure_observed(table)?;

    let weights_sum: f64 = raw_weights.values().sum();
    let rescaled = weights_sum > 1.0;
    let scoring_weights: FxHashMap<IssueId, f64> = if rescaled {
        raw_weights
            .iter()
            .map(|(k, w)| (*k, w / weights_sum))
            .collect()
    } else {
        raw_weights.clone()
    };

    let raw_utility: f64 = issue_terms(raw_weights, table, candidate)
        .map(|(_, _, weight, estimate)| term(weight, estimate))
        .sum();

    let contributions: Vec<IssueContribution> = issue_terms(&scoring_weights, table, candidate)
        .map(|(issue, value, weight, estimate)| IssueContribution {
            issue,
            value: value.clone(),
            weight,
            estimate,
            contribution: term(weight, estimate),
        })
        .collect();
    let utility: f64 = contributions.iter().map(|c| c.contribution).sum();

    Ok(UtilityBreakdown {
        weights_sum,
        rescaled,
        raw_utility,
        utility,
        contributions,
    })
}

fn ensure_observed(table: &FrequencyTable) -> ModelResult<()> {
    if table.rounds() == 0 {
        return Err(ModelError::NoOffersObserved);
    }
    Ok(())
}

fn issue_terms<'a>(
    weights: &'a FxHashMap<IssueId, f64>,
    table: &'a FrequencyTable,
    candidate: &'a Offer,
) -> impl Iterator<Item = (IssueId, &'a IssueValue, Option<f64>, Option<f64>)> + 'a {
    candidate.iter().map(move |(issue, value)| {
        let weight = weights.get(&issue).copied();
        let estimate = table.estimate(issue, value);
        (issue, value, weight, estimate)
    })
}

fn term(weight: Option<f64>, estimate: Option<f64>) -> f64 {
    match (weight, estimate) {
        (Some(w), Some(v)) => w * v,
        _ => 0.0,
    }
}
