//! Structured log events for key model operations.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::types::IssueId;

/// Log model initialization.
pub fn model_initialized(model: &str, issue_count: usize, delta: f64, penalty: bool) {
    tracing::info!(
        event = "model_initialized",
        model = %model,
        issue_count = issue_count,
        delta = delta,
        penalty = penalty,
        "opponent model initialized"
    );
}

/// Log a received offer.
pub fn offer_received(round: u64, issues: usize, adjusted: usize) {
    tracing::debug!(
        event = "offer_received",
        round = round,
        issues = issues,
        adjusted = adjusted,
        "opponent offer received"
    );
}

/// Log a lazy weight rescale triggered by scoring.
pub fn weights_rescaled(weights_sum: f64) {
    tracing::debug!(
        event = "weights_rescaled",
        weights_sum = weights_sum,
        "issue weights rescaled"
    );
}

/// Log a weight crossing below zero after a penalty.
pub fn weight_went_negative(issue: IssueId, weight: f64) {
    tracing::warn!(
        event = "weight_went_negative",
        issue = issue.get(),
        weight = weight,
        "issue weight dropped below zero"
    );
}

/// Log a scoring request that arrived before any offer.
pub fn evaluation_before_first_offer() {
    tracing::warn!(
        event = "evaluation_before_first_offer",
        "utility requested before any opponent offer was received"
    );
}
