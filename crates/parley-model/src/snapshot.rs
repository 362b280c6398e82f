use std::collections::BTreeMap;

use parley_core::{IssueId, IssueValue, ModelConfig, Offer};
use serde::{Deserialize, Serialize};

/// Serializable copy of everything a model has learned.
///
/// Maps are ordered so that two snapshots of the same state serialize to
/// the same bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub issues: Vec<IssueId>,
    pub config: ModelConfig,
    pub rounds: u64,
    pub weights: BTreeMap<IssueId, f64>,
    pub frequencies: BTreeMap<IssueId, BTreeMap<IssueValue, u64>>,
    pub last_offer: Option<Offer>,
}

impl ModelSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
