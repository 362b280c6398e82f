//! # parley-model
//!
//! Online opponent-preference estimator: a weight tracker that rewards
//! issues whose value the opponent keeps repeating, a frequency table of
//! every value received, and additive utility scoring over both.

pub mod engine;
pub mod frequency;
pub mod scoring;
pub mod shared;
pub mod snapshot;
pub mod weights;

pub use engine::FrequencyModel;
pub use frequency::FrequencyTable;
pub use scoring::{IssueContribution, UtilityBreakdown};
pub use shared::SharedModel;
pub use snapshot::ModelSnapshot;
pub use weights::WeightTracker;
