//! Negotiation domain types.

pub mod collections;
pub mod offer;

pub use offer::{IssueId, IssueValue, Offer};
