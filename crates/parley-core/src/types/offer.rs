use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one negotiable issue of a domain (e.g. price, delivery).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(pub i32);

impl IssueId {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for IssueId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "issue#{}", self.0)
    }
}

/// One discrete setting of an issue.
///
/// Values are compared structurally: two tokens with the same label are the
/// same value no matter where they came from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueValue(String);

impl IssueValue {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }
}

impl From<&str> for IssueValue {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for IssueValue {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for IssueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An offer (bid): an assignment of values to issues.
///
/// A complete offer covers every issue of the domain. Partial offers are
/// accepted everywhere; a missing issue is simply absent for that round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Offer {
    values: BTreeMap<IssueId, IssueValue>,
}

impl Offer {
    /// Create an empty offer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, issue: impl Into<IssueId>, value: impl Into<IssueValue>) -> Self {
        self.values.insert(issue.into(), value.into());
        self
    }

    /// Set the value of an issue, returning the previous one.
    pub fn insert(
        &mut self,
        issue: impl Into<IssueId>,
        value: impl Into<IssueValue>,
    ) -> Option<IssueValue> {
        self.values.insert(issue.into(), value.into())
    }

    /// Value offered for `issue`, if the offer covers it.
    pub fn get(&self, issue: IssueId) -> Option<&IssueValue> {
        self.values.get(&issue)
    }

    /// Whether `value` appears on any issue of this offer.
    pub fn contains_value(&self, value: &IssueValue) -> bool {
        self.values.values().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (IssueId, &IssueValue)> {
        self.values.iter().map(|(issue, value)| (*issue, value))
    }

    pub fn issues(&self) -> impl Iterator<Item = IssueId> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<I, V> FromIterator<(I, V)> for Offer
where
    I: Into<IssueId>,
    V: Into<IssueValue>,
{
    fn from_iter<T: IntoIterator<Item = (I, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(issue, value)| (issue.into(), value.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Offer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, (issue, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", issue.0, value)?;
        }
        f.write_str(")")
    }
}
