use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Human-readable reasons a promo code was denied, without duplicates.
///
/// Iteration order is sorted; callers should rely on membership only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
#[must_use]
pub struct FailureReasons {
    reasons: BTreeSet<String>,
}

impl FailureReasons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reason. Returns `false` if it was already present.
    pub fn insert(&mut self, reason: impl Into<String>) -> bool {
        self.reasons.insert(reason.into())
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: FailureReasons) {
        self.reasons.extend(other.reasons);
    }

    #[must_use]
    pub fn contains(&self, reason: &str) -> bool {
        self.reasons.contains(reason)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reasons.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reasons.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.reasons.iter().map(String::as_str)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.reasons.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for FailureReasons {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            reasons: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for FailureReasons {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.reasons.into_iter()
    }
}

impl fmt::Display for FailureReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = self.iter().collect();
        write!(f, "[{}]", parts.join(", "))
    }
}
