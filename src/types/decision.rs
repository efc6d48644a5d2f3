use std::fmt;

use serde::{Deserialize, Serialize};

use super::advantage::Advantage;
use super::failure_reasons::FailureReasons;

/// Outcome of checking a promo code against a caller's arguments.
///
/// A denial is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
#[must_use]
pub enum Decision {
    Accepted {
        promocode_name: String,
        advantage: Advantage,
    },
    Denied {
        promocode_name: String,
        reasons: FailureReasons,
    },
}

impl Decision {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Decision::Accepted { .. })
    }

    #[must_use]
    pub fn promocode_name(&self) -> &str {
        match self {
            Decision::Accepted { promocode_name, .. } | Decision::Denied { promocode_name, .. } => {
                promocode_name
            }
        }
    }

    /// The advantage granted, if accepted.
    #[must_use]
    pub fn advantage(&self) -> Option<Advantage> {
        match self {
            Decision::Accepted { advantage, .. } => Some(*advantage),
            Decision::Denied { .. } => None,
        }
    }

    /// Why the code was denied; `None` if accepted.
    #[must_use]
    pub fn reasons(&self) -> Option<&FailureReasons> {
        match self {
            Decision::Accepted { .. } => None,
            Decision::Denied { reasons, .. } => Some(reasons),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Accepted {
                promocode_name,
                advantage,
            } => write!(f, "{promocode_name}: accepted ({advantage})"),
            Decision::Denied {
                promocode_name,
                reasons,
            } => write!(f, "{promocode_name}: denied {reasons}"),
        }
    }
}
