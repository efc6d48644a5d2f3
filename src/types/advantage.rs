use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Discount granted when a promo code is accepted.
///
/// Serializes as `{"percent": 20}` or `{"value": 5}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "serde_json::Value")]
pub enum Advantage {
    /// Percentage off the total.
    Percent(i64),
    /// Flat amount off the total.
    Value(i64),
}

impl Advantage {
    /// Validate a stored advantage document.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] unless the document is an object holding
    /// exactly one of `percent`/`value` with an integer value that fits in an
    /// `i64`.
    pub fn from_json(document: &serde_json::Value) -> Result<Self, ValidationError> {
        let map = document.as_object().ok_or(ValidationError::NotAnObject {
            field: "Advantage",
        })?;
        let integer = |key: &str, field: &'static str| {
            map.get(key).map(|v| match v.as_i64() {
                Some(n) => Ok(n),
                None if v.is_u64() => Err(ValidationError::IntegerOutOfRange { field }),
                None => Err(ValidationError::NotAnInteger { field }),
            })
        };
        match (
            integer("percent", "Percent"),
            integer("value", "Value"),
        ) {
            (None, None) => Err(ValidationError::MissingAdvantage),
            (Some(_), Some(_)) => Err(ValidationError::ConflictingAdvantage),
            (Some(percent), None) => percent.map(Advantage::Percent),
            (None, Some(value)) => value.map(Advantage::Value),
        }
    }

    /// Parse raw JSON text and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::AdvantageNotJson`] for text that is not
    /// JSON, otherwise as [`from_json`](Self::from_json).
    pub fn from_json_str(text: &str) -> Result<Self, ValidationError> {
        let document: serde_json::Value =
            serde_json::from_str(text).map_err(|_| ValidationError::AdvantageNotJson)?;
        Self::from_json(&document)
    }

    #[must_use]
    pub fn amount(self) -> i64 {
        match self {
            Advantage::Percent(amount) | Advantage::Value(amount) => amount,
        }
    }
}

impl TryFrom<serde_json::Value> for Advantage {
    type Error = ValidationError;

    fn try_from(document: serde_json::Value) -> Result<Self, Self::Error> {
        Self::from_json(&document)
    }
}

impl fmt::Display for Advantage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advantage::Percent(p) => write!(f, "{p}% off"),
            Advantage::Value(v) => write!(f, "{v} off"),
        }
    }
}

/// Check an advantage document without keeping the typed result.
///
/// # Errors
///
/// See [`Advantage::from_json`].
pub fn validate_advantage(document: &serde_json::Value) -> Result<(), ValidationError> {
    Advantage::from_json(document).map(|_| ())
}
