use std::fmt;
use std::slice;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, json};

use crate::parse::IsoDate;

use super::condition::Condition;
use super::error::ValidationError;

/// Window the current date must fall in.
///
/// `after` is inclusive; `before` is exclusive. Bounds are compared field by
/// field, so a bound such as `2024-02-30` still orders between its neighbours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub after: Option<IsoDate>,
    pub before: Option<IsoDate>,
}

impl DateRange {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn after(mut self, date: IsoDate) -> Self {
        self.after = Some(date);
        self
    }

    #[must_use]
    pub fn before(mut self, date: IsoDate) -> Self {
        self.before = Some(date);
        self
    }
}

/// Expected current weather in the caller's town.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherCondition {
    /// The `is` value exactly as the document gave it.
    pub label: serde_json::Value,
    /// Bounds on the temperature in degrees Celsius.
    pub temperature: Option<Condition>,
}

impl WeatherCondition {
    #[must_use]
    pub fn new(expected: &str) -> Self {
        Self::from_label(serde_json::Value::String(expected.to_owned()))
    }

    #[must_use]
    pub fn from_label(label: serde_json::Value) -> Self {
        Self {
            label,
            temperature: None,
        }
    }

    /// Label to compare against, case-insensitively.
    ///
    /// Empty and null-like values give `None`, which disables the label
    /// check. Non-string values are compared by their JSON rendering.
    #[must_use]
    pub fn expected(&self) -> Option<String> {
        use serde_json::Value as Json;
        match &self.label {
            Json::Null | Json::Bool(false) => None,
            Json::String(s) if s.is_empty() => None,
            Json::String(s) => Some(s.clone()),
            Json::Number(n) if n.as_f64() == Some(0.0) => None,
            Json::Array(items) if items.is_empty() => None,
            Json::Object(map) if map.is_empty() => None,
            other => Some(other.to_string()),
        }
    }

    #[must_use]
    pub fn temperature(mut self, condition: Condition) -> Self {
        self.temperature = Some(condition);
        self
    }
}

/// One node of a promo code's eligibility tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Restriction {
    Date(DateRange),
    Age(Condition),
    Weather(WeatherCondition),
    /// At least one child must hold.
    Or(Vec<Restriction>),
    /// Every child must hold.
    And(Vec<Restriction>),
}

impl Restriction {
    #[must_use]
    pub fn or(children: impl IntoIterator<Item = Restriction>) -> Self {
        Restriction::Or(children.into_iter().collect())
    }

    #[must_use]
    pub fn and(children: impl IntoIterator<Item = Restriction>) -> Self {
        Restriction::And(children.into_iter().collect())
    }

    /// The document tag for this node.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Restriction::Date(_) => "date",
            Restriction::Age(_) => "age",
            Restriction::Weather(_) => "weather",
            Restriction::Or(_) => "or",
            Restriction::And(_) => "and",
        }
    }

    /// Render back to the stored document shape.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Restriction::Date(range) => {
                let mut bounds = Map::new();
                if let Some(after) = range.after {
                    bounds.insert("after".into(), after.to_string().into());
                }
                if let Some(before) = range.before {
                    bounds.insert("before".into(), before.to_string().into());
                }
                json!({ "date": bounds })
            }
            Restriction::Age(condition) => json!({ "age": condition }),
            Restriction::Weather(weather) => {
                let mut body = Map::new();
                body.insert("is".into(), weather.label.clone());
                if let Some(temp) = &weather.temperature {
                    body.insert("temp".into(), json!(temp));
                }
                json!({ "weather": body })
            }
            Restriction::Or(children) => {
                json!({ "or": children.iter().map(Restriction::to_json).collect::<Vec<_>>() })
            }
            Restriction::And(children) => {
                json!({ "and": children.iter().map(Restriction::to_json).collect::<Vec<_>>() })
            }
        }
    }
}

impl Serialize for Restriction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Restriction::Date(range) => match (range.after, range.before) {
                (Some(a), Some(b)) => write!(f, "(date >= {a} AND date < {b})"),
                (Some(a), None) => write!(f, "(date >= {a})"),
                (None, Some(b)) => write!(f, "(date < {b})"),
                (None, None) => write!(f, "(date)"),
            },
            Restriction::Age(condition) => write!(f, "age{condition}"),
            Restriction::Weather(weather) => {
                let expected = weather.expected();
                let label = expected.as_deref().unwrap_or("any");
                match &weather.temperature {
                    Some(temp) => write!(f, "(weather is {label} AND temp{temp})"),
                    None => write!(f, "(weather is {label})"),
                }
            }
            Restriction::Or(children) => write_joined(f, children, " OR "),
            Restriction::And(children) => write_joined(f, children, " AND "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[Restriction], sep: &str) -> fmt::Result {
    let parts: Vec<String> = children.iter().map(ToString::to_string).collect();
    write!(f, "({})", parts.join(sep))
}

/// The validated restriction list of a promo code.
///
/// Built from a submitted document with [`Restrictions::from_json`] or
/// [`Restrictions::from_json_str`]; both reject malformed documents. An empty
/// list means the code is always accepted.
///
/// Deserializing a stored record reads `[]` back as the empty list and
/// validates anything else.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct Restrictions(Vec<Restriction>);

impl Restrictions {
    #[must_use]
    pub fn new(restrictions: Vec<Restriction>) -> Self {
        Self(restrictions)
    }

    /// Validate a parsed JSON document and build the typed tree.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    pub fn from_json(document: &serde_json::Value) -> Result<Self, ValidationError> {
        crate::validate::restrictions_from_json(document).map(Self)
    }

    /// Parse raw JSON text, validate it, and build the typed tree.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RestrictionsNotJson`] for text that is not
    /// JSON, otherwise as [`from_json`](Self::from_json).
    pub fn from_json_str(text: &str) -> Result<Self, ValidationError> {
        let document: serde_json::Value =
            serde_json::from_str(text).map_err(|_| ValidationError::RestrictionsNotJson)?;
        Self::from_json(&document)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Restriction] {
        &self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, Restriction> {
        self.0.iter()
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Array(self.0.iter().map(Restriction::to_json).collect())
    }
}

impl TryFrom<serde_json::Value> for Restrictions {
    type Error = ValidationError;

    fn try_from(document: serde_json::Value) -> Result<Self, Self::Error> {
        match document.as_array() {
            Some(list) if list.is_empty() => Ok(Self::default()),
            _ => Self::from_json(&document),
        }
    }
}

impl From<Vec<Restriction>> for Restrictions {
    fn from(restrictions: Vec<Restriction>) -> Self {
        Self(restrictions)
    }
}

impl<'a> IntoIterator for &'a Restrictions {
    type Item = &'a Restriction;
    type IntoIter = slice::Iter<'a, Restriction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
