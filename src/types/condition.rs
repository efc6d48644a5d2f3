use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Value;

/// Comparison operators a condition clause can use.
///
/// `Eq` and `Is` both test equality; they differ only in the document key
/// they come from (`eq` for numbers, `is` for labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Is,
    Gt,
    Lt,
}

impl CompareOp {
    /// The document key this operator is written as.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Is => "is",
            CompareOp::Gt => "gt",
            CompareOp::Lt => "lt",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareOp::Eq | CompareOp::Is => write!(f, "=="),
            CompareOp::Gt => write!(f, ">"),
            CompareOp::Lt => write!(f, "<"),
        }
    }
}

/// A conjunction of scalar comparisons, e.g. `{"gt": 3, "lt": 5}`.
///
/// An empty condition holds for every value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition {
    clauses: Vec<(CompareOp, Value)>,
}

impl Condition {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn eq(self, value: impl Into<Value>) -> Self {
        self.with(CompareOp::Eq, value)
    }

    #[must_use]
    pub fn is(self, value: impl Into<Value>) -> Self {
        self.with(CompareOp::Is, value)
    }

    #[must_use]
    pub fn gt(self, value: impl Into<Value>) -> Self {
        self.with(CompareOp::Gt, value)
    }

    #[must_use]
    pub fn lt(self, value: impl Into<Value>) -> Self {
        self.with(CompareOp::Lt, value)
    }

    /// Add a clause. A later clause for the same operator replaces the earlier one.
    #[must_use]
    pub fn with(mut self, op: CompareOp, value: impl Into<Value>) -> Self {
        let value = value.into();
        match self.clauses.iter_mut().find(|(existing, _)| *existing == op) {
            Some(slot) => slot.1 = value,
            None => self.clauses.push((op, value)),
        }
        self
    }

    /// `true` when every clause holds for `value`. Clauses comparing
    /// incompatible types do not hold.
    #[must_use]
    pub fn check(&self, value: &Value) -> bool {
        self.clauses
            .iter()
            .all(|(op, bound)| value.compare(*op, bound).unwrap_or(false))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Clauses in insertion order.
    pub fn clauses(&self) -> impl Iterator<Item = (CompareOp, &Value)> {
        self.clauses.iter().map(|(op, value)| (*op, value))
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.clauses.len()))?;
        for (op, value) in &self.clauses {
            map.serialize_entry(op.key(), &serde_json::Value::from(value.clone()))?;
        }
        map.end()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .clauses
            .iter()
            .map(|(op, value)| format!("value {op} {value}"))
            .collect();
        write!(f, "({})", parts.join(" AND "))
    }
}
