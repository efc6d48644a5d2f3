use serde::Serialize;

use super::error::ArgumentError;

/// Caller-supplied facts a promo code is checked against.
///
/// Scoped to a single evaluation; never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Arguments {
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    town: Option<String>,
}

impl Arguments {
    /// Create an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    #[must_use]
    pub fn with_town(mut self, town: impl Into<String>) -> Self {
        self.town = Some(town.into());
        self
    }

    /// Validate a caller's JSON arguments. `null` means no arguments; keys
    /// other than `age` and `town` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError`] if `age` is not an integer or does not fit in
    /// an `i64`, `town` is not a string, or the document is neither an object
    /// nor `null`.
    pub fn from_json(document: &serde_json::Value) -> Result<Self, ArgumentError> {
        let map = match document {
            serde_json::Value::Null => return Ok(Self::new()),
            serde_json::Value::Object(map) => map,
            _ => return Err(ArgumentError::NotAnObject),
        };
        let age = map
            .get("age")
            .map(|v| match v.as_i64() {
                Some(age) => Ok(age),
                None if v.is_u64() => Err(ArgumentError::AgeOutOfRange),
                None => Err(ArgumentError::Age),
            })
            .transpose()?;
        let town = map
            .get("town")
            .map(|v| v.as_str().map(str::to_owned).ok_or(ArgumentError::Town))
            .transpose()?;
        Ok(Self { age, town })
    }

    /// The caller's age, if given.
    #[must_use]
    pub fn age(&self) -> Option<i64> {
        self.age
    }

    /// The caller's town, if given.
    #[must_use]
    pub fn town(&self) -> Option<&str> {
        self.town.as_deref()
    }
}

/// Check caller arguments without keeping the typed result.
///
/// # Errors
///
/// See [`Arguments::from_json`].
pub fn validate_arguments(document: &serde_json::Value) -> Result<(), ArgumentError> {
    Arguments::from_json(document).map(|_| ())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn validate_arguments_cases() {
        let cases = vec![
            (json!({"age": "14"}), Err(ArgumentError::Age)),
            (json!({"town": {"name": "Paris"}}), Err(ArgumentError::Town)),
            (json!({"age": 14, "town": "Paris"}), Ok(())),
            (json!({"town": "Paris"}), Ok(())),
            (json!({"age": 14, "town": "Paris", "date": "2024-01-01"}), Ok(())),
        ];
        for (idx, (input, expected)) in cases.into_iter().enumerate() {
            assert_eq!(validate_arguments(&input), expected, "case {idx}: {input}");
        }
    }

    #[test]
    fn age_is_checked_before_town() {
        assert_eq!(
            validate_arguments(&json!({"age": 1.5, "town": 3})),
            Err(ArgumentError::Age)
        );
    }

    #[test]
    fn huge_age_is_out_of_range() {
        assert_eq!(
            validate_arguments(&json!({"age": 18_446_744_073_709_551_615_u64})),
            Err(ArgumentError::AgeOutOfRange)
        );
        assert_eq!(
            Arguments::from_json(&json!({"age": i64::MAX})).map(|a| a.age()),
            Ok(Some(i64::MAX))
        );
    }

    #[test]
    fn null_means_no_arguments() {
        assert_eq!(Arguments::from_json(&json!(null)), Ok(Arguments::new()));
    }

    #[test]
    fn non_object_rejected() {
        assert_eq!(
            Arguments::from_json(&json!(["age", 20])),
            Err(ArgumentError::NotAnObject)
        );
    }

    #[test]
    fn builder_matches_json() {
        let built = Arguments::new().with_age(20).with_town("Lyon");
        let parsed = Arguments::from_json(&json!({"age": 20, "town": "Lyon"})).unwrap();
        assert_eq!(built, parsed);
        assert_eq!(built.age(), Some(20));
        assert_eq!(built.town(), Some("Lyon"));
    }

    #[test]
    fn empty_arguments() {
        let args = Arguments::new();
        assert_eq!(args.age(), None);
        assert_eq!(args.town(), None);
    }
}
