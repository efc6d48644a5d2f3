use thiserror::Error;

/// Structural problem in a stored promo code document (advantage or
/// restrictions). The message is meant to be shown to whoever wrote the
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Restrictions must be a valid JSON object.")]
    RestrictionsNotJson,

    #[error("Restrictions must be an array of objects.")]
    NotAnArrayOfObjects,

    #[error("Restrictions array cannot be empty.")]
    EmptyRestrictions,

    #[error("Restriction must contain a date, or, and, age, or weather key.")]
    UnknownRestriction,

    /// `field` is `Date`, `Age`, `Weather`, `Temp` or `Advantage`.
    #[error("{field} must be a JSON object.")]
    NotAnObject { field: &'static str },

    /// `field` is `Or` or `And`.
    #[error("{field} must be an array.")]
    NotAnArray { field: &'static str },

    #[error("{field} array cannot be empty.")]
    EmptyArray { field: &'static str },

    #[error("Date must contain either an after or before key.")]
    MissingDateBound,

    #[error("{field} must be a string.")]
    NotAString { field: &'static str },

    #[error("{field} must be in the format of YYYY-MM-DD.")]
    DateFormat { field: &'static str },

    #[error("{field} must be an integer.")]
    NotAnInteger { field: &'static str },

    /// An integer too large for `i64`.
    #[error("{field} is out of range.")]
    IntegerOutOfRange { field: &'static str },

    #[error("Weather must contain an is key.")]
    MissingWeatherLabel,

    #[error("Advantage must be a valid JSON object.")]
    AdvantageNotJson,

    #[error("Advantage must contain either a percent or value key.")]
    MissingAdvantage,

    #[error("Advantage cannot contain both a percent and value key.")]
    ConflictingAdvantage,
}

/// Malformed caller arguments. Raised before any restriction is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Invalid argument - arguments must be a JSON object.")]
    NotAnObject,

    #[error("Invalid argument - age must be an integer.")]
    Age,

    #[error("Invalid argument - age is out of range.")]
    AgeOutOfRange,

    #[error("Invalid argument - town must be a string.")]
    Town,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_an_object_message() {
        let err = ValidationError::NotAnObject { field: "Age" };
        assert_eq!(err.to_string(), "Age must be a JSON object.");
    }

    #[test]
    fn empty_array_message() {
        let err = ValidationError::EmptyArray { field: "Or" };
        assert_eq!(err.to_string(), "Or array cannot be empty.");
    }

    #[test]
    fn date_format_message() {
        let err = ValidationError::DateFormat { field: "Before" };
        assert_eq!(
            err.to_string(),
            "Before must be in the format of YYYY-MM-DD."
        );
    }

    #[test]
    fn integer_message_keeps_key_case() {
        let err = ValidationError::NotAnInteger { field: "eq" };
        assert_eq!(err.to_string(), "eq must be an integer.");
        let err = ValidationError::NotAnInteger { field: "Gt" };
        assert_eq!(err.to_string(), "Gt must be an integer.");
    }

    #[test]
    fn out_of_range_message() {
        let err = ValidationError::IntegerOutOfRange { field: "Percent" };
        assert_eq!(err.to_string(), "Percent is out of range.");
    }

    #[test]
    fn unknown_restriction_message() {
        assert_eq!(
            ValidationError::UnknownRestriction.to_string(),
            "Restriction must contain a date, or, and, age, or weather key."
        );
    }

    #[test]
    fn argument_messages() {
        assert_eq!(
            ArgumentError::Age.to_string(),
            "Invalid argument - age must be an integer."
        );
        assert_eq!(
            ArgumentError::AgeOutOfRange.to_string(),
            "Invalid argument - age is out of range."
        );
        assert_eq!(
            ArgumentError::Town.to_string(),
            "Invalid argument - town must be a string."
        );
    }
}
