use thiserror::Error;

/// Errors produced when reading a `YYYY-MM-DD` date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text does not have the `YYYY-MM-DD` shape.
    #[error("parse error: expected YYYY-MM-DD, found '{input}'")]
    Format { input: String },
}
