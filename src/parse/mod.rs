mod date;
mod error;
mod grammar;

use winnow::Parser;

pub use date::IsoDate;
pub use error::ParseError;

/// `true` when `input` has the `YYYY-MM-DD` shape.
///
/// Only the shape is checked: `2024-13-45` passes.
#[must_use]
pub fn is_valid_date(input: &str) -> bool {
    grammar::iso_date.parse(input).is_ok()
}

/// Parse a `YYYY-MM-DD` string into an [`IsoDate`].
///
/// Any text [`is_valid_date`] accepts parses; the fields are kept as written.
///
/// # Errors
///
/// Returns [`ParseError::Format`] if the shape is wrong.
pub fn parse_date(input: &str) -> Result<IsoDate, ParseError> {
    grammar::iso_date
        .parse(input)
        .map_err(|_| ParseError::Format {
            input: input.to_owned(),
        })
}
