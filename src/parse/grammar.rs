use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::token::take_while;

use super::IsoDate;

// -- Digits -----------------------------------------------------------------

fn year(input: &mut &str) -> ModalResult<i32> {
    take_while(4, |c: char| c.is_ascii_digit())
        .try_map(str::parse::<i32>)
        .parse_next(input)
}

fn two_digits(input: &mut &str) -> ModalResult<u8> {
    take_while(2, |c: char| c.is_ascii_digit())
        .try_map(str::parse::<u8>)
        .parse_next(input)
}

// -- Dates ------------------------------------------------------------------

/// `YYYY-MM-DD`: four digits, dash, two digits, dash, two digits.
pub(crate) fn iso_date(input: &mut &str) -> ModalResult<IsoDate> {
    (year, '-', two_digits, '-', two_digits)
        .map(|(year, _, month, _, day)| IsoDate { year, month, day })
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let parts = iso_date.parse("2024-03-09").unwrap();
        assert_eq!(parts, IsoDate::new(2024, 3, 9));
    }

    #[test]
    fn accepts_out_of_range_fields() {
        let parts = iso_date.parse("2024-13-45").unwrap();
        assert_eq!(parts.month, 13);
        assert_eq!(parts.day, 45);
    }

    #[test]
    fn rejects_short_fields() {
        assert!(iso_date.parse("2024-1-01").is_err());
        assert!(iso_date.parse("24-01-01").is_err());
    }

    #[test]
    fn rejects_trailing_input() {
        assert!(iso_date.parse("2024-01-01T00:00").is_err());
        assert!(iso_date.parse("2024-01-011").is_err());
    }
}
