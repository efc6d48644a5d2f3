use std::fmt;

/// A `YYYY-MM-DD` date exactly as written.
///
/// Fields are not checked against a calendar, so `2024-02-30` is a value of
/// this type. Ordering is by year, then month, then day, which matches the
/// ordering of the zero-padded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    #[must_use]
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl From<time::Date> for IsoDate {
    fn from(date: time::Date) -> Self {
        Self::new(date.year(), u8::from(date.month()), date.day())
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
