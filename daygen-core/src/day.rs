//! Validation of the day number supplied on the command line.
use std::fmt;

/// Inclusive range of accepted day numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRange {
    pub first: u8,
    pub last: u8,
}

impl DayRange {
    /// Highest day any Advent of Code calendar has had.
    pub const MAX_LAST: u8 = 25;

    pub fn contains(&self, value: i64) -> bool {
        value >= i64::from(self.first) && value <= i64::from(self.last)
    }
}

impl Default for DayRange {
    fn default() -> Self {
        Self {
            first: 1,
            last: Self::MAX_LAST,
        }
    }
}

/// A validated day number. Only obtainable through [`DayNumber::parse`] or
/// [`DayNumber::new`], so it always lies within the range it was checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayNumber(u8);

/// Usage errors. None of them touch the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayError {
    Missing,
    NotANumber { input: String },
    OutOfRange { value: i64, first: u8, last: u8 },
}

impl DayNumber {
    pub fn new(value: u8, range: DayRange) -> Result<Self, DayError> {
        Self::check(i64::from(value), range)
    }

    /// Parses the raw command-line argument.
    ///
    /// `None` means the argument was not given at all. Signs are accepted so that
    /// `-1` is reported as out of range rather than as garbage.
    pub fn parse(input: Option<&str>, range: DayRange) -> Result<Self, DayError> {
        Self::check(Self::parse_value(input)?, range)
    }

    /// First half of [`DayNumber::parse`]: presence and integer syntax only.
    /// Needs no range, so it can run before any configuration is read.
    pub fn parse_value(input: Option<&str>) -> Result<i64, DayError> {
        let raw = input.ok_or(DayError::Missing)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DayError::Missing);
        }
        trimmed.parse().map_err(|_| DayError::NotANumber {
            input: raw.to_string(),
        })
    }

    /// Second half of [`DayNumber::parse`]: the range check.
    pub fn check(value: i64, range: DayRange) -> Result<Self, DayError> {
        if !range.contains(value) {
            return Err(DayError::OutOfRange {
                value,
                first: range.first,
                last: range.last,
            });
        }
        // `contains` bounds the value to u8.
        Ok(Self(value as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for DayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayError::Missing => write!(f, "Please provide a day number: daygen <day>"),
            DayError::NotANumber { input } => write!(f, "'{input}' is not a valid day number"),
            DayError::OutOfRange { first, last, .. } => {
                write!(f, "Day number must be between {first} and {last}")
            }
        }
    }
}

impl std::error::Error for DayError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Result<DayNumber, DayError> {
        DayNumber::parse(Some(input), DayRange::default())
    }

    #[test]
    fn accepts_every_day_in_range() {
        for n in 1..=25u8 {
            assert_eq!(parse(&n.to_string()).unwrap().get(), n);
        }
    }

    #[test]
    fn accepts_leading_zero_and_whitespace() {
        assert_eq!(parse("05").unwrap().get(), 5);
        assert_eq!(parse(" 7 ").unwrap().get(), 7);
    }

    #[test]
    fn rejects_out_of_range() {
        for input in ["0", "26", "-1"] {
            let err = parse(input).unwrap_err();
            assert!(matches!(err, DayError::OutOfRange { .. }), "{input}");
            assert_eq!(err.to_string(), "Day number must be between 1 and 25");
        }
    }

    #[test]
    fn rejects_non_numeric() {
        let err = parse("abc").unwrap_err();
        assert_eq!(
            err,
            DayError::NotANumber {
                input: "abc".to_string()
            }
        );
        assert_eq!(err.to_string(), "'abc' is not a valid day number");
        assert!(matches!(parse("3abc"), Err(DayError::NotANumber { .. })));
        assert!(matches!(parse("2.5"), Err(DayError::NotANumber { .. })));
    }

    #[test]
    fn missing_argument() {
        let err = DayNumber::parse(None, DayRange::default()).unwrap_err();
        assert_eq!(err, DayError::Missing);
        assert!(err.to_string().starts_with("Please provide a day number"));
        assert_eq!(parse("  ").unwrap_err(), DayError::Missing);
    }

    #[test]
    fn respects_shorter_calendars() {
        let range = DayRange { first: 1, last: 12 };
        assert!(DayNumber::parse(Some("12"), range).is_ok());
        let err = DayNumber::parse(Some("13"), range).unwrap_err();
        assert_eq!(err.to_string(), "Day number must be between 1 and 12");
    }

    #[test]
    fn parse_value_does_not_need_a_range() {
        assert_eq!(DayNumber::parse_value(Some("26")), Ok(26));
        assert_eq!(DayNumber::parse_value(Some("-1")), Ok(-1));
        assert_eq!(DayNumber::parse_value(None), Err(DayError::Missing));
        assert!(matches!(
            DayNumber::parse_value(Some("abc")),
            Err(DayError::NotANumber { .. })
        ));
        let range = DayRange { first: 1, last: 12 };
        assert!(DayNumber::check(13, range).is_err());
        assert_eq!(DayNumber::check(12, range).unwrap().get(), 12);
    }

    #[test]
    fn huge_values_do_not_wrap() {
        assert!(matches!(parse("257"), Err(DayError::OutOfRange { .. })));
        assert!(matches!(
            parse("99999999999999999999"),
            Err(DayError::NotANumber { .. })
        ));
    }
}
