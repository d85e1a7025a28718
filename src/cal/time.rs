//! Times of day with no date and no time zone.

use std::fmt;
use std::str::FromStr;

use crate::cal::TimePiece;
use crate::cal::zone::TimeZone;
use crate::cal::zoned::{WallClock, ZonedDateTime};
use crate::parse::{parse_time, ParseError};


/// A **clock time** is a time of day, such as an alarm, with no date and
/// no time zone attached.
///
/// As with dates, the fields are not checked when a time is built.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct ClockTime {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub nanosecond: i32,
}

impl ClockTime {

    /// Creates a time from its four fields, which are not checked.
    pub fn new(hour: i32, minute: i32, second: i32, nanosecond: i32) -> Self {
        Self { hour, minute, second, nanosecond }
    }

    /// Returns the time of day shown at the given point in time, as seen
    /// from wherever that point in time is observed. The date is thrown
    /// away.
    pub fn of<T: TimePiece + ?Sized>(piece: &T) -> Self {
        Self {
            hour: piece.hour(),
            minute: piece.minute(),
            second: piece.second(),
            nanosecond: piece.nanosecond(),
        }
    }

    /// Parses a time written as `HH:MM:SS`, optionally followed by a
    /// decimal point and between one and nine digits of fractional
    /// seconds.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil::ClockTime;
    ///
    /// let time = ClockTime::parse("09:05:00.25").unwrap();
    /// assert_eq!(time, ClockTime::new(9, 5, 0, 250_000_000));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let (hour, minute, second, nanosecond) = parse_time(input)?;
        Ok(Self { hour, minute, second, nanosecond })
    }

    /// Whether this time of day exists: the hour is from 0 to 23, and the
    /// other fields are similarly in range. It is checked by putting the
    /// time on an unremarkable day in UTC and seeing whether it comes back
    /// out unchanged.
    pub fn is_valid(&self) -> bool {
        let wall = WallClock {
            year: 2,
            month: 2,
            day: 2,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
            nanosecond: self.nanosecond,
        };

        Self::of(&ZonedDateTime::from_wall_clock(wall, &TimeZone::utc())) == *self
    }
}

impl TimePiece for ClockTime {
    fn hour(&self) -> i32 { self.hour }
    fn minute(&self) -> i32 { self.minute }
    fn second(&self) -> i32 { self.second }
    fn nanosecond(&self) -> i32 { self.nanosecond }
}

/// Writes `HH:MM:SS`, with nine digits of fractional seconds after it
/// unless the nanosecond is zero.
impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;

        if self.nanosecond != 0 {
            write!(f, ".{:09}", self.nanosecond)?;
        }

        Ok(())
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({})", self)
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ClockTime::new(0, 0, 0, 0).to_string(), "00:00:00");
        assert_eq!(ClockTime::new(9, 5, 0, 500_000_000).to_string(), "09:05:00.500000000");
        assert_eq!(ClockTime::new(23, 59, 59, 999_999_999).to_string(), "23:59:59.999999999");
        assert_eq!(ClockTime::new(25, 61, 0, 0).to_string(), "25:61:00");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", ClockTime::new(9, 5, 0, 1)), "ClockTime(09:05:00.000000001)");
    }

    #[test]
    fn validity() {
        assert!(ClockTime::new(0, 0, 0, 0).is_valid());
        assert!(ClockTime::new(23, 59, 59, 999_999_999).is_valid());
        assert!(!ClockTime::new(24, 0, 0, 0).is_valid());
        assert!(!ClockTime::new(12, 60, 0, 0).is_valid());
        assert!(!ClockTime::new(12, 0, 60, 0).is_valid());
        assert!(!ClockTime::new(12, 0, 0, 1_000_000_000).is_valid());
        assert!(!ClockTime::new(-1, 0, 0, 0).is_valid());
    }

    #[test]
    fn parse() {
        assert_eq!("23:59:59".parse::<ClockTime>(), Ok(ClockTime::new(23, 59, 59, 0)));
        assert!(ClockTime::parse("23:59").is_err());
    }
}
