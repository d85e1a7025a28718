//! Dates paired with times of day, still with no time zone.

use std::fmt;
use std::str::FromStr;

use crate::cal::{DatePiece, TimePiece};
use crate::cal::date::CalendarDate;
use crate::cal::time::ClockTime;
use crate::cal::zone::TimeZone;
use crate::cal::zoned::{WallClock, ZonedDateTime};
use crate::parse::{parse_datetime, ParseError};


/// A **calendar date-time** is a date and a time of day, such as when a
/// meeting starts, with no time zone attached.
///
/// This only holds a date and a time; it does not act as either. Adding
/// days or counting the days between two date-times would have to answer
/// what happens to the time of day across a transition, so neither
/// exists here. Reach for the `date` field, or pin the value to a zone.
///
/// There is no `Ord` implementation, as `before` and `after` compare the
/// instants the two values name in UTC rather than their fields.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct CalendarDateTime {
    pub date: CalendarDate,
    pub time: ClockTime,
}

impl CalendarDateTime {

    pub fn new(date: CalendarDate, time: ClockTime) -> Self {
        Self { date, time }
    }

    /// Returns the date and time of day shown at the given point in time,
    /// as seen from wherever that point in time is observed.
    pub fn of<T: DatePiece + TimePiece + ?Sized>(piece: &T) -> Self {
        Self {
            date: CalendarDate::of(piece),
            time: ClockTime::of(piece),
        }
    }

    /// Parses a date-time written as `YYYY-MM-DDTHH:MM:SS`, with optional
    /// fractional seconds. The separator may be a lowercase `t`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil::{CalendarDate, CalendarDateTime, ClockTime};
    ///
    /// let datetime = CalendarDateTime::parse("2014-03-21t09:05:00.5").unwrap();
    /// assert_eq!(datetime.date, CalendarDate::new(2014, 3, 21));
    /// assert_eq!(datetime.time, ClockTime::new(9, 5, 0, 500_000_000));
    /// assert_eq!(datetime.to_string(), "2014-03-21T09:05:00.500000000");
    /// ```
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let ((year, month, day), (hour, minute, second, nanosecond)) = parse_datetime(input)?;

        Ok(Self {
            date: CalendarDate { year, month, day },
            time: ClockTime { hour, minute, second, nanosecond },
        })
    }

    /// Whether both the date and the time of day exist.
    pub fn is_valid(&self) -> bool {
        self.date.is_valid() && self.time.is_valid()
    }

    /// Returns the instant at which a clock in the given time zone shows
    /// this date and time, with every field allowed to roll over into the
    /// next. A time skipped over by a transition, or repeated by one,
    /// resolves the way `ZonedDateTime::from_wall_clock` resolves it.
    pub fn in_zone(&self, time_zone: &TimeZone) -> ZonedDateTime {
        let wall = WallClock {
            year: self.date.year,
            month: self.date.month,
            day: self.date.day,
            hour: self.time.hour,
            minute: self.time.minute,
            second: self.time.second,
            nanosecond: self.time.nanosecond,
        };

        ZonedDateTime::from_wall_clock(wall, time_zone)
    }

    /// Whether this date-time comes before the other, comparing the
    /// instants both would be in UTC. Out-of-range fields are rolled over
    /// first, so the 0th of February comes after noon on the 30th of
    /// January.
    pub fn before(&self, other: &Self) -> bool {
        let utc = TimeZone::utc();
        self.in_zone(&utc).before(&other.in_zone(&utc))
    }

    pub fn after(&self, other: &Self) -> bool {
        other.before(self)
    }
}

impl fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

impl fmt::Debug for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDateTime({})", self)
    }
}

impl FromStr for CalendarDateTime {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::instant::Instant;

    fn datetime(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> CalendarDateTime {
        CalendarDateTime::new(CalendarDate::new(year, month, day), ClockTime::new(hour, minute, 0, 0))
    }

    #[test]
    fn display() {
        assert_eq!(datetime(2014, 3, 21, 9, 5).to_string(), "2014-03-21T09:05:00");
        assert_eq!(format!("{:?}", datetime(2014, 3, 21, 9, 5)), "CalendarDateTime(2014-03-21T09:05:00)");
    }

    #[test]
    fn lowercase_comes_out_uppercase() {
        let parsed = CalendarDateTime::parse("2014-03-21t09:05:00").unwrap();
        assert_eq!(parsed, datetime(2014, 3, 21, 9, 5));
        assert_eq!(parsed.to_string(), "2014-03-21T09:05:00");
    }

    #[test]
    fn of_zoned() {
        let zone = TimeZone::fixed("-05:00", -5 * 3600).unwrap();
        let zoned = ZonedDateTime::new(Instant::at(1395392700), zone);
        assert_eq!(CalendarDateTime::of(&zoned), datetime(2014, 3, 21, 4, 5));
    }

    #[test]
    fn in_zone() {
        let zone = TimeZone::fixed("+01:00", 3600).unwrap();
        assert_eq!(datetime(2014, 3, 21, 10, 5).in_zone(&zone).unix(), 1395392700);
    }

    #[test]
    fn validity_needs_both_halves() {
        assert!(datetime(2014, 3, 21, 9, 5).is_valid());
        assert!(!datetime(2014, 2, 30, 9, 5).is_valid());
        assert!(!datetime(2014, 3, 21, 24, 5).is_valid());
    }

    #[test]
    fn ordering_is_by_instant() {
        let zeroth = datetime(2014, 2, 0, 12, 0);
        let earlier = datetime(2014, 1, 31, 18, 0);

        // Field by field, the 0th of February is later. As an instant, it
        // is midday on the 31st of January, six hours earlier.
        assert!(zeroth.date.after(earlier.date));
        assert!(zeroth.before(&earlier));
        assert!(earlier.after(&zeroth));
    }

    #[test]
    fn equal_instants() {
        let a = datetime(2014, 3, 21, 24, 0);
        let b = datetime(2014, 3, 22, 0, 0);
        assert!(!a.before(&b));
        assert!(!a.after(&b));
        assert_ne!(a, b);
    }
}
