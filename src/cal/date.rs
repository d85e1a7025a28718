//! Dates with no time of day and no time zone.

use std::fmt;
use std::str::FromStr;

use crate::cal::{DatePiece, SECONDS_IN_DAY};
use crate::cal::zone::TimeZone;
use crate::cal::zoned::{WallClock, ZonedDateTime};
use crate::parse::{parse_date, ParseError};


/// A **calendar date** is a day on the Gregorian calendar, such as a
/// birthday, with no time of day and no time zone attached.
///
/// None of the fields are checked when a date is built, so a date can
/// hold a 13th month or a 31st of February. Use `is_valid` to find out
/// whether it names a day that exists.
///
/// Dates are ordered field by field: first the year, then the month,
/// then the day.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct CalendarDate {

    /// The year, in absolute terms, so 2014 is 2014.
    pub year: i32,

    /// The month of the year, with January as 1.
    pub month: i32,

    /// The day of the month, starting at 1.
    pub day: i32,
}

impl CalendarDate {

    /// Creates a date from its three fields, which are not checked.
    pub fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Returns the date on which the given point in time falls, as seen
    /// from wherever that point in time is observed.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil::{CalendarDate, Instant, TimeZone, ZonedDateTime};
    ///
    /// let tokyo = TimeZone::fixed("JST", 9 * 60 * 60).unwrap();
    /// let zoned = ZonedDateTime::new(Instant::at(1395442800), tokyo);
    /// assert_eq!(CalendarDate::of(&zoned), CalendarDate::new(2014, 3, 22));
    /// ```
    pub fn of<T: DatePiece + ?Sized>(piece: &T) -> Self {
        Self {
            year: piece.year(),
            month: piece.month(),
            day: piece.day(),
        }
    }

    /// Parses a date written as `YYYY-MM-DD`.
    ///
    /// The text `0000-00-00` is read as the zero date, with every field
    /// set to 0, rather than as an error.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let (year, month, day) = parse_date(input)?;
        Ok(Self { year, month, day })
    }

    /// Whether this date names a day that exists.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil::CalendarDate;
    ///
    /// assert!(CalendarDate::new(2024, 2, 29).is_valid());
    /// assert!(!CalendarDate::new(2023, 2, 29).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        Self::of(&self.in_utc()) == *self
    }

    /// Returns the first instant of this date in the given time zone.
    ///
    /// Fields out of range roll over into later (or earlier) months and
    /// years. If midnight never happened on this date in that zone, the
    /// result is the same instant `ZonedDateTime::from_wall_clock` gives
    /// for it, which may fall on the previous day.
    pub fn in_zone(&self, time_zone: &TimeZone) -> ZonedDateTime {
        let wall = WallClock {
            year: self.year,
            month: self.month,
            day: self.day,
            ..WallClock::default()
        };

        ZonedDateTime::from_wall_clock(wall, time_zone)
    }

    /// Returns the date that is `days` days after this one, or before it
    /// if `days` is negative.
    pub fn add_days(&self, days: i64) -> Self {
        Self::of(&self.in_utc().add_date(0, 0, days))
    }

    /// Returns the date that is `months` months after this one. A day
    /// that does not exist in the new month rolls over into the next.
    pub fn add_months(&self, months: i64) -> Self {
        Self::of(&self.in_utc().add_date(0, months, 0))
    }

    pub fn add_years(&self, years: i64) -> Self {
        Self::of(&self.in_utc().add_date(years, 0, 0))
    }

    /// Returns the number of days from the given date to this one, not
    /// counting this one. This undoes `add_days`:
    /// `start.add_days(end.days_since(start)) == end`.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil::CalendarDate;
    ///
    /// let new_year = CalendarDate::new(1970, 1, 1);
    /// assert_eq!(new_year.days_since(CalendarDate::new(1969, 12, 30)), 2);
    /// assert_eq!(new_year.days_since(new_year), 0);
    /// ```
    pub fn days_since(&self, start: Self) -> i64 {
        (self.in_utc().unix() - start.in_utc().unix()) / SECONDS_IN_DAY
    }

    /// Whether this date comes before the other, comparing the year, then
    /// the month, then the day. Neither date has to be valid.
    pub fn before(&self, other: Self) -> bool {
        *self < other
    }

    pub fn after(&self, other: Self) -> bool {
        other.before(*self)
    }

    fn in_utc(&self) -> ZonedDateTime {
        self.in_zone(&TimeZone::utc())
    }
}

impl DatePiece for CalendarDate {
    fn year(&self) -> i32 { self.year }
    fn month(&self) -> i32 { self.month }
    fn day(&self) -> i32 { self.day }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({})", self)
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}
