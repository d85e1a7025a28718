//! Instants paired with the location they are observed in.

use std::fmt;

use crate::cal::{DatePiece, TimePiece, civil_from_days, days_from_civil, SECONDS_IN_DAY};
use crate::cal::zone::TimeZone;
use crate::instant::Instant;
use crate::util::split_cycles;


/// The calendar and clock fields shown on a wall clock somewhere, before
/// they are pinned to an instant. None of the fields has to be in range.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
pub struct WallClock {
    pub year:       i32,
    pub month:      i32,
    pub day:        i32,
    pub hour:       i32,
    pub minute:     i32,
    pub second:     i32,
    pub nanosecond: i32,
}

impl WallClock {

    /// Counts the seconds since midnight on the 1st January 1970 that this
    /// wall clock would show if it were in UTC, along with the leftover
    /// nanosecond of the second. Every field carries into the next larger
    /// one, whichever direction it is out of range in.
    fn local_seconds(self) -> (i64, i64) {
        let days = days_from_civil(i64::from(self.year), i64::from(self.month), i64::from(self.day));
        self.local_seconds_on(days)
    }

    /// Same as `local_seconds`, but with the date fields already counted
    /// up into days since 1970.
    fn local_seconds_on(self, days: i64) -> (i64, i64) {
        let (carry, nanosecond) = split_cycles(i64::from(self.nanosecond), 1_000_000_000);

        let seconds = days * SECONDS_IN_DAY
            + i64::from(self.hour) * 60 * 60
            + i64::from(self.minute) * 60
            + i64::from(self.second)
            + carry;

        (seconds, nanosecond)
    }

    fn from_local_seconds(seconds: i64, nanosecond: u32) -> Self {
        let (days, seconds) = split_cycles(seconds, SECONDS_IN_DAY);
        let (year, month, day) = civil_from_days(days);

        Self {
            year: year as i32,
            month,
            day,
            hour:       (seconds / 60 / 60) as i32,
            minute:     (seconds / 60 % 60) as i32,
            second:     (seconds % 60) as i32,
            nanosecond: nanosecond as i32,
        }
    }
}


/// An exact instant, along with the time zone it should be observed in.
///
/// This is the one type in the crate that knows how to turn calendar
/// fields into a point on the timeline and back again.
#[derive(PartialEq, Clone)]
pub struct ZonedDateTime {
    instant: Instant,
    time_zone: TimeZone,
}

impl ZonedDateTime {

    /// Pairs an instant with a time zone.
    pub fn new(instant: Instant, time_zone: TimeZone) -> Self {
        Self { instant, time_zone }
    }

    /// Creates a new date-time set to the current time, observed in the
    /// given time zone.
    pub fn now(time_zone: &TimeZone) -> Self {
        Self::new(Instant::now(), time_zone.clone())
    }

    /// Finds the instant at which a wall clock in the given time zone shows
    /// the given fields.
    ///
    /// Out-of-range fields are normalised first: 25 o’clock is 1 o’clock
    /// the next day, the 32nd of January is the 1st of February, and the
    /// 13th month is January of the next year.
    ///
    /// Not every wall-clock time happens exactly once. The offset is first
    /// looked up as though the wall-clock time were a UTC time; if the
    /// instant that offset gives lies outside the timespan it came from,
    /// the offset is looked up again at that instant. A time skipped over
    /// by a transition therefore comes out shifted by the length of the
    /// gap, and a time that happens twice comes out as whichever of the two
    /// the first lookup lands on.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil::{TimeZone, WallClock, ZonedDateTime};
    ///
    /// let wall = WallClock { year: 2014, month: 1, day: 32, hour: 25, ..WallClock::default() };
    /// let zoned = ZonedDateTime::from_wall_clock(wall, &TimeZone::utc());
    ///
    /// let normalised = zoned.wall_clock();
    /// assert_eq!((normalised.month, normalised.day, normalised.hour), (2, 2, 1));
    /// ```
    pub fn from_wall_clock(wall: WallClock, time_zone: &TimeZone) -> Self {
        let (local, nanosecond) = wall.local_seconds();
        Self::resolve_local(local, nanosecond, time_zone)
    }

    fn resolve_local(local: i64, nanosecond: i64, time_zone: &TimeZone) -> Self {
        let guess = time_zone.lookup(local);
        let utc = local - guess.offset;

        let offset = if utc < guess.start || utc >= guess.end {
            time_zone.offset(utc)
        }
        else {
            guess.offset
        };

        Self {
            instant: Instant::at_nanos(local - offset, nanosecond),
            time_zone: time_zone.clone(),
        }
    }

    /// Returns the fields a wall clock in this value’s time zone shows at
    /// its instant. Every field is in range.
    pub fn wall_clock(&self) -> WallClock {
        let seconds = self.instant.seconds();
        WallClock::from_local_seconds(seconds + self.time_zone.offset(seconds), self.instant.nanoseconds())
    }

    /// Returns the same instant, observed in a different time zone.
    pub fn to_zone(&self, time_zone: &TimeZone) -> Self {
        Self::new(self.instant, time_zone.clone())
    }

    /// Adds years, months, and days to the wall-clock fields, keeping the
    /// time of day, and normalises the result the same way
    /// `from_wall_clock` does. Any of the numbers can be negative.
    ///
    /// Adding a month to the 31st of January gives the 3rd of March (or
    /// the 2nd, in a leap year), as February has no 31st.
    ///
    /// The sums are worked out in 64 bits, so the fields never overflow,
    /// but a year past the range of `i32` wraps when it is read back off
    /// the result.
    pub fn add_date(&self, years: i64, months: i64, days: i64) -> Self {
        let wall = self.wall_clock();
        let days = days_from_civil(i64::from(wall.year) + years,
                                   i64::from(wall.month) + months,
                                   i64::from(wall.day) + days);

        let (local, nanosecond) = wall.local_seconds_on(days);
        Self::resolve_local(local, nanosecond, &self.time_zone)
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// Returns the number of whole seconds since the Unix epoch.
    pub fn unix(&self) -> i64 {
        self.instant.seconds()
    }

    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Whether this instant comes before the other one, regardless of
    /// either’s time zone.
    pub fn before(&self, other: &Self) -> bool {
        self.instant < other.instant
    }

    /// Whether this instant comes after the other one, regardless of
    /// either’s time zone.
    pub fn after(&self, other: &Self) -> bool {
        other.before(self)
    }
}

impl DatePiece for ZonedDateTime {
    fn year(&self) -> i32 { self.wall_clock().year }
    fn month(&self) -> i32 { self.wall_clock().month }
    fn day(&self) -> i32 { self.wall_clock().day }
}

impl TimePiece for ZonedDateTime {
    fn hour(&self) -> i32 { self.wall_clock().hour }
    fn minute(&self) -> i32 { self.wall_clock().minute }
    fn second(&self) -> i32 { self.wall_clock().second }
    fn nanosecond(&self) -> i32 { self.wall_clock().nanosecond }
}

impl fmt::Debug for ZonedDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wall = self.wall_clock();
        let offset = self.time_zone.offset(self.unix());
        let sign = if offset < 0 { '-' } else { '+' };

        write!(f, "ZonedDateTime({:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:09}{}{:02}:{:02}",
               wall.year, wall.month, wall.day,
               wall.hour, wall.minute, wall.second, wall.nanosecond,
               sign, offset.abs() / 3600, offset.abs() / 60 % 60)?;

        match self.time_zone.zone_name() {
            Some(name) => write!(f, " {})", name),
            None       => write!(f, ")"),
        }
    }
}
