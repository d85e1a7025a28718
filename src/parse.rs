//! Parsing the fixed-width RFC 3339 forms of dates, times, and datetimes.
//!
//! The grammars are strict: every field has exactly the number of digits
//! shown, only ASCII digits count, and nothing may come before or after.
//! The only optional part is the fraction of a second, which may have
//! anywhere from one to nine digits.

use std::fmt;

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;
use tracing::debug;

use crate::cal::days_in_month;


/// The layout a date is parsed with, as shown in error messages.
pub const DATE_LAYOUT: &str = "YYYY-MM-DD";

/// The layout a time is parsed with, as shown in error messages.
pub const TIME_LAYOUT: &str = "HH:MM:SS[.FFFFFFFFF]";

/// The layout a datetime is parsed with, as shown in error messages.
pub const DATETIME_LAYOUT: &str = "YYYY-MM-DDTHH:MM:SS[.FFFFFFFFF]";

/// Legacy systems write this for a missing date. It parses as the zero
/// date rather than as an error.
const ZERO_DATE: &str = "0000-00-00";

lazy_static! {
    static ref DATE: Regex = Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$"
    ).unwrap();

    static ref TIME: Regex = Regex::new(
        r"^([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{1,9}))?$"
    ).unwrap();

    static ref DATETIME: Regex = Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})T([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{1,9}))?$"
    ).unwrap();

    static ref DATETIME_LOWER: Regex = Regex::new(
        r"^([0-9]{4})-([0-9]{2})-([0-9]{2})t([0-9]{2}):([0-9]{2}):([0-9]{2})(?:\.([0-9]{1,9}))?$"
    ).unwrap();
}


/// Year, month, and day fields, as read from text.
pub(crate) type DateFields = (i32, i32, i32);

/// Hour, minute, second, and nanosecond fields, as read from text.
pub(crate) type TimeFields = (i32, i32, i32, i32);


/// Parses a `YYYY-MM-DD` date. The month must exist, and the day must
/// exist in that month of that year.
pub(crate) fn parse_date(input: &str) -> Result<DateFields, ParseError> {
    if input == ZERO_DATE {
        return Ok((0, 0, 0));
    }

    let caps = DATE.captures(input)
                   .ok_or_else(|| ParseError::new(input, DATE_LAYOUT, ParseErrorKind::Malformed))?;

    date_fields(&caps, 1).map_err(|kind| ParseError::new(input, DATE_LAYOUT, kind))
}

/// Parses an `HH:MM:SS` time, with an optional fraction of a second.
pub(crate) fn parse_time(input: &str) -> Result<TimeFields, ParseError> {
    let caps = TIME.captures(input)
                   .ok_or_else(|| ParseError::new(input, TIME_LAYOUT, ParseErrorKind::Malformed))?;

    time_fields(&caps, 1).map_err(|kind| ParseError::new(input, TIME_LAYOUT, kind))
}

/// Parses a date and a time separated by a `T`. A lowercase `t` is
/// accepted too, but only after the uppercase form has been tried.
pub(crate) fn parse_datetime(input: &str) -> Result<(DateFields, TimeFields), ParseError> {
    datetime_fields(&DATETIME, input).or_else(|error| {
        if input.as_bytes().get(10) == Some(&b't') {
            debug!(input, "parsing datetime with lowercase separator");
            datetime_fields(&DATETIME_LOWER, input)
        }
        else {
            Err(error)
        }
    })
}

fn datetime_fields(regex: &Regex, input: &str) -> Result<(DateFields, TimeFields), ParseError> {
    let caps = regex.captures(input)
                    .ok_or_else(|| ParseError::new(input, DATETIME_LAYOUT, ParseErrorKind::Malformed))?;

    let date = date_fields(&caps, 1).map_err(|kind| ParseError::new(input, DATETIME_LAYOUT, kind))?;
    let time = time_fields(&caps, 4).map_err(|kind| ParseError::new(input, DATETIME_LAYOUT, kind))?;
    Ok((date, time))
}

/// Reads and range-checks the three date groups, starting at the given
/// capture group.
fn date_fields(caps: &Captures<'_>, first: usize) -> Result<DateFields, ParseErrorKind> {
    let year  = number(caps, first);
    let month = number(caps, first + 1);
    let day   = number(caps, first + 2);

    let days_in_month = days_in_month(i64::from(year), month).ok_or(ParseErrorKind::MonthOutOfRange)?;
    if day < 1 || day > days_in_month {
        return Err(ParseErrorKind::DayOutOfRange);
    }

    Ok((year, month, day))
}

/// Reads and range-checks the time groups, starting at the given capture
/// group. The group after the seconds is the optional fraction.
fn time_fields(caps: &Captures<'_>, first: usize) -> Result<TimeFields, ParseErrorKind> {
    let hour   = number(caps, first);
    let minute = number(caps, first + 1);
    let second = number(caps, first + 2);

    if hour >= 24 {
        return Err(ParseErrorKind::HourOutOfRange);
    }
    else if minute >= 60 {
        return Err(ParseErrorKind::MinuteOutOfRange);
    }
    else if second >= 60 {
        return Err(ParseErrorKind::SecondOutOfRange);
    }

    let nanosecond = match caps.get(first + 3) {
        Some(fraction) => fraction_to_nanoseconds(fraction.as_str()),
        None           => 0,
    };

    Ok((hour, minute, second, nanosecond))
}

/// Reads a group the regex has already guaranteed is made of at most nine
/// ASCII digits, which always fits.
fn number(caps: &Captures<'_>, group: usize) -> i32 {
    caps[group].bytes().fold(0, |acc, digit| acc * 10 + i32::from(digit - b'0'))
}

/// Turns the digits after the decimal point into nanoseconds, so `5`
/// becomes half a second and `000000001` becomes one nanosecond.
fn fraction_to_nanoseconds(digits: &str) -> i32 {
    digits.bytes()
          .chain(std::iter::repeat(b'0'))
          .take(9)
          .fold(0, |acc, digit| acc * 10 + i32::from(digit - b'0'))
}


/// An error from parsing text that does not match a layout, or that
/// matches it but names a field that cannot exist.
#[derive(PartialEq, Eq, Debug, Clone, Error)]
#[error("parsing {input:?} as {layout}: {kind}")]
pub struct ParseError {
    input: String,
    layout: &'static str,
    kind: ParseErrorKind,
}

impl ParseError {
    fn new(input: &str, layout: &'static str, kind: ParseErrorKind) -> Self {
        Self { input: input.to_owned(), layout, kind }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The layout the text was expected to follow.
    pub fn layout(&self) -> &'static str {
        self.layout
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}


/// What exactly was wrong with the text.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ParseErrorKind {

    /// The text does not have the shape of the layout.
    Malformed,

    MonthOutOfRange,
    DayOutOfRange,
    HourOutOfRange,
    MinuteOutOfRange,
    SecondOutOfRange,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ParseErrorKind::Malformed         => write!(f, "text does not match the layout"),
            ParseErrorKind::MonthOutOfRange   => write!(f, "month out of range"),
            ParseErrorKind::DayOutOfRange     => write!(f, "day out of range"),
            ParseErrorKind::HourOutOfRange    => write!(f, "hour out of range"),
            ParseErrorKind::MinuteOutOfRange  => write!(f, "minute out of range"),
            ParseErrorKind::SecondOutOfRange  => write!(f, "second out of range"),
        }
    }
}
