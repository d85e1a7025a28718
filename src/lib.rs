#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]

#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_results)]

//! Dates, times of day, and date-times that are not tied to any time
//! zone, for the values people write on calendars and set alarms for.
//!
//! A civil value only becomes an exact point in time once it is given a
//! [`TimeZone`](zone::TimeZone), and the conversion is done by
//! [`ZonedDateTime`](zoned::ZonedDateTime). Validity checks and
//! arithmetic all go through that conversion in UTC.
//!
//! # Examples
//!
//! ```
//! use civil::{CalendarDate, CalendarDateTime, ClockTime, TimeZone};
//!
//! let date = CalendarDate::parse("2015-06-26").unwrap();
//! assert_eq!(date.add_days(5).to_string(), "2015-07-01");
//!
//! let time: ClockTime = "04:05:06.5".parse().unwrap();
//! let datetime = CalendarDateTime::new(date, time);
//! assert_eq!(datetime.in_zone(&TimeZone::utc()).unix(), 1435291506);
//! ```

pub mod cal;
pub use cal::{DatePiece, TimePiece};
pub use cal::date::CalendarDate;
pub use cal::datetime::CalendarDateTime;
pub use cal::time::ClockTime;
pub use cal::zone;
pub use cal::zone::TimeZone;
pub use cal::zoned;
pub use cal::zoned::{WallClock, ZonedDateTime};

pub mod convenience;

#[cfg(feature = "sql")]
pub mod driver;

mod error;
pub use error::{Error, Result};

mod instant;
pub use instant::Instant;

#[cfg(feature = "json")]
mod json;

pub mod parse;
pub use parse::{ParseError, ParseErrorKind};

mod system;
mod util;
