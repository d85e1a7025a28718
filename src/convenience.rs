//! Adds convenience functions that read the system clock.
//!
//! # Example
//! ```
//! use civil::{CalendarDate, TimeZone};
//! use civil::convenience::Today;
//!
//! let today = CalendarDate::today(&TimeZone::utc());
//! assert!(today.is_valid());
//! ```

use crate::cal::date::CalendarDate;
use crate::cal::datetime::CalendarDateTime;
use crate::cal::time::ClockTime;
use crate::cal::zone::TimeZone;
use crate::cal::zoned::ZonedDateTime;


/// Adds `CalendarDate::today(&zone) -> CalendarDate`
pub trait Today {
    fn today(time_zone: &TimeZone) -> Self;
}

impl Today for CalendarDate {
    fn today(time_zone: &TimeZone) -> Self {
        Self::of(&ZonedDateTime::now(time_zone))
    }
}

/// Adds `ClockTime::now(&zone)` and `CalendarDateTime::now(&zone)`
pub trait Now {
    fn now(time_zone: &TimeZone) -> Self;
}

impl Now for ClockTime {
    fn now(time_zone: &TimeZone) -> Self {
        Self::of(&ZonedDateTime::now(time_zone))
    }
}

impl Now for CalendarDateTime {
    fn now(time_zone: &TimeZone) -> Self {
        Self::of(&ZonedDateTime::now(time_zone))
    }
}
