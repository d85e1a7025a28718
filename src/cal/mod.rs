//! Gregorian calendar calculations, which use years, months, days, hours,
//! minutes, and seconds, plus the traits for reading those fields off a
//! point in time.
//!
//! This is the only place in the crate that knows how long a month is.
//! Everything else, including the validity checks on the civil types,
//! goes through an instant and back.

pub mod date;
pub mod datetime;
pub mod time;
pub mod zone;
pub mod zoned;

use crate::util::split_cycles;


/// The **date piece** trait is used for values that have date components
/// of years, months, and days, as observed in some location.
pub trait DatePiece {

    /// The year, in absolute terms.
    /// This is in human-readable format, so the year 2014 actually has a
    /// year value of 2014, rather than 14 or 114 or anything like that.
    fn year(&self) -> i32;

    /// The month of the year, with January as 1.
    fn month(&self) -> i32;

    /// The day of the month, from 1 to 31.
    fn day(&self) -> i32;
}


/// The **time piece** trait is used for values that have time components
/// of hours, minutes, seconds, and nanoseconds.
pub trait TimePiece {

    /// The hour of the day, from 0 to 23.
    fn hour(&self) -> i32;

    /// The minute of the hour.
    fn minute(&self) -> i32;

    /// The second of the minute. Leap seconds do not exist here.
    fn second(&self) -> i32;

    /// The nanosecond of the second.
    fn nanosecond(&self) -> i32;
}


/// Number of days guaranteed to be in four years.
const DAYS_IN_4Y:   i64 = 365 *   4 +  1;

/// Number of days guaranteed to be in a hundred years.
const DAYS_IN_100Y: i64 = 365 * 100 + 24;

/// Number of days guaranteed to be in four hundred years.
const DAYS_IN_400Y: i64 = 365 * 400 + 97;

/// Number of seconds in a day. As everywhere in this library, leap seconds
/// are simply ignored.
pub(crate) const SECONDS_IN_DAY: i64 = 86400;

/// Number of days between **1st January, 1970** and **1st March, 2000**.
///
/// Having the reference point immediately after a possible leap day, at
/// the start of a 400-year cycle, means the leap day always falls at the
/// very *end* of each 4-, 100-, and 400-year cycle, and working out a date
/// from a day count is reduced to a series of divisions.
const EPOCH_DIFFERENCE: i64 = 30 * 365   // 30 years between 2000 and 1970...
                            + 7          // plus seven days for leap years...
                            + 31 + 29;   // plus all the days in January and February in 2000.

/// Number of days between 1st January 1970 and 1st January 2000.
const DAYS_1970_TO_2000: i64 = 10957;

/// The number of days elapsed at the end of each month, counting from the
/// start of March and going backwards, ignoring February.
const TIME_TRIANGLE: &[i64; 11] =
    &[31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31 + 31,  // January
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30 + 31,  // December
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31 + 30,  // November
      31 + 30 + 31 + 30 + 31 + 31 + 30 + 31,  // October
      31 + 30 + 31 + 30 + 31 + 31 + 30,  // September
      31 + 30 + 31 + 30 + 31 + 31,  // August
      31 + 30 + 31 + 30 + 31,  // July
      31 + 30 + 31 + 30,  // June
      31 + 30 + 31,  // May
      31 + 30,  // April
      31]; // March

/// Days elapsed in a non-leap year before each month begins.
const DAYS_BEFORE_MONTH: [i64; 12] = [
      0,  31,  59,
     90, 120, 151,
    181, 212, 243,
    273, 304, 334,
];


/// Returns whether the given year is a leap year in the proleptic
/// Gregorian calendar.
///
/// ### Examples
///
/// ```
/// use civil::cal::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2024));
/// ```
pub fn is_leap_year(year: i64) -> bool {
    leap_year_calculations(year).1
}

/// Returns the number of days in the given month (January is 1) of the
/// given year, or `None` if the month is not between 1 and 12.
pub fn days_in_month(year: i64, month: i32) -> Option<i32> {
    Some(match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12  => 31,
        4 | 6 | 9 | 11               => 30,
        2 if is_leap_year(year)      => 29,
        2                            => 28,
        _                            => return None,
    })
}

/// Performs two related calculations for leap years, returning the
/// results as a two-part tuple:
///
/// 1. The number of leap years that have elapsed between the year 2000
///    and this year, less one (the leap day of 2000 itself is counted
///    separately, as “this year’s” leap day);
/// 2. Whether this year is a leap year or not.
fn leap_year_calculations(year: i64) -> (i64, bool) {
    let year = year - 2000;

    let (num_400y_cycles, mut remainder) = split_cycles(year, 400);

    // Standard leap-year calculations, performed on the remainder
    let currently_leap_year = remainder == 0 || (remainder % 100 != 0 && remainder % 4 == 0);

    let num_100y_cycles = remainder / 100;
    remainder -= num_100y_cycles * 100;

    let leap_years_elapsed = remainder / 4
        + 97 * num_400y_cycles  // There are 97 leap years in 400 years
        + 24 * num_100y_cycles  // There are 24 leap years in 100 years
        - if currently_leap_year { 1 } else { 0 };

    (leap_years_elapsed, currently_leap_year)
}

/// Calculates the number of days between the 1st January 1970 and the
/// given date.
///
/// No field has to be in range: months outside of 1 to 12 carry into the
/// year, and then days outside of the month carry into the following or
/// preceding months. This makes the 32nd of January the 1st of February,
/// and the 0th of March the last day of February.
pub(crate) fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let (year_carry, month_index) = split_cycles(month - 1, 12);
    let year = year + year_carry;

    let (leap_days_elapsed, is_leap_year) = leap_year_calculations(year);

    (year - 2000) * 365

        // Plus the days between 1970 and 2000...
        + DAYS_1970_TO_2000

        // Plus the leap days between 2000 and the start of this year, which
        // leaves out the leap day of 2000 itself...
        + leap_days_elapsed + 1

        // Plus the days in every month leading up to this one...
        + DAYS_BEFORE_MONTH[month_index as usize]

        // Plus this year’s leap day, if it’s already gone by...
        + if is_leap_year && month_index >= 2 { 1 } else { 0 }

        // Plus the days in this month so far, which are 1-indexed.
        + (day - 1)
}

/// Computes the year, month, and day that falls the given number of days
/// after the 1st January 1970 (or before it, if negative).
pub(crate) fn civil_from_days(days_since_1970: i64) -> (i64, i32, i32) {
    let days = days_since_1970 - EPOCH_DIFFERENCE;

    // The Gregorian calendar works in 400-year cycles, which repeat
    // themselves ever after. Find the numbers of 400-year, 100-year, and
    // 4-year cycles, continually reducing the number of days left over.
    let (num_400y_cycles, mut remainder) = split_cycles(days, DAYS_IN_400Y);

    // The very last day of a 400-year cycle is a leap day, which would
    // otherwise spill over into a fifth 100-year cycle.
    let num_100y_cycles = std::cmp::min(remainder / DAYS_IN_100Y, 3);
    remainder -= num_100y_cycles * DAYS_IN_100Y;

    let num_4y_cycles = remainder / DAYS_IN_4Y;
    remainder -= num_4y_cycles * DAYS_IN_4Y;

    // Same again for the leap day at the end of a 4-year cycle.
    let mut years = std::cmp::min(remainder / 365, 3);
    remainder -= years * 365;  // remainder is now days since the 1st of March

    years +=   4 * num_4y_cycles
           + 100 * num_100y_cycles
           + 400 * num_400y_cycles;

    // Find the month that has the right number of days elapsed at the end
    // of it. It’s “11 - index” because the triangle goes backwards, and no
    // match at all means it’s still March.
    let (month_from_march, month_days) = match TIME_TRIANGLE.iter().enumerate().find(|&(_, days)| *days <= remainder) {
        Some((index, days))  => (11 - index as i64, remainder - *days),
        None                 => (0, remainder),
    };

    // Months here are counted from March, so January and February belong
    // to the following year.
    let mut month_index = month_from_march + 2;
    if month_index >= 12 {
        years += 1;
        month_index -= 12;
    }

    (years + 2000, (month_index + 1) as i32, (month_days + 1) as i32)
}
