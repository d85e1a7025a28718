//! Misc stuff.

use std::ops::Range;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given half-open range.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

// Only ever used on the integer field types, but anything comparable
// gets it for free.
impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        range.contains(self)
    }
}


/// Splits a number of periods into a number of whole cycles and the
/// periods left over, which are always non-negative. This is floored
/// division, so `-1` seconds is the last second of the previous day
/// rather than “minus one seconds into today”.
pub(crate) fn split_cycles(number_of_periods: i64, cycle_length: i64) -> (i64, i64) {
    let mut cycles    = number_of_periods / cycle_length;
    let mut remainder = number_of_periods % cycle_length;

    if remainder < 0 {
        remainder += cycle_length;
        cycles    -= 1;
    }

    (cycles, remainder)
}
