//! Exact points on a timeline.

use std::fmt;

use crate::system::sys_time;
use crate::util::split_cycles;


const NANOSECONDS_IN_SECOND: i64 = 1_000_000_000;


/// An **instant** is an exact point on the timeline, irrespective of time
/// zone or calendar format, with nanosecond precision.
///
/// Internally, this is represented by a 64-bit integer of seconds since the
/// Unix epoch, and the nanosecond of that second, which is always kept in
/// the range `0 .. 1_000_000_000`. Ordering is therefore just the ordering
/// of the pair.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    nanoseconds: u32,
}

impl Instant {

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, and zero nanoseconds.
    pub fn at(seconds: i64) -> Self {
        Self { seconds, nanoseconds: 0 }
    }

    /// Creates a new Instant set to the number of seconds since the Unix
    /// epoch, plus a number of nanoseconds. Nanosecond values outside of a
    /// single second carry into the seconds, in either direction.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil::Instant;
    ///
    /// let instant = Instant::at_nanos(10, -1);
    /// assert_eq!(instant.seconds(), 9);
    /// assert_eq!(instant.nanoseconds(), 999_999_999);
    /// ```
    pub fn at_nanos(seconds: i64, nanoseconds: i64) -> Self {
        let (carry, nanoseconds) = split_cycles(nanoseconds, NANOSECONDS_IN_SECOND);
        Self {
            seconds: seconds + carry,
            nanoseconds: nanoseconds as u32,
        }
    }

    /// Creates a new Instant set to the computer’s current time.
    pub fn now() -> Self {
        let (seconds, nanoseconds) = sys_time();
        Self { seconds, nanoseconds }
    }

    /// Creates a new Instant set to the Unix epoch.
    pub fn at_epoch() -> Self {
        Self::at(0)
    }

    /// Returns the number of whole seconds since the Unix epoch.
    pub fn seconds(self) -> i64 {
        self.seconds
    }

    /// Returns the nanosecond of the second.
    pub fn nanoseconds(self) -> u32 {
        self.nanoseconds
    }
}

impl fmt::Debug for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instant({}s/{}ns)", self.seconds, self.nanoseconds)
    }
}


#[cfg(test)]
mod test {
    use super::Instant;

    #[test]
    fn carry_forwards() {
        assert_eq!(Instant::at_nanos(0, 2_500_000_000), Instant::at_nanos(2, 500_000_000));
    }

    #[test]
    fn carry_backwards() {
        let instant = Instant::at_nanos(0, -2_500_000_000);
        assert_eq!(instant.seconds(), -3);
        assert_eq!(instant.nanoseconds(), 500_000_000);
    }

    #[test]
    fn ordering_uses_nanoseconds() {
        assert!(Instant::at_nanos(5, 1) > Instant::at(5));
        assert!(Instant::at_nanos(-1, 999_999_999) < Instant::at_epoch());
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Instant::at_nanos(12, 34)), "Instant(12s/34ns)");
    }
}
