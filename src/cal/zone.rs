//! Locations, and the offsets from UTC in effect at them.

use std::borrow::Cow;
use std::sync::Arc;

use crate::error::Error;
use crate::util::RangeExt;


/// A **time zone**, which here is a list of timespans, each containing a
/// fixed offset for the current location’s time from UTC.
///
/// Time zones are cheap to clone: runtime-built zones share their
/// timespans behind an `Arc`.
#[derive(PartialEq, Debug, Clone)]
pub struct TimeZone(pub TimeZoneSource<'static>);

#[derive(PartialEq, Debug, Clone)]
pub enum TimeZoneSource<'a> {
    Static(&'a StaticTimeZone<'a>),
    Runtime(Arc<runtime::OwnedTimeZone>),
}

#[derive(PartialEq, Debug)]
pub struct StaticTimeZone<'a> {

    /// This zone’s name, such as “America/New_York”.
    pub name: &'a str,

    /// The set of timespans used in this time zone.
    pub fixed_timespans: FixedTimespanSet<'a>,
}


/// A set of timespans, separated by the instants at which the timespans
/// change over. There will always be one more timespan than transitions.
#[derive(PartialEq, Debug, Clone)]
pub struct FixedTimespanSet<'a> {

    /// The first timespan, which is assumed to have been in effect up until
    /// the initial transition instant (if any).
    pub first: FixedTimespan<'a>,

    /// The rest of the timespans, as a slice of tuples, each containing:
    ///
    /// 1. A transition instant, stored as a Unix timestamp, at which the
    ///    previous timespan ends and this one begins;
    /// 2. The actual timespan to transition into.
    ///
    /// These must be sorted by their transition instants.
    pub rest: &'a [ (i64, FixedTimespan<'a>) ],
}

/// An individual timespan with a fixed offset.
#[derive(PartialEq, Debug, Clone)]
pub struct FixedTimespan<'a> {

    /// The *total* offset in effect during this timespan, in seconds east
    /// of UTC. This is the sum of the zone’s standard offset, and any extra
    /// daylight-saving offset.
    pub offset: i64,

    /// Whether there was any daylight-saving offset in effect during this
    /// timespan.
    pub is_dst: bool,

    /// The abbreviation in use during this timespan, such as “GMT” or
    /// “PDT”. Abbreviations are notoriously vague, and should only be used
    /// for referring to a known timezone.
    pub name: Cow<'a, str>,
}


/// The timespan in effect at a particular instant, along with the
/// instants at which it begins and ends.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Lookup {

    /// The offset from UTC, in seconds.
    pub offset: i64,

    /// The Unix timestamp at which this timespan starts (inclusive), or
    /// `i64::MIN` for a zone’s first timespan.
    pub start: i64,

    /// The Unix timestamp at which this timespan ends (exclusive), or
    /// `i64::MAX` for a zone’s last timespan.
    pub end: i64,
}


static UTC: StaticTimeZone<'static> = StaticTimeZone {
    name: "UTC",
    fixed_timespans: FixedTimespanSet {
        first: FixedTimespan {
            offset: 0,
            is_dst: false,
            name: Cow::Borrowed("UTC"),
        },
        rest: &[],
    },
};


impl TimeZone {

    /// Returns **Coordinated Universal Time**, which never undergoes any
    /// transitions. This is the reference location for every calculation
    /// in this crate that needs one.
    pub fn utc() -> Self {
        TimeZone(TimeZoneSource::Static(&UTC))
    }

    /// Creates a time zone that is always the given number of seconds east
    /// of UTC.
    ///
    /// Returns an error if the offset is a whole day or more in either
    /// direction.
    pub fn fixed(name: impl Into<String>, offset: i64) -> Result<Self, Error> {
        if !offset.is_within(-86399 .. 86400) {
            return Err(Error::OffsetOutOfRange(offset));
        }

        let name = name.into();
        let timespan = FixedTimespan {
            offset,
            is_dst: false,
            name: Cow::Owned(name.clone()),
        };

        Ok(Self::with_transitions(name, timespan, Vec::new()))
    }

    /// Creates a time zone from its first timespan, and a list of later
    /// timespans paired with the Unix timestamps at which they begin.
    /// The list does not need to be in order.
    pub fn with_transitions(name: impl Into<String>, first: FixedTimespan<'static>, mut rest: Vec<(i64, FixedTimespan<'static>)>) -> Self {
        rest.sort_by_key(|transition| transition.0);

        TimeZone(TimeZoneSource::Runtime(Arc::new(runtime::OwnedTimeZone {
            name: Some(name.into()),
            fixed_timespans: runtime::OwnedFixedTimespanSet { first, rest },
        })))
    }

    pub fn zone_name(&self) -> Option<&str> {
        match self.0 {
            TimeZoneSource::Static(tz)       => Some(tz.name),
            TimeZoneSource::Runtime(ref arc) => arc.name.as_deref(),
        }
    }

    /// Whether this time zone is “fixed”: a fixed time zone has no
    /// transitions, meaning it will always be at the same offset from UTC.
    pub fn is_fixed(&self) -> bool {
        self.timespans().1.is_empty()
    }

    /// Returns the total offset from UTC, in seconds, that this time zone
    /// has at the given Unix timestamp.
    pub fn offset(&self, unix: i64) -> i64 {
        self.lookup(unix).offset
    }

    /// Returns the time zone abbreviation in use at the given Unix
    /// timestamp.
    pub fn abbreviation(&self, unix: i64) -> &str {
        let (first, rest) = self.timespans();
        match Self::position(rest, unix) {
            0 => first.name.as_ref(),
            n => rest[n - 1].1.name.as_ref(),
        }
    }

    /// Finds the timespan in effect at the given Unix timestamp. A
    /// timespan starts exactly at its transition instant.
    pub fn lookup(&self, unix: i64) -> Lookup {
        let (first, rest) = self.timespans();
        let position = Self::position(rest, unix);

        let (start, current) = match position {
            0 => (i64::MIN, first),
            n => (rest[n - 1].0, &rest[n - 1].1),
        };

        Lookup {
            offset: current.offset,
            start,
            end: rest.get(position).map_or(i64::MAX, |next| next.0),
        }
    }

    /// The number of transitions that have happened by the given time.
    fn position(rest: &[(i64, FixedTimespan<'static>)], unix: i64) -> usize {
        rest.partition_point(|transition| transition.0 <= unix)
    }

    fn timespans(&self) -> (&FixedTimespan<'static>, &[(i64, FixedTimespan<'static>)]) {
        match self.0 {
            TimeZoneSource::Static(tz)       => (&tz.fixed_timespans.first, tz.fixed_timespans.rest),
            TimeZoneSource::Runtime(ref arc) => (&arc.fixed_timespans.first, &arc.fixed_timespans.rest),
        }
    }
}


pub mod runtime {
    use super::FixedTimespan;

    #[derive(PartialEq, Debug)]
    pub struct OwnedTimeZone {
        pub name: Option<String>,
        pub fixed_timespans: OwnedFixedTimespanSet,
    }

    #[derive(PartialEq, Debug)]
    pub struct OwnedFixedTimespanSet {
        pub first: FixedTimespan<'static>,
        pub rest: Vec<(i64, FixedTimespan<'static>)>,
    }
}
