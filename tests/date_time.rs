use civil::{CalendarDate, CalendarDateTime, ClockTime, Instant, ParseErrorKind, TimeZone, ZonedDateTime};


fn datetime(year: i32, month: i32, day: i32, hour: i32, minute: i32, second: i32) -> CalendarDateTime {
    CalendarDateTime::new(CalendarDate::new(year, month, day), ClockTime::new(hour, minute, second, 0))
}


#[test]
fn parse_and_display() {
    let parsed = CalendarDateTime::parse("2014-03-21T09:05:00.5").unwrap();
    assert_eq!(parsed.date, CalendarDate::new(2014, 3, 21));
    assert_eq!(parsed.time, ClockTime::new(9, 5, 0, 500_000_000));
    assert_eq!(parsed.to_string(), "2014-03-21T09:05:00.500000000");
}

#[test]
fn either_case_separator() {
    let upper: CalendarDateTime = "2014-03-21T09:05:00".parse().unwrap();
    let lower: CalendarDateTime = "2014-03-21t09:05:00".parse().unwrap();
    assert_eq!(upper, lower);
    assert_eq!(lower.to_string(), "2014-03-21T09:05:00");
}

#[test]
fn parse_errors() {
    let cases = [
        ("2014-03-21 09:05:00",       ParseErrorKind::Malformed),
        ("2014-03-21",                ParseErrorKind::Malformed),
        ("2014-03-21T09:05:00Z",      ParseErrorKind::Malformed),
        ("2014-03-21x09:05:00",       ParseErrorKind::Malformed),
        ("2014-04-31T09:05:00",       ParseErrorKind::DayOutOfRange),
        ("2014-04-30t09:60:00",       ParseErrorKind::MinuteOutOfRange),
    ];

    for &(input, kind) in &cases {
        let error = CalendarDateTime::parse(input).unwrap_err();
        assert_eq!(error.kind(), kind, "{}", input);
        assert_eq!(error.input(), input);
    }
}

#[test]
fn validity() {
    assert!(datetime(2024, 2, 29, 23, 59, 59).is_valid());
    assert!(!datetime(2023, 2, 29, 23, 59, 59).is_valid());
    assert!(!datetime(2024, 2, 29, 23, 59, 60).is_valid());
}

#[test]
fn in_zone_normalises_every_field() {
    let zoned = datetime(2014, 12, 31, 23, 59, 60).in_zone(&TimeZone::utc());
    assert_eq!(CalendarDateTime::of(&zoned), datetime(2015, 1, 1, 0, 0, 0));
}

#[test]
fn ordering_disagrees_with_fields() {
    let zeroth_of_february = datetime(2014, 2, 0, 12, 0, 0);
    let evening_of_31st = datetime(2014, 1, 31, 18, 0, 0);

    assert!(zeroth_of_february.date.after(evening_of_31st.date));
    assert!(zeroth_of_february.before(&evening_of_31st));
    assert!(evening_of_31st.after(&zeroth_of_february));
}

#[test]
fn ordering_follows_utc_instants() {
    // Half-hour and quarter-hour offsets put the wall clocks out of step
    // with each other by an amount that is not a whole number of hours.
    let kathmandu = TimeZone::fixed("+05:45", 5 * 3600 + 45 * 60).unwrap();
    let st_johns = TimeZone::fixed("-03:30", -(3 * 3600 + 30 * 60)).unwrap();
    let utc = TimeZone::utc();

    let instants = [1395392700, 1395392700 + 1, 1395400000, 1395300000];
    for &first in &instants {
        for &second in &instants {
            let a = CalendarDateTime::of(&ZonedDateTime::new(Instant::at(first), kathmandu.clone()));
            let b = CalendarDateTime::of(&ZonedDateTime::new(Instant::at(second), st_johns.clone()));

            let a_utc = a.in_zone(&utc).instant();
            let b_utc = b.in_zone(&utc).instant();
            assert_eq!(a.before(&b), a_utc < b_utc);
            assert_eq!(a.after(&b), a_utc > b_utc);
        }
    }
}

#[test]
fn nanoseconds_break_ties() {
    let earlier = datetime(2014, 3, 21, 9, 5, 0);
    let mut later = earlier;
    later.time.nanosecond = 1;

    assert!(earlier.before(&later));
    assert!(!later.before(&earlier));
}
