use civil::{ClockTime, Instant, ParseErrorKind, TimeZone, ZonedDateTime};


#[test]
fn formats() {
    assert_eq!(ClockTime::new(23, 59, 59, 999_999_999).to_string(), "23:59:59.999999999");
    assert_eq!(ClockTime::new(0, 0, 0, 0).to_string(), "00:00:00");
    assert_eq!(ClockTime::new(9, 5, 0, 1000).to_string(), "09:05:00.000001000");
}

#[test]
fn fraction_digits() {
    let cases = [
        ("12:00:00.1",          100_000_000),
        ("12:00:00.12",         120_000_000),
        ("12:00:00.123",        123_000_000),
        ("12:00:00.1234",       123_400_000),
        ("12:00:00.12345",      123_450_000),
        ("12:00:00.123456",     123_456_000),
        ("12:00:00.1234567",    123_456_700),
        ("12:00:00.12345678",   123_456_780),
        ("12:00:00.123456789",  123_456_789),
    ];

    for &(input, nanosecond) in &cases {
        assert_eq!(ClockTime::parse(input), Ok(ClockTime::new(12, 0, 0, nanosecond)), "{}", input);
    }
}

#[test]
fn zero_fraction_is_dropped_on_output() {
    let time = ClockTime::parse("12:00:00.000").unwrap();
    assert_eq!(time.to_string(), "12:00:00");
}

#[test]
fn parse_errors() {
    assert_eq!(ClockTime::parse("12:00:00.1234567891").unwrap_err().kind(), ParseErrorKind::Malformed);
    assert_eq!(ClockTime::parse("24:00:00").unwrap_err().kind(), ParseErrorKind::HourOutOfRange);
    assert_eq!(ClockTime::parse("12:00:61").unwrap_err().kind(), ParseErrorKind::SecondOutOfRange);
    assert_eq!(ClockTime::parse("").unwrap_err().kind(), ParseErrorKind::Malformed);
}

#[test]
fn error_message() {
    let error = ClockTime::parse("12:60:00").unwrap_err();
    assert_eq!(error.to_string(), "parsing \"12:60:00\" as HH:MM:SS[.FFFFFFFFF]: minute out of range");
}

#[test]
fn validity() {
    assert!(ClockTime::new(12, 30, 15, 0).is_valid());
    assert!(!ClockTime::new(12, 30, 15, -1).is_valid());
    assert!(!ClockTime::new(23, 59, 59, 1_000_000_000).is_valid());
}

#[test]
fn projection_drops_the_date() {
    let zone = TimeZone::fixed("+05:45", 5 * 3600 + 45 * 60).unwrap();
    let zoned = ZonedDateTime::new(Instant::at_nanos(1395392700, 42), zone);
    assert_eq!(ClockTime::of(&zoned), ClockTime::new(14, 50, 0, 42));
}
