#![cfg(feature = "json")]

use civil::{CalendarDate, CalendarDateTime, ClockTime, Error, ParseErrorKind};
use serde::{Deserialize, Serialize};


#[derive(PartialEq, Debug, Serialize, Deserialize)]
struct Appointment {
    day: CalendarDate,
    at: ClockTime,
    reminder: CalendarDateTime,
}


#[test]
fn year_range() {
    assert!(matches!(CalendarDate::new(10000, 1, 1).to_json(), Err(Error::YearOutOfRange(10000))));
    assert_eq!(CalendarDate::new(9999, 12, 31).to_json().unwrap(), "\"9999-12-31\"");
}

#[test]
fn serde_year_range() {
    let error = serde_json::to_string(&CalendarDate::new(10000, 1, 1)).unwrap_err();
    assert_eq!(error.to_string(), "year 10000 outside of range [0,9999]");
}

#[test]
fn struct_round_trip() {
    let appointment = Appointment {
        day: CalendarDate::new(2014, 3, 21),
        at: ClockTime::new(9, 5, 0, 0),
        reminder: CalendarDateTime::new(CalendarDate::new(2014, 3, 20), ClockTime::new(18, 0, 0, 250)),
    };

    let json = serde_json::to_string(&appointment).unwrap();
    assert_eq!(json, r#"{"day":"2014-03-21","at":"09:05:00","reminder":"2014-03-20T18:00:00.000000250"}"#);
    assert_eq!(serde_json::from_str::<Appointment>(&json).unwrap(), appointment);
}

#[test]
fn serde_rejects_bad_text() {
    assert!(serde_json::from_str::<ClockTime>(r#""9:05""#).is_err());
    assert!(serde_json::from_str::<CalendarDate>("20140321").is_err());
}

#[test]
fn from_json_zero_date() {
    assert_eq!(CalendarDate::from_json(br#""0000-00-00""#).unwrap(), CalendarDate::default());
}

#[test]
fn not_a_string() {
    let error = ClockTime::from_json(b"[9, 5, 0]").unwrap_err();
    assert_eq!(error.to_string(), "time should be a string, got array");
}

#[test]
fn invalid_text() {
    let error = CalendarDate::from_json(br#""2014-02-30""#).unwrap_err();
    assert_eq!(error.parse_error().map(|e| e.kind()), Some(ParseErrorKind::DayOutOfRange));
    assert!(error.to_string().starts_with("invalid date, data: 2014-02-30, err: "));
}

#[test]
fn split_and_whole_paths_agree() {
    for input in &["2014-03-21T09:05:00", "2014-03-21t09:05:00.5", "1999-12-31T23:59:59.999999999"] {
        let json = format!("\"{}\"", input);
        let split = CalendarDateTime::from_json(json.as_bytes()).unwrap();
        let whole = CalendarDateTime::parse(input).unwrap();
        let serde: CalendarDateTime = serde_json::from_str(&json).unwrap();

        assert_eq!(split, whole);
        assert_eq!(split, serde);
    }
}

#[test]
fn split_errors_keep_their_cause() {
    let error = CalendarDateTime::from_json(br#""2014-13-21T09:05:00""#).unwrap_err();
    assert!(matches!(error, Error::SplitDateTime { part: "date prefix", .. }));
    assert_eq!(error.parse_error().map(|e| e.kind()), Some(ParseErrorKind::MonthOutOfRange));
}

#[test]
fn whole_path_for_non_strings() {
    assert!(matches!(CalendarDateTime::from_json(b"null"),
                     Err(Error::NotAString { target: "datetime", received: "null" })));
}

#[test]
fn zero_date_only_through_the_split_path() {
    let json = r#""0000-00-00T00:00:00""#;
    let split = CalendarDateTime::from_json(json.as_bytes()).unwrap();
    assert_eq!(split, CalendarDateTime::new(CalendarDate::default(), ClockTime::default()));
    assert!(serde_json::from_str::<CalendarDateTime>(json).is_err());
}
