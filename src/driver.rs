//! Passing civil values to and from a database driver.
//!
//! Values go out to a driver as their text form, and come back as
//! whichever kind of value the database produced: nothing at all, some
//! text, or a timestamp.

use tracing::{debug, trace};

use crate::cal::date::CalendarDate;
use crate::cal::datetime::CalendarDateTime;
use crate::cal::time::ClockTime;
use crate::cal::zoned::ZonedDateTime;
use crate::error::{Error, Result};
use crate::parse::ParseError;


/// A value as a database driver hands it over.
#[derive(PartialEq, Debug, Clone)]
pub enum Value {
    Null,
    Int(i64),
    Float(f64),
    Bool(bool),
    Bytes(Vec<u8>),
    Text(String),

    /// A point in time, in whichever time zone the driver read it in.
    Timestamp(ZonedDateTime),
}

impl Value {

    /// The name of this kind of value, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match *self {
            Value::Null          => "null",
            Value::Int(_)        => "integer",
            Value::Float(_)      => "float",
            Value::Bool(_)       => "boolean",
            Value::Bytes(_)      => "bytes",
            Value::Text(_)       => "text",
            Value::Timestamp(_)  => "timestamp",
        }
    }
}


/// Turning a value into something a driver can store.
pub trait ToValue {
    fn to_value(&self) -> Result<Value>;
}

/// Overwriting a value with one read back from a driver.
pub trait Scan {

    /// Replaces this value with the one read from the driver. A null
    /// leaves it as it was, and anything that cannot be read leaves it as
    /// it was and returns an error.
    fn scan(&mut self, value: &Value) -> Result<()>;
}


/// Reads a driver value into a target, given a way to parse text and a
/// way to project a timestamp.
fn scan_into<T>(target: &mut T, name: &'static str, value: &Value,
                parse: impl FnOnce(&str) -> Result<T, ParseError>,
                project: impl FnOnce(&ZonedDateTime) -> T) -> Result<()>
{
    trace!(into = name, kind = value.kind_name(), "scanning driver value");

    match *value {
        Value::Null                  => {},
        Value::Text(ref text)        => *target = parse(text)?,
        Value::Timestamp(ref zoned)  => *target = project(zoned),
        ref other => {
            debug!(into = name, kind = other.kind_name(), "driver value has the wrong kind");
            return Err(Error::TypeMismatch { target: name, received: other.kind_name() });
        }
    }

    Ok(())
}


impl ToValue for CalendarDate {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}

impl Scan for CalendarDate {
    fn scan(&mut self, value: &Value) -> Result<()> {
        scan_into(self, "date", value, CalendarDate::parse, |zoned| CalendarDate::of(zoned))
    }
}

impl ToValue for ClockTime {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}

impl Scan for ClockTime {
    fn scan(&mut self, value: &Value) -> Result<()> {
        scan_into(self, "time", value, ClockTime::parse, |zoned| ClockTime::of(zoned))
    }
}

impl ToValue for CalendarDateTime {
    fn to_value(&self) -> Result<Value> {
        Ok(Value::Text(self.to_string()))
    }
}

impl Scan for CalendarDateTime {
    fn scan(&mut self, value: &Value) -> Result<()> {
        scan_into(self, "datetime", value, CalendarDateTime::parse, |zoned| CalendarDateTime::of(zoned))
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::cal::zone::TimeZone;
    use crate::instant::Instant;

    #[test]
    fn null_leaves_it_alone() {
        let mut date = CalendarDate::new(2014, 3, 21);
        date.scan(&Value::Null).unwrap();
        assert_eq!(date, CalendarDate::new(2014, 3, 21));
    }

    #[test]
    fn text() {
        let mut time = ClockTime::default();
        time.scan(&Value::Text("09:05:00.5".into())).unwrap();
        assert_eq!(time, ClockTime::new(9, 5, 0, 500_000_000));
    }

    #[test]
    fn bad_text_leaves_it_alone() {
        let mut time = ClockTime::new(1, 2, 3, 4);
        assert!(matches!(time.scan(&Value::Text("9:05".into())), Err(Error::Parse(_))));
        assert_eq!(time, ClockTime::new(1, 2, 3, 4));
    }

    #[test]
    fn timestamp() {
        let zone = TimeZone::fixed("+09:00", 9 * 3600).unwrap();
        let mut datetime = CalendarDateTime::default();
        datetime.scan(&Value::Timestamp(ZonedDateTime::new(Instant::at(1395392700), zone))).unwrap();
        assert_eq!(datetime.to_string(), "2014-03-21T18:05:00");
    }

    #[test]
    fn mismatch() {
        let mut date = CalendarDate::default();
        let error = date.scan(&Value::Int(20140321)).unwrap_err();
        assert_eq!(error.to_string(), "integer value could not be converted into a date");
        assert!(matches!(date.scan(&Value::Bytes(b"2014-03-21".to_vec())),
                         Err(Error::TypeMismatch { received: "bytes", .. })));
    }

    #[test]
    fn to_value() {
        let datetime = CalendarDateTime::new(CalendarDate::new(2014, 3, 21), ClockTime::new(9, 5, 0, 0));
        assert_eq!(datetime.to_value().unwrap(), Value::Text("2014-03-21T09:05:00".into()));
    }
}
