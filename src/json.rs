//! Reading and writing civil values as JSON strings.
//!
//! Each type is written as a single JSON string holding its text form.
//! There are two ways in: the `serde` implementations, which fit into
//! any serde data format, and `from_json`, which works on raw JSON bytes
//! and reports exactly what was wrong with them.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::ser::Error as _;
use serde_json::Value;
use tracing::trace;

use crate::cal::date::CalendarDate;
use crate::cal::datetime::CalendarDateTime;
use crate::cal::time::ClockTime;
use crate::error::{Error, Result};
use crate::util::RangeExt;


impl CalendarDate {

    /// Writes this date as a quoted JSON string.
    ///
    /// Returns an error if the year does not fit in four digits, as the
    /// result could not be parsed back.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil::CalendarDate;
    ///
    /// assert_eq!(CalendarDate::new(9999, 12, 31).to_json().unwrap(), "\"9999-12-31\"");
    /// assert!(CalendarDate::new(10000, 1, 1).to_json().is_err());
    /// ```
    pub fn to_json(&self) -> Result<String> {
        self.check_four_digit_year()?;
        Ok(quote(self))
    }

    /// Reads a date from a JSON string.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let text = json_string("date", data)?;
        match Self::parse(&text) {
            Ok(date)     => Ok(date),
            Err(source)  => Err(Error::InvalidText { target: "date", data: text, source }),
        }
    }

    fn check_four_digit_year(&self) -> Result<()> {
        if self.year.is_within(0 .. 10000) {
            Ok(())
        }
        else {
            Err(Error::YearOutOfRange(self.year))
        }
    }
}

impl ClockTime {

    /// Writes this time as a quoted JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(quote(self))
    }

    /// Reads a time from a JSON string.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let text = json_string("time", data)?;
        match Self::parse(&text) {
            Ok(time)     => Ok(time),
            Err(source)  => Err(Error::InvalidText { target: "time", data: text, source }),
        }
    }
}

impl CalendarDateTime {

    /// Writes this date-time as a quoted JSON string. The date part is not
    /// checked, as a date-time can always be read back in.
    pub fn to_json(&self) -> Result<String> {
        Ok(quote(self))
    }

    /// Reads a date-time from a JSON string.
    ///
    /// When the bytes contain a `T` or `t` after the first one, they are
    /// cut in two there, and each half is read as a date or a time string
    /// on its own. Otherwise the whole string is parsed in one go.
    ///
    /// ### Examples
    ///
    /// ```
    /// use civil::{CalendarDate, CalendarDateTime};
    ///
    /// let datetime = CalendarDateTime::from_json(br#""2014-03-21T09:05:00""#).unwrap();
    /// assert_eq!(datetime.date, CalendarDate::new(2014, 3, 21));
    /// ```
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let separator = data.iter().position(|&b| b == b'T' || b == b't');

        if let Some(index) = separator.filter(|&index| index > 0) {
            trace!(index, "reading JSON datetime as separate date and time");

            let mut date_part = data[.. index].to_vec();
            date_part.push(b'"');

            let mut time_part = vec![b'"'];
            time_part.extend_from_slice(&data[index + 1 ..]);

            let date = CalendarDate::from_json(&date_part)
                                    .map_err(|e| split_error("date prefix", &date_part, data, e))?;
            let time = ClockTime::from_json(&time_part)
                                 .map_err(|e| split_error("time suffix", &time_part, data, e))?;

            return Ok(Self::new(date, time));
        }

        trace!("reading JSON datetime as a whole string");
        let text = json_string("datetime", data)?;
        match Self::parse(&text) {
            Ok(datetime)  => Ok(datetime),
            Err(source)   => Err(Error::InvalidText { target: "datetime", data: text, source }),
        }
    }
}


fn quote<T: fmt::Display>(value: &T) -> String {
    format!("\"{}\"", value)
}

/// Reads the bytes as a JSON value, and returns it if it is a string.
fn json_string(target: &'static str, data: &[u8]) -> Result<String> {
    match serde_json::from_slice::<Value>(data)? {
        Value::String(text)  => Ok(text),
        other                => Err(Error::NotAString { target, received: json_kind(&other) }),
    }
}

/// The name of the JSON type of a value, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null       => "null",
        Value::Bool(_)    => "boolean",
        Value::Number(_)  => "number",
        Value::String(_)  => "string",
        Value::Array(_)   => "array",
        Value::Object(_)  => "object",
    }
}

fn split_error(part: &'static str, fragment: &[u8], data: &[u8], source: Error) -> Error {
    Error::SplitDateTime {
        part,
        fragment: String::from_utf8_lossy(fragment).into_owned(),
        data: String::from_utf8_lossy(data).into_owned(),
        source: Box::new(source),
    }
}


impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.check_four_digit_year().map_err(S::Error::custom)?;
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

impl Serialize for CalendarDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializing parses the whole string at once, so unlike
/// `CalendarDateTime::from_json` it turns down `"0000-00-00T00:00:00"`:
/// the zero date is only accepted when the date half is read on its own.
impl<'de> Deserialize<'de> for CalendarDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
