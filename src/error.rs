//! The error type shared by every fallible operation in the crate.

use thiserror::Error;

use crate::parse::ParseError;


/// Everything that can go wrong when reading or writing civil values.
#[derive(Error, Debug)]
pub enum Error {

    /// Text did not parse. This is what text unmarshalling and driver
    /// scanning return, with the parse error passed through untouched.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A JSON string held text that did not parse as the target type.
    #[error("invalid {target}, data: {data}, err: {source}")]
    InvalidText {
        target: &'static str,
        data: String,
        source: ParseError,
    },

    /// A JSON value was something other than a string.
    #[error("{target} should be a string, got {received}")]
    NotAString {
        target: &'static str,
        received: &'static str,
    },

    /// The input was not JSON at all.
    #[cfg(feature = "json")]
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// One half of a datetime, split apart at its `T`, failed to read.
    #[error("datetime {part} {fragment:?} of {data:?}: {source}")]
    SplitDateTime {
        part: &'static str,
        fragment: String,
        data: String,
        source: Box<Error>,
    },

    /// A driver value was of a kind that cannot become the target type.
    #[error("{received} value could not be converted into a {target}")]
    TypeMismatch {
        target: &'static str,
        received: &'static str,
    },

    /// A date with a year that does not fit in four digits cannot be
    /// written as JSON.
    #[error("year {0} outside of range [0,9999]")]
    YearOutOfRange(i32),

    /// A fixed offset was a whole day or more away from UTC.
    #[error("offset of {0} seconds is a day or more from UTC")]
    OffsetOutOfRange(i64),
}

impl Error {

    /// The parse error at the bottom of this error, if there is one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(e)                      => Some(e),
            Error::InvalidText { source, .. }    => Some(source),
            Error::SplitDateTime { source, .. }  => source.parse_error(),
            _                                    => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;


#[cfg(test)]
mod test {
    use super::*;
    use crate::parse::{ParseErrorKind, parse_date};

    #[test]
    fn parse_errors_are_transparent() {
        let parse = parse_date("2014-13-01").unwrap_err();
        let error = Error::from(parse.clone());
        assert_eq!(error.to_string(), parse.to_string());
        assert_eq!(error.parse_error(), Some(&parse));
    }

    #[test]
    fn nested_parse_error() {
        let parse = parse_date("2014-02-30").unwrap_err();
        let error = Error::SplitDateTime {
            part: "date",
            fragment: "\"2014-02-30\"".into(),
            data: "\"2014-02-30T00:00:00\"".into(),
            source: Box::new(Error::InvalidText { target: "date", data: "2014-02-30".into(), source: parse }),
        };
        assert_eq!(error.parse_error().map(ParseError::kind), Some(ParseErrorKind::DayOutOfRange));
    }

    #[test]
    fn mismatch_names_the_kind() {
        let error = Error::TypeMismatch { target: "date", received: "integer" };
        assert_eq!(error.to_string(), "integer value could not be converted into a date");
        assert!(error.parse_error().is_none());
    }
}
