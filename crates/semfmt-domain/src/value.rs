//! Typed property values

use serde::{Deserialize, Serialize};

/// A date/time-typed value with its calendar components.
///
/// `raw` carries the short text form the host would have displayed; printers
/// that care about components (e.g. BibTeX's year/month split) read them
/// directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    pub year: i32,
    pub month: Option<u32>,
    pub raw: String,
}

impl TimeValue {
    pub fn new(year: i32, month: Option<u32>) -> Self {
        let raw = match month {
            Some(m) => format!("{}-{:02}", year, m),
            None => year.to_string(),
        };
        Self { year, month, raw }
    }
}

/// A single typed value yielded by a result field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataValue {
    /// Any value for which only the short text representation matters.
    Text(String),
    /// A date/time value exposing year and month components.
    Time(TimeValue),
}

impl DataValue {
    /// Short textual representation, the printer-facing form of every value.
    pub fn short_text(&self) -> &str {
        match self {
            DataValue::Text(s) => s,
            DataValue::Time(t) => &t.raw,
        }
    }

    /// Owned copy of the short text form.
    pub fn to_short_text(&self) -> String {
        self.short_text().to_string()
    }

    /// The time components, when this is a date/time-typed value.
    pub fn as_time(&self) -> Option<&TimeValue> {
        match self {
            DataValue::Time(t) => Some(t),
            DataValue::Text(_) => None,
        }
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Text(s.to_string())
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_forms() {
        assert_eq!(DataValue::from("Dover").short_text(), "Dover");
        assert_eq!(
            DataValue::Time(TimeValue::new(1964, Some(5))).short_text(),
            "1964-05"
        );
        assert_eq!(DataValue::Time(TimeValue::new(1964, None)).short_text(), "1964");
    }

    #[test]
    fn test_as_time() {
        assert!(DataValue::from("1964").as_time().is_none());
        let time = DataValue::Time(TimeValue::new(2021, Some(5)));
        assert_eq!(time.as_time().unwrap().year, 2021);
        assert_eq!(time.as_time().unwrap().month, Some(5));
    }
}
