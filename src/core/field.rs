//! Field value types, declared column kinds and their ordering

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get the value as a calendar date if possible
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::DateTime(dt) => Some(dt.date_naive()),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) | FieldValue::Float(_) => 2,
            FieldValue::Date(_) => 3,
            FieldValue::DateTime(_) => 4,
            FieldValue::String(_) => 5,
        }
    }

    /// Total order over all values
    ///
    /// Values of different types order by type:
    /// `Null < Boolean < numbers < Date < DateTime < String`.
    /// Integers and floats compare numerically.
    pub fn total_cmp(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (
                FieldValue::Float(_) | FieldValue::Integer(_),
                FieldValue::Float(_) | FieldValue::Integer(_),
            ) => {
                let a = self.as_number().unwrap_or_default();
                let b = other.as_number().unwrap_or_default();
                a.total_cmp(&b)
            }
            (FieldValue::String(a), FieldValue::String(b)) => a.cmp(b),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Integer(i) => write!(f, "{}", i),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Boolean(b) => write!(f, "{}", b),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            FieldValue::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            FieldValue::Null => Ok(()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

/// Declared type of a table column
///
/// The kind decides how raw field values are coerced before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    Date,
}

impl FieldKind {
    /// Coerce a (possibly missing) value into this kind
    ///
    /// Coercion is lenient: numbers that cannot be read become `0`, missing
    /// text becomes `""` and unreadable dates become the earliest date.
    pub fn coerce(&self, value: Option<&FieldValue>) -> FieldValue {
        match self {
            FieldKind::Number => {
                let n = value
                    .and_then(|v| match v {
                        FieldValue::String(s) => s.trim().parse::<f64>().ok(),
                        other => other.as_number(),
                    })
                    .filter(|n| !n.is_nan())
                    .unwrap_or(0.0);
                FieldValue::Float(n)
            }
            FieldKind::Text => match value {
                Some(FieldValue::String(s)) => FieldValue::String(s.clone()),
                Some(other) => FieldValue::String(other.to_string()),
                None => FieldValue::String(String::new()),
            },
            FieldKind::Date => {
                let date = value
                    .and_then(|v| match v {
                        FieldValue::String(s) => {
                            NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
                        }
                        other => other.as_date(),
                    })
                    .unwrap_or(NaiveDate::MIN);
                FieldValue::Date(date)
            }
        }
    }

    /// Kind implied by the values present in a column
    ///
    /// Any number makes the column `Number`, otherwise any date makes it
    /// `Date`. `None` when the column holds neither.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a FieldValue>) -> Option<FieldKind> {
        let mut saw_date = false;
        for value in values {
            match value {
                FieldValue::Integer(_) | FieldValue::Float(_) => return Some(FieldKind::Number),
                FieldValue::Date(_) => saw_date = true,
                _ => {}
            }
        }
        saw_date.then_some(FieldKind::Date)
    }

    /// Compare two raw values after coercing both into this kind
    pub fn compare(&self, a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
        self.coerce(a).total_cmp(&self.coerce(b))
    }
}
