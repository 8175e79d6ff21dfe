//! Column values for query results.

use chrono::NaiveDateTime;
use std::fmt;

/// A single column value, tagged by shape.
///
/// The mapping from SQL data type to tag is total: every type code the
/// driver reports, recognized or not, produces exactly one of these
/// variants (unrecognized codes degrade to `String`).
#[derive(Debug, Clone, PartialEq)]
pub enum OdbcValue {
    /// SQL NULL.
    Null,
    /// Character data (CHAR, VARCHAR, wide variants, GUID, XML).
    String(String),
    /// Integer family (TINYINT through BIGINT, BIT via bool instead).
    Int(i64),
    /// Floating point family (REAL, FLOAT, DOUBLE, NUMERIC, DECIMAL).
    Float(f64),
    /// Bit value.
    Bool(bool),
    /// Binary data (BINARY, VARBINARY, LONGVARBINARY).
    Bytes(Vec<u8>),
    /// Date/time family.
    DateTime(NaiveDateTime),
}

impl OdbcValue {
    /// Check if the value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, OdbcValue::Null)
    }

    /// Try to get the value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OdbcValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to convert to i64.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            OdbcValue::Int(i) => Some(*i),
            OdbcValue::Bool(b) => Some(*b as i64),
            OdbcValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Try to convert to f64.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            OdbcValue::Float(f) => Some(*f),
            OdbcValue::Int(i) => Some(*i as f64),
            OdbcValue::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// Try to get the value as a bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OdbcValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as raw bytes.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            OdbcValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to get the value as a NaiveDateTime.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            OdbcValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for OdbcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OdbcValue::Null => write!(f, "NULL"),
            OdbcValue::String(s) => write!(f, "{}", s),
            OdbcValue::Int(i) => write!(f, "{}", i),
            OdbcValue::Float(v) => write!(f, "{}", v),
            OdbcValue::Bool(b) => write!(f, "{}", if *b { 1 } else { 0 }),
            OdbcValue::Bytes(b) => write!(f, "<BINARY: {} bytes>", b.len()),
            OdbcValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f")),
        }
    }
}
