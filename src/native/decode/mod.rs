//! Transfer-format decoders.
//!
//! A fetched cell arrives as raw bytes in the column's C transfer format;
//! this module turns those bytes into an [`OdbcValue`]. Fixed-width numeric
//! formats decode here directly; date/time structs and character data have
//! dedicated modules.

mod date;
mod text;

pub use date::{decode_date, decode_time, decode_timestamp};
pub use text::{decode_guid, decode_utf16le, decode_utf8};

use crate::error::{Error, Result};
use crate::native::constants::*;
use crate::native::types::OdbcValue;
use crate::native::RawDatum;

/// Decode one raw datum in the given C transfer format.
///
/// A missing datum (SQL NULL) decodes to [`OdbcValue::Null`]. Unrecognized
/// transfer formats surface the raw bytes as a binary value rather than
/// failing, mirroring the catalog's never-fail fallback policy.
pub fn decode_datum(c_type: i16, datum: &RawDatum) -> Result<OdbcValue> {
    let data = match datum {
        Some(data) => data.as_ref(),
        None => return Ok(OdbcValue::Null),
    };

    match c_type {
        SQL_C_CHAR => Ok(OdbcValue::String(decode_utf8(data)?)),
        SQL_C_WCHAR => Ok(OdbcValue::String(decode_utf16le(data)?)),
        SQL_C_GUID => Ok(OdbcValue::String(decode_guid(data)?)),
        SQL_C_SHORT => Ok(OdbcValue::Int(
            i16::from_le_bytes(fixed(c_type, data)?) as i64
        )),
        SQL_C_LONG => Ok(OdbcValue::Int(
            i32::from_le_bytes(fixed(c_type, data)?) as i64
        )),
        SQL_C_SBIGINT => Ok(OdbcValue::Int(i64::from_le_bytes(fixed(c_type, data)?))),
        SQL_C_UBIGINT => Ok(OdbcValue::Int(
            u64::from_le_bytes(fixed(c_type, data)?) as i64
        )),
        SQL_C_FLOAT => Ok(OdbcValue::Float(
            f32::from_le_bytes(fixed(c_type, data)?) as f64
        )),
        SQL_C_DOUBLE => Ok(OdbcValue::Float(f64::from_le_bytes(fixed(c_type, data)?))),
        SQL_C_BIT => Ok(OdbcValue::Bool(fixed::<1>(c_type, data)?[0] != 0)),
        SQL_C_BINARY => Ok(OdbcValue::Bytes(data.to_vec())),
        SQL_C_TYPE_TIMESTAMP | SQL_C_TIMESTAMP => Ok(OdbcValue::DateTime(decode_timestamp(data)?)),
        SQL_C_DATE => Ok(OdbcValue::DateTime(decode_date(data)?)),
        SQL_C_TIME => Ok(OdbcValue::DateTime(decode_time(data)?)),
        _ => Ok(OdbcValue::Bytes(data.to_vec())),
    }
}

/// Check that a fixed-width datum has exactly `N` bytes.
fn fixed<const N: usize>(c_type: i16, data: &[u8]) -> Result<[u8; N]> {
    data.try_into().map_err(|_| {
        Error::type_conversion(format!(
            "Transfer type {} expects {} bytes, got {}",
            c_type,
            N,
            data.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use chrono::{Datelike, Timelike};

    fn datum(data: &[u8]) -> RawDatum {
        Some(Bytes::copy_from_slice(data))
    }

    #[test]
    fn test_decode_null() {
        assert_eq!(decode_datum(SQL_C_LONG, &None).unwrap(), OdbcValue::Null);
    }

    #[test]
    fn test_decode_integers() {
        assert_eq!(
            decode_datum(SQL_C_SHORT, &datum(&(-7i16).to_le_bytes())).unwrap(),
            OdbcValue::Int(-7)
        );
        assert_eq!(
            decode_datum(SQL_C_LONG, &datum(&123456i32.to_le_bytes())).unwrap(),
            OdbcValue::Int(123456)
        );
        assert_eq!(
            decode_datum(SQL_C_SBIGINT, &datum(&i64::MIN.to_le_bytes())).unwrap(),
            OdbcValue::Int(i64::MIN)
        );
    }

    #[test]
    fn test_decode_floats() {
        assert_eq!(
            decode_datum(SQL_C_FLOAT, &datum(&1.5f32.to_le_bytes())).unwrap(),
            OdbcValue::Float(1.5)
        );
        assert_eq!(
            decode_datum(SQL_C_DOUBLE, &datum(&2.25f64.to_le_bytes())).unwrap(),
            OdbcValue::Float(2.25)
        );
    }

    #[test]
    fn test_decode_bit() {
        assert_eq!(
            decode_datum(SQL_C_BIT, &datum(&[1])).unwrap(),
            OdbcValue::Bool(true)
        );
        assert_eq!(
            decode_datum(SQL_C_BIT, &datum(&[0])).unwrap(),
            OdbcValue::Bool(false)
        );
    }

    #[test]
    fn test_decode_char() {
        assert_eq!(
            decode_datum(SQL_C_CHAR, &datum(b"Alice")).unwrap(),
            OdbcValue::String("Alice".to_string())
        );
    }

    #[test]
    fn test_decode_timestamp() {
        let mut data = Vec::new();
        data.extend_from_slice(&2024i16.to_le_bytes());
        for field in [3u16, 9, 17, 30, 0] {
            data.extend_from_slice(&field.to_le_bytes());
        }
        data.extend_from_slice(&0u32.to_le_bytes());
        let value = decode_datum(SQL_C_TYPE_TIMESTAMP, &datum(&data)).unwrap();
        let dt = value.as_datetime().unwrap();
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 3);
        assert_eq!(dt.day(), 9);
        assert_eq!(dt.hour(), 17);
    }

    #[test]
    fn test_decode_wrong_width() {
        assert!(decode_datum(SQL_C_LONG, &datum(&[1, 2])).is_err());
    }

    #[test]
    fn test_decode_unknown_c_type_falls_back_to_bytes() {
        assert_eq!(
            decode_datum(12345, &datum(&[1, 2, 3])).unwrap(),
            OdbcValue::Bytes(vec![1, 2, 3])
        );
    }
}
