//! ODBC date/time struct decoders.
//!
//! Bound temporal columns transfer as the ODBC C structs, serialized
//! little-endian field by field:
//! - `TIMESTAMP_STRUCT` (16 bytes): i16 year, u16 month, day, hour, minute,
//!   second, u32 fraction (nanoseconds)
//! - `DATE_STRUCT` (6 bytes): i16 year, u16 month, u16 day
//! - `TIME_STRUCT` (6 bytes): u16 hour, u16 minute, u16 second

use crate::error::{Error, Result};
use bytes::Buf;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Decode a TIMESTAMP_STRUCT from 16 bytes.
pub fn decode_timestamp(data: &[u8]) -> Result<NaiveDateTime> {
    if data.len() != 16 {
        return Err(Error::type_conversion(format!(
            "TIMESTAMP_STRUCT must be exactly 16 bytes, got {}",
            data.len()
        )));
    }
    let mut buf = data;
    let year = buf.get_i16_le() as i32;
    let month = buf.get_u16_le() as u32;
    let day = buf.get_u16_le() as u32;
    let hour = buf.get_u16_le() as u32;
    let minute = buf.get_u16_le() as u32;
    let second = buf.get_u16_le() as u32;
    let fraction = buf.get_u32_le();

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::type_conversion(format!(
            "Invalid timestamp date: year={}, month={}, day={}",
            year, month, day
        ))
    })?;
    let time = NaiveTime::from_hms_nano_opt(hour, minute, second, fraction).ok_or_else(|| {
        Error::type_conversion(format!(
            "Invalid timestamp time: hour={}, minute={}, second={}, fraction={}",
            hour, minute, second, fraction
        ))
    })?;
    Ok(NaiveDateTime::new(date, time))
}

/// Decode a DATE_STRUCT from 6 bytes.
///
/// The result is a datetime at midnight, matching how date-only columns
/// surface in the value model.
pub fn decode_date(data: &[u8]) -> Result<NaiveDateTime> {
    if data.len() != 6 {
        return Err(Error::type_conversion(format!(
            "DATE_STRUCT must be exactly 6 bytes, got {}",
            data.len()
        )));
    }
    let mut buf = data;
    let year = buf.get_i16_le() as i32;
    let month = buf.get_u16_le() as u32;
    let day = buf.get_u16_le() as u32;

    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        Error::type_conversion(format!(
            "Invalid date: year={}, month={}, day={}",
            year, month, day
        ))
    })?;
    Ok(date.and_time(NaiveTime::MIN))
}

/// Decode a TIME_STRUCT from 6 bytes.
///
/// Time-of-day columns carry no date; the value is anchored to the epoch
/// date 1970-01-01.
pub fn decode_time(data: &[u8]) -> Result<NaiveDateTime> {
    if data.len() != 6 {
        return Err(Error::type_conversion(format!(
            "TIME_STRUCT must be exactly 6 bytes, got {}",
            data.len()
        )));
    }
    let mut buf = data;
    let hour = buf.get_u16_le() as u32;
    let minute = buf.get_u16_le() as u32;
    let second = buf.get_u16_le() as u32;

    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        Error::type_conversion(format!(
            "Invalid time: hour={}, minute={}, second={}",
            hour, minute, second
        ))
    })?;
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date is valid");
    Ok(NaiveDateTime::new(epoch, time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn timestamp_bytes(
        year: i16,
        month: u16,
        day: u16,
        hour: u16,
        minute: u16,
        second: u16,
        fraction: u32,
    ) -> Vec<u8> {
        let mut data = Vec::with_capacity(16);
        data.extend_from_slice(&year.to_le_bytes());
        for field in [month, day, hour, minute, second] {
            data.extend_from_slice(&field.to_le_bytes());
        }
        data.extend_from_slice(&fraction.to_le_bytes());
        data
    }

    #[test]
    fn test_decode_timestamp() {
        let data = timestamp_bytes(2024, 10, 21, 12, 36, 5, 500_000_000);
        let result = decode_timestamp(&data).unwrap();
        assert_eq!(result.year(), 2024);
        assert_eq!(result.month(), 10);
        assert_eq!(result.day(), 21);
        assert_eq!(result.hour(), 12);
        assert_eq!(result.minute(), 36);
        assert_eq!(result.second(), 5);
        assert_eq!(result.nanosecond(), 500_000_000);
    }

    #[test]
    fn test_decode_timestamp_wrong_length() {
        assert!(decode_timestamp(&[0u8; 7]).is_err());
    }

    #[test]
    fn test_decode_timestamp_invalid_month() {
        let data = timestamp_bytes(2024, 13, 1, 0, 0, 0, 0);
        assert!(decode_timestamp(&data).is_err());
    }

    #[test]
    fn test_decode_date() {
        let mut data = Vec::new();
        data.extend_from_slice(&1999i16.to_le_bytes());
        data.extend_from_slice(&6u16.to_le_bytes());
        data.extend_from_slice(&15u16.to_le_bytes());
        let result = decode_date(&data).unwrap();
        assert_eq!(result.year(), 1999);
        assert_eq!(result.month(), 6);
        assert_eq!(result.day(), 15);
        assert_eq!(result.hour(), 0);
    }

    #[test]
    fn test_decode_time() {
        let mut data = Vec::new();
        for field in [23u16, 59, 59] {
            data.extend_from_slice(&field.to_le_bytes());
        }
        let result = decode_time(&data).unwrap();
        assert_eq!(result.year(), 1970);
        assert_eq!(result.hour(), 23);
        assert_eq!(result.minute(), 59);
        assert_eq!(result.second(), 59);
    }

    #[test]
    fn test_decode_time_invalid_hour() {
        let mut data = Vec::new();
        for field in [24u16, 0, 0] {
            data.extend_from_slice(&field.to_le_bytes());
        }
        assert!(decode_time(&data).is_err());
    }
}
