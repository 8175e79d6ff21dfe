//! Character and GUID decoders.

use crate::error::{Error, Result};
use bytes::Buf;

/// Decode UTF-8 narrow character data (SQL_C_CHAR).
pub fn decode_utf8(data: &[u8]) -> Result<String> {
    String::from_utf8(data.to_vec())
        .map_err(|e| Error::type_conversion(format!("Invalid UTF-8 in character column: {}", e)))
}

/// Decode UTF-16LE wide character data (SQL_C_WCHAR).
pub fn decode_utf16le(data: &[u8]) -> Result<String> {
    if data.len() % 2 != 0 {
        return Err(Error::type_conversion(format!(
            "Wide character data has odd length {}",
            data.len()
        )));
    }
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units)
        .map_err(|e| Error::type_conversion(format!("Invalid UTF-16 in character column: {}", e)))
}

/// Decode a 16-byte GUID struct into the canonical 8-4-4-4-12 form.
///
/// The struct layout is u32/u16/u16 little-endian followed by 8 raw bytes.
pub fn decode_guid(data: &[u8]) -> Result<String> {
    if data.len() != 16 {
        return Err(Error::type_conversion(format!(
            "GUID must be exactly 16 bytes, got {}",
            data.len()
        )));
    }
    let mut buf = data;
    let d1 = buf.get_u32_le();
    let d2 = buf.get_u16_le();
    let d3 = buf.get_u16_le();
    let d4 = buf;
    Ok(format!(
        "{:08x}-{:04x}-{:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        d1, d2, d3, d4[0], d4[1], d4[2], d4[3], d4[4], d4[5], d4[6], d4[7]
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        assert_eq!(decode_utf8(b"Alice").unwrap(), "Alice");
        assert_eq!(decode_utf8(b"").unwrap(), "");
        assert!(decode_utf8(&[0xff, 0xfe, 0x01]).is_err());
    }

    #[test]
    fn test_decode_utf16le() {
        let data: Vec<u8> = "Büro"
            .encode_utf16()
            .flat_map(|u| u.to_le_bytes())
            .collect();
        assert_eq!(decode_utf16le(&data).unwrap(), "Büro");
    }

    #[test]
    fn test_decode_utf16le_odd_length() {
        assert!(decode_utf16le(&[0x41, 0x00, 0x42]).is_err());
    }

    #[test]
    fn test_decode_guid() {
        let mut data = Vec::new();
        data.extend_from_slice(&0x33221100u32.to_le_bytes());
        data.extend_from_slice(&0x5544u16.to_le_bytes());
        data.extend_from_slice(&0x7766u16.to_le_bytes());
        data.extend_from_slice(&[0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
        assert_eq!(
            decode_guid(&data).unwrap(),
            "33221100-5544-7766-8899-aabbccddeeff"
        );
    }

    #[test]
    fn test_decode_guid_wrong_length() {
        assert!(decode_guid(&[0u8; 15]).is_err());
    }
}
