//! Type catalog: the single source of truth for SQL type metadata.
//!
//! Every component that needs a display name, a display length, or a scan
//! type for a SQL data type code consults this module. The lookups are total:
//! an unrecognized code degrades to a defined fallback, never an error, so
//! the cursor keeps returning data even for vendor type codes it has never
//! seen.

use crate::native::constants::*;

/// Scan type tag for a column, describing the Rust-side shape a value of
/// this column takes when extracted.
///
/// Integer tags match the native width; `Null*` tags mark types whose
/// columns commonly carry SQL NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanType {
    /// Unknown/untyped; anything may come back.
    Any,
    /// Nullable string.
    NullString,
    /// Nullable 8-bit integer (TINYINT, BIT).
    NullByte,
    /// Nullable 16-bit integer.
    NullInt16,
    /// Nullable 32-bit integer.
    NullInt32,
    /// Nullable 64-bit integer.
    NullInt64,
    /// Nullable 64-bit float (NUMERIC, DECIMAL, FLOAT).
    NullFloat64,
    /// 32-bit float (REAL).
    Float32,
    /// 64-bit float (DOUBLE).
    Float64,
    /// Byte sequence (BINARY, VARBINARY, LONGVARBINARY).
    Bytes,
    /// Nullable date/time.
    NullTime,
}

/// Canonical uppercase name for a SQL data type code.
///
/// Unrecognized codes return `"UNKNOWN <code>"`.
pub fn display_name(sql_type: i16) -> String {
    let name = match sql_type {
        SQL_UNKNOWN_TYPE => "SQL_UNKNOWN_TYPE",
        SQL_CHAR => "CHAR",
        SQL_NUMERIC => "NUMERIC",
        SQL_DECIMAL => "DECIMAL",
        SQL_INTEGER => "INTEGER",
        SQL_SMALLINT => "SMALLINT",
        SQL_FLOAT => "FLOAT",
        SQL_REAL => "REAL",
        SQL_DOUBLE => "DOUBLE",
        SQL_DATETIME => "DATETIME",
        SQL_TIME => "TIME",
        SQL_VARCHAR => "VARCHAR",
        SQL_TYPE_DATE => "TYPE_DATE",
        SQL_TYPE_TIME => "TYPE_TIME",
        SQL_TYPE_TIMESTAMP => "TYPE_TIMESTAMP",
        SQL_TIMESTAMP => "TIMESTAMP",
        SQL_LONGVARCHAR => "LONGVARCHAR",
        SQL_BINARY => "BINARY",
        SQL_VARBINARY => "VARBINARY",
        SQL_LONGVARBINARY => "LONGVARBINARY",
        SQL_BIGINT => "BIGINT",
        SQL_TINYINT => "TINYINT",
        SQL_BIT => "BIT",
        SQL_WCHAR => "WCHAR",
        SQL_WVARCHAR => "WVARCHAR",
        SQL_WLONGVARCHAR => "WLONGVARCHAR",
        SQL_GUID => "GUID",
        SQL_SIGNED_OFFSET => "SIGNED_OFFSET",
        SQL_UNSIGNED_OFFSET => "UNSIGNED_OFFSET",
        SQL_SS_XML => "SS_XML",
        SQL_SS_TIME2 => "SS_TIME2",
        other => return format!("UNKNOWN {}", other),
    };
    name.to_string()
}

/// Display/scan length for a column from its raw declared size.
///
/// Returns `(length, is_variable)`. The adjustments are per-type, not a
/// general formula: narrow character and variable binary types lose the
/// terminator byte, wide character types and GUID halve to a character count
/// and lose the terminator, everything else passes the size through.
pub fn declared_length(sql_type: i16, size: i64) -> (i64, bool) {
    match sql_type {
        SQL_CHAR | SQL_VARCHAR | SQL_LONGVARCHAR => (size - 1, true),
        SQL_VARBINARY | SQL_LONGVARBINARY => (size - 1, true),
        SQL_WCHAR | SQL_WVARCHAR | SQL_WLONGVARCHAR => (size / 2 - 1, true),
        SQL_GUID => (size / 2 - 1, false),
        SQL_SS_XML => (size, true),
        _ => (size, false),
    }
}

/// Scan type tag for a SQL data type code.
///
/// Truly unknown codes map to [`ScanType::Any`], never an error.
pub fn scan_type(sql_type: i16) -> ScanType {
    match sql_type {
        SQL_UNKNOWN_TYPE => ScanType::Any,
        SQL_CHAR | SQL_VARCHAR | SQL_LONGVARCHAR => ScanType::NullString,
        SQL_WCHAR | SQL_WVARCHAR | SQL_WLONGVARCHAR => ScanType::NullString,
        SQL_GUID | SQL_SS_XML | SQL_SS_TIME2 => ScanType::NullString,
        SQL_NUMERIC | SQL_DECIMAL | SQL_FLOAT => ScanType::NullFloat64,
        SQL_REAL => ScanType::Float32,
        SQL_DOUBLE => ScanType::Float64,
        SQL_SMALLINT => ScanType::NullInt16,
        SQL_INTEGER | SQL_SIGNED_OFFSET | SQL_UNSIGNED_OFFSET => ScanType::NullInt32,
        SQL_BIGINT => ScanType::NullInt64,
        SQL_TINYINT | SQL_BIT => ScanType::NullByte,
        SQL_DATETIME | SQL_TIME | SQL_TIMESTAMP => ScanType::NullTime,
        SQL_TYPE_DATE | SQL_TYPE_TIME | SQL_TYPE_TIMESTAMP => ScanType::NullTime,
        SQL_BINARY | SQL_VARBINARY | SQL_LONGVARBINARY => ScanType::Bytes,
        _ => ScanType::Any,
    }
}

/// Name of a C transfer type code, for diagnostics.
///
/// Unknown codes return the empty string.
pub fn c_type_name(c_type: i16) -> &'static str {
    match c_type {
        SQL_C_CHAR => "SQL_C_CHAR",
        SQL_C_LONG => "SQL_C_LONG",
        SQL_C_SHORT => "SQL_C_SHORT",
        SQL_C_FLOAT => "SQL_C_FLOAT",
        SQL_C_DOUBLE => "SQL_C_DOUBLE",
        SQL_C_NUMERIC => "SQL_C_NUMERIC",
        SQL_C_DATE => "SQL_C_DATE",
        SQL_C_TIME => "SQL_C_TIME",
        SQL_C_TYPE_TIMESTAMP => "SQL_C_TYPE_TIMESTAMP",
        SQL_C_TIMESTAMP => "SQL_C_TIMESTAMP",
        SQL_C_BINARY => "SQL_C_BINARY",
        SQL_C_BIT => "SQL_C_BIT",
        SQL_C_WCHAR => "SQL_C_WCHAR",
        SQL_C_DEFAULT => "SQL_C_DEFAULT",
        SQL_C_SBIGINT => "SQL_C_SBIGINT",
        SQL_C_UBIGINT => "SQL_C_UBIGINT",
        SQL_C_GUID => "SQL_C_GUID",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every code the catalog knows about.
    const KNOWN_TYPES: &[i16] = &[
        SQL_UNKNOWN_TYPE,
        SQL_CHAR,
        SQL_NUMERIC,
        SQL_DECIMAL,
        SQL_INTEGER,
        SQL_SMALLINT,
        SQL_FLOAT,
        SQL_REAL,
        SQL_DOUBLE,
        SQL_DATETIME,
        SQL_TIME,
        SQL_VARCHAR,
        SQL_TYPE_DATE,
        SQL_TYPE_TIME,
        SQL_TYPE_TIMESTAMP,
        SQL_TIMESTAMP,
        SQL_LONGVARCHAR,
        SQL_BINARY,
        SQL_VARBINARY,
        SQL_LONGVARBINARY,
        SQL_BIGINT,
        SQL_TINYINT,
        SQL_BIT,
        SQL_WCHAR,
        SQL_WVARCHAR,
        SQL_WLONGVARCHAR,
        SQL_GUID,
        SQL_SIGNED_OFFSET,
        SQL_UNSIGNED_OFFSET,
        SQL_SS_XML,
        SQL_SS_TIME2,
    ];

    #[test]
    fn test_display_name_known_types() {
        for &t in KNOWN_TYPES {
            let name = display_name(t);
            assert!(!name.is_empty());
            assert!(!name.starts_with("UNKNOWN "), "{} unexpectedly unknown", t);
            // Pure function, deterministic across calls
            assert_eq!(name, display_name(t));
        }
        assert_eq!(display_name(SQL_VARCHAR), "VARCHAR");
        assert_eq!(display_name(SQL_BIGINT), "BIGINT");
        assert_eq!(display_name(SQL_WLONGVARCHAR), "WLONGVARCHAR");
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name(-77), "UNKNOWN -77");
        assert_eq!(display_name(4242), "UNKNOWN 4242");
    }

    #[test]
    fn test_scan_type_fallback() {
        assert_eq!(scan_type(-77), ScanType::Any);
        assert_eq!(scan_type(4242), ScanType::Any);
    }

    #[test]
    fn test_declared_length_narrow_char() {
        assert_eq!(declared_length(SQL_CHAR, 11), (10, true));
        assert_eq!(declared_length(SQL_VARCHAR, 51), (50, true));
        assert_eq!(declared_length(SQL_LONGVARCHAR, 100), (99, true));
    }

    #[test]
    fn test_declared_length_wide_char_and_guid() {
        assert_eq!(declared_length(SQL_WCHAR, 22), (10, true));
        assert_eq!(declared_length(SQL_WVARCHAR, 102), (50, true));
        assert_eq!(declared_length(SQL_WLONGVARCHAR, 22), (10, true));
        assert_eq!(declared_length(SQL_GUID, 74), (36, false));
    }

    #[test]
    fn test_declared_length_binary() {
        assert_eq!(declared_length(SQL_BINARY, 16), (16, false));
        assert_eq!(declared_length(SQL_VARBINARY, 17), (16, true));
        assert_eq!(declared_length(SQL_LONGVARBINARY, 17), (16, true));
    }

    #[test]
    fn test_declared_length_passthrough() {
        assert_eq!(declared_length(SQL_INTEGER, 4), (4, false));
        assert_eq!(declared_length(SQL_NUMERIC, 18), (18, false));
        assert_eq!(declared_length(SQL_TYPE_TIMESTAMP, 23), (23, false));
        assert_eq!(declared_length(SQL_BIT, 1), (1, false));
        assert_eq!(declared_length(SQL_SS_TIME2, 16), (16, false));
        // Unknown codes pass the raw size through
        assert_eq!(declared_length(-77, 42), (42, false));
    }

    #[test]
    fn test_scan_type_widths() {
        assert_eq!(scan_type(SQL_SMALLINT), ScanType::NullInt16);
        assert_eq!(scan_type(SQL_INTEGER), ScanType::NullInt32);
        assert_eq!(scan_type(SQL_BIGINT), ScanType::NullInt64);
        assert_eq!(scan_type(SQL_TINYINT), ScanType::NullByte);
        assert_eq!(scan_type(SQL_REAL), ScanType::Float32);
        assert_eq!(scan_type(SQL_DOUBLE), ScanType::Float64);
        assert_eq!(scan_type(SQL_DECIMAL), ScanType::NullFloat64);
    }

    #[test]
    fn test_scan_type_strings_and_temporal() {
        for t in [
            SQL_CHAR,
            SQL_VARCHAR,
            SQL_LONGVARCHAR,
            SQL_WCHAR,
            SQL_WVARCHAR,
            SQL_WLONGVARCHAR,
            SQL_GUID,
            SQL_SS_XML,
            SQL_SS_TIME2,
        ] {
            assert_eq!(scan_type(t), ScanType::NullString);
        }
        for t in [
            SQL_DATETIME,
            SQL_TIME,
            SQL_TIMESTAMP,
            SQL_TYPE_DATE,
            SQL_TYPE_TIME,
            SQL_TYPE_TIMESTAMP,
        ] {
            assert_eq!(scan_type(t), ScanType::NullTime);
        }
        for t in [SQL_BINARY, SQL_VARBINARY, SQL_LONGVARBINARY] {
            assert_eq!(scan_type(t), ScanType::Bytes);
        }
    }

    #[test]
    fn test_c_type_name() {
        assert_eq!(c_type_name(SQL_C_SBIGINT), "SQL_C_SBIGINT");
        assert_eq!(c_type_name(SQL_C_WCHAR), "SQL_C_WCHAR");
        assert_eq!(c_type_name(12345), "");
    }
}
