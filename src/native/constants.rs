//! ODBC call-level interface constants.
//!
//! SQL data type codes and C transfer type codes as defined by the ODBC
//! specification, plus the SQL Server vendor extensions the driver
//! recognizes.

// SQL data types (as reported by SQLDescribeCol)
pub const SQL_UNKNOWN_TYPE: i16 = 0;
pub const SQL_CHAR: i16 = 1;
pub const SQL_NUMERIC: i16 = 2;
pub const SQL_DECIMAL: i16 = 3;
pub const SQL_INTEGER: i16 = 4;
pub const SQL_SMALLINT: i16 = 5;
pub const SQL_FLOAT: i16 = 6;
pub const SQL_REAL: i16 = 7;
pub const SQL_DOUBLE: i16 = 8;
pub const SQL_DATETIME: i16 = 9;
pub const SQL_TIME: i16 = 10;
pub const SQL_TIMESTAMP: i16 = 11;
pub const SQL_VARCHAR: i16 = 12;
pub const SQL_TYPE_DATE: i16 = 91;
pub const SQL_TYPE_TIME: i16 = 92;
pub const SQL_TYPE_TIMESTAMP: i16 = 93;
pub const SQL_LONGVARCHAR: i16 = -1;
pub const SQL_BINARY: i16 = -2;
pub const SQL_VARBINARY: i16 = -3;
pub const SQL_LONGVARBINARY: i16 = -4;
pub const SQL_BIGINT: i16 = -5;
pub const SQL_TINYINT: i16 = -6;
pub const SQL_BIT: i16 = -7;
pub const SQL_WCHAR: i16 = -8;
pub const SQL_WVARCHAR: i16 = -9;
pub const SQL_WLONGVARCHAR: i16 = -10;
pub const SQL_GUID: i16 = -11;
pub const SQL_SIGNED_OFFSET: i16 = -20;
pub const SQL_UNSIGNED_OFFSET: i16 = -22;

// SQL Server vendor extensions
pub const SQL_SS_XML: i16 = -152;
pub const SQL_SS_TIME2: i16 = -154;

// C transfer types (as passed to SQLBindCol / SQLGetData)
pub const SQL_C_CHAR: i16 = 1;
pub const SQL_C_LONG: i16 = 4;
pub const SQL_C_SHORT: i16 = 5;
pub const SQL_C_FLOAT: i16 = 7;
pub const SQL_C_DOUBLE: i16 = 8;
pub const SQL_C_NUMERIC: i16 = 2;
pub const SQL_C_DATE: i16 = 9;
pub const SQL_C_TIME: i16 = 10;
pub const SQL_C_TIMESTAMP: i16 = 11;
pub const SQL_C_TYPE_TIMESTAMP: i16 = 93;
pub const SQL_C_BINARY: i16 = -2;
pub const SQL_C_BIT: i16 = -7;
pub const SQL_C_WCHAR: i16 = -8;
pub const SQL_C_DEFAULT: i16 = 99;
pub const SQL_C_SBIGINT: i16 = -25;
pub const SQL_C_UBIGINT: i16 = -27;
pub const SQL_C_GUID: i16 = -11;

// Fixed transfer buffer sizes for bound columns
pub const TIMESTAMP_STRUCT_SIZE: usize = 16;
pub const DATE_STRUCT_SIZE: usize = 6;
pub const TIME_STRUCT_SIZE: usize = 6;
pub const GUID_STRUCT_SIZE: usize = 16;
