//! Native call-level interface abstraction.
//!
//! The cursor core never talks to an ODBC driver manager directly; it goes
//! through the [`NativeHandle`] capability, which wraps one native statement
//! handle and exposes the four primitives the core needs: fetch, more-results,
//! describe, and data retrieval. Connection and statement lifecycle live
//! outside this crate.

pub mod constants;
pub mod decode;
pub mod types;

use bytes::Bytes;

pub use types::{Column, ColumnDescriptor, ColumnInfo, OdbcValue, Row, ScanType};

/// Diagnostic record produced by a failed native call.
///
/// The code and message come verbatim from the driver (SQLGetDiagRec) and
/// are preserved untouched when the error is surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeDiagnostic {
    /// Native error code.
    pub code: i32,
    /// Native error message.
    pub message: String,
}

impl NativeDiagnostic {
    /// Create a new diagnostic record.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Result type for native-layer calls.
pub type NativeResult<T> = std::result::Result<T, NativeDiagnostic>;

/// One fetched cell as handed over by the native layer.
///
/// `None` is SQL NULL. When present, multi-byte payloads (integers, floats,
/// the ODBC date/time structs) are little-endian.
pub type RawDatum = Option<Bytes>;

/// Column metadata as reported by the describe primitive.
#[derive(Debug, Clone)]
pub struct ColumnDescription {
    /// Column name.
    pub name: String,
    /// SQL data type code (see [`constants`]).
    pub sql_type: i16,
    /// Declared size/precision as reported by the driver.
    pub size: i64,
    /// Whether NULL values are allowed.
    pub nullable: bool,
}

/// Capability set over one native statement handle.
///
/// All methods are synchronous blocking calls; the underlying call-level
/// interface is not safe for concurrent invocation on the same handle, so a
/// handle must be driven from a single logical thread of control at a time.
/// Ordinals are 0-based here; implementations translate to the native
/// 1-based convention.
pub trait NativeHandle {
    /// Advance to the next row (SQLFetch).
    ///
    /// Returns `Ok(false)` on SQL_NO_DATA.
    fn fetch(&mut self) -> NativeResult<bool>;

    /// Advance to the next result set (SQLMoreResults).
    ///
    /// Returns `Ok(false)` when the statement has no further result sets.
    fn more_results(&mut self) -> NativeResult<bool>;

    /// Number of columns in the current result set (SQLNumResultCols).
    fn num_result_cols(&mut self) -> NativeResult<usize>;

    /// Describe one column of the current result set (SQLDescribeCol).
    fn describe_column(&mut self, ordinal: usize) -> NativeResult<ColumnDescription>;

    /// Bind a fixed transfer buffer to a column (SQLBindCol).
    ///
    /// After a successful bind, every fetch populates the buffer and
    /// [`NativeHandle::bound_datum`] reads it back.
    fn bind_column(&mut self, ordinal: usize, c_type: i16, buffer_size: usize) -> NativeResult<()>;

    /// Read the pre-bound buffer populated by the last fetch.
    fn bound_datum(&self, ordinal: usize) -> NativeResult<RawDatum>;

    /// Retrieve a column value with a dedicated per-row call (SQLGetData).
    ///
    /// Used for streamed columns whose length is not known ahead of fetch.
    fn get_data(&mut self, ordinal: usize, c_type: i16) -> NativeResult<RawDatum>;
}
