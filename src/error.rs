//! Error types for the driver core.

use crate::native::NativeDiagnostic;
use thiserror::Error;

/// Result type alias for driver core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for cursor and type-marshaling operations.
///
/// End-of-data is not an error: exhausted fetches and result-set sequences
/// surface as `Ok(false)` / `Ok(None)` so callers can loop with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// A native call-level operation failed. The operation name and the
    /// native diagnostic are preserved verbatim.
    #[error("{operation}: native error {code}: {message}")]
    NativeCall {
        operation: &'static str,
        code: i32,
        message: String,
    },

    /// A fetched datum could not be converted to a typed value.
    #[error("Type conversion error: {message}")]
    TypeConversion { message: String },

    /// Operation attempted on a closed cursor.
    #[error("Cursor is closed")]
    CursorClosed,

    /// Column index out of bounds.
    #[error("Column index {index} out of bounds (columns: {count})")]
    ColumnIndexOutOfBounds { index: usize, count: usize },
}

impl Error {
    /// Wrap a failed native operation.
    pub fn native(operation: &'static str, diag: NativeDiagnostic) -> Self {
        Self::NativeCall {
            operation,
            code: diag.code,
            message: diag.message,
        }
    }

    /// Create a type conversion error.
    pub fn type_conversion(message: impl Into<String>) -> Self {
        Self::TypeConversion {
            message: message.into(),
        }
    }
}
