//! Result-set and type-marshaling core for an ODBC-style database driver.
//!
//! This crate sits between a generic SQL client API and a native call-level
//! database interface. Given an open statement handle that has produced a
//! result set, it discovers column metadata, iterates rows one at a time,
//! converts each native column value into a self-describing typed value, and
//! exposes per-column type metadata for introspection. Connection
//! establishment, statement preparation, and transaction control live
//! outside this crate; the [`NativeHandle`] trait is the boundary.
//!
//! # Example
//!
//! ```no_run
//! use odbc_core_rs::{NativeHandle, OdbcValue, Result, ResultSetCursor};
//!
//! fn dump_all<H: NativeHandle>(handle: &mut H) -> Result<()> {
//!     let mut cursor = ResultSetCursor::open(handle)?;
//!     loop {
//!         println!("columns: {:?}", cursor.column_names());
//!         let mut row = vec![OdbcValue::Null; cursor.num_columns()];
//!         while cursor.fetch_next(&mut row)? {
//!             println!("{:?}", row);
//!         }
//!         if !cursor.advance_result_set()? {
//!             break;
//!         }
//!     }
//!     cursor.close();
//!     Ok(())
//! }
//! ```

pub mod cursor;
pub mod error;
pub mod native;

// Re-export main types
pub use cursor::{CursorState, ResultSetCursor};
pub use error::{Error, Result};
pub use native::types::{
    BoundColumn, Column, ColumnDescriptor, ColumnInfo, OdbcValue, Row, ScanType, StreamedColumn,
};
pub use native::{ColumnDescription, NativeDiagnostic, NativeHandle, NativeResult, RawDatum};
