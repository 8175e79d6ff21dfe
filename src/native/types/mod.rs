//! Result-set data types.

pub mod catalog;
mod column;
mod row;
mod value;

pub use catalog::ScanType;
pub use column::{BoundColumn, ColumnDescriptor, StreamedColumn};
pub use row::{Column, ColumnInfo, Row};
pub use value::OdbcValue;
