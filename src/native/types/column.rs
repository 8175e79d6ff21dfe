//! Column descriptors for the active result set.
//!
//! Each column of a result set is described once, at result-set-open time,
//! and the descriptor owns everything needed to pull that column's value out
//! of a fetched row. Columns come in two kinds: bound columns transfer
//! through a fixed buffer populated by every fetch, streamed columns need a
//! dedicated get-data call per row because their length is not known ahead
//! of fetch (long text, XML, long binary).

use crate::error::{Error, Result};
use crate::native::constants::*;
use crate::native::decode::decode_datum;
use crate::native::types::catalog;
use crate::native::types::{OdbcValue, ScanType};
use crate::native::NativeHandle;

/// A column whose value is read from a pre-bound fixed transfer buffer.
#[derive(Debug, Clone)]
pub struct BoundColumn {
    /// Column name.
    pub name: String,
    /// SQL data type code.
    pub sql_type: i16,
    /// C transfer type the buffer is bound with.
    pub c_type: i16,
    /// Declared size/precision as reported by the driver.
    pub size: i64,
    /// Transfer buffer size in bytes.
    pub buffer_size: usize,
    /// Whether NULL values are allowed.
    pub nullable: bool,
}

/// A column retrieved with a dedicated get-data call per row.
#[derive(Debug, Clone)]
pub struct StreamedColumn {
    /// Column name.
    pub name: String,
    /// SQL data type code.
    pub sql_type: i16,
    /// C transfer type requested from the driver.
    pub c_type: i16,
    /// Whether NULL values are allowed.
    pub nullable: bool,
}

/// Descriptor for one result-set column.
#[derive(Debug, Clone)]
pub enum ColumnDescriptor {
    /// Fixed-buffer column.
    Bound(BoundColumn),
    /// Per-row-retrieval column.
    Streamed(StreamedColumn),
}

impl ColumnDescriptor {
    /// Describe one column of the current result set and, for bound
    /// columns, establish its transfer buffer.
    ///
    /// The transfer type and buffer size follow from the SQL data type;
    /// long and XML-like types, zero-size variable columns, and types the
    /// catalog does not recognize become streamed so the cursor never
    /// refuses a column merely because its declared size is unusable.
    pub fn describe(handle: &mut impl NativeHandle, ordinal: usize) -> Result<Self> {
        let desc = handle
            .describe_column(ordinal)
            .map_err(|diag| Error::native("SQLDescribeCol", diag))?;

        let descriptor = match desc.sql_type {
            SQL_BIT => Self::bound(&desc, SQL_C_BIT, 1),
            SQL_TINYINT | SQL_SMALLINT | SQL_INTEGER | SQL_SIGNED_OFFSET
            | SQL_UNSIGNED_OFFSET => Self::bound(&desc, SQL_C_LONG, 4),
            SQL_BIGINT => Self::bound(&desc, SQL_C_SBIGINT, 8),
            SQL_NUMERIC | SQL_DECIMAL | SQL_FLOAT | SQL_REAL | SQL_DOUBLE => {
                Self::bound(&desc, SQL_C_DOUBLE, 8)
            }
            SQL_TYPE_TIMESTAMP | SQL_TIMESTAMP | SQL_DATETIME => {
                Self::bound(&desc, SQL_C_TYPE_TIMESTAMP, TIMESTAMP_STRUCT_SIZE)
            }
            SQL_TYPE_DATE => Self::bound(&desc, SQL_C_DATE, DATE_STRUCT_SIZE),
            SQL_TYPE_TIME | SQL_TIME => Self::bound(&desc, SQL_C_TIME, TIME_STRUCT_SIZE),
            SQL_GUID => Self::bound(&desc, SQL_C_GUID, GUID_STRUCT_SIZE),
            SQL_SS_TIME2 => Self::bound(&desc, SQL_C_CHAR, desc.size as usize + 1),
            SQL_CHAR | SQL_VARCHAR => Self::variable(&desc, SQL_C_CHAR, desc.size as usize + 1),
            SQL_WCHAR | SQL_WVARCHAR => {
                Self::variable(&desc, SQL_C_WCHAR, desc.size as usize + 2)
            }
            SQL_BINARY | SQL_VARBINARY => Self::variable(&desc, SQL_C_BINARY, desc.size as usize),
            SQL_LONGVARCHAR => Self::streamed(&desc, SQL_C_CHAR),
            SQL_WLONGVARCHAR | SQL_SS_XML => Self::streamed(&desc, SQL_C_WCHAR),
            SQL_LONGVARBINARY => Self::streamed(&desc, SQL_C_BINARY),
            // Unrecognized type codes degrade to streamed binary retrieval
            _ => Self::streamed(&desc, SQL_C_BINARY),
        };

        if let ColumnDescriptor::Bound(col) = &descriptor {
            handle
                .bind_column(ordinal, col.c_type, col.buffer_size)
                .map_err(|diag| Error::native("SQLBindCol", diag))?;
        }

        tracing::trace!(
            ordinal,
            name = %descriptor.name(),
            sql_type = descriptor.sql_type(),
            streamed = matches!(descriptor, ColumnDescriptor::Streamed(_)),
            "described column"
        );
        Ok(descriptor)
    }

    /// Describe and bind every column of the current result set, in
    /// ordinal order.
    ///
    /// This is the rebuild primitive: it is called when a cursor opens and
    /// again after every successful advance to the next result set, so the
    /// descriptor sequence is always rebuilt from scratch, never patched.
    pub fn bind_all(handle: &mut impl NativeHandle) -> Result<Vec<Self>> {
        let count = handle
            .num_result_cols()
            .map_err(|diag| Error::native("SQLNumResultCols", diag))?;
        let mut columns = Vec::with_capacity(count);
        for ordinal in 0..count {
            columns.push(Self::describe(handle, ordinal)?);
        }
        tracing::debug!(columns = columns.len(), "bound result set columns");
        Ok(columns)
    }

    fn bound(desc: &crate::native::ColumnDescription, c_type: i16, buffer_size: usize) -> Self {
        ColumnDescriptor::Bound(BoundColumn {
            name: desc.name.clone(),
            sql_type: desc.sql_type,
            c_type,
            size: desc.size,
            buffer_size,
            nullable: desc.nullable,
        })
    }

    /// Variable-width types with a usable declared size bind a fixed
    /// buffer; a zero size (e.g. varchar(max)) forces per-row retrieval.
    fn variable(desc: &crate::native::ColumnDescription, c_type: i16, buffer_size: usize) -> Self {
        if desc.size <= 0 {
            Self::streamed(desc, c_type)
        } else {
            Self::bound(desc, c_type, buffer_size)
        }
    }

    fn streamed(desc: &crate::native::ColumnDescription, c_type: i16) -> Self {
        ColumnDescriptor::Streamed(StreamedColumn {
            name: desc.name.clone(),
            sql_type: desc.sql_type,
            c_type,
            nullable: desc.nullable,
        })
    }

    /// Column name.
    pub fn name(&self) -> &str {
        match self {
            ColumnDescriptor::Bound(c) => &c.name,
            ColumnDescriptor::Streamed(c) => &c.name,
        }
    }

    /// SQL data type code.
    pub fn sql_type(&self) -> i16 {
        match self {
            ColumnDescriptor::Bound(c) => c.sql_type,
            ColumnDescriptor::Streamed(c) => c.sql_type,
        }
    }

    /// C transfer type.
    pub fn c_type(&self) -> i16 {
        match self {
            ColumnDescriptor::Bound(c) => c.c_type,
            ColumnDescriptor::Streamed(c) => c.c_type,
        }
    }

    /// Whether NULL values are allowed.
    pub fn nullable(&self) -> bool {
        match self {
            ColumnDescriptor::Bound(c) => c.nullable,
            ColumnDescriptor::Streamed(c) => c.nullable,
        }
    }

    /// Display length and variability of the column.
    ///
    /// Streamed columns never know their length in advance and always
    /// report `(0, false)`.
    pub fn length(&self) -> (i64, bool) {
        match self {
            ColumnDescriptor::Bound(c) => catalog::declared_length(c.sql_type, c.size),
            ColumnDescriptor::Streamed(_) => (0, false),
        }
    }

    /// Database type name, suffixed with the C transfer type name when one
    /// is known, for diagnostics (e.g. `"VARCHAR|SQL_C_CHAR"`).
    pub fn database_type_name(&self) -> String {
        let type_name = catalog::display_name(self.sql_type());
        let c_name = catalog::c_type_name(self.c_type());
        if c_name.is_empty() {
            type_name
        } else {
            format!("{}|{}", type_name, c_name)
        }
    }

    /// Scan type tag of the column.
    pub fn scan_type(&self) -> ScanType {
        catalog::scan_type(self.sql_type())
    }

    /// Extract this column's value from the current row.
    ///
    /// Bound columns read the transfer buffer populated by the last fetch;
    /// streamed columns issue a dedicated get-data call.
    pub fn value(&self, handle: &mut impl NativeHandle, ordinal: usize) -> Result<OdbcValue> {
        let datum = match self {
            ColumnDescriptor::Bound(_) => handle
                .bound_datum(ordinal)
                .map_err(|diag| Error::native("SQLFetch", diag))?,
            ColumnDescriptor::Streamed(c) => handle
                .get_data(ordinal, c.c_type)
                .map_err(|diag| Error::native("SQLGetData", diag))?,
        };
        decode_datum(self.c_type(), &datum)
    }
}
