//! Row type for query results.

use std::sync::Arc;

use super::column::ColumnDescriptor;
use super::value::OdbcValue;
use super::ScanType;

/// User-facing column metadata, derived from a descriptor.
#[derive(Debug, Clone)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Database type name with transfer-type suffix.
    pub type_name: String,
    /// SQL data type code.
    pub sql_type: i16,
    /// Scan type tag.
    pub scan_type: ScanType,
    /// Whether NULL values are allowed.
    pub nullable: bool,
}

impl Column {
    /// Create a column from a descriptor.
    pub fn from_descriptor(descriptor: &ColumnDescriptor) -> Self {
        Self {
            name: descriptor.name().to_string(),
            type_name: descriptor.database_type_name(),
            sql_type: descriptor.sql_type(),
            scan_type: descriptor.scan_type(),
            nullable: descriptor.nullable(),
        }
    }
}

/// Shared column information for all rows of a result set.
#[derive(Debug, Clone)]
pub struct ColumnInfo {
    /// Column definitions.
    pub columns: Vec<Column>,
}

impl ColumnInfo {
    /// Create column info from the active descriptor sequence.
    pub fn from_descriptors(descriptors: &[ColumnDescriptor]) -> Self {
        Self {
            columns: descriptors.iter().map(Column::from_descriptor).collect(),
        }
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Get column by index.
    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Find column index by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// A row of query results.
#[derive(Debug, Clone)]
pub struct Row {
    /// Column values.
    values: Vec<OdbcValue>,
    /// Shared column information (reference counted).
    column_info: Arc<ColumnInfo>,
}

impl Row {
    /// Create a new row with values and shared column info.
    pub fn new(values: Vec<OdbcValue>, column_info: Arc<ColumnInfo>) -> Self {
        Self {
            values,
            column_info,
        }
    }

    /// Get value by column index (0-based).
    pub fn get(&self, index: usize) -> Option<&OdbcValue> {
        self.values.get(index)
    }

    /// Get value by column name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<&OdbcValue> {
        self.column_info
            .find_by_name(name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get all values.
    pub fn values(&self) -> &[OdbcValue] {
        &self.values
    }

    /// Get column information.
    pub fn columns(&self) -> &[Column] {
        &self.column_info.columns
    }

    /// Get column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.column_info.column_names()
    }

    /// Iterate over values.
    pub fn iter(&self) -> impl Iterator<Item = &OdbcValue> {
        self.values.iter()
    }
}

impl IntoIterator for Row {
    type Item = OdbcValue;
    type IntoIter = std::vec::IntoIter<OdbcValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Row {
    type Item = &'a OdbcValue;
    type IntoIter = std::slice::Iter<'a, OdbcValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
