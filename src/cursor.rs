//! Cursor for iterating over the result sets of an executed statement.
//!
//! A [`ResultSetCursor`] is created once a statement execution has produced
//! a result set. It owns the column descriptor sequence for the active
//! result set and drives row fetching and value extraction through the
//! [`NativeHandle`] capability. The statement handle itself is shared with
//! the surrounding statement object; the cursor only borrows it.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::native::types::{ColumnDescriptor, ColumnInfo, OdbcValue, Row, ScanType};
use crate::native::NativeHandle;

/// Cursor lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Rows may still be available.
    Open,
    /// The native layer reported end of data.
    Exhausted,
    /// The cursor was closed; no further native calls are made.
    Closed,
}

/// Row-by-row cursor over the result sets of one statement execution.
///
/// Holds a mutable reference to the native handle, ensuring only one active
/// cursor per handle at a time. All calls are synchronous: the native
/// call-level interface is not safe for concurrent use on one handle.
///
/// # Lifecycle
///
/// 1. Created by [`ResultSetCursor::open`] after a successful execute
/// 2. Iterated via [`fetch_next`](Self::fetch_next) or
///    [`next_row`](Self::next_row)
/// 3. Moved to the next result set via
///    [`advance_result_set`](Self::advance_result_set)
/// 4. Closed explicitly via [`close`](Self::close) or when the owning
///    statement closes
pub struct ResultSetCursor<'h, H: NativeHandle> {
    /// Borrowed native statement handle; never released by the cursor.
    handle: &'h mut H,
    /// Descriptors for the active result set, in ordinal order.
    columns: Vec<ColumnDescriptor>,
    /// Shared user-facing column metadata derived from the descriptors.
    column_info: Arc<ColumnInfo>,
    /// Lifecycle state.
    state: CursorState,
    /// False once an advance attempt has proven there are no more result
    /// sets; unconditionally true before that.
    more_results: bool,
    /// Total rows fetched so far across all result sets.
    rows_fetched: u64,
}

impl<'h, H: NativeHandle> ResultSetCursor<'h, H> {
    /// Open a cursor over the handle's current result set.
    ///
    /// Describes and binds every column of the result set.
    pub fn open(handle: &'h mut H) -> Result<Self> {
        let columns = ColumnDescriptor::bind_all(handle)?;
        let column_info = Arc::new(ColumnInfo::from_descriptors(&columns));
        tracing::debug!(columns = columns.len(), "cursor opened");
        Ok(Self {
            handle,
            columns,
            column_info,
            state: CursorState::Open,
            more_results: true,
            rows_fetched: 0,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Column names of the active result set, in ordinal order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name()).collect()
    }

    /// Number of columns in the active result set.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Total rows fetched so far.
    pub fn rowcount(&self) -> u64 {
        self.rows_fetched
    }

    /// Shared column metadata for the active result set.
    pub fn column_info(&self) -> Arc<ColumnInfo> {
        Arc::clone(&self.column_info)
    }

    /// Fetch the next row into `dest`, one value per column in ordinal
    /// order.
    ///
    /// Returns `Ok(false)` when the result set is exhausted; repeated calls
    /// at the end keep returning `Ok(false)` without touching the native
    /// layer. A native fetch error leaves the cursor open so the caller can
    /// decide whether to retry or close. A failure extracting any single
    /// column aborts the whole row; no partial row is delivered.
    pub fn fetch_next(&mut self, dest: &mut [OdbcValue]) -> Result<bool> {
        match self.state {
            CursorState::Closed => return Err(Error::CursorClosed),
            CursorState::Exhausted => return Ok(false),
            CursorState::Open => {}
        }

        let have_row = self
            .handle
            .fetch()
            .map_err(|diag| Error::native("SQLFetch", diag))?;
        if !have_row {
            self.state = CursorState::Exhausted;
            return Ok(false);
        }

        for (ordinal, (slot, column)) in dest.iter_mut().zip(self.columns.iter()).enumerate() {
            *slot = column.value(self.handle, ordinal)?;
        }
        self.rows_fetched += 1;
        Ok(true)
    }

    /// Fetch the next row as an owned [`Row`].
    ///
    /// Returns `Ok(None)` when the result set is exhausted.
    pub fn next_row(&mut self) -> Result<Option<Row>> {
        let mut values = vec![OdbcValue::Null; self.columns.len()];
        if self.fetch_next(&mut values)? {
            Ok(Some(Row::new(values, Arc::clone(&self.column_info))))
        } else {
            Ok(None)
        }
    }

    /// Whether another result set may be available.
    ///
    /// This is reported unconditionally true until an advance attempt
    /// proves otherwise; the definitive signal is always the return value
    /// of [`advance_result_set`](Self::advance_result_set), which avoids an
    /// extra native round trip that could itself fail.
    pub fn has_more_result_sets(&self) -> bool {
        self.state != CursorState::Closed && self.more_results
    }

    /// Advance to the statement's next result set.
    ///
    /// Returns `Ok(false)` and leaves the cursor exhausted when there are
    /// no further result sets. On success the entire column descriptor
    /// sequence is rebuilt from scratch (the new result set may differ
    /// completely in column count and types) and the cursor is open again.
    pub fn advance_result_set(&mut self) -> Result<bool> {
        if self.state == CursorState::Closed {
            return Err(Error::CursorClosed);
        }

        let have_more = self
            .handle
            .more_results()
            .map_err(|diag| Error::native("SQLMoreResults", diag))?;
        if !have_more {
            self.more_results = false;
            self.state = CursorState::Exhausted;
            return Ok(false);
        }

        let columns = ColumnDescriptor::bind_all(self.handle)?;
        self.column_info = Arc::new(ColumnInfo::from_descriptors(&columns));
        self.columns = columns;
        self.state = CursorState::Open;
        tracing::debug!(columns = self.columns.len(), "advanced to next result set");
        Ok(true)
    }

    /// Close the cursor.
    ///
    /// Releases the cursor-side bookkeeping (the descriptor sequence) but
    /// never the handle itself, which belongs to the enclosing statement.
    /// Idempotent; a cursor in any state may be closed.
    pub fn close(&mut self) {
        if self.state != CursorState::Closed {
            self.columns.clear();
            self.column_info = Arc::new(ColumnInfo {
                columns: Vec::new(),
            });
            self.state = CursorState::Closed;
            tracing::debug!(rows_fetched = self.rows_fetched, "cursor closed");
        }
    }

    /// Database type name of a column, with transfer-type suffix.
    pub fn database_type_name(&self, index: usize) -> Result<String> {
        Ok(self.descriptor(index)?.database_type_name())
    }

    /// Display length and variability of a column.
    pub fn column_length(&self, index: usize) -> Result<(i64, bool)> {
        Ok(self.descriptor(index)?.length())
    }

    /// Scan type tag of a column.
    pub fn column_scan_type(&self, index: usize) -> Result<ScanType> {
        Ok(self.descriptor(index)?.scan_type())
    }

    fn descriptor(&self, index: usize) -> Result<&ColumnDescriptor> {
        self.columns
            .get(index)
            .ok_or(Error::ColumnIndexOutOfBounds {
                index,
                count: self.columns.len(),
            })
    }
}
