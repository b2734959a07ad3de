//! # Cursor Module
//!
//! The positional read contract and the table that implements it.
//!
//! ## Structure
//!
//! - `error`: `CursorError` and its `ErrorKind` classification
//! - `row`: fixed-width `Row` storage
//! - `builder`: `RowBuilder` for incremental row construction
//! - `table`: `RowTable`, the mutable in-memory table
//!
//! ## The RowSource Contract
//!
//! A consumer reads a [`RowSource`] by position: it picks a row position
//! (`-1` is "before the first row") and a column index, and asks for the
//! cell either raw or coerced to one of the supported types. Every typed
//! getter goes through [`RowSource::cell_at`], so bounds checking is
//! identical for all of them:
//!
//! ```text
//! column >= column_count  -> ColumnOutOfBounds
//! position < 0            -> BeforeFirstRow
//! position >= row_count   -> AfterLastRow
//! ```
//!
//! Implementors only provide `row_count`, `column_names` and `cell_at`.

mod builder;
mod error;
mod row;
mod table;

pub use builder::RowBuilder;
pub use error::{CursorError, ErrorKind, ValueCount};
pub use row::Row;
pub use table::RowTable;

use crate::types::{CellType, CellValue};
use eyre::{bail, Result};

/// Positional, column-indexed read access over an ordered set of rows.
pub trait RowSource {
    fn row_count(&self) -> usize;

    /// The ordered column schema.
    fn column_names(&self) -> &[String];

    /// Returns the raw cell at `(position, column)`.
    fn cell_at(&self, position: isize, column: usize) -> Result<&CellValue>;

    fn column_count(&self) -> usize {
        self.column_names().len()
    }

    /// Index of the first column called `name`.
    fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names().iter().position(|n| n == name)
    }

    fn column_index_or_err(&self, name: &str) -> Result<usize> {
        match self.column_index(name) {
            Some(index) => Ok(index),
            None => bail!(CursorError::UnknownColumn {
                name: name.to_string(),
            }),
        }
    }

    fn column_name(&self, column: usize) -> Result<&str> {
        match self.column_names().get(column) {
            Some(name) => Ok(name.as_str()),
            None => bail!(CursorError::ColumnOutOfBounds {
                column,
                column_count: self.column_count(),
            }),
        }
    }

    fn text_at(&self, position: isize, column: usize) -> Result<String> {
        Ok(self.cell_at(position, column)?.to_text())
    }

    fn short_at(&self, position: isize, column: usize) -> Result<i16> {
        self.cell_at(position, column)?.to_short()
    }

    fn int_at(&self, position: isize, column: usize) -> Result<i32> {
        self.cell_at(position, column)?.to_int()
    }

    fn long_at(&self, position: isize, column: usize) -> Result<i64> {
        self.cell_at(position, column)?.to_long()
    }

    fn float_at(&self, position: isize, column: usize) -> Result<f32> {
        self.cell_at(position, column)?.to_float()
    }

    fn double_at(&self, position: isize, column: usize) -> Result<f64> {
        self.cell_at(position, column)?.to_double()
    }

    fn blob_at(&self, position: isize, column: usize) -> Result<Option<&[u8]>> {
        self.cell_at(position, column)?.as_blob()
    }

    fn is_null_at(&self, position: isize, column: usize) -> Result<bool> {
        Ok(self.cell_at(position, column)?.is_null())
    }

    fn type_at(&self, position: isize, column: usize) -> Result<CellType> {
        Ok(self.cell_at(position, column)?.cell_type())
    }
}
