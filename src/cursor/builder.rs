//! Incremental row construction.
//!
//! The row a builder fills is already part of the table when the builder is
//! handed out, so abandoning a builder part way through leaves a row whose
//! remaining cells are null.

use super::CursorError;
use crate::types::CellValue;
use eyre::{bail, Result};

/// Fills a freshly appended row left to right, one column per
/// [`add`](RowBuilder::add) call.
#[derive(Debug)]
pub struct RowBuilder<'a> {
    row: &'a mut [CellValue],
    index: usize,
}

impl<'a> RowBuilder<'a> {
    pub(crate) fn new(row: &'a mut [CellValue]) -> Self {
        Self { row, index: 0 }
    }

    /// Sets the next column value of the row.
    ///
    /// Fails with [`CursorError::NoColumnsLeft`] once every column has been
    /// set; the row keeps the values already written.
    pub fn add(&mut self, value: impl Into<CellValue>) -> Result<&mut Self> {
        let column_count = self.row.len();
        if self.index == column_count {
            bail!(CursorError::NoColumnsLeft { column_count });
        }

        self.row[self.index] = value.into();
        self.index += 1;
        Ok(self)
    }

    /// Number of columns set so far.
    pub fn filled(&self) -> usize {
        self.index
    }

    /// Number of columns still unset.
    pub fn remaining(&self) -> usize {
        self.row.len() - self.index
    }
}
