//! Errors raised by the row table and its cursor getters.
//!
//! Every fallible operation returns `eyre::Result`; the underlying report
//! always wraps a [`CursorError`], so callers that need to branch on the
//! failure can `downcast_ref::<CursorError>()` and inspect [`ErrorKind`].

use crate::types::{CellType, TargetType};
use std::fmt;

/// Broad classification of a [`CursorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A row position or column index outside the table.
    Bounds,
    /// A bulk add with the wrong number of values.
    Argument,
    /// Stored text that does not parse as the requested number.
    Format,
    /// A stored value that cannot be read as the requested type.
    Type,
}

/// How many values a failed bulk add actually produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueCount {
    Exactly(usize),
    /// A stream produced at least one value past the column count and was
    /// abandoned without being drained.
    MoreThan(usize),
}

impl fmt::Display for ValueCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueCount::Exactly(n) => write!(f, "{}", n),
            ValueCount::MoreThan(n) => write!(f, "more than {}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorError {
    ColumnOutOfBounds { column: usize, column_count: usize },
    BeforeFirstRow,
    AfterLastRow { position: isize, row_count: usize },
    RowOutOfBounds { position: usize, row_count: usize },
    NoColumnsLeft { column_count: usize },
    ValueCount { expected: usize, actual: ValueCount },
    UnknownColumn { name: String },
    Format { text: String, target: TargetType },
    Type { found: CellType, target: TargetType },
}

impl CursorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CursorError::ColumnOutOfBounds { .. }
            | CursorError::BeforeFirstRow
            | CursorError::AfterLastRow { .. }
            | CursorError::RowOutOfBounds { .. }
            | CursorError::NoColumnsLeft { .. } => ErrorKind::Bounds,
            CursorError::ValueCount { .. } | CursorError::UnknownColumn { .. } => {
                ErrorKind::Argument
            }
            CursorError::Format { .. } => ErrorKind::Format,
            CursorError::Type { .. } => ErrorKind::Type,
        }
    }
}

impl fmt::Display for CursorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorError::ColumnOutOfBounds {
                column,
                column_count,
            } => write!(
                f,
                "requested column {}, # of columns: {}",
                column, column_count
            ),
            CursorError::BeforeFirstRow => write!(f, "before first row"),
            CursorError::AfterLastRow {
                position,
                row_count,
            } => write!(
                f,
                "after last row: position {}, # of rows: {}",
                position, row_count
            ),
            CursorError::RowOutOfBounds {
                position,
                row_count,
            } => write!(
                f,
                "row {} out of bounds, # of rows: {}",
                position, row_count
            ),
            CursorError::NoColumnsLeft { column_count } => {
                write!(f, "no more columns left: row has {} columns", column_count)
            }
            CursorError::ValueCount { expected, actual } => write!(
                f,
                "column count = {}, value count = {}",
                expected, actual
            ),
            CursorError::UnknownColumn { name } => write!(f, "no column named '{}'", name),
            CursorError::Format { text, target } => {
                write!(f, "cannot parse text '{}' as {}", text, target)
            }
            CursorError::Type { found, target } => {
                write!(f, "cannot read {} value as {}", found, target)
            }
        }
    }
}

impl std::error::Error for CursorError {}
