//! # Row Table
//!
//! `RowTable` is a mutable, append-only-biased table of fixed-width rows
//! over an immutable list of column names. Rows enter the table through
//! one of three paths:
//!
//! | Path              | Appended            | On wrong value count        |
//! |-------------------|---------------------|-----------------------------|
//! | `begin_row`       | immediately         | extra `add` is a bounds error |
//! | `add_row`         | after length check  | argument error, no change   |
//! | `add_row_from`    | after full consume  | argument error, no change   |
//!
//! `add_row` takes ownership of the caller's boxed slice and keeps it as the
//! row's storage. `add_row_from` accepts any iterator: when the iterator
//! reports an exact length the count is checked before anything is
//! consumed, otherwise values are streamed into a fresh row and counted as
//! they arrive.
//!
//! ## Position
//!
//! The table keeps the current-row position used by the `get_*` getters.
//! It starts before the first row and is reset there by every successful
//! [`RowTable::remove`], since removal shifts the rows that follow.
//!
//! ## Thread Safety
//!
//! Mutation needs `&mut self`. Share a table across threads only behind an
//! external lock.

use super::{CursorError, Row, RowBuilder, RowSource, ValueCount};
use crate::config::{BEFORE_FIRST_ROW, DEFAULT_INITIAL_CAPACITY, MIN_INITIAL_CAPACITY};
use crate::types::{CellType, CellValue};
use eyre::{bail, Result};

#[derive(Debug, Clone)]
pub struct RowTable {
    column_names: Box<[String]>,
    rows: Vec<Row>,
    position: isize,
}

impl RowTable {
    /// Creates an empty table reserving room for the default number of rows.
    pub fn new<I, S>(column_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_capacity(column_names, DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates an empty table reserving room for `initial_capacity` rows.
    /// Capacities below one are raised to one.
    pub fn with_capacity<I, S>(column_names: I, initial_capacity: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let column_names: Box<[String]> = column_names.into_iter().map(Into::into).collect();
        let capacity = initial_capacity.max(MIN_INITIAL_CAPACITY);

        Self {
            column_names,
            rows: Vec::with_capacity(capacity),
            position: BEFORE_FIRST_ROW,
        }
    }

    /// Appends a null-filled row and returns a builder over it.
    ///
    /// The row counts towards [`row_count`](RowSource::row_count) as soon as
    /// this returns, before any value is added.
    pub fn begin_row(&mut self) -> RowBuilder<'_> {
        let width = self.column_count();
        self.rows.push(Row::nulls(width));
        let last = self.rows.len() - 1;
        tracing::trace!("opened row {} for incremental build", last);

        RowBuilder::new(self.rows[last].cells_mut())
    }

    /// Appends a row made of exactly `column_count` values.
    ///
    /// The boxed slice is moved into the table and used as the row's
    /// storage as-is. On a length mismatch the values are dropped and the
    /// table is left unchanged.
    pub fn add_row(&mut self, values: impl Into<Box<[CellValue]>>) -> Result<()> {
        let values = values.into();
        let expected = self.column_count();
        if values.len() != expected {
            tracing::debug!(
                "rejected row of {} values for {} columns",
                values.len(),
                expected
            );
            bail!(CursorError::ValueCount {
                expected,
                actual: ValueCount::Exactly(values.len()),
            });
        }

        self.rows.push(Row::from_cells(values));
        tracing::trace!("appended row {}", self.rows.len() - 1);
        Ok(())
    }

    /// Appends a row from any sequence of exactly `column_count` values.
    ///
    /// Nothing is appended unless the sequence yields exactly the right
    /// number of values.
    pub fn add_row_from<I, T>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<CellValue>,
    {
        let expected = self.column_count();
        let mut values = values.into_iter();

        if let (lower, Some(upper)) = values.size_hint() {
            if lower == upper && lower != expected {
                tracing::debug!("rejected sized row of {} values for {} columns", lower, expected);
                bail!(CursorError::ValueCount {
                    expected,
                    actual: ValueCount::Exactly(lower),
                });
            }
        }

        let mut cells = Vec::with_capacity(expected);
        for value in values.by_ref() {
            if cells.len() == expected {
                tracing::debug!("rejected streamed row with more than {} values", expected);
                bail!(CursorError::ValueCount {
                    expected,
                    actual: ValueCount::MoreThan(expected),
                });
            }
            cells.push(value.into());
        }

        if cells.len() != expected {
            tracing::debug!(
                "rejected streamed row of {} values for {} columns",
                cells.len(),
                expected
            );
            bail!(CursorError::ValueCount {
                expected,
                actual: ValueCount::Exactly(cells.len()),
            });
        }

        self.rows.push(Row::from_cells(cells.into_boxed_slice()));
        tracing::trace!("appended row {} from sequence", self.rows.len() - 1);
        Ok(())
    }

    /// Removes and returns the row at `position`, then moves the cursor
    /// before the first row.
    ///
    /// An out-of-range position is a bounds error and changes nothing,
    /// including the cursor position.
    pub fn remove(&mut self, position: usize) -> Result<Row> {
        let row_count = self.rows.len();
        if position >= row_count {
            tracing::debug!("rejected removal of row {} from {} rows", position, row_count);
            bail!(CursorError::RowOutOfBounds {
                position,
                row_count,
            });
        }

        let row = self.rows.remove(position);
        self.position = BEFORE_FIRST_ROW;
        tracing::trace!("removed row {}, {} rows left", position, self.rows.len());
        Ok(row)
    }

    pub fn rows(&self) -> impl Iterator<Item = &Row> + '_ {
        self.rows.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // Position tracking.

    pub fn position(&self) -> isize {
        self.position
    }

    /// Moves the cursor to `position`, clamping to the before-first and
    /// after-last sentinels. Returns true when the cursor lands on a row.
    pub fn move_to_position(&mut self, position: isize) -> bool {
        let row_count = self.rows.len() as isize;
        if position >= row_count {
            self.position = row_count;
            return false;
        }
        if position < 0 {
            self.position = BEFORE_FIRST_ROW;
            return false;
        }

        self.position = position;
        true
    }

    pub fn move_to_first(&mut self) -> bool {
        self.move_to_position(0)
    }

    pub fn move_to_last(&mut self) -> bool {
        self.move_to_position(self.rows.len() as isize - 1)
    }

    pub fn move_to_next(&mut self) -> bool {
        self.move_to_position(self.position.saturating_add(1))
    }

    pub fn move_to_previous(&mut self) -> bool {
        self.move_to_position(self.position.saturating_sub(1))
    }

    pub fn move_by(&mut self, offset: isize) -> bool {
        self.move_to_position(self.position.saturating_add(offset))
    }

    pub fn is_before_first(&self) -> bool {
        self.rows.is_empty() || self.position == BEFORE_FIRST_ROW
    }

    pub fn is_after_last(&self) -> bool {
        self.rows.is_empty() || self.position >= self.rows.len() as isize
    }

    pub fn is_first(&self) -> bool {
        !self.rows.is_empty() && self.position == 0
    }

    pub fn is_last(&self) -> bool {
        !self.rows.is_empty() && self.position == self.rows.len() as isize - 1
    }

    // Current-row getters.

    pub fn get(&self, column: usize) -> Result<&CellValue> {
        self.cell_at(self.position, column)
    }

    pub fn get_text(&self, column: usize) -> Result<String> {
        self.text_at(self.position, column)
    }

    pub fn get_short(&self, column: usize) -> Result<i16> {
        self.short_at(self.position, column)
    }

    pub fn get_int(&self, column: usize) -> Result<i32> {
        self.int_at(self.position, column)
    }

    pub fn get_long(&self, column: usize) -> Result<i64> {
        self.long_at(self.position, column)
    }

    pub fn get_float(&self, column: usize) -> Result<f32> {
        self.float_at(self.position, column)
    }

    pub fn get_double(&self, column: usize) -> Result<f64> {
        self.double_at(self.position, column)
    }

    pub fn get_blob(&self, column: usize) -> Result<Option<&[u8]>> {
        self.blob_at(self.position, column)
    }

    pub fn get_type(&self, column: usize) -> Result<CellType> {
        self.type_at(self.position, column)
    }

    pub fn is_null(&self, column: usize) -> Result<bool> {
        self.is_null_at(self.position, column)
    }
}

impl RowSource for RowTable {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_names(&self) -> &[String] {
        &self.column_names
    }

    fn cell_at(&self, position: isize, column: usize) -> Result<&CellValue> {
        let column_count = self.column_names.len();
        if column >= column_count {
            bail!(CursorError::ColumnOutOfBounds {
                column,
                column_count,
            });
        }
        if position < 0 {
            bail!(CursorError::BeforeFirstRow);
        }

        match self.rows.get(position as usize) {
            Some(row) => Ok(&row.cells()[column]),
            None => bail!(CursorError::AfterLastRow {
                position,
                row_count: self.rows.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cells;
    use crate::cursor::ErrorKind;

    fn cursor_error(report: eyre::Report) -> CursorError {
        report
            .downcast::<CursorError>()
            .expect("expected a CursorError")
    }

    fn people() -> RowTable {
        let mut table = RowTable::new(["id", "name"]);
        table.add_row(cells![1, "Alice"]).unwrap();
        table.add_row(cells![2, "Bob"]).unwrap();
        table
    }

    #[test]
    fn new_table_is_empty_and_before_first() {
        let table = RowTable::new(["a", "b", "c"]);
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.position(), BEFORE_FIRST_ROW);
        assert!(table.is_before_first());
        assert!(table.is_after_last());
    }

    #[test]
    fn capacity_below_one_is_clamped() {
        let table = RowTable::with_capacity(["a"], 0);
        assert!(table.rows.capacity() >= 1);

        let table = RowTable::new(["a"]);
        assert!(table.rows.capacity() >= DEFAULT_INITIAL_CAPACITY);
    }

    #[test]
    fn begin_row_counts_before_any_add() {
        let mut table = RowTable::new(["a", "b", "c"]);
        {
            let mut builder = table.begin_row();
            builder.add(7).unwrap();
        }
        assert_eq!(table.row_count(), 1);
        assert!(!table.is_empty());
        assert_eq!(table.cell_at(0, 0).unwrap(), &CellValue::Int(7));
        assert!(table.is_null_at(0, 1).unwrap());
        assert!(table.is_null_at(0, 2).unwrap());
    }

    #[test]
    fn begin_row_rejects_one_add_too_many() {
        let mut table = RowTable::new(["a", "b"]);
        let mut builder = table.begin_row();
        builder.add("x").unwrap().add("y").unwrap();

        let err = cursor_error(builder.add("z").unwrap_err());
        assert_eq!(err, CursorError::NoColumnsLeft { column_count: 2 });
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.text_at(0, 1).unwrap(), "y");
    }

    #[test]
    fn add_row_keeps_the_moved_storage() {
        let mut table = RowTable::new(["a", "b"]);
        let cells: Box<[CellValue]> = cells![1, 2].into_boxed_slice();
        let ptr = cells.as_ptr();
        table.add_row(cells).unwrap();

        let stored = table.rows().next().unwrap().cells();
        assert!(std::ptr::eq(stored.as_ptr(), ptr));
    }

    #[test]
    fn add_row_accepts_arrays() {
        let mut table = RowTable::new(["a", "b"]);
        table
            .add_row([CellValue::Int(1), CellValue::from("x")])
            .unwrap();
        assert_eq!(table.text_at(0, 1).unwrap(), "x");
    }

    #[test]
    fn add_row_with_wrong_count_leaves_table_unchanged() {
        let mut table = people();

        let err = cursor_error(table.add_row(cells![3]).unwrap_err());
        assert_eq!(
            err,
            CursorError::ValueCount {
                expected: 2,
                actual: ValueCount::Exactly(1),
            }
        );

        let err = cursor_error(table.add_row(cells![3, "Carol", true]).unwrap_err());
        assert_eq!(
            err,
            CursorError::ValueCount {
                expected: 2,
                actual: ValueCount::Exactly(3),
            }
        );
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn add_row_from_sized_sequence() {
        let mut table = RowTable::new(["a", "b", "c"]);
        table.add_row_from(vec![1, 2, 3]).unwrap();
        assert_eq!(table.long_at(0, 2).unwrap(), 3);

        let err = cursor_error(table.add_row_from(vec![1, 2]).unwrap_err());
        assert_eq!(
            err,
            CursorError::ValueCount {
                expected: 3,
                actual: ValueCount::Exactly(2),
            }
        );
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn add_row_from_unsized_stream_too_long() {
        let mut table = RowTable::new(["a", "b"]);
        let stream = (0i64..).take_while(|n| *n < 5).map(|n| n * 10);

        let err = cursor_error(table.add_row_from(stream).unwrap_err());
        assert_eq!(
            err,
            CursorError::ValueCount {
                expected: 2,
                actual: ValueCount::MoreThan(2),
            }
        );
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn add_row_from_unsized_stream_too_short() {
        let mut table = RowTable::new(["a", "b", "c"]);
        let stream = ["x", "y"].into_iter().filter(|_| true);

        let err = cursor_error(table.add_row_from(stream).unwrap_err());
        assert_eq!(
            err,
            CursorError::ValueCount {
                expected: 3,
                actual: ValueCount::Exactly(2),
            }
        );
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn add_row_from_unsized_stream_exact() {
        let mut table = RowTable::new(["a", "b"]);
        let stream = "7,8".split(',');
        table.add_row_from(stream).unwrap();
        assert_eq!(table.int_at(0, 0).unwrap(), 7);
        assert_eq!(table.int_at(0, 1).unwrap(), 8);
    }

    #[test]
    fn zero_column_table_rejects_nonempty_rows() {
        let mut table = RowTable::new(Vec::<String>::new());
        assert!(table.add_row(cells![1]).is_err());
        assert!(table.add_row_from([1]).is_err());
        table.add_row(Vec::<CellValue>::new()).unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn remove_shifts_rows_and_resets_position() {
        let mut table = people();
        assert!(table.move_to_last());

        let removed = table.remove(0).unwrap();
        assert_eq!(removed.get(1), Some(&CellValue::from("Alice")));
        assert_eq!(removed.into_cells().into_vec(), cells![1, "Alice"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.position(), BEFORE_FIRST_ROW);
        assert_eq!(table.long_at(0, 0).unwrap(), 2);
    }

    #[test]
    fn remove_out_of_range_changes_nothing() {
        let mut table = people();
        table.move_to_first();

        let err = cursor_error(table.remove(2).unwrap_err());
        assert_eq!(
            err,
            CursorError::RowOutOfBounds {
                position: 2,
                row_count: 2,
            }
        );
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.position(), 0);
    }

    #[test]
    fn cell_at_checks_column_then_position() {
        let table = people();

        let err = cursor_error(table.cell_at(-1, 5).unwrap_err());
        assert_eq!(
            err,
            CursorError::ColumnOutOfBounds {
                column: 5,
                column_count: 2,
            }
        );
        assert_eq!(
            cursor_error(table.cell_at(-1, 0).unwrap_err()),
            CursorError::BeforeFirstRow
        );
        assert_eq!(
            cursor_error(table.cell_at(2, 0).unwrap_err()),
            CursorError::AfterLastRow {
                position: 2,
                row_count: 2,
            }
        );
    }

    #[test]
    fn cursor_walks_rows_in_insertion_order() {
        let mut table = people();
        let mut names = Vec::new();
        while table.move_to_next() {
            names.push(table.get_text(1).unwrap());
        }
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert!(table.is_after_last());
        assert_eq!(table.position(), 2);

        assert!(table.move_to_previous());
        assert!(table.is_last());
        assert!(!table.move_by(-5));
        assert!(table.is_before_first());
    }

    #[test]
    fn extreme_offsets_clamp_instead_of_overflowing() {
        let mut table = people();
        assert!(table.move_to_last());

        assert!(!table.move_by(isize::MAX));
        assert_eq!(table.position(), 2);
        assert!(table.is_after_last());

        assert!(table.move_to_first());
        assert!(!table.move_by(isize::MIN));
        assert_eq!(table.position(), BEFORE_FIRST_ROW);

        assert!(!table.move_by(isize::MIN));
        assert!(!table.move_to_previous());
        assert_eq!(table.position(), BEFORE_FIRST_ROW);

        assert!(!table.move_to_position(isize::MAX));
        assert!(!table.move_to_next());
        assert_eq!(table.position(), 2);
    }

    #[test]
    fn current_row_getters_use_the_position() {
        let mut table = RowTable::new(["n", "s", "b"]);
        table.add_row(cells!["12", 3.5, vec![1u8, 2]]).unwrap();

        let err = cursor_error(table.get_int(0).unwrap_err());
        assert_eq!(err.kind(), ErrorKind::Bounds);

        assert!(table.move_to_first());
        assert!(table.is_first());
        assert_eq!(table.get_short(0).unwrap(), 12);
        assert_eq!(table.get_int(0).unwrap(), 12);
        assert_eq!(table.get_long(0).unwrap(), 12);
        assert_eq!(table.get_float(1).unwrap(), 3.5);
        assert_eq!(table.get_double(1).unwrap(), 3.5);
        assert_eq!(table.get_int(1).unwrap(), 3);
        assert_eq!(table.get_blob(2).unwrap(), Some(&[1u8, 2][..]));
        assert_eq!(table.get_type(2).unwrap(), CellType::Blob);
        assert!(!table.is_null(0).unwrap());
        assert_eq!(table.get(0).unwrap(), &CellValue::from("12"));
    }

    #[test]
    fn column_lookup_by_name() {
        let table = people();
        assert_eq!(table.column_index("name"), Some(1));
        assert_eq!(table.column_index("missing"), None);
        assert_eq!(table.column_name(0).unwrap(), "id");
        assert_eq!(
            cursor_error(table.column_index_or_err("missing").unwrap_err()),
            CursorError::UnknownColumn {
                name: "missing".to_string(),
            }
        );
        assert_eq!(table.column_names(), &["id".to_string(), "name".to_string()]);
    }
}
