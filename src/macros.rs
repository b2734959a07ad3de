//! # Internal Macros
//!
//! ## cells!
//!
//! Builds a `Vec<CellValue>` from heterogeneous values, converting each one
//! through `CellValue::from`.
//!
//! ```ignore
//! let row = cells![1, "Alice", 3.5, None::<i32>];
//! table.add_row(row)?;
//! ```

/// Builds a `Vec<CellValue>` from values convertible into `CellValue`.
#[macro_export]
macro_rules! cells {
    () => {
        ::std::vec::Vec::<$crate::types::CellValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::types::CellValue::from($value)),+]
    };
}
