//! # Row Table Constants
//!
//! Values shared by the table, the row builder and the typed getters.
//!
//! ```text
//! MIN_INITIAL_CAPACITY (1)
//!       │
//!       └─> DEFAULT_INITIAL_CAPACITY (16, must be >=)
//!             Caller-supplied capacities below the minimum are clamped up.
//!
//! BEFORE_FIRST_ROW (-1)
//!       The cursor position a fresh table starts at and the position
//!       every successful removal resets to.
//! ```

/// Rows reserved up front when no capacity is given.
pub const DEFAULT_INITIAL_CAPACITY: usize = 16;

/// Smallest capacity a table is ever created with.
pub const MIN_INITIAL_CAPACITY: usize = 1;

const _: () = assert!(
    DEFAULT_INITIAL_CAPACITY >= MIN_INITIAL_CAPACITY,
    "DEFAULT_INITIAL_CAPACITY must not be below MIN_INITIAL_CAPACITY"
);

/// Cursor position meaning "before the first row".
pub const BEFORE_FIRST_ROW: isize = -1;

const _: () = assert!(BEFORE_FIRST_ROW < 0, "BEFORE_FIRST_ROW must be negative");

/// Text rendering of a null cell.
pub const NULL_TEXT: &str = "null";

/// Prefix used when rendering blob cells as hex text.
pub const BLOB_TEXT_PREFIX: &str = "\\x";
