//! # rowtable - Mutable In-Memory Row Table
//!
//! A small, growable table of dynamically-typed cells exposed through a
//! positional cursor. Callers build the table row by row and read it back
//! by position and column, with each getter coercing the stored value to
//! the type it returns.
//!
//! ## Quick Start
//!
//! ```ignore
//! use rowtable::{cells, RowSource, RowTable};
//!
//! let mut table = RowTable::new(["id", "name"]);
//! table.add_row(cells![1, "Alice"])?;
//! table.begin_row().add(2)?.add("Bob")?;
//! table.add_row_from(["3", "Carol"])?;
//!
//! while table.move_to_next() {
//!     let id = table.get_long(0)?;
//!     let name = table.get_text(1)?;
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`cursor`]: `RowSource` contract, `RowTable`, `RowBuilder`, errors
//! - [`types`]: `CellValue` and its coercion rules
//! - [`config`]: capacities and sentinel constants

#[macro_use]
mod macros;

pub mod config;
pub mod cursor;
pub mod types;

pub use cursor::{CursorError, ErrorKind, Row, RowBuilder, RowSource, RowTable, ValueCount};
pub use types::{CellType, CellValue};
