//! # Cell Types
//!
//! | Type          | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `CellValue`   | Dynamically-typed content of one cell          |
//! | `CellType`    | Runtime tag of a stored value                  |
//! | `TargetType`  | Type a getter asks a value to be read as       |
//! | `NumericTarget` | Numeric widths a value can be coerced into   |
//!
//! ```ignore
//! use rowtable::types::CellValue;
//!
//! let v = CellValue::from("42");
//! assert_eq!(v.to_int()?, 42);
//! ```

mod value;

pub use value::{CellType, CellValue, NumericTarget, TargetType};
