//! # Cell Values
//!
//! `CellValue` is the dynamically-typed content of a single table cell. The
//! table stores whatever the caller hands it and only interprets the value
//! when a typed getter asks for it.
//!
//! ## Coercion Rules
//!
//! | Stored    | `to_text`           | numeric getters                  |
//! |-----------|---------------------|----------------------------------|
//! | `Null`    | `"null"`            | type error                       |
//! | `Text`    | the text itself     | parsed, format error on failure  |
//! | `Bool`    | `"true"`/`"false"`  | type error                       |
//! | `Int`     | decimal digits      | `as` cast (integers wrap)        |
//! | `Float`   | `1.0`, `2.5`, ...   | `as` cast (saturating to ints)   |
//! | `Blob`    | `\x` + lowercase hex| type error                       |
//!
//! Integer text parsing is strict (`" 42"` is rejected); float parsing trims
//! surrounding whitespace first.
//!
//! ## Large Magnitudes
//!
//! Floats render through Rust's `{:?}` formatting, so `1e20` renders as
//! `"1e20"` rather than a `1.0E20`-style mantissa/exponent form. Narrowing a
//! float into `i16` saturates at `i16::MIN`/`i16::MAX` directly instead of
//! first passing through a 32-bit integer and truncating. Both only show for
//! values outside the target's range.

use crate::config::{BLOB_TEXT_PREFIX, NULL_TEXT};
use crate::cursor::CursorError;
use eyre::{bail, Result};
use std::fmt;

/// Dynamically-typed cell content.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Null,
    Text(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    Blob(Vec<u8>),
}

/// Runtime tag of a stored [`CellValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellType {
    Null,
    Text,
    Bool,
    Int,
    Float,
    Blob,
}

impl CellType {
    pub fn name(&self) -> &'static str {
        match self {
            CellType::Null => "null",
            CellType::Text => "text",
            CellType::Bool => "bool",
            CellType::Int => "int",
            CellType::Float => "float",
            CellType::Blob => "blob",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Type a getter asked a cell to be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Short,
    Int,
    Long,
    Float,
    Double,
    Blob,
}

impl TargetType {
    pub fn name(&self) -> &'static str {
        match self {
            TargetType::Short => "i16",
            TargetType::Int => "i32",
            TargetType::Long => "i64",
            TargetType::Float => "f32",
            TargetType::Double => "f64",
            TargetType::Blob => "blob",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Numeric types a cell can be coerced into.
pub trait NumericTarget: Sized {
    const TARGET: TargetType;

    fn from_int(value: i64) -> Self;
    fn from_float(value: f64) -> Self;
    fn parse_text(text: &str) -> Option<Self>;
}

macro_rules! integer_target {
    ($($ty:ty => $target:ident),* $(,)?) => {
        $(
            impl NumericTarget for $ty {
                const TARGET: TargetType = TargetType::$target;

                #[inline]
                fn from_int(value: i64) -> Self {
                    value as $ty
                }

                #[inline]
                fn from_float(value: f64) -> Self {
                    value as $ty
                }

                fn parse_text(text: &str) -> Option<Self> {
                    text.parse::<$ty>().ok()
                }
            }
        )*
    };
}

macro_rules! float_target {
    ($($ty:ty => $target:ident),* $(,)?) => {
        $(
            impl NumericTarget for $ty {
                const TARGET: TargetType = TargetType::$target;

                #[inline]
                fn from_int(value: i64) -> Self {
                    value as $ty
                }

                #[inline]
                fn from_float(value: f64) -> Self {
                    value as $ty
                }

                fn parse_text(text: &str) -> Option<Self> {
                    text.trim().parse::<$ty>().ok()
                }
            }
        )*
    };
}

integer_target!(i16 => Short, i32 => Int, i64 => Long);
float_target!(f32 => Float, f64 => Double);

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn cell_type(&self) -> CellType {
        match self {
            CellValue::Null => CellType::Null,
            CellValue::Text(_) => CellType::Text,
            CellValue::Bool(_) => CellType::Bool,
            CellValue::Int(_) => CellType::Int,
            CellValue::Float(_) => CellType::Float,
            CellValue::Blob(_) => CellType::Blob,
        }
    }

    /// Renders any value as text. Never fails.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Null => NULL_TEXT.to_string(),
            CellValue::Text(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => format!("{:?}", f),
            CellValue::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{:02x}", byte)).collect();
                format!("{}{}", BLOB_TEXT_PREFIX, hex)
            }
        }
    }

    /// Coerces the value into a numeric type: text is parsed, numbers are
    /// narrowed or widened. Null, bool and blob cells are type errors.
    pub fn coerce<T: NumericTarget>(&self) -> Result<T> {
        match self {
            CellValue::Int(i) => Ok(T::from_int(*i)),
            CellValue::Float(f) => Ok(T::from_float(*f)),
            CellValue::Text(s) => match T::parse_text(s) {
                Some(parsed) => Ok(parsed),
                None => bail!(CursorError::Format {
                    text: s.clone(),
                    target: T::TARGET,
                }),
            },
            CellValue::Null | CellValue::Bool(_) | CellValue::Blob(_) => {
                bail!(CursorError::Type {
                    found: self.cell_type(),
                    target: T::TARGET,
                })
            }
        }
    }

    pub fn to_short(&self) -> Result<i16> {
        self.coerce()
    }

    pub fn to_int(&self) -> Result<i32> {
        self.coerce()
    }

    pub fn to_long(&self) -> Result<i64> {
        self.coerce()
    }

    pub fn to_float(&self) -> Result<f32> {
        self.coerce()
    }

    pub fn to_double(&self) -> Result<f64> {
        self.coerce()
    }

    /// Borrows blob bytes; `None` for null, a type error for anything else.
    pub fn as_blob(&self) -> Result<Option<&[u8]>> {
        match self {
            CellValue::Null => Ok(None),
            CellValue::Blob(b) => Ok(Some(b.as_slice())),
            other => bail!(CursorError::Type {
                found: other.cell_type(),
                target: TargetType::Blob,
            }),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for CellValue {
                fn from(v: $ty) -> Self {
                    CellValue::Int(i64::from(v))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for CellValue {
    fn from(v: f32) -> Self {
        CellValue::Float(f64::from(v))
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

impl From<bool> for CellValue {
    fn from(v: bool) -> Self {
        CellValue::Bool(v)
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<Vec<u8>> for CellValue {
    fn from(v: Vec<u8>) -> Self {
        CellValue::Blob(v)
    }
}

impl From<&[u8]> for CellValue {
    fn from(v: &[u8]) -> Self {
        CellValue::Blob(v.to_vec())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Null, Into::into)
    }
}
