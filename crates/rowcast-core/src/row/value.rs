use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;

use super::ScalarKind;

/// A single column value.
///
/// This is the closed union of every value kind the mapper understands: the
/// database NULL, one scalar case per supported kind, and typed arrays for
/// array-valued columns. Adding a kind means adding a variant here and a
/// coercion in [`FromValue`](super::FromValue); both are checked
/// exhaustively.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed integers
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),

    /// Unsigned integers
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),

    /// Floating point
    F32(f32),
    F64(f64),

    /// Fixed-precision decimal
    Decimal(Decimal),

    /// Single character
    Char(char),

    /// String value
    String(String),

    /// Calendar date
    Date(NaiveDate),

    /// Time of day
    Time(NaiveTime),

    /// Date and time without an offset
    DateTime(NaiveDateTime),

    /// Date and time in UTC
    Timestamp(DateTime<Utc>),

    /// An array-valued column; elements share one scalar kind
    List(Vec<Value>),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The scalar kind of this value; `None` for `Null` and `List`.
    pub const fn kind(&self) -> Option<ScalarKind> {
        Some(match self {
            Self::Null | Self::List(_) => return None,
            Self::Bool(_) => ScalarKind::Bool,
            Self::I8(_) => ScalarKind::I8,
            Self::I16(_) => ScalarKind::I16,
            Self::I32(_) => ScalarKind::I32,
            Self::I64(_) => ScalarKind::I64,
            Self::U8(_) => ScalarKind::U8,
            Self::U16(_) => ScalarKind::U16,
            Self::U32(_) => ScalarKind::U32,
            Self::U64(_) => ScalarKind::U64,
            Self::F32(_) => ScalarKind::F32,
            Self::F64(_) => ScalarKind::F64,
            Self::Decimal(_) => ScalarKind::Decimal,
            Self::Char(_) => ScalarKind::Char,
            Self::String(_) => ScalarKind::String,
            Self::Date(_) => ScalarKind::Date,
            Self::Time(_) => ScalarKind::Time,
            Self::DateTime(_) => ScalarKind::DateTime,
            Self::Timestamp(_) => ScalarKind::Timestamp,
        })
    }

    /// The variant name, for diagnostics and conversion errors.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::U8(_) => "U8",
            Self::U16(_) => "U16",
            Self::U32(_) => "U32",
            Self::U64(_) => "U64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::Decimal(_) => "Decimal",
            Self::Char(_) => "Char",
            Self::String(_) => "String",
            Self::Date(_) => "Date",
            Self::Time(_) => "Time",
            Self::DateTime(_) => "DateTime",
            Self::Timestamp(_) => "Timestamp",
            Self::List(_) => "List",
        }
    }

}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    Self: From<T>,
{
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Self::from).collect())
    }
}
