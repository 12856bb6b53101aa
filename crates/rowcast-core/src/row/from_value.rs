use super::Value;
use crate::{Error, Result};

/// Coercion from a column [`Value`] into a concrete Rust type.
///
/// Every supported scalar kind has exactly one impl; `Option<T>` absorbs
/// NULL, and `Vec<T>` absorbs array-valued columns whose elements coerce to
/// `T`. A kind mismatch is a [type conversion
/// error](crate::Error::type_conversion): the strict read paths surface it,
/// the populate path drops the value instead.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self>;
}

macro_rules! impl_scalar_conversions {
    ($($ty:ty => $variant:ident / $name:literal,)+) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(Error::type_conversion(other.kind_name(), $name)),
                    }
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_scalar_conversions! {
    bool => Bool / "bool",
    i8 => I8 / "i8",
    i16 => I16 / "i16",
    i32 => I32 / "i32",
    i64 => I64 / "i64",
    u8 => U8 / "u8",
    u16 => U16 / "u16",
    u32 => U32 / "u32",
    u64 => U64 / "u64",
    f32 => F32 / "f32",
    f64 => F64 / "f64",
    char => Char / "char",
    String => String / "String",
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => Ok(Some(T::from_value(value)?)),
        }
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(Error::type_conversion(other.kind_name(), "array")),
        }
    }
}
