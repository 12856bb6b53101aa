use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;

use super::{FromRow, Shape};
use rowcast_core::row::{FromValue, Row, Value};
use rowcast_core::Result;

// Scalars read the first column directly; there is no name matching and no
// caching on this path. `Option<T>` is a scalar too (NULL becomes `None`).
macro_rules! impl_from_row_scalar {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromRow for $ty {
            const SHAPE: Shape = Shape::Scalar;

            fn width() -> usize {
                1
            }

            fn from_row(row: Row) -> Result<Self> {
                let mut values = row.into_values();
                FromValue::from_value(values.next().unwrap_or(Value::Null))
            }
        }

        impl FromRow for Option<$ty> {
            const SHAPE: Shape = Shape::Scalar;

            fn width() -> usize {
                1
            }

            fn from_row(row: Row) -> Result<Self> {
                let mut values = row.into_values();
                FromValue::from_value(values.next().unwrap_or(Value::Null))
            }
        }
    )+};
}

impl_from_row_scalar!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    Decimal,
    char,
    String,
    NaiveDate,
    NaiveTime,
    NaiveDateTime,
    DateTime<Utc>,
);
