use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::{FromValue, Value};
use crate::{Error, Result};

macro_rules! impl_chrono_conversions {
    ($chrono:ty, $variant:ident, $name:literal) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$variant(value)
            }
        }

        impl FromValue for $chrono {
            fn from_value(value: Value) -> Result<Self> {
                match value {
                    Value::$variant(value) => Ok(value),
                    other => Err(Error::type_conversion(other.kind_name(), $name)),
                }
            }
        }
    };
}

impl_chrono_conversions!(NaiveDate, Date, "NaiveDate");
impl_chrono_conversions!(NaiveTime, Time, "NaiveTime");
impl_chrono_conversions!(NaiveDateTime, DateTime, "NaiveDateTime");
impl_chrono_conversions!(DateTime<Utc>, Timestamp, "DateTime<Utc>");
