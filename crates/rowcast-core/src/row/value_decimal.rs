use rust_decimal::Decimal;

use super::{FromValue, Value};
use crate::{Error, Result};

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl FromValue for Decimal {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Decimal(value) => Ok(value),
            other => Err(Error::type_conversion(other.kind_name(), "Decimal")),
        }
    }
}
