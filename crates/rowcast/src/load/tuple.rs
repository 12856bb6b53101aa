use super::{FromRow, Shape};
use rowcast_core::row::{FromValue, Row, Value};
use rowcast_core::Result;

// Tuples of scalars construct positionally: field i takes column i. One
// macro covers every arity instead of five hand-written impls.
macro_rules! impl_from_row_tuple {
    ($len:expr => $($ty:ident),+) => {
        impl<$($ty),+> FromRow for ($($ty,)+)
        where
            $($ty: FromValue + 'static,)+
        {
            const SHAPE: Shape = Shape::Tuple;

            fn width() -> usize {
                $len
            }

            fn from_row(row: Row) -> Result<Self> {
                let mut values = row.into_values();
                Ok(($(
                    <$ty as FromValue>::from_value(values.next().unwrap_or(Value::Null))?,
                )+))
            }
        }
    };
}

impl_from_row_tuple!(1 => T1);
impl_from_row_tuple!(2 => T1, T2);
impl_from_row_tuple!(3 => T1, T2, T3);
impl_from_row_tuple!(4 => T1, T2, T3, T4);
impl_from_row_tuple!(5 => T1, T2, T3, T4, T5);
