use crate::load::{FromRow, Shape};
use rowcast_core::{row::Row, Error, Result};

/// Components within one multi-component read must be uniformly all-scalar
/// or all non-scalar; a partial overlap has no coherent column layout.
pub(crate) fn check_components(shapes: &[Shape]) -> Result<()> {
    let scalars = shapes
        .iter()
        .filter(|shape| matches!(shape, Shape::Scalar))
        .count();
    if scalars != 0 && scalars != shapes.len() {
        return Err(Error::multiple_mappings());
    }
    Ok(())
}

/// Takes the next `width` columns off the front of `row`.
fn take_component(row: &mut Row, width: usize) -> Row {
    let rest = row.split_off(width);
    std::mem::replace(row, rest)
}

// One generic routine per arity: the row's columns sub-divide across
// components in declared order, each component consuming its own width and
// loading by its own strategy.
macro_rules! impl_compose {
    ($name:ident => $($ty:ident),+) => {
        pub(crate) fn $name<$($ty: FromRow),+>(mut row: Row) -> Result<($($ty,)+)> {
            Ok(($(
                $ty::from_row(take_component(&mut row, $ty::width()))?,
            )+))
        }
    };
}

impl_compose!(load2 => T1, T2);
impl_compose!(load3 => T1, T2, T3);
impl_compose!(load4 => T1, T2, T3, T4);
impl_compose!(load5 => T1, T2, T3, T4, T5);
