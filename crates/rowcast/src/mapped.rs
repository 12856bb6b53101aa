use std::fmt;
use std::marker::PhantomData;

use crate::load::FromRow;
use crate::map::compose;
use rowcast_core::{row::Row, Result};

/// A lazily mapped, single-pass, forward-only sequence of instances.
///
/// Wraps a row source and maps each row in source order; consuming it again
/// requires re-executing the source query.
pub struct Mapped<I, T, F = fn(Row) -> Result<T>> {
    rows: I,
    load: F,
    _p: PhantomData<fn() -> T>,
}

impl<I, T, F> Mapped<I, T, F>
where
    I: Iterator<Item = Row>,
    F: FnMut(Row) -> Result<T>,
{
    /// Maps rows with a caller-supplied strategy, bypassing classification.
    ///
    /// This is the escape hatch for shapes the derive cannot express.
    pub fn with(rows: impl IntoIterator<IntoIter = I>, load: F) -> Self {
        Self {
            rows: rows.into_iter(),
            load,
            _p: PhantomData,
        }
    }
}

impl<I, T, F> Iterator for Mapped<I, T, F>
where
    I: Iterator<Item = Row>,
    F: FnMut(Row) -> Result<T>,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        Some((self.load)(self.rows.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<I, T, F> fmt::Debug for Mapped<I, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapped").finish()
    }
}

/// Maps each row to one instance of `T`.
///
/// Fatal conditions (an unmappable target shape) surface here, before any
/// row is read.
pub fn map_rows<T, I>(rows: I) -> Result<Mapped<I::IntoIter, T>>
where
    T: FromRow,
    I: IntoIterator<Item = Row>,
{
    T::check()?;
    Ok(Mapped {
        rows: rows.into_iter(),
        load: T::from_row,
        _p: PhantomData,
    })
}

macro_rules! impl_map_rows {
    ($(#[$doc:meta])* $name:ident, $compose:ident => $($ty:ident),+) => {
        $(#[$doc])*
        pub fn $name<$($ty,)+ I>(rows: I) -> Result<Mapped<I::IntoIter, ($($ty,)+)>>
        where
            $($ty: FromRow,)+
            I: IntoIterator<Item = Row>,
        {
            compose::check_components(&[$($ty::SHAPE),+])?;
            $($ty::check()?;)+
            Ok(Mapped {
                rows: rows.into_iter(),
                load: compose::$compose::<$($ty),+>,
                _p: PhantomData,
            })
        }
    };
}

impl_map_rows!(
    /// Maps each row to a pair of components.
    ///
    /// Components must be uniformly all-scalar or all non-scalar; a mixture
    /// fails here with a multiple-mappings error, before any row is read.
    map_rows2, load2 => T1, T2
);
impl_map_rows!(
    /// Maps each row to three components. See [`map_rows2`].
    map_rows3, load3 => T1, T2, T3
);
impl_map_rows!(
    /// Maps each row to four components. See [`map_rows2`].
    map_rows4, load4 => T1, T2, T3, T4
);
impl_map_rows!(
    /// Maps each row to five components. See [`map_rows2`].
    map_rows5, load5 => T1, T2, T3, T4, T5
);
