use std::fmt;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio_stream::Stream;

use crate::load::FromRow;
use crate::map::compose;
use rowcast_core::row::{Row, RowStream};
use rowcast_core::Result;

/// Collector bound for [`MappedStream::collect`].
pub trait FromMapped<A>: Extend<A> + Default {}

impl<A, T: Extend<A> + Default> FromMapped<A> for T {}

/// The asynchronous form of [`Mapped`](crate::Mapped).
///
/// Element order and content match the synchronous form. Mapping performs
/// no I/O; any suspension comes from the row source, never from mapping.
pub struct MappedStream<T, F = fn(Row) -> Result<T>> {
    rows: RowStream,
    load: F,
    _p: PhantomData<fn() -> T>,
}

impl<T, F> MappedStream<T, F>
where
    F: FnMut(Row) -> Result<T>,
{
    /// Maps rows with a caller-supplied strategy, bypassing classification.
    pub fn with(rows: RowStream, load: F) -> Self {
        Self {
            rows,
            load,
            _p: PhantomData,
        }
    }

    /// Returns the next mapped instance.
    ///
    /// Row source errors pass through unmapped.
    pub async fn next(&mut self) -> Option<Result<T>> {
        match self.rows.next().await? {
            Ok(row) => Some((self.load)(row)),
            Err(e) => Some(Err(e)),
        }
    }

    /// Collects all mapped instances.
    pub async fn collect<B>(mut self) -> Result<B>
    where
        B: FromMapped<T>,
    {
        let mut ret = B::default();

        while let Some(res) = self.next().await {
            ret.extend(Some(res?));
        }

        Ok(ret)
    }
}

impl<T, F> Stream for MappedStream<T, F>
where
    F: FnMut(Row) -> Result<T> + Unpin,
{
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let me = self.get_mut();
        match Pin::new(&mut me.rows).poll_next(cx) {
            Poll::Ready(Some(Ok(row))) => Poll::Ready(Some((me.load)(row))),
            Poll::Ready(Some(Err(e))) => Poll::Ready(Some(Err(e))),
            Poll::Ready(None) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl<T, F> fmt::Debug for MappedStream<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappedStream").finish()
    }
}

/// Maps each row of an asynchronous source to one instance of `T`.
///
/// Fatal conditions (an unmappable target shape) surface here, before any
/// row is pulled from the source.
pub fn map_stream<T>(rows: RowStream) -> Result<MappedStream<T>>
where
    T: FromRow,
{
    T::check()?;
    Ok(MappedStream {
        rows,
        load: T::from_row,
        _p: PhantomData,
    })
}

macro_rules! impl_map_stream {
    ($(#[$doc:meta])* $name:ident, $compose:ident => $($ty:ident),+) => {
        $(#[$doc])*
        pub fn $name<$($ty),+>(rows: RowStream) -> Result<MappedStream<($($ty,)+)>>
        where
            $($ty: FromRow,)+
        {
            compose::check_components(&[$($ty::SHAPE),+])?;
            $($ty::check()?;)+
            Ok(MappedStream {
                rows,
                load: compose::$compose::<$($ty),+>,
                _p: PhantomData,
            })
        }
    };
}

impl_map_stream!(
    /// Maps each row to a pair of components; the async form of
    /// [`map_rows2`](crate::map_rows2).
    map_stream2, load2 => T1, T2
);
impl_map_stream!(
    /// Maps each row to three components. See [`map_stream2`].
    map_stream3, load3 => T1, T2, T3
);
impl_map_stream!(
    /// Maps each row to four components. See [`map_stream2`].
    map_stream4, load4 => T1, T2, T3, T4
);
impl_map_stream!(
    /// Maps each row to five components. See [`map_stream2`].
    map_stream5, load5 => T1, T2, T3, T4, T5
);
