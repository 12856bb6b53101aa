use super::Row;

use std::{
    collections::VecDeque,
    fmt, mem,
    pin::Pin,
    task::{Context, Poll},
};
use tokio_stream::{Stream, StreamExt};

/// An asynchronous source of rows.
///
/// Rows already produced are buffered; anything else is pulled lazily from
/// the wrapped stream. Items are `Result<Row>` so driver errors pass through
/// to the mapping layer untouched.
#[derive(Default)]
pub struct RowStream {
    buffer: Buffer,
    stream: Option<DynStream>,
}

#[derive(Debug)]
struct Iter<I> {
    iter: I,
}

#[derive(Clone, Default, PartialEq)]
enum Buffer {
    #[default]
    Empty,
    One(Row),
    Many(VecDeque<Row>),
}

type DynStream = Pin<Box<dyn Stream<Item = crate::Result<Row>> + Send + 'static>>;

impl RowStream {
    pub fn from_row(row: impl Into<Row>) -> Self {
        Self {
            buffer: Buffer::One(row.into()),
            stream: None,
        }
    }

    pub fn from_stream<T: Stream<Item = crate::Result<Row>> + Send + 'static>(stream: T) -> Self {
        Self {
            buffer: Buffer::Empty,
            stream: Some(Box::pin(stream)),
        }
    }

    pub fn from_vec(rows: Vec<Row>) -> Self {
        Self {
            buffer: Buffer::Many(rows.into()),
            stream: None,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_iter<T, I>(iter: I) -> Self
    where
        T: Into<Row>,
        I: Iterator<Item = crate::Result<T>> + Send + 'static,
    {
        Self::from_stream(Iter { iter })
    }

    /// Returns the next row in the stream
    pub async fn next(&mut self) -> Option<crate::Result<Row>> {
        StreamExt::next(self).await
    }

    /// The stream will contain at least this number of rows
    pub fn min_len(&self) -> usize {
        let (ret, _) = self.size_hint();
        ret
    }

    pub async fn collect(mut self) -> crate::Result<Vec<Row>> {
        let mut ret = Vec::with_capacity(self.min_len());

        while let Some(res) = self.next().await {
            ret.push(res?);
        }

        Ok(ret)
    }

    // NOTE: this method is only used for testing purposes. It should not ever
    // be made available via the public API.
    #[cfg(test)]
    fn into_inner(self) -> (Buffer, Option<DynStream>) {
        (self.buffer, self.stream)
    }
}

impl Stream for RowStream {
    type Item = crate::Result<Row>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if let Some(next) = self.buffer.next() {
            Poll::Ready(Some(Ok(next)))
        } else if let Some(stream) = self.stream.as_mut() {
            Pin::new(stream).poll_next(cx)
        } else {
            Poll::Ready(None)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (mut low, mut high) = match &self.stream {
            Some(stream) => stream.size_hint(),
            None => (0, Some(0)),
        };

        let buffered = self.buffer.len();

        low += buffered;

        if let Some(high) = high.as_mut() {
            *high += buffered;
        }

        (low, high)
    }
}

impl From<Row> for RowStream {
    fn from(src: Row) -> Self {
        Self {
            buffer: Buffer::One(src),
            stream: None,
        }
    }
}

impl From<Vec<Row>> for RowStream {
    fn from(rows: Vec<Row>) -> Self {
        Self::from_vec(rows)
    }
}

impl<I> Unpin for Iter<I> {}

impl<T, I> Stream for Iter<I>
where
    I: Iterator<Item = crate::Result<T>>,
    T: Into<Row>,
{
    type Item = crate::Result<Row>;

    fn poll_next(mut self: Pin<&mut Self>, _: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Poll::Ready(self.iter.next().map(|res| res.map(|item| item.into())))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl fmt::Debug for RowStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowStream").finish()
    }
}

impl Buffer {
    fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::One(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    fn next(&mut self) -> Option<Row> {
        match self {
            Self::Empty => None,
            Self::One(_) => {
                let Self::One(row) = mem::take(self) else {
                    panic!()
                };
                Some(row)
            }
            Self::Many(rows) => rows.pop_front(),
        }
    }
}
