mod scalar;
mod tuple;

use rowcast_core::{row::Row, Result};

/// Mapping strategy classification for a target type.
///
/// Every mappable type falls into exactly one bucket, fixed for the life of
/// the process: scalars read directly with no caching, tuples of scalars
/// construct positionally, and objects go through the binding cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Tuple,
    Object,
}

/// A type that can be materialized from one row.
///
/// Scalars and tuples of scalars are covered here; structs get their impl
/// from `#[derive(FromRow)]`.
pub trait FromRow: Sized + 'static {
    /// Strategy classification for this type.
    const SHAPE: Shape;

    /// Number of leading columns one instance consumes in a multi-component
    /// read.
    fn width() -> usize;

    /// Verifies the type can be constructed at all.
    ///
    /// Runs before any row is read, so an unmappable shape never produces a
    /// partially constructed instance.
    fn check() -> Result<()> {
        Ok(())
    }

    /// Materializes one instance from one row.
    fn from_row(row: Row) -> Result<Self>;
}
