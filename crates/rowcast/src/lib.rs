mod comment;
pub use comment::CommentHeader;

mod entity;
pub use entity::{Descriptor, Entity, FieldBinding};

mod load;
pub use load::{FromRow, Shape};

pub mod map;

mod mapped;
pub use mapped::{map_rows, map_rows2, map_rows3, map_rows4, map_rows5, Mapped};

mod stream;
pub use stream::{
    map_stream, map_stream2, map_stream3, map_stream4, map_stream5, FromMapped, MappedStream,
};

pub use rowcast_core::row::{FromValue, Row, RowStream, ScalarKind, Value};
pub use rowcast_core::{bail, err, row, Error, Result};

pub use rowcast_macros::FromRow;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::entity::{Descriptor, Entity, FieldBinding};
    pub use crate::load::{FromRow, Shape};
    pub use crate::map::materialize;
    pub use rowcast_core::row::{FromValue, Row, Value};
    pub use rowcast_core::{Error, Result};
}
