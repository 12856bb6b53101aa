#[macro_use]
mod macros;

mod error;
pub use error::Error;

pub mod row;

/// A Result type alias that uses rowcast's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
