use super::Error;

/// Error when a target type offers no way to construct an instance.
#[derive(Debug)]
pub(super) struct ConstructionError {
    pub(super) type_name: &'static str,
}

impl std::error::Error for ConstructionError {}

impl core::fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot construct {}: no usable constructor",
            self.type_name
        )
    }
}

impl Error {
    /// Creates a construction error for an unmappable target type.
    ///
    /// Raised before any row is read when a type records neither a
    /// positional nor a default constructor.
    pub fn construction(type_name: &'static str) -> Error {
        Error::from(super::ErrorKind::Construction(ConstructionError {
            type_name,
        }))
    }

    /// Returns `true` if this error is a construction error.
    pub fn is_construction(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Construction(_))
    }
}
