use super::Error;

/// Error when one multi-component read mixes scalar and non-scalar
/// components.
#[derive(Debug)]
pub(super) struct MultipleMappingsError;

impl std::error::Error for MultipleMappingsError {}

impl core::fmt::Display for MultipleMappingsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("multiple incompatible mapping strategies in one read")
    }
}

impl Error {
    /// Creates a multiple-mappings error.
    ///
    /// Components within one multi-component read must be uniformly
    /// all-scalar or all non-scalar.
    pub fn multiple_mappings() -> Error {
        Error::from(super::ErrorKind::MultipleMappings(MultipleMappingsError))
    }

    /// Returns `true` if this error is a multiple-mappings error.
    pub fn is_multiple_mappings(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MultipleMappings(_))
    }
}
