use super::Error;

/// Error when a row value cannot be coerced to the requested type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    pub(super) from_kind: &'static str,
    pub(super) to_type: &'static str,
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot convert {} to {}", self.from_kind, self.to_type)
    }
}

impl Error {
    /// Creates a type conversion error.
    ///
    /// Used when a row value's kind has no coercion into the requested
    /// target type.
    pub fn type_conversion(from_kind: &'static str, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::TypeConversion(TypeConversionError {
            from_kind,
            to_type,
        }))
    }

    /// Returns `true` if this error is a type conversion error.
    pub fn is_type_conversion(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TypeConversion(_))
    }
}
