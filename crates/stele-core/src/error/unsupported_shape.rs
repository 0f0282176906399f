use super::Error;

/// Error when a table mapping cannot support a requested statement shape.
///
/// This occurs when:
/// - An UPDATE or DELETE is generated for a mapping with no primary-key
///   columns
/// - An UPDATE is generated for a mapping where every column is part of the
///   primary key, leaving nothing to assign
/// - A mapping declares the same column name twice
#[derive(Debug)]
pub(super) struct UnsupportedShapeError {
    message: Box<str>,
}

impl std::error::Error for UnsupportedShapeError {}

impl core::fmt::Display for UnsupportedShapeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported mapping shape: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported-shape error.
    pub fn unsupported_shape(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedShape(UnsupportedShapeError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an unsupported-shape error.
    pub fn is_unsupported_shape(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedShape(_))
    }
}
