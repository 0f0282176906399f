use super::Error;

/// Error when an operation is incompatible with the context it was requested
/// in.
///
/// The one producer in this crate family is the batch container: conditional
/// (`IF NOT EXISTS`) mutations cannot participate in an atomic batch, so the
/// request is rejected synchronously instead of being deferred to the
/// executor.
#[derive(Debug)]
pub(super) struct UnsupportedOperationError {
    message: Box<str>,
}

impl std::error::Error for UnsupportedOperationError {}

impl core::fmt::Display for UnsupportedOperationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unsupported operation: {}", self.message)
    }
}

impl Error {
    /// Creates an unsupported-operation error.
    pub fn unsupported_operation(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnsupportedOperation(
            UnsupportedOperationError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported-operation error.
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedOperation(_))
    }
}
