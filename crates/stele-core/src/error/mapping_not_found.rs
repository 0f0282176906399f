use super::Error;

/// Error when a record type has no registered table mapping.
///
/// Mappings are declared explicitly with the mapping builder and stored in
/// the process-wide registry. Looking up a type that was never registered
/// fails with this error rather than falling back to any kind of runtime
/// inspection.
#[derive(Debug)]
pub(super) struct MappingNotFoundError {
    type_name: &'static str,
}

impl std::error::Error for MappingNotFoundError {}

impl core::fmt::Display for MappingNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no mapping registered for type {}", self.type_name)
    }
}

impl Error {
    /// Creates a mapping-not-found error for the given record type name.
    pub fn mapping_not_found(type_name: &'static str) -> Error {
        Error::from(super::ErrorKind::MappingNotFound(MappingNotFoundError {
            type_name,
        }))
    }

    /// Returns `true` if this error is a mapping-not-found error.
    pub fn is_mapping_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MappingNotFound(_))
    }
}
