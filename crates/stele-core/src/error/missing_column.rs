use super::Error;

/// Error when a referenced column is absent from a table mapping.
#[derive(Debug)]
pub(super) struct MissingColumnError {
    column: Box<str>,
    table: Box<str>,
}

impl std::error::Error for MissingColumnError {}

impl core::fmt::Display for MissingColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}` is not mapped on table `{}`",
            self.column, self.table
        )
    }
}

impl Error {
    /// Creates a missing-column error.
    pub fn missing_column(column: impl Into<String>, table: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::MissingColumn(MissingColumnError {
            column: column.into().into(),
            table: table.into().into(),
        }))
    }

    /// Returns `true` if this error is a missing-column error.
    pub fn is_missing_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingColumn(_))
    }
}
