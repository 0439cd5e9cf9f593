use super::Error;

/// Error when a result set reports the same column name twice.
#[derive(Debug)]
pub(super) struct DuplicateColumnError {
    column: Box<str>,
}

impl std::error::Error for DuplicateColumnError {}

impl core::fmt::Display for DuplicateColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "rows contain a duplicate column `{}`", self.column)
    }
}

impl Error {
    /// Creates a duplicate column error.
    pub fn duplicate_column(column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::DuplicateColumn(DuplicateColumnError {
            column: column.into().into(),
        }))
    }

    /// Returns `true` if this error is a duplicate column error.
    pub fn is_duplicate_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DuplicateColumn(_))
    }
}
