use super::Error;

/// Error when a row column has no field to land in.
#[derive(Debug)]
pub(super) struct UnknownColumnError {
    column: Box<str>,
    record: &'static str,
}

impl std::error::Error for UnknownColumnError {}

impl core::fmt::Display for UnknownColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}`: no corresponding field found, or it's private, in {}",
            self.column, self.record
        )
    }
}

impl Error {
    /// Creates an unknown column error.
    ///
    /// Returned when the query selects a column the destination record has
    /// no field for. This points at a mismatch between the query and the
    /// record type.
    pub fn unknown_column(column: impl Into<String>, record: &'static str) -> Error {
        Error::from(super::ErrorKind::UnknownColumn(UnknownColumnError {
            column: column.into().into(),
            record,
        }))
    }

    /// Returns `true` if this error is an unknown column error.
    pub fn is_unknown_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnknownColumn(_))
    }
}
