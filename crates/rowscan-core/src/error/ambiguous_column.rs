use super::Error;

/// Error when more than one field of a record resolves to the same column.
///
/// Only produced by resolvers running in strict mode; the default policy
/// keeps the first field discovered and drops the rest.
#[derive(Debug)]
pub(super) struct AmbiguousColumnError {
    column: Box<str>,
    record: &'static str,
}

impl std::error::Error for AmbiguousColumnError {}

impl core::fmt::Display for AmbiguousColumnError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "column `{}` is mapped by more than one field in {}",
            self.column, self.record
        )
    }
}

impl Error {
    /// Creates an ambiguous column error.
    pub fn ambiguous_column(column: impl Into<String>, record: &'static str) -> Error {
        Error::from(super::ErrorKind::AmbiguousColumn(AmbiguousColumnError {
            column: column.into().into(),
            record,
        }))
    }

    /// Returns `true` if this error is an ambiguous column error.
    pub fn is_ambiguous_column(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::AmbiguousColumn(_))
    }
}
