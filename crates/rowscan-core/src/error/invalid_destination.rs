use super::Error;

/// Error when a destination cannot receive the current row.
///
/// This occurs when:
/// - A scalar destination is scanned from a row with more or fewer than one column
/// - A column addresses a nested record instead of a value field
/// - Two columns address overlapping field paths
#[derive(Debug)]
pub(super) struct InvalidDestinationError {
    message: Box<str>,
}

impl std::error::Error for InvalidDestinationError {}

impl core::fmt::Display for InvalidDestinationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid destination: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid destination error.
    pub fn invalid_destination(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidDestination(
            InvalidDestinationError {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an invalid destination error.
    pub fn is_invalid_destination(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidDestination(_))
    }
}
