use super::Error;

/// Error when a single-row scan finds no rows.
#[derive(Debug)]
pub(super) struct RecordNotFoundError {
    destination: &'static str,
}

impl std::error::Error for RecordNotFoundError {}

impl core::fmt::Display for RecordNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "record not found: no rows to scan into {}", self.destination)
    }
}

impl Error {
    /// Creates a record not found error for a scan into `destination`.
    pub fn record_not_found(destination: &'static str) -> Error {
        Error::from(super::ErrorKind::RecordNotFound(RecordNotFoundError {
            destination,
        }))
    }

    pub fn is_record_not_found(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::RecordNotFound(_))
    }
}
