use super::Error;

/// Error when a single-row scan finds a second row.
#[derive(Debug)]
pub(super) struct TooManyRecordsError {
    destination: &'static str,
}

impl std::error::Error for TooManyRecordsError {}

impl core::fmt::Display for TooManyRecordsError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "too many records: expected one row to scan into {}, got more",
            self.destination
        )
    }
}

impl Error {
    /// Creates a too many records error for a scan into `destination`.
    ///
    /// The rows after the first one are never read, so no count is given.
    pub fn too_many_records(destination: &'static str) -> Error {
        Error::from(super::ErrorKind::TooManyRecords(TooManyRecordsError {
            destination,
        }))
    }

    pub fn is_too_many_records(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::TooManyRecords(_))
    }
}
