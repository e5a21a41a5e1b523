//! Library error type.

use thiserror::Error;

/// Error produced by an underlying HID backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The HID backend failed to open or write to a device.
    #[error("HID access failed")]
    Access(#[source] BoxError),

    /// No attached light has the requested serial number.
    #[error("no Litra Beam with serial number {serial_number:?} found")]
    NotFound { serial_number: String },

    /// Scanning for attached lights failed.
    #[error("HID enumeration failed")]
    Enumeration(#[source] BoxError),
}

impl Error {
    pub fn access(err: impl Into<BoxError>) -> Self {
        Self::Access(err.into())
    }

    pub fn enumeration(err: impl Into<BoxError>) -> Self {
        Self::Enumeration(err.into())
    }

    pub fn not_found(serial_number: impl Into<String>) -> Self {
        Self::NotFound { serial_number: serial_number.into() }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn source_is_not_repeated() {
        let err = Error::access("broken pipe");
        assert_eq!(err.to_string(), "HID access failed");
        assert_eq!(err.source().map(|source| source.to_string()).as_deref(), Some("broken pipe"));

        let err = Error::enumeration("permission denied");
        assert_eq!(err.to_string(), "HID enumeration failed");
        assert!(err.source().is_some());
    }
}
