//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every variant is a permanent input failure reported synchronously to
/// the caller. A well-formed simulation run never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested algorithm name is not one of the supported policies.
    #[error("Unknown algorithm: {0}")]
    UnknownPolicy(String),

    /// Frame capacity was negative.
    #[error("Invalid frame capacity: {0} (must be >= 0)")]
    InvalidCapacity(i64),

    /// Reference sequence is longer than the server accepts.
    #[error("Sequence length {len} exceeds maximum of {max}")]
    SequenceTooLong { len: usize, max: usize },

    /// I/O error (request files, socket binding).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownPolicy("LFU".to_string());
        assert_eq!(format!("{}", err), "Unknown algorithm: LFU");

        let err = Error::InvalidCapacity(-3);
        assert_eq!(format!("{}", err), "Invalid frame capacity: -3 (must be >= 0)");

        let err = Error::SequenceTooLong { len: 11, max: 10 };
        assert_eq!(format!("{}", err), "Sequence length 11 exceeds maximum of 10");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
