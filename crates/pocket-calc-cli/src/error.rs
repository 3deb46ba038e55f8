//! CLI error type

use pocket_calc::core::KeyParseError;
use thiserror::Error;

/// Result alias used by every handler
pub type CliResult<T> = Result<T, CliError>;

/// Everything that makes `pocket-calc` exit non-zero
#[derive(Debug, Error)]
pub enum CliError {
    /// A key label on the command line was not recognized
    #[error("Invalid key: {0}")]
    Key(#[from] KeyParseError),

    /// Invalid argument
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be set up
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Bad command-line input
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a logging setup error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_error_from() {
        let err: CliError = "sqrt".parse::<pocket_calc::core::Key>().unwrap_err().into();
        assert_eq!(err.to_string(), "Invalid key: unknown key 'sqrt'");
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = CliError::invalid_argument("no keys given");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("no keys given"));
    }

    #[test]
    fn test_io_error_from() {
        let err = CliError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "no tty"));
        assert_eq!(err.to_string(), "I/O failed: no tty");
    }

    #[test]
    fn test_logging_error() {
        let err = CliError::logging("already set");
        assert!(err.to_string().contains("Logging"));
    }
}
