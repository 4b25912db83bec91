//! Error types for the sound fetcher.
//!
//! Every failure carries an [`ErrorCode`] so callers can tell a fatal setup
//! problem apart from a failure scoped to a single sound entry.

use std::fmt;

/// Error codes attached to every [`FetcherError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The output directory could not be created.
    /// Trigger: permission denied, or a regular file occupies the path.
    OutputDirFailed,

    /// The HTTP request could not be completed.
    /// Trigger: DNS failure, refused connection, timeout, truncated body.
    FetchFailed,

    /// The server answered with a non-success status.
    /// Trigger: 4xx or 5xx response.
    HttpStatus,

    /// The downloaded bytes could not be persisted.
    /// Trigger: disk full, permission denied inside the output directory.
    WriteFailed,

    /// The HTTP client could not be constructed.
    ClientInitFailed,

    /// A sound entry is malformed.
    /// Trigger: empty or path-like name, unparseable URL, duplicate name.
    InvalidEntry,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirFailed => "OUTPUT_DIR_FAILED",
            ErrorCode::FetchFailed => "FETCH_FAILED",
            ErrorCode::HttpStatus => "HTTP_STATUS",
            ErrorCode::WriteFailed => "WRITE_FAILED",
            ErrorCode::ClientInitFailed => "CLIENT_INIT_FAILED",
            ErrorCode::InvalidEntry => "INVALID_ENTRY",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirFailed => "Output directory could not be created",
            ErrorCode::FetchFailed => "HTTP request failed",
            ErrorCode::HttpStatus => "Server returned a non-success status",
            ErrorCode::WriteFailed => "Downloaded sound could not be written to disk",
            ErrorCode::ClientInitFailed => "HTTP client could not be initialized",
            ErrorCode::InvalidEntry => "Sound entry is malformed",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::OutputDirFailed => {
                "Check write permissions of the working directory and make sure \
                 no regular file named 'audio' exists there"
            }
            ErrorCode::FetchFailed => {
                "Check internet connection, or raise the timeout with --timeout \
                 or SOUND_FETCHER_TIMEOUT_SECS"
            }
            ErrorCode::HttpStatus => {
                "The remote file may have moved; try again later or replace the URL"
            }
            ErrorCode::WriteFailed => "Verify free disk space and permissions of the audio directory",
            ErrorCode::ClientInitFailed => "Check the TLS setup of this machine",
            ErrorCode::InvalidEntry => {
                "Use a short name without path separators and an absolute http(s) URL"
            }
        }
    }

    /// Returns true if this error aborts the whole run rather than one entry.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ErrorCode::OutputDirFailed | ErrorCode::ClientInitFailed | ErrorCode::InvalidEntry
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for fetcher operations.
#[derive(Debug)]
pub struct FetcherError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl FetcherError {
    /// Creates a new FetcherError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new FetcherError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an OUTPUT_DIR_FAILED error.
    pub fn output_dir_failed(
        path: &std::path::Path,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_source(
            ErrorCode::OutputDirFailed,
            format!("Failed to create output directory {}: {}", path.display(), source),
            source,
        )
    }

    /// Creates a FETCH_FAILED error.
    pub fn fetch_failed(url: &str, source: reqwest::Error) -> Self {
        Self::with_source(
            ErrorCode::FetchFailed,
            format!("Failed to fetch {}: {}", url, source),
            source,
        )
    }

    /// Creates a FETCH_FAILED error for a body that broke off mid-transfer.
    pub fn read_failed(url: &str, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::FetchFailed,
            format!("Failed to read response from {}: {}", url, source),
            source,
        )
    }

    /// Creates an HTTP_STATUS error.
    pub fn http_status(url: &str, status: reqwest::StatusCode) -> Self {
        Self::new(ErrorCode::HttpStatus, format!("HTTP {} for {}", status, url))
    }

    /// Creates a WRITE_FAILED error.
    pub fn write_failed(reason: impl Into<String>, source: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::WriteFailed,
            format!("{}: {}", reason.into(), source),
            source,
        )
    }

    /// Creates a CLIENT_INIT_FAILED error.
    pub fn client_init_failed(source: reqwest::Error) -> Self {
        Self::with_source(
            ErrorCode::ClientInitFailed,
            format!("Failed to create HTTP client: {}", source),
            source,
        )
    }

    /// Creates an INVALID_ENTRY error.
    pub fn invalid_entry(name: &str, reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidEntry,
            format!("Invalid sound entry '{}': {}", name, reason.into()),
        )
    }
}

impl fmt::Display for FetcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for FetcherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using FetcherError.
pub type Result<T> = std::result::Result<T, FetcherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_as_str() {
        assert_eq!(ErrorCode::OutputDirFailed.as_str(), "OUTPUT_DIR_FAILED");
        assert_eq!(ErrorCode::FetchFailed.as_str(), "FETCH_FAILED");
        assert_eq!(ErrorCode::HttpStatus.as_str(), "HTTP_STATUS");
        assert_eq!(ErrorCode::WriteFailed.as_str(), "WRITE_FAILED");
        assert_eq!(ErrorCode::ClientInitFailed.as_str(), "CLIENT_INIT_FAILED");
        assert_eq!(ErrorCode::InvalidEntry.as_str(), "INVALID_ENTRY");
    }

    #[test]
    fn only_setup_errors_are_fatal() {
        assert!(ErrorCode::OutputDirFailed.is_fatal());
        assert!(ErrorCode::ClientInitFailed.is_fatal());
        assert!(ErrorCode::InvalidEntry.is_fatal());
        assert!(!ErrorCode::FetchFailed.is_fatal());
        assert!(!ErrorCode::HttpStatus.is_fatal());
        assert!(!ErrorCode::WriteFailed.is_fatal());
    }

    #[test]
    fn recovery_hints_not_empty() {
        for code in [
            ErrorCode::OutputDirFailed,
            ErrorCode::FetchFailed,
            ErrorCode::HttpStatus,
            ErrorCode::WriteFailed,
            ErrorCode::ClientInitFailed,
            ErrorCode::InvalidEntry,
        ] {
            assert!(!code.recovery_hint().is_empty());
            assert!(!code.description().is_empty());
        }
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = FetcherError::invalid_entry("hit", "empty URL");
        let text = err.to_string();
        assert!(text.contains("INVALID_ENTRY"));
        assert!(text.contains("hit"));
        assert!(text.contains("empty URL"));
    }

    #[test]
    fn read_failure_is_fetch_failed() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "connection closed");
        let err = FetcherError::read_failed("http://sounds.test/hit.mp3", io);
        assert_eq!(err.code, ErrorCode::FetchFailed);
        assert!(err.message.contains("hit.mp3"));
        assert!(err.message.contains("connection closed"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn output_dir_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FetcherError::output_dir_failed(std::path::Path::new("audio"), io);
        assert_eq!(err.code, ErrorCode::OutputDirFailed);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.message.contains("audio"));
    }
}
