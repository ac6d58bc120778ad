// PixivCore - pixiv artwork asset retrieval
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Error types for PixivCore
//!
//! This module defines error types using thiserror for ergonomic error handling.
//! Every fallible operation in the crate returns [`Result<T>`], and every variant
//! belongs to exactly one [`ErrorKind`]:
//!
//! - **NotFound** - a metadata key or the artwork identifier is missing
//! - **Parse** - a timestamp or JSON payload is malformed
//! - **InvalidArgument** - out-of-range page, unknown subtype code, wrong artwork type
//! - **Network** - transport failure or non-success HTTP status
//! - **Io** - filesystem write failure or a response without a body
//!
//! The first three are caller faults and will fail again on retry. Network and
//! I/O failures describe the environment and may succeed when repeated. The crate
//! itself never retries.

use thiserror::Error;

/// Result type alias using our PixivError type
pub type Result<T> = std::result::Result<T, PixivError>;

/// Coarse error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Parse,
    InvalidArgument,
    Network,
    Io,
    Configuration,
}

/// Main error type for PixivCore
#[derive(Error, Debug)]
pub enum PixivError {
    // ===== Metadata Errors =====

    /// A key is absent from the metadata document
    #[error("Metadata not found: {key}")]
    MetadataNotFound {
        /// Dotted path of the missing key (e.g. `illust.12345678.pageCount`)
        key: String,
    },

    /// A timestamp string in the metadata could not be parsed
    #[error("Failed to parse timestamp '{value}': {message}")]
    TimestampParse {
        value: String,
        message: String,
    },

    /// The metadata endpoint answered with an error envelope or an unexpected shape
    #[error("Invalid API response: {message}")]
    InvalidApiResponse {
        message: String,
        /// Response body snippet for debugging
        response_body: Option<String>,
    },

    // ===== Argument Errors =====

    /// Caller supplied an argument the artwork cannot satisfy
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ===== Network Errors =====

    /// Transport failure or non-success status code
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
        /// HTTP status code if the server answered
        status_code: Option<u16>,
        /// Whether this error might be transient
        is_transient: bool,
    },

    // ===== File/Storage Errors =====

    /// The server answered without a response body
    #[error("Response from {url} has no body")]
    MissingResponseBody {
        url: String,
    },

    /// File I/O error with path context
    #[error("File I/O error: {0}")]
    FileIoError(String),

    // ===== Configuration Errors =====

    /// Client configuration is invalid (bad header value, TLS backend failure)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // ===== External Library Errors =====

    /// HTTP client error from reqwest
    #[error("HTTP client error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper methods for creating common errors
impl PixivError {
    /// Create a MetadataNotFound error for a key path
    pub fn not_found<S: Into<String>>(key: S) -> Self {
        PixivError::MetadataNotFound { key: key.into() }
    }

    /// Create an InvalidArgument error with a message
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        PixivError::InvalidArgument(message.into())
    }

    /// Create a TimestampParse error
    pub fn timestamp_parse<V: Into<String>, M: Into<String>>(value: V, message: M) -> Self {
        PixivError::TimestampParse {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a NetworkError
    pub fn network_error<S: Into<String>>(
        message: S,
        status_code: Option<u16>,
        is_transient: bool,
    ) -> Self {
        PixivError::NetworkError {
            message: message.into(),
            status_code,
            is_transient,
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PixivError::MetadataNotFound { .. } => ErrorKind::NotFound,
            PixivError::TimestampParse { .. }
            | PixivError::InvalidApiResponse { .. }
            | PixivError::SerdeJsonError(_) => ErrorKind::Parse,
            PixivError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            PixivError::NetworkError { .. } | PixivError::ReqwestError(_) => ErrorKind::Network,
            PixivError::MissingResponseBody { .. }
            | PixivError::FileIoError(_)
            | PixivError::IoError(_) => ErrorKind::Io,
            PixivError::InvalidConfiguration(_) => ErrorKind::Configuration,
        }
    }

    /// Check if the error was caused by bad input or bad metadata
    ///
    /// These errors are the caller's fault and will not improve on retry.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::NotFound | ErrorKind::Parse | ErrorKind::InvalidArgument
        )
    }

    /// Check if error is retryable (network and filesystem failures)
    ///
    /// Returns `true` for environment failures that might succeed when the
    /// caller repeats the operation. 4xx responses other than 408 and 429 are
    /// treated as permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            PixivError::NetworkError { is_transient, .. } => *is_transient,
            PixivError::ReqwestError(e) => e.is_timeout() || e.is_connect(),
            other => other.kind() == ErrorKind::Io,
        }
    }

    /// Check if error is related to file/disk operations
    pub fn is_file_error(&self) -> bool {
        matches!(self, PixivError::FileIoError(_) | PixivError::IoError(_))
    }

    /// HTTP status code carried by the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PixivError::NetworkError { status_code, .. } => *status_code,
            PixivError::ReqwestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get user-friendly error message suitable for display
    pub fn user_message(&self) -> String {
        match self {
            PixivError::MetadataNotFound { key } => {
                format!("The artwork metadata has no '{}' entry. The artwork may have been deleted or the id is wrong.", key)
            }
            PixivError::NetworkError { status_code: Some(403), .. } => {
                "The image server refused the request (403). The Referer header may be missing.".to_string()
            }
            PixivError::NetworkError { status_code: Some(404), .. } => {
                "The requested asset does not exist on the image server.".to_string()
            }
            PixivError::NetworkError { is_transient: true, message, .. } => {
                format!("A temporary network problem occurred: {}. Please try again.", message)
            }
            PixivError::MissingResponseBody { .. } => {
                "The image server sent an empty response. Please try again.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_not_retryable() {
        let errors = vec![
            PixivError::not_found("illust.1.pageCount"),
            PixivError::timestamp_parse("yesterday", "bad format"),
            PixivError::invalid_argument("page exceeds artwork's page count"),
        ];

        for err in errors {
            assert!(err.is_input_error(), "{err:?}");
            assert!(!err.is_retryable(), "{err:?}");
        }
    }

    #[test]
    fn test_network_error_retryability_follows_transient_flag() {
        let transient = PixivError::network_error("connection reset", None, true);
        let permanent = PixivError::network_error("status 404", Some(404), false);

        assert_eq!(transient.kind(), ErrorKind::Network);
        assert!(transient.is_retryable());
        assert!(!permanent.is_retryable());
        assert_eq!(permanent.status_code(), Some(404));
    }

    #[test]
    fn test_io_errors() {
        let err: PixivError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.is_file_error());
        assert!(err.is_retryable());

        let empty = PixivError::MissingResponseBody { url: "https://i.pximg.net/x.png".to_string() };
        assert_eq!(empty.kind(), ErrorKind::Io);
        assert!(!empty.is_file_error());
    }

    #[test]
    fn test_user_message_for_forbidden() {
        let err = PixivError::network_error("status 403", Some(403), false);
        assert!(err.user_message().contains("Referer"));
    }
}
