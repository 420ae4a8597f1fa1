//! Error types and handling for urlsift-core operations.
//!
//! Detection itself never fails: a text fragment that does not form a valid
//! URL is simply not reported. Errors exist for the places where a caller
//! hands the library something it cannot use, such as an empty host in an
//! allow list or a malformed configuration file.
//!
//! ## Error Categories
//!
//! - **Configuration Errors**: Invalid detector settings or config files
//! - **Host Errors**: Allow/deny entries that are not valid hosts
//! - **URL Errors**: Strings that do not parse as a single absolute URL
//! - **I/O Errors**: Reading or writing configuration files
//! - **Serialization Errors**: TOML encoding and decoding
//!
//! ```rust
//! use urlsift_core::{Error, Host};
//!
//! match Host::parse("") {
//!     Err(e @ Error::Config(_)) => assert_eq!(e.category(), "config"),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

use thiserror::Error;

/// The main error type for urlsift-core operations.
///
/// All fallible public functions return `Result<T, Error>`. Candidate
/// rejections during scanning are not errors and never produce this type.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration is invalid or inaccessible.
    ///
    /// ## Common Causes
    ///
    /// - Empty host strings in allow or deny lists
    /// - Unknown option names
    /// - Config directory cannot be determined
    #[error("Configuration error: {0}")]
    Config(String),

    /// A host supplied by the caller is syntactically invalid.
    ///
    /// Raised when building allow/deny entries, never while scanning text.
    #[error("Invalid host: {0}")]
    InvalidHost(String),

    /// A string is not a single well-formed absolute URL.
    ///
    /// Returned by [`AbsoluteUrl::from_str`](crate::AbsoluteUrl) and by
    /// conversions into [`url::Url`].
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O operation failed.
    ///
    /// Covers reading and writing configuration files. The underlying
    /// `std::io::Error` is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error for uncategorized failures.
    #[error("{0}")]
    Other(String),
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry logic.
    ///
    /// Only transient I/O failures qualify; everything else reflects bad
    /// input that will fail the same way again.
    ///
    /// ```rust
    /// use urlsift_core::Error;
    /// use std::io;
    ///
    /// assert!(Error::Io(io::Error::new(io::ErrorKind::Interrupted, "x")).is_recoverable());
    /// assert!(!Error::InvalidHost("-bad-".to_string()).is_recoverable());
    /// ```
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier.
    ///
    /// - `"config"` - Configuration and settings
    /// - `"invalid_host"` - Host validation
    /// - `"invalid_url"` - URL parsing
    /// - `"io"` - File system operations
    /// - `"serialization"` - Data format conversion
    /// - `"other"` - Uncategorized errors
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::InvalidHost(_) => "invalid_host",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Other(_) => "other",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(
    clippy::panic,
    clippy::disallowed_macros,
    clippy::unwrap_used,
    clippy::unnecessary_wraps
)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io;

    #[test]
    fn test_error_display_formatting() {
        let errors = vec![
            Error::Config("missing field".to_string()),
            Error::InvalidHost("exa mple.com".to_string()),
            Error::InvalidUrl("not a url".to_string()),
            Error::Serialization("bad toml".to_string()),
            Error::Other("unknown error".to_string()),
        ];

        for error in errors {
            let error_string = error.to_string();
            assert!(!error_string.is_empty());
            match error {
                Error::Config(msg) => {
                    assert!(error_string.contains("Configuration error"));
                    assert!(error_string.contains(&msg));
                },
                Error::InvalidHost(msg) => {
                    assert!(error_string.contains("Invalid host"));
                    assert!(error_string.contains(&msg));
                },
                Error::InvalidUrl(msg) => {
                    assert!(error_string.contains("Invalid URL"));
                    assert!(error_string.contains(&msg));
                },
                Error::Serialization(msg) => {
                    assert!(error_string.contains("Serialization error"));
                    assert!(error_string.contains(&msg));
                },
                Error::Other(msg) => {
                    assert_eq!(error_string, msg);
                },
                Error::Io(_) => {},
            }
        }
    }

    #[test]
    fn test_error_from_io_error() {
        let error: Error = io::Error::new(io::ErrorKind::NotFound, "file not found").into();
        match error {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::NotFound),
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_error_from_toml_error() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("= broken");
        let error: Error = parsed.unwrap_err().into();
        assert_eq!(error.category(), "serialization");
    }

    #[test]
    fn test_categories() {
        assert_eq!(Error::Config(String::new()).category(), "config");
        assert_eq!(Error::InvalidHost(String::new()).category(), "invalid_host");
        assert_eq!(Error::InvalidUrl(String::new()).category(), "invalid_url");
        assert_eq!(Error::Io(io::Error::other("x")).category(), "io");
        assert_eq!(Error::Serialization(String::new()).category(), "serialization");
        assert_eq!(Error::Other(String::new()).category(), "other");
    }

    #[test]
    fn test_recoverability() {
        assert!(Error::Io(io::Error::new(io::ErrorKind::TimedOut, "t")).is_recoverable());
        assert!(!Error::Io(io::Error::new(io::ErrorKind::NotFound, "n")).is_recoverable());
        assert!(!Error::Config("x".to_string()).is_recoverable());
        assert!(!Error::InvalidUrl("x".to_string()).is_recoverable());
    }

    proptest! {
        #[test]
        fn test_display_contains_message(msg in "[a-zA-Z0-9 ]{1,40}") {
            let error = Error::InvalidHost(msg.clone());
            prop_assert!(error.to_string().contains(&msg));
            prop_assert!(!error.is_recoverable());
        }
    }
}
