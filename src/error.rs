//! Error types for the odonym library.
//!
//! All fallible operations return [`Result`], with [`OdonymError`] covering
//! the two failure kinds the library produces: configuration failures
//! (unknown locale, mismatched locale) and parse failures (input with no
//! tokens). "No match" is never an error; queries report absence through
//! empty results.
//!
//! # Examples
//!
//! ```
//! use odonym::error::{OdonymError, Result};
//! use odonym::locale::Locale;
//!
//! fn build() -> Result<Locale> {
//!     Locale::new("ru_RU")
//! }
//!
//! assert!(build().is_ok());
//! assert!(matches!(
//!     Locale::new("tlh_QO"),
//!     Err(OdonymError::Configuration(_))
//! ));
//! ```

use thiserror::Error;

/// The error type for odonym operations.
#[derive(Error, Debug)]
pub enum OdonymError {
    /// Configuration errors (unrecognized locale identifier, name parsed
    /// under a different locale than the database's).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Parse errors (input that yields no tokens).
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for operations that may fail with [`OdonymError`].
pub type Result<T> = std::result::Result<T, OdonymError>;

impl OdonymError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        OdonymError::Configuration(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        OdonymError::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OdonymError::configuration("unknown locale: xx_XX");
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown locale: xx_XX"
        );

        let err = OdonymError::parse("name contains no tokens");
        assert_eq!(err.to_string(), "Parse error: name contains no tokens");
    }
}
