// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Failures while retrieving a page from the catalog.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The catalog could not be reached (DNS, TLS, connection reset...).
    Transport(String),

    /// The catalog answered with a non-success HTTP status.
    Status(u16),

    /// The response body was not the expected JSON document.
    Decode(String),

    /// The configured base URL cannot be turned into a request URL.
    InvalidUrl(String),
}

impl FetchError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "error-fetch-transport",
            FetchError::Status(_) => "error-fetch-status",
            FetchError::Decode(_) => "error-fetch-decode",
            FetchError::InvalidUrl(_) => "error-fetch-invalid-url",
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "Network error: {}", msg),
            FetchError::Status(code) => write!(f, "HTTP error! status: {}", code),
            FetchError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            FetchError::InvalidUrl(msg) => write!(f, "Invalid catalog URL: {}", msg),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Rejected input in the custom selection field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionInputError {
    /// Nothing but whitespace was entered.
    Empty,

    /// The text is not a whole number; keeps the offending input.
    NotANumber(String),

    /// Zero or a negative number.
    NotPositive,

    /// More rows than a single custom selection may request.
    TooLarge { max: u32 },
}

impl SelectionInputError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SelectionInputError::Empty => "selection-input-empty",
            SelectionInputError::NotANumber(_) => "selection-input-not-a-number",
            SelectionInputError::NotPositive => "selection-input-not-positive",
            SelectionInputError::TooLarge { .. } => "selection-input-too-large",
        }
    }
}

impl fmt::Display for SelectionInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionInputError::Empty => write!(f, "no row count entered"),
            SelectionInputError::NotANumber(input) => {
                write!(f, "'{}' is not a whole number", input)
            }
            SelectionInputError::NotPositive => write!(f, "row count must be at least 1"),
            SelectionInputError::TooLarge { max } => {
                write!(f, "row count must not exceed {}", max)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn status_error_reads_like_http_failure() {
        assert_eq!(FetchError::Status(503).to_string(), "HTTP error! status: 503");
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: FetchError = json_err.into();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn selection_input_error_keys_and_text() {
        assert_eq!(SelectionInputError::Empty.i18n_key(), "selection-input-empty");
        assert_eq!(
            SelectionInputError::NotPositive.i18n_key(),
            "selection-input-not-positive"
        );
        let err = SelectionInputError::NotANumber("abc".into());
        assert_eq!(err.i18n_key(), "selection-input-not-a-number");
        assert_eq!(err.to_string(), "'abc' is not a whole number");

        let err = SelectionInputError::TooLarge { max: 100_000 };
        assert_eq!(err.i18n_key(), "selection-input-too-large");
        assert_eq!(err.to_string(), "row count must not exceed 100000");
    }

    #[test]
    fn fetch_error_i18n_keys() {
        assert_eq!(
            FetchError::Transport("reset".into()).i18n_key(),
            "error-fetch-transport"
        );
        assert_eq!(FetchError::Status(500).i18n_key(), "error-fetch-status");
        assert_eq!(
            FetchError::Decode("eof".into()).i18n_key(),
            "error-fetch-decode"
        );
        assert_eq!(
            FetchError::InvalidUrl("nope".into()).i18n_key(),
            "error-fetch-invalid-url"
        );
    }
}
