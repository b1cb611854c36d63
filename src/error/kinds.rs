use std::{fmt, io};

/// Crate-wide `Result` type using [`ChatshError`] as the error.
///
/// This alias is re-exported by the parent `error` module and is intended
/// to be used throughout the crate for fallible operations. Note that the
/// completion engine itself never fails: `complete` returns an `Option`,
/// and collaborator problems degrade to "no candidates". Errors surface
/// only from ambient concerns such as configuration loading.
pub type Result<T> = std::result::Result<T, ChatshError>;

/// Top-level error type for chatsh operations.
///
/// This type wraps more specific error kinds and provides a single
/// error type that can be used throughout the crate.
#[derive(Debug)]
pub enum ChatshError {
    /// Configuration errors.
    Config(ConfigError),

    /// I/O errors.
    Io(io::Error),

    /// Generic error with a free-form message.
    Generic(String),
}

/// Configuration-specific errors.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file not found.
    FileNotFound(String),

    /// Invalid config format.
    InvalidFormat(String),

    /// Invalid field value.
    InvalidValue { field: String, value: String },
}

/* ========================= Display & Error impls ========================= */

impl fmt::Display for ChatshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatshError::Config(e) => write!(f, "Configuration error: {e}"),
            ChatshError::Io(e) => write!(f, "I/O error: {e}"),
            ChatshError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {path}"),
            ConfigError::InvalidFormat(msg) => write!(f, "Invalid config format: {msg}"),
            ConfigError::InvalidValue { field, value } => {
                write!(f, "Invalid value '{value}' for field '{field}'")
            }
        }
    }
}

impl std::error::Error for ChatshError {}
impl std::error::Error for ConfigError {}

/* ========================= Conversions to ChatshError ========================= */

impl From<io::Error> for ChatshError {
    fn from(err: io::Error) -> Self {
        ChatshError::Io(err)
    }
}

impl From<ConfigError> for ChatshError {
    fn from(err: ConfigError) -> Self {
        ChatshError::Config(err)
    }
}

impl From<String> for ChatshError {
    fn from(msg: String) -> Self {
        ChatshError::Generic(msg)
    }
}

impl From<&str> for ChatshError {
    fn from(msg: &str) -> Self {
        ChatshError::Generic(msg.to_owned())
    }
}
