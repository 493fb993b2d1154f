use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Failures reported by the helper operations themselves
    #[error(transparent)]
    Helper(#[from] HelperError),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialisation
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error types raised by the string helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HelperError {
    /// Required text was absent, or an argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Input broke an operation's precondition (e.g. blank text)
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    /// A digit run does not fit the integer width
    #[error("Integer overflow: '{digits}' exceeds the representable range")]
    Overflow { digits: String },
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for helper operations
pub type HelperResult<T> = Result<T, HelperError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::Config(format!("TOML error: {}", err))
    }
}
