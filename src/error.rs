/// Error types for drawing operations.
use thiserror::Error;

/// Result type for drawing operations.
pub type Result<T> = std::result::Result<T, DrawingError>;

/// Error types for drawing operations.
#[derive(Error, Debug)]
pub enum DrawingError {
    /// The host asked for something DrawingML output cannot express
    #[error("{0} operation not supported")]
    Unsupported(&'static str),

    /// A shape was drawn before the first page was started
    #[error("No active drawing session")]
    NoActiveSession,

    /// ZIP archive error
    #[cfg(feature = "zip")]
    #[error("ZIP error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Invalid device options
    #[error("Configuration error: {0}")]
    Config(String),

    /// Clipboard transport failure
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
