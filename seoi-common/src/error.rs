//! Common error types for SEO Inspector

use thiserror::Error;

/// Common result type for SEO Inspector operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the request path (config loading, startup)
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
