//! Error types for the tillscan-core library.

use thiserror::Error;

/// Main error type for the tillscan library.
///
/// The parsing and matching APIs never fail on malformed receipt text -
/// degenerate input yields an empty result instead of an error. The variants
/// here cover the configuration and file-handling edges only.
#[derive(Error, Debug)]
pub enum TillscanError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the tillscan library.
pub type Result<T> = std::result::Result<T, TillscanError>;
