//! Error types for the decompound library.
//!
//! All recoverable failures are represented by the [`DecompoundError`] enum.
//! Contract violations inside the token state (out-of-range lengths, un-emitting
//! a primary word) are bugs in a calling stage and panic instead.
//!
//! # Examples
//!
//! ```
//! use decompound::error::{DecompoundError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(DecompoundError::stream_protocol("advance() called after close()"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for decompound operations.
#[derive(Error, Debug)]
pub enum DecompoundError {
    /// I/O errors (resource files, configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A dictionary, hyphenation, exception or synonym resource is unusable
    #[error("Resource error: {0}")]
    Resource(String),

    /// Misuse of the token stream lifecycle (advance after close, spent replay, ...)
    #[error("Stream protocol error: {0}")]
    StreamProtocol(String),

    /// Invalid configuration values
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for operations that may fail with DecompoundError.
pub type Result<T> = std::result::Result<T, DecompoundError>;

impl DecompoundError {
    /// Create a new resource error.
    pub fn resource<S: Into<String>>(msg: S) -> Self {
        DecompoundError::Resource(msg.into())
    }

    /// Create a new parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        DecompoundError::Resource(format!("Parse error: {}", msg.into()))
    }

    /// Create a new stream protocol error.
    pub fn stream_protocol<S: Into<String>>(msg: S) -> Self {
        DecompoundError::StreamProtocol(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        DecompoundError::Config(msg.into())
    }
}
