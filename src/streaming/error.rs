//! Error types for streaming operations.

use crate::SoundWaveError;

/// Streaming-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// Wave construction or parameter error
    #[error("Sound wave error: {0}")]
    Wave(#[from] SoundWaveError),

    /// Underlying reader failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The container or codec could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// A block was requested after the source ran dry
    #[error("Audio source is exhausted")]
    Exhausted,

    /// The input holds no stream this crate can turn into samples
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl StreamError {
    /// Create a decode error from anything printable.
    pub fn decode(details: impl std::fmt::Display) -> Self {
        Self::Decode(details.to_string())
    }

    /// Returns `true` if the source simply ran out of data.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// Result type for streaming operations
pub type StreamResult<T> = Result<T, StreamError>;
