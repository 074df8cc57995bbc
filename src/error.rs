//! Error types and result utilities for sound-wave operations.

use thiserror::Error;

/// Convenience type alias for results that may contain a [`SoundWaveError`].
pub type SoundWaveResult<T> = Result<T, SoundWaveError>;

/// Error types that can occur during sound-wave operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SoundWaveError {
    /// Error that occurs when invalid parameters are provided to an operation.
    ///
    /// This covers filter threshold counts that do not match the filter kind,
    /// unrecognised filter names, and non-positive search steps.
    #[error("Invalid parameter error: {0}")]
    InvalidParameter(String),

    /// Error that occurs when a wave is built from channels of different lengths.
    #[error("Channel length mismatch: left has {left} samples, right has {right}")]
    ChannelLengthMismatch {
        /// Number of samples in the left channel.
        left: usize,
        /// Number of samples in the right channel.
        right: usize,
    },
}

impl SoundWaveError {
    /// Shorthand for an [`SoundWaveError::InvalidParameter`] with a formatted message.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
