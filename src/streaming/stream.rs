//! Draining sources into waves and feeding waves to sinks.

use super::error::{StreamError, StreamResult};
use super::traits::{AudioSource, WaveSink};
use crate::{SAMPLES_PER_SECOND, SoundWave, SoundWaveError};

/// Block length used by [`stream_to_sink`] callers that want one block per second.
pub const DEFAULT_BLOCK_LEN: usize = SAMPLES_PER_SECOND as usize;

impl SoundWave {
    /// Builds a wave by draining `source` block by block. The channels are
    /// collected first and the wave is assembled once at the end.
    ///
    /// # Errors
    /// Propagates any error from the source, and returns
    /// [`SoundWaveError::ChannelLengthMismatch`] (wrapped in
    /// [`StreamError::Wave`]) if a block's halves differ in length.
    pub fn from_source<S: AudioSource + ?Sized>(source: &mut S) -> StreamResult<SoundWave> {
        let mut left_samples = Vec::new();
        let mut right_samples = Vec::new();
        let mut blocks = 0usize;

        while source.has_more() {
            let left = source.next_left()?;
            let right = source.next_right()?;
            if left.len() != right.len() {
                return Err(SoundWaveError::ChannelLengthMismatch {
                    left: left.len(),
                    right: right.len(),
                }
                .into());
            }
            left_samples.extend_from_slice(&left);
            right_samples.extend_from_slice(&right);
            blocks += 1;
        }

        let wave = SoundWave::from_channels(left_samples, right_samples)?;

        tracing::debug!(blocks, samples = wave.len(), "drained audio source");
        Ok(wave)
    }
}

/// Feeds the left channel of `wave` to `sink` in consecutive blocks of
/// `block_len` samples. The last block may be shorter.
///
/// Returns the number of blocks delivered.
///
/// # Errors
/// Returns [`SoundWaveError::InvalidParameter`] (wrapped in
/// [`StreamError::Wave`]) if `block_len` is zero.
pub fn stream_to_sink<K: WaveSink + ?Sized>(
    wave: &SoundWave,
    sink: &mut K,
    block_len: usize,
) -> StreamResult<usize> {
    if block_len == 0 {
        return Err(StreamError::Wave(SoundWaveError::invalid_parameter(
            "Block length must be greater than zero",
        )));
    }

    let left = wave.left_channel();
    let mut blocks = 0usize;
    for block in left.chunks(block_len) {
        sink.update(block);
        blocks += 1;
    }
    tracing::trace!(blocks, block_len, "streamed wave to sink");
    Ok(blocks)
}
