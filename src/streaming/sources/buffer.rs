//! In-memory block source.

use crate::streaming::{
    error::{StreamError, StreamResult},
    traits::AudioSource,
};
use crate::{SoundWave, SoundWaveError};

/// Serves a pair of in-memory channels as fixed-size blocks.
///
/// The final block may be shorter than `block_len`.
#[derive(Debug, Clone)]
pub struct BlockSource {
    left: Vec<f64>,
    right: Vec<f64>,
    block_len: usize,
    position: usize,
}

impl BlockSource {
    /// Creates a source over `left` and `right`.
    ///
    /// # Errors
    /// Returns [`SoundWaveError::ChannelLengthMismatch`] if the channels differ in
    /// length and [`SoundWaveError::InvalidParameter`] if `block_len` is zero.
    pub fn new(left: Vec<f64>, right: Vec<f64>, block_len: usize) -> StreamResult<Self> {
        if left.len() != right.len() {
            return Err(SoundWaveError::ChannelLengthMismatch {
                left: left.len(),
                right: right.len(),
            }
            .into());
        }
        if block_len == 0 {
            return Err(
                SoundWaveError::invalid_parameter("Block length must be greater than zero").into(),
            );
        }
        Ok(Self {
            left,
            right,
            block_len,
            position: 0,
        })
    }

    /// Creates a source that replays the samples of `wave`.
    ///
    /// # Errors
    /// Same conditions as [`BlockSource::new`].
    pub fn from_wave(wave: &SoundWave, block_len: usize) -> StreamResult<Self> {
        Self::new(wave.left_channel(), wave.right_channel(), block_len)
    }

    /// Samples not yet handed out, per channel.
    pub fn remaining(&self) -> usize {
        self.left.len() - self.position
    }

    fn current_block(&self) -> std::ops::Range<usize> {
        let end = (self.position + self.block_len).min(self.left.len());
        self.position..end
    }
}

impl AudioSource for BlockSource {
    fn has_more(&self) -> bool {
        self.position < self.left.len()
    }

    fn next_left(&mut self) -> StreamResult<Vec<f64>> {
        if !self.has_more() {
            return Err(StreamError::Exhausted);
        }
        Ok(self.left[self.current_block()].to_vec())
    }

    fn next_right(&mut self) -> StreamResult<Vec<f64>> {
        if !self.has_more() {
            return Err(StreamError::Exhausted);
        }
        let block = self.current_block();
        self.position = block.end;
        Ok(self.right[block].to_vec())
    }
}
