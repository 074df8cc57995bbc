//! Core traits at the edges of the crate: where samples come from and where
//! they go.

use super::error::StreamResult;

/// A pull-based provider of stereo sample blocks.
///
/// Blocks are read in pairs: [`next_left`](AudioSource::next_left) returns the
/// left half of the current block and [`next_right`](AudioSource::next_right)
/// returns the right half and moves on to the next block. Both halves of a
/// block must have the same length.
pub trait AudioSource {
    /// Returns `true` while at least one more block can be read.
    fn has_more(&self) -> bool;

    /// Left-channel samples of the current block.
    ///
    /// # Errors
    /// [`StreamError::Exhausted`](super::StreamError::Exhausted) once
    /// [`has_more`](AudioSource::has_more) is `false`, or any error raised by
    /// the underlying reader.
    fn next_left(&mut self) -> StreamResult<Vec<f64>>;

    /// Right-channel samples of the current block. Advances to the next block.
    ///
    /// # Errors
    /// Same conditions as [`next_left`](AudioSource::next_left).
    fn next_right(&mut self) -> StreamResult<Vec<f64>>;
}

/// A consumer of successive sample blocks, such as a live chart.
pub trait WaveSink {
    /// Receives the next block of samples.
    fn update(&mut self, block: &[f64]);
}

impl<F> WaveSink for F
where
    F: FnMut(&[f64]),
{
    fn update(&mut self, block: &[f64]) {
        self(block)
    }
}
