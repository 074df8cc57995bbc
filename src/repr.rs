//! Core stereo wave representation.
//!
//! A [`SoundWave`] owns two equally long channels of `f64` samples at the fixed
//! rate [`SAMPLES_PER_SECOND`]. Channel getters hand out copies so callers can
//! never mutate a wave behind its back; the only in-place operations are
//! [`SoundWave::append`] and the processing trait's `scale`.

use std::fmt::{Display, Formatter};

use ndarray::{Array1, ArrayView1, Axis};

use crate::{SAMPLES_PER_SECOND, SoundWaveError, SoundWaveResult};

/// A dual-channel discrete-time audio signal.
///
/// # Invariant
/// `left.len() == right.len()`. The one exception is the output of
/// [`WaveTransforms::filter`](crate::WaveTransforms::filter), whose channels
/// are independent spectrum projections and may differ in length.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct SoundWave {
    pub(crate) left: Array1<f64>,
    pub(crate) right: Array1<f64>,
}

impl SoundWave {
    /// Creates a wave from a left and right channel.
    ///
    /// # Errors
    /// Returns [`SoundWaveError::ChannelLengthMismatch`] if the channels differ in length.
    pub fn new(left: Array1<f64>, right: Array1<f64>) -> SoundWaveResult<Self> {
        if left.len() != right.len() {
            return Err(SoundWaveError::ChannelLengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        Ok(Self { left, right })
    }

    /// Creates a wave from two sample vectors.
    ///
    /// # Errors
    /// Returns [`SoundWaveError::ChannelLengthMismatch`] if the channels differ in length.
    pub fn from_channels(left: Vec<f64>, right: Vec<f64>) -> SoundWaveResult<Self> {
        Self::new(Array1::from_vec(left), Array1::from_vec(right))
    }

    /// Creates a wave whose left and right channels are both `channel`.
    pub fn from_mono(channel: Array1<f64>) -> Self {
        Self {
            right: channel.clone(),
            left: channel,
        }
    }

    /// Creates a wave with no samples.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a silent wave of `len` samples per channel.
    pub fn zeros(len: usize) -> Self {
        Self {
            left: Array1::zeros(len),
            right: Array1::zeros(len),
        }
    }

    /// Builds a wave without checking channel lengths.
    ///
    /// Used by spectrum projections and by internal arithmetic on equalized channels.
    pub(crate) fn from_parts_unchecked(left: Array1<f64>, right: Array1<f64>) -> Self {
        Self { left, right }
    }

    /// Returns a copy of the left channel.
    pub fn left_channel(&self) -> Vec<f64> {
        self.left.to_vec()
    }

    /// Returns a copy of the right channel.
    pub fn right_channel(&self) -> Vec<f64> {
        self.right.to_vec()
    }

    /// Borrowed, read-only view of the left channel.
    pub fn left_view(&self) -> ArrayView1<'_, f64> {
        self.left.view()
    }

    /// Borrowed, read-only view of the right channel.
    pub fn right_view(&self) -> ArrayView1<'_, f64> {
        self.right.view()
    }

    /// Number of samples per channel (measured on the left channel).
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns `true` if the wave holds no samples.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// The sample rate, always [`SAMPLES_PER_SECOND`].
    pub const fn sample_rate(&self) -> u32 {
        SAMPLES_PER_SECOND
    }

    /// Duration in seconds: `len / SAMPLES_PER_SECOND`.
    pub fn duration(&self) -> f64 {
        self.len() as f64 / f64::from(SAMPLES_PER_SECOND)
    }

    /// Appends the given channel data to the end of this wave, in place.
    ///
    /// The two slices are expected to have equal length; this is not validated.
    pub fn append(&mut self, lchannel: &[f64], rchannel: &[f64]) {
        extend_channel(&mut self.left, ArrayView1::from(lchannel));
        extend_channel(&mut self.right, ArrayView1::from(rchannel));
    }

    /// Appends all samples of `other` to the end of this wave, in place.
    pub fn append_wave(&mut self, other: &SoundWave) {
        extend_channel(&mut self.left, other.left.view());
        extend_channel(&mut self.right, other.right.view());
    }

    /// Returns a new wave equal to this one with the channel data appended.
    pub fn appended(&self, lchannel: &[f64], rchannel: &[f64]) -> Self {
        let mut wave = self.clone();
        wave.append(lchannel, rchannel);
        wave
    }

    /// Returns a copy with each channel padded with trailing zeros up to `len` samples.
    ///
    /// Channels are padded independently and never truncated.
    pub(crate) fn zero_extended(&self, len: usize) -> Self {
        let pad = |channel: &Array1<f64>| {
            let mut padded = channel.clone();
            let missing = Array1::zeros(len.saturating_sub(channel.len()));
            extend_channel(&mut padded, missing.view());
            padded
        };
        Self {
            left: pad(&self.left),
            right: pad(&self.right),
        }
    }

    fn longest_channel(&self) -> usize {
        self.left.len().max(self.right.len())
    }
}

/// Grows `channel` in place with the samples of `tail`; capacity is amortized.
fn extend_channel(channel: &mut Array1<f64>, tail: ArrayView1<'_, f64>) {
    // A 1-D array has no other axis to disagree on, so only allocation overflow can fail here.
    if let Err(err) = channel.append(Axis(0), tail) {
        tracing::error!(%err, len = channel.len(), "failed to extend channel");
    }
}

/// Lines up two waves by zero-extending the shorter one at the end.
pub(crate) fn equalize(a: &SoundWave, b: &SoundWave) -> (SoundWave, SoundWave) {
    let len = a.longest_channel().max(b.longest_channel());
    (a.zero_extended(len), b.zero_extended(len))
}

impl Display for SoundWave {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "SoundWave: 2 ch × {} samples @ {} Hz ({:.4} s)",
            self.len(),
            SAMPLES_PER_SECOND,
            self.duration()
        )?;

        let preview = if f.alternate() { 8 } else { 3 };
        for (name, channel) in [("L", &self.left), ("R", &self.right)] {
            let len = channel.len();
            let shown = preview.min(len);
            write!(f, "{name}: [")?;
            for (i, val) in channel.iter().take(shown).enumerate() {
                write!(f, "{val:.4}")?;
                if i + 1 < shown {
                    write!(f, ", ")?;
                }
            }
            if len > shown {
                write!(f, ", ...")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
