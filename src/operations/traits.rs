//! Core trait definitions for sound-wave operations.
//!
//! Operations are grouped by concern: [`WaveProcessing`] for the time-domain
//! algebra (scaling, normalization, mixing, echo) and [`WaveTransforms`] for
//! everything that goes through the discrete Fourier transform.

use super::types::FilterKind;
use crate::{Complex, SoundWave, SoundWaveResult};

/// Time-domain algebra on stereo waves.
///
/// `scale` is the only method that mutates the receiver. Every other method
/// returns a new wave and leaves `self` untouched.
pub trait WaveProcessing {
    /// Multiplies every sample by `factor`, then peak-normalizes each channel.
    ///
    /// This modifies the wave in place.
    fn scale(&mut self, factor: f64);

    /// Pure variant of [`WaveProcessing::scale`].
    fn scaled(&self, factor: f64) -> SoundWave;

    /// Returns a copy with each channel divided by its own peak if that peak exceeds 1.0.
    ///
    /// Channels are handled independently, so a loud left channel does not
    /// attenuate a quiet right channel.
    fn normalized(&self) -> SoundWave;

    /// Mixes `other` into a copy of `self`.
    ///
    /// The shorter wave is padded with trailing silence, the channels are
    /// summed sample by sample and the result is peak-normalized.
    fn add(&self, other: &SoundWave) -> SoundWave;

    /// Mixes in a delayed, attenuated, channel-swapped copy of the wave.
    ///
    /// # Arguments
    /// * `delta` - Delay in samples. Truncated toward zero; negative values
    ///   advance the echo instead of delaying it.
    /// * `alpha` - Gain applied to the echo.
    fn add_echo(&self, delta: f64, alpha: f64) -> SoundWave;
}

/// Spectral analysis and spectrum-projection filtering.
pub trait WaveTransforms {
    /// Discrete Fourier transforms of the left and right channels.
    fn spectra(&self) -> (Vec<Complex>, Vec<Complex>);

    /// Magnitude of the strongest frequency component across both channels.
    ///
    /// Returns `0.0` for an empty wave.
    fn highest_amplitude_frequency_component(&self) -> f64;

    /// Projects each channel's magnitude spectrum through a threshold filter.
    ///
    /// The surviving magnitudes, in bin order, become the samples of the
    /// returned wave. This is not an inverse transform, and the two output
    /// channels may differ in length.
    ///
    /// # Errors
    /// Returns [`SoundWaveError::InvalidParameter`](crate::SoundWaveError::InvalidParameter)
    /// if more than two thresholds are given, if the count does not match
    /// `kind`, or if a threshold is NaN.
    fn filter(&self, kind: FilterKind, thresholds: &[f64]) -> SoundWaveResult<SoundWave>;
}
