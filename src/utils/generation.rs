//! Periodic waveform generators.
//!
//! Every generator produces a [`SoundWave`] whose left and right channels are
//! identical. With `n = trunc(duration · SAMPLES_PER_SECOND)` samples and a
//! time step of `duration / n`, sample `i` is a closed-form function of
//! `θ = 2π · frequency · i · dt + phase`.

use std::f64::consts::PI;
use std::fmt::{Display, Formatter};

use ndarray::Array1;

use crate::{SAMPLES_PER_SECOND, SoundWave, SoundWaveError, SoundWaveResult};

/// Shape of a generated periodic waveform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveformKind {
    /// `A · sin(θ)`
    Sine,
    /// `A · signum(sin(θ))`, with `signum(0) = 0`.
    Square,
    /// `A · (2/π) · asin(sin(π · θ))`
    Triangle,
}

impl Display for WaveformKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WaveformKind::Sine => "sine",
            WaveformKind::Square => "square",
            WaveformKind::Triangle => "triangle",
        };
        f.write_str(name)
    }
}

/// Sign of `x`, mapping both zeros to zero.
fn signum(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

impl WaveformKind {
    fn sample(self, theta: f64) -> f64 {
        match self {
            WaveformKind::Sine => theta.sin(),
            WaveformKind::Square => signum(theta.sin()),
            WaveformKind::Triangle => 2.0 / PI * (PI * theta).sin().asin(),
        }
    }
}

/// Generates a periodic waveform.
///
/// # Arguments
/// * `kind` - Waveform shape
/// * `frequency` - Frequency in Hz
/// * `phase` - Phase offset in radians
/// * `amplitude` - Peak amplitude
/// * `duration` - Duration in seconds
///
/// # Errors
/// Returns [`SoundWaveError::InvalidParameter`] if `duration` is negative or
/// not finite.
pub fn generate(
    kind: WaveformKind,
    frequency: f64,
    phase: f64,
    amplitude: f64,
    duration: f64,
) -> SoundWaveResult<SoundWave> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(SoundWaveError::invalid_parameter(format!(
            "Duration must be finite and non-negative, got {duration}"
        )));
    }

    let num_samples = (duration * f64::from(SAMPLES_PER_SECOND)) as usize;
    if num_samples == 0 {
        return Ok(SoundWave::empty());
    }
    let dt = duration / num_samples as f64;
    let angular = 2.0 * PI * frequency;

    let channel: Array1<f64> = (0..num_samples)
        .map(|i| amplitude * kind.sample(angular * (i as f64 * dt) + phase))
        .collect();

    tracing::trace!(%kind, frequency, num_samples, "generated waveform");
    Ok(SoundWave::from_mono(channel))
}

/// Generates a sine wave. See [`generate`].
///
/// # Errors
/// Returns [`SoundWaveError::InvalidParameter`] for a negative or non-finite duration.
pub fn sine_wave(
    frequency: f64,
    phase: f64,
    amplitude: f64,
    duration: f64,
) -> SoundWaveResult<SoundWave> {
    generate(WaveformKind::Sine, frequency, phase, amplitude, duration)
}

/// Generates a square wave. See [`generate`].
///
/// # Errors
/// Returns [`SoundWaveError::InvalidParameter`] for a negative or non-finite duration.
pub fn square_wave(
    frequency: f64,
    phase: f64,
    amplitude: f64,
    duration: f64,
) -> SoundWaveResult<SoundWave> {
    generate(WaveformKind::Square, frequency, phase, amplitude, duration)
}

/// Generates a triangle wave. See [`generate`].
///
/// # Errors
/// Returns [`SoundWaveError::InvalidParameter`] for a negative or non-finite duration.
pub fn triangle_wave(
    frequency: f64,
    phase: f64,
    amplitude: f64,
    duration: f64,
) -> SoundWaveResult<SoundWave> {
    generate(WaveformKind::Triangle, frequency, phase, amplitude, duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    const FOUR_SAMPLES: f64 = 4.0 / 44100.0;

    fn assert_both_channels(wave: &SoundWave, expected: &[f64], tol: f64) {
        for channel in [wave.left_channel(), wave.right_channel()] {
            assert_eq!(channel.len(), expected.len());
            for (a, e) in channel.iter().zip(expected.iter()) {
                assert_approx_eq!(*a, *e, tol);
            }
        }
    }

    #[test]
    fn test_sine_wave() {
        let wave = sine_wave(400.0, 0.0, 1.0, FOUR_SAMPLES).unwrap();
        assert_both_channels(
            &wave,
            &[0.0, 0.056959498116, 0.113734047592, 0.17013930031],
            1e-5,
        );
        assert_approx_eq!(wave.duration(), FOUR_SAMPLES, 1e-12);
    }

    #[test]
    fn test_sine_wave_phase_shift() {
        let inverted = sine_wave(400.0, PI, 1.0, FOUR_SAMPLES).unwrap();
        assert_both_channels(
            &inverted,
            &[0.0, -0.056959498116, -0.113734047592, -0.17013930031],
            1e-5,
        );

        let full_turn = sine_wave(400.0, 2.0 * PI, 1.0, FOUR_SAMPLES).unwrap();
        assert_both_channels(
            &full_turn,
            &[0.0, 0.056959498116, 0.113734047592, 0.17013930031],
            1e-5,
        );
    }

    #[test]
    fn test_zero_duration_is_empty() {
        let wave = sine_wave(400.0, 0.0, 1.0, 0.0).unwrap();
        assert!(wave.is_empty());
        assert!(wave.right_channel().is_empty());
    }

    #[test]
    fn test_square_wave_starts_at_zero() {
        let wave = square_wave(400.0, 0.0, 1.0, FOUR_SAMPLES).unwrap();
        assert_both_channels(&wave, &[0.0, 1.0, 1.0, 1.0], 1e-12);

        let quiet = square_wave(400.0, PI / 2.0, 0.5, FOUR_SAMPLES).unwrap();
        assert_both_channels(&quiet, &[0.5, 0.5, 0.5, 0.5], 1e-12);
    }

    #[test]
    fn test_triangle_wave() {
        let wave = triangle_wave(400.0, 0.0, 1.0, FOUR_SAMPLES).unwrap();
        assert_both_channels(
            &wave,
            &[0.0, 0.113980685844527, 0.227961371689055, 0.341942057533582],
            1e-5,
        );
    }

    #[test]
    fn test_amplitude_bounds() {
        for kind in [WaveformKind::Sine, WaveformKind::Square, WaveformKind::Triangle] {
            let wave = generate(kind, 440.0, 0.3, 0.8, 0.01).unwrap();
            assert_eq!(wave.len(), 441);
            assert!(
                wave.left_channel().iter().all(|s| s.abs() <= 0.8 + 1e-12),
                "{kind} exceeds its amplitude"
            );
        }
    }

    #[test]
    fn test_invalid_duration() {
        for duration in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                sine_wave(1.0, 0.0, 1.0, duration),
                Err(SoundWaveError::InvalidParameter(_))
            ));
        }
    }
}
