//! Spectral analysis and spectrum-projection filtering for [`SoundWave`].
//!
//! The transform is the textbook O(N²) discrete Fourier transform built on
//! [`Complex`]. Bin index `k` is used directly as the "frequency"; there is no
//! conversion to Hz anywhere in the crate.

use std::f64::consts::PI;

use ndarray::{Array1, ArrayView1};

use super::traits::WaveTransforms;
use super::types::FilterKind;
use crate::{Complex, SoundWave, SoundWaveError, SoundWaveResult};

/// Computes the discrete Fourier transform of `samples`.
///
/// Output bin `k` is `Σ_t e^{-2πi·k·t/N} · samples[t]`. The result has the same
/// length as the input; an empty input yields an empty spectrum.
pub fn fourier_transform<'a>(samples: impl Into<ArrayView1<'a, f64>>) -> Vec<Complex> {
    let samples = samples.into();
    let n = samples.len();
    tracing::trace!(len = n, "direct DFT");

    let n_f = n as f64;
    (0..n)
        .map(|k| {
            samples
                .iter()
                .enumerate()
                .fold(Complex::ZERO, |acc, (t, &x)| {
                    let angle = -2.0 * PI * (k as f64) * (t as f64) / n_f;
                    acc.add(Complex::unit_angle(angle).scale(x))
                })
        })
        .collect()
}

/// Magnitudes of the discrete Fourier transform of `samples`, in bin order.
pub fn magnitude_spectrum<'a>(samples: impl Into<ArrayView1<'a, f64>>) -> Vec<f64> {
    fourier_transform(samples)
        .into_iter()
        .map(Complex::magnitude)
        .collect()
}

/// Strongest bin of a spectrum, folded left to right from zero with [`Complex::max`].
fn spectral_peak(spectrum: &[Complex]) -> Complex {
    spectrum.iter().copied().fold(Complex::ZERO, Complex::max)
}

/// Checks the threshold list against `kind` and returns it sorted ascending.
fn validate_thresholds(kind: FilterKind, thresholds: &[f64]) -> SoundWaveResult<Vec<f64>> {
    if thresholds.len() > 2 {
        return Err(SoundWaveError::invalid_parameter(format!(
            "At most two filter thresholds are allowed, got {}",
            thresholds.len()
        )));
    }
    if thresholds.iter().any(|t| t.is_nan()) {
        return Err(SoundWaveError::invalid_parameter(
            "Filter thresholds must not be NaN",
        ));
    }
    if thresholds.len() != kind.required_thresholds() {
        return Err(SoundWaveError::invalid_parameter(format!(
            "{kind} filter needs {} threshold(s), got {}",
            kind.required_thresholds(),
            thresholds.len()
        )));
    }

    let mut sorted = thresholds.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Keeps the magnitudes that pass `kind`, preserving bin order.
fn project(magnitudes: Vec<f64>, kind: FilterKind, thresholds: &[f64]) -> Array1<f64> {
    let passes = |m: f64| match (kind, thresholds) {
        (FilterKind::Lowpass, [t]) => m < *t,
        (FilterKind::Highpass, [t]) => m > *t,
        (FilterKind::Bandpass, [lo, hi]) => *lo < m && m < *hi,
        _ => false,
    };
    magnitudes.into_iter().filter(|&m| passes(m)).collect()
}

impl WaveTransforms for SoundWave {
    fn spectra(&self) -> (Vec<Complex>, Vec<Complex>) {
        (
            fourier_transform(self.left.view()),
            fourier_transform(self.right.view()),
        )
    }

    fn highest_amplitude_frequency_component(&self) -> f64 {
        let (left, right) = self.spectra();
        let peak = Complex::max(spectral_peak(&right), spectral_peak(&left));
        peak.magnitude()
    }

    fn filter(&self, kind: FilterKind, thresholds: &[f64]) -> SoundWaveResult<SoundWave> {
        if thresholds.is_empty() {
            return Ok(self.clone());
        }
        let thresholds = validate_thresholds(kind, thresholds)?;

        let left = project(magnitude_spectrum(self.left.view()), kind, &thresholds);
        let right = project(magnitude_spectrum(self.right.view()), kind, &thresholds);

        tracing::debug!(
            %kind,
            ?thresholds,
            left_bins = left.len(),
            right_bins = right.len(),
            "spectrum projection filter"
        );
        if left.len() != right.len() {
            tracing::debug!("filtered channels diverge in length");
        }
        Ok(SoundWave::from_parts_unchecked(left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;
    use ndarray::array;
    use rustfft::{FftPlanner, num_complex::Complex64};

    fn three_sample_wave() -> SoundWave {
        SoundWave::from_mono(array![0.3, 0.4, 0.6])
    }

    fn assert_channel(actual: &[f64], expected: &[f64], tol: f64) {
        assert_eq!(actual.len(), expected.len(), "length mismatch");
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_approx_eq!(*a, *e, tol);
        }
    }

    #[test]
    fn test_dft_of_impulse_is_flat() {
        let spectrum = fourier_transform(&[1.0, 0.0, 0.0, 0.0][..]);
        assert_eq!(spectrum.len(), 4);
        for bin in spectrum {
            assert_approx_eq!(bin.re(), 1.0, 1e-12);
            assert_approx_eq!(bin.im(), 0.0, 1e-12);
        }
    }

    #[test]
    fn test_dft_empty() {
        let empty: [f64; 0] = [];
        assert!(fourier_transform(&empty[..]).is_empty());
        assert!(magnitude_spectrum(&empty[..]).is_empty());
    }

    #[test]
    fn test_dft_matches_rustfft() {
        let samples: Vec<f64> = (0..37)
            .map(|i| ((i * 7 % 11) as f64 - 5.0) / 5.0 + 0.3 * (i as f64 * 0.4).sin())
            .collect();

        let direct = fourier_transform(&samples[..]);

        let mut buffer: Vec<Complex64> = samples.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        FftPlanner::new()
            .plan_fft_forward(buffer.len())
            .process(&mut buffer);

        for (ours, reference) in direct.iter().zip(buffer.iter()) {
            assert_approx_eq!(ours.re(), reference.re, 1e-9);
            assert_approx_eq!(ours.im(), reference.im, 1e-9);
        }
    }

    #[test]
    fn test_magnitude_spectrum_values() {
        let mags = magnitude_spectrum(&[0.3, 0.4, 0.6][..]);
        assert_channel(&mags, &[1.3, 0.2645751311064591, 0.26457513110645914], 1e-12);
    }

    #[test]
    fn test_highest_amplitude_component() {
        assert_approx_eq!(
            three_sample_wave().highest_amplitude_frequency_component(),
            1.3,
            1e-9
        );

        let wave = SoundWave::from_channels(vec![0.9, 0.73, 0.41], vec![0.88, 0.53, 0.61]).unwrap();
        assert_approx_eq!(wave.highest_amplitude_frequency_component(), 2.04, 0.01);
    }

    #[test]
    fn test_highest_amplitude_component_empty() {
        assert_eq!(SoundWave::empty().highest_amplitude_frequency_component(), 0.0);
    }

    #[test]
    fn test_filter_lowpass_bandpass_highpass() {
        let wave = three_sample_wave();
        let side = [0.2645751311064591, 0.26457513110645914];

        let low = wave.filter(FilterKind::Lowpass, &[0.5]).unwrap();
        assert_channel(&low.left_channel(), &side, 1e-12);
        assert_channel(&low.right_channel(), &side, 1e-12);

        let band = wave.filter(FilterKind::Bandpass, &[0.6, 0.2]).unwrap();
        assert_channel(&band.left_channel(), &side, 1e-12);
        assert_channel(&band.right_channel(), &side, 1e-12);

        let high = wave.filter(FilterKind::Highpass, &[0.6]).unwrap();
        assert_channel(&high.left_channel(), &[1.3], 1e-12);
        assert_channel(&high.right_channel(), &[1.3], 1e-12);
    }

    #[test]
    fn test_filter_no_thresholds_returns_copy() {
        let wave = SoundWave::from_channels(vec![10.0, 1.0, 1.0], vec![0.3, 0.4, 0.6]).unwrap();

        let same = wave.filter(FilterKind::Lowpass, &[]).unwrap();

        assert_eq!(same.left_channel(), wave.left_channel());
        assert_eq!(same.right_channel(), wave.right_channel());
    }

    #[test]
    fn test_filter_empty_wave() {
        let wave = SoundWave::empty();
        for (kind, thresholds) in [
            (FilterKind::Lowpass, vec![0.4]),
            (FilterKind::Bandpass, vec![0.4, 0.6]),
            (FilterKind::Highpass, vec![0.6]),
        ] {
            let filtered = wave.filter(kind, &thresholds).unwrap();
            assert!(filtered.left_channel().is_empty());
            assert!(filtered.right_channel().is_empty());
        }
    }

    #[test]
    fn test_filter_argument_errors() {
        let wave = three_sample_wave();
        let cases: [(FilterKind, &[f64]); 5] = [
            (FilterKind::Bandpass, &[0.2, 0.4, 0.5]),
            (FilterKind::Lowpass, &[0.2, 0.4]),
            (FilterKind::Bandpass, &[0.2]),
            (FilterKind::Highpass, &[0.2, 0.4]),
            (FilterKind::Lowpass, &[f64::NAN]),
        ];
        for (kind, thresholds) in cases {
            assert!(
                matches!(
                    wave.filter(kind, thresholds),
                    Err(SoundWaveError::InvalidParameter(_))
                ),
                "{kind} with {thresholds:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_filter_channels_may_diverge() {
        // Left spectrum: [2, 0]; right spectrum: [0.5, 0.5].
        let wave = SoundWave::from_channels(vec![1.0, 1.0], vec![0.5, 0.0]).unwrap();

        let filtered = wave.filter(FilterKind::Highpass, &[1.0]).unwrap();

        assert_channel(&filtered.left_channel(), &[2.0], 1e-12);
        assert!(filtered.right_channel().is_empty());
    }
}
