//! Supporting types and enums for sound-wave operations.
//!
//! This module contains the filter selector and the tuning parameters used by
//! the comparison routines.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::{SoundWaveError, SoundWaveResult};

/// Tolerance used when checking that every sample of a pattern is matched
/// by the same amplitude scale factor.
pub const CONTAINMENT_EPSILON: f64 = 1e-5;

/// Spectrum-projection filters.
///
/// The bin index of the discrete Fourier transform stands in for frequency, and
/// thresholds are compared against bin *magnitudes*.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum FilterKind {
    /// Keeps magnitudes strictly below a single threshold.
    Lowpass,
    /// Keeps magnitudes strictly between two thresholds.
    Bandpass,
    /// Keeps magnitudes strictly above a single threshold.
    Highpass,
}

impl FilterKind {
    /// Number of thresholds this filter kind requires.
    pub const fn required_thresholds(self) -> usize {
        match self {
            FilterKind::Lowpass | FilterKind::Highpass => 1,
            FilterKind::Bandpass => 2,
        }
    }
}

impl Display for FilterKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FilterKind::Lowpass => "lowpass",
            FilterKind::Bandpass => "bandpass",
            FilterKind::Highpass => "highpass",
        };
        f.write_str(name)
    }
}

impl FromStr for FilterKind {
    type Err = SoundWaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lowpass" | "low" => Ok(FilterKind::Lowpass),
            "bandpass" | "band" => Ok(FilterKind::Bandpass),
            "highpass" | "high" => Ok(FilterKind::Highpass),
            other => Err(SoundWaveError::invalid_parameter(format!(
                "Unrecognised filter kind '{other}'"
            ))),
        }
    }
}

/// Damping-factor grid scanned by [`similarity_with`](crate::similarity_with).
///
/// The grid is `{beta_step · i | i = 1 ..= round(beta_max / beta_step)}`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct SimilarityParams {
    /// Distance between consecutive damping factors.
    pub beta_step: f64,
    /// Largest damping factor tried.
    pub beta_max: f64,
}

impl Default for SimilarityParams {
    fn default() -> Self {
        Self {
            beta_step: 0.01,
            beta_max: 100.0,
        }
    }
}

impl SimilarityParams {
    /// Checks that both parameters are finite and positive and that the grid
    /// holds at least one point.
    ///
    /// # Errors
    /// Returns [`SoundWaveError::InvalidParameter`] otherwise.
    pub fn validate(&self) -> SoundWaveResult<()> {
        if !(self.beta_step.is_finite() && self.beta_step > 0.0) {
            return Err(SoundWaveError::invalid_parameter(format!(
                "beta_step must be finite and > 0, got {}",
                self.beta_step
            )));
        }
        if !(self.beta_max.is_finite() && self.beta_max > 0.0) {
            return Err(SoundWaveError::invalid_parameter(format!(
                "beta_max must be finite and > 0, got {}",
                self.beta_max
            )));
        }
        if self.grid_len() == 0 {
            return Err(SoundWaveError::invalid_parameter(format!(
                "beta_max {} is smaller than one beta_step {}",
                self.beta_max, self.beta_step
            )));
        }
        Ok(())
    }

    /// Number of grid points.
    pub fn grid_len(&self) -> usize {
        (self.beta_max / self.beta_step).round() as usize
    }

    /// Iterates the damping factors in ascending order.
    pub fn betas(&self) -> impl Iterator<Item = f64> + '_ {
        (1..=self.grid_len()).map(move |i| i as f64 * self.beta_step)
    }
}
