//! Sound-wave operations and transformations.
//!
//! Operations are organized into focused traits implemented on [`SoundWave`](crate::SoundWave).
//!
//! ## Module Organization
//!
//! - [`traits`] - Core trait definitions
//! - [`processing`] - Scaling, normalization, mixing and echo
//! - [`transforms`] - Discrete Fourier transform, spectral peak and filtering
//! - [`types`] - Supporting types and enums
//!
//! ## Quick Start
//!
//! ```rust
//! use soundwaves::{SoundWave, operations::*};
//! use ndarray::array;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let wave = SoundWave::from_mono(array![0.3, 0.4, 0.6]);
//!
//! // Time-domain algebra
//! let louder = wave.scaled(3.0);
//! let with_echo = wave.add_echo(1.0, 0.5);
//!
//! // Spectral analysis
//! let peak = wave.highest_amplitude_frequency_component();
//! let filtered = wave.filter(FilterKind::Highpass, &[0.6])?;
//! # Ok(())
//! # }
//! ```

pub mod traits;
pub mod types;

pub mod processing;
pub mod transforms;

pub use traits::{WaveProcessing, WaveTransforms};
pub use transforms::{fourier_transform, magnitude_spectrum};
pub use types::{CONTAINMENT_EPSILON, FilterKind, SimilarityParams};
