// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # soundwaves
//!
//! Stereo sound-wave algebra and analysis: mixing, echo synthesis, amplitude
//! scaling with peak normalization, a direct discrete Fourier transform,
//! spectrum-projection filtering, and scaled-pattern similarity and
//! containment search.
//!
//! ## Overview
//!
//! A [`SoundWave`] is a pair of equally long `f64` channels sampled at the fixed
//! rate [`SAMPLES_PER_SECOND`]. Operations are grouped into traits:
//!
//! - [`WaveProcessing`]: `scale`, `normalized`, `add`, `add_echo`
//! - [`WaveTransforms`]: `spectra`, `highest_amplitude_frequency_component`, `filter`
//!
//! Free functions cover comparisons between waves ([`similarity`],
//! [`contains`], [`find_scaled_pattern`]) and waveform generation
//! ([`sine_wave`], [`square_wave`], [`triangle_wave`]).
//!
//! ## Features
//!
//! - `decoding`: decode audio files into waves (using the `symphonia` crate)
//! - `serialization`: serde support for waves and parameter types
//!
//! ## Error Handling
//!
//! ```rust
//! use soundwaves::{FilterKind, SoundWave, SoundWaveError, WaveTransforms};
//!
//! let wave = SoundWave::from_channels(vec![0.3, 0.4, 0.6], vec![0.3, 0.4, 0.6]).unwrap();
//!
//! match wave.filter(FilterKind::Bandpass, &[0.5]) {
//!     Ok(filtered) => println!("{filtered}"),
//!     Err(SoundWaveError::InvalidParameter(msg)) => eprintln!("Invalid parameter: {msg}"),
//!     Err(other) => eprintln!("Other error: {other}"),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use soundwaves::{SoundWave, WaveProcessing, WaveTransforms, contains, sine_wave, similarity};
//!
//! let tone = sine_wave(440.0, 0.3, 0.5, 0.005).unwrap();
//! let quieter = tone.scaled(0.5);
//!
//! assert!(contains(&tone, &quieter));
//! assert!(similarity(&tone, &quieter) > 0.99);
//!
//! let mixed = tone.add(&quieter.add_echo(100.0, 0.3));
//! println!("peak component: {}", mixed.highest_amplitude_frequency_component());
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (normalization, filtering, similarity
//! results, source draining) and never installs a subscriber.

mod complex;
mod error;
pub mod operations;
mod repr;
pub mod streaming;
pub mod utils;

pub use crate::complex::Complex;
pub use crate::error::{SoundWaveError, SoundWaveResult};
pub use crate::operations::{
    CONTAINMENT_EPSILON, FilterKind, SimilarityParams, WaveProcessing, WaveTransforms,
    fourier_transform, magnitude_spectrum,
};
pub use crate::repr::SoundWave;
pub use crate::streaming::{
    AudioSource, BlockSource, StreamError, StreamResult, WaveSink, stream_to_sink,
};
#[cfg(feature = "decoding")]
pub use crate::streaming::DecodedFileSource;
pub use crate::utils::{
    comparison::{
        contains, contains_with_tolerance, find_scaled_pattern, similarity, similarity_with,
    },
    generation::{WaveformKind, generate, sine_wave, square_wave, triangle_wave},
};

/// Sample rate shared by every wave, in samples per second.
pub const SAMPLES_PER_SECOND: u32 = 44100;
