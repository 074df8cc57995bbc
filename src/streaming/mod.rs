//! Streaming seams between sound waves and the outside world.
//!
//! Samples enter through an [`AudioSource`], a pull-based provider of
//! left/right block pairs, and leave through a [`WaveSink`], which receives
//! successive blocks of one channel (for example a live chart).
//!
//! # Example
//!
//! ```rust
//! use soundwaves::streaming::{BlockSource, stream_to_sink};
//! use soundwaves::SoundWave;
//!
//! let mut source = BlockSource::new(vec![0.1; 10], vec![0.2; 10], 4).unwrap();
//! let wave = SoundWave::from_source(&mut source).unwrap();
//! assert_eq!(wave.len(), 10);
//!
//! let mut peaks = Vec::new();
//! let blocks = stream_to_sink(&wave, &mut |block: &[f64]| {
//!     peaks.push(block.iter().copied().fold(0.0_f64, f64::max));
//! }, 4)
//! .unwrap();
//! assert_eq!(blocks, 3);
//! ```
//!
//! With the `decoding` feature, `DecodedFileSource` reads encoded audio
//! files through symphonia.

pub mod error;
pub mod sources;
pub mod stream;
pub mod traits;

#[cfg(test)]
mod tests;

pub use error::{StreamError, StreamResult};
pub use sources::BlockSource;
#[cfg(feature = "decoding")]
pub use sources::DecodedFileSource;
pub use stream::{DEFAULT_BLOCK_LEN, stream_to_sink};
pub use traits::{AudioSource, WaveSink};
