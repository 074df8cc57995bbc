//! Audio source implementations.

pub mod buffer;
#[cfg(feature = "decoding")]
pub mod file;

pub use buffer::BlockSource;
#[cfg(feature = "decoding")]
pub use file::DecodedFileSource;
