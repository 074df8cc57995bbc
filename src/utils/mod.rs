//! Utility functions for working with sound waves.
//!
//! # Modules
//!
//! - [`comparison`] - Similarity metric and scaled-pattern containment
//! - [`generation`] - Periodic waveform generators

pub mod comparison;
pub mod generation;

pub use comparison::*;
pub use generation::*;
