//! Tests for the streaming seams.

use crate::SoundWave;


/// Helper to build a wave with distinct, recognizable channels.
pub(crate) fn ramp_wave(len: usize) -> SoundWave {
    let left: Vec<f64> = (0..len).map(|i| i as f64 / 100.0).collect();
    let right: Vec<f64> = left.iter().map(|s| -s).collect();
    SoundWave::from_channels(left, right).unwrap()
}
