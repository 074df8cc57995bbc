//! Time-domain processing operations for [`SoundWave`].
//!
//! This module implements the [`WaveProcessing`] trait: per-channel peak
//! normalization, scaling, mixing and echo synthesis.

use ndarray::Array1;

use crate::repr::equalize;
use crate::{SoundWave, WaveProcessing};

/// Divides `channel` by its peak absolute value when that peak exceeds 1.0.
fn normalize_channel(channel: &mut Array1<f64>, name: &'static str) {
    if channel.is_empty() {
        return;
    }
    let max = channel.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = channel.iter().copied().fold(f64::INFINITY, f64::min);

    let peak = max.abs().max(min.abs());
    if peak > 1.0 {
        tracing::debug!(channel = name, peak, "peak-normalizing channel");
        channel.mapv_inplace(|x| x / peak);
    }
}

impl WaveProcessing for SoundWave {
    fn scale(&mut self, factor: f64) {
        self.left.mapv_inplace(|x| x * factor);
        self.right.mapv_inplace(|x| x * factor);
        normalize_channel(&mut self.left, "left");
        normalize_channel(&mut self.right, "right");
    }

    fn scaled(&self, factor: f64) -> SoundWave {
        let mut wave = self.clone();
        wave.scale(factor);
        wave
    }

    fn normalized(&self) -> SoundWave {
        let mut wave = self.clone();
        normalize_channel(&mut wave.left, "left");
        normalize_channel(&mut wave.right, "right");
        wave
    }

    fn add(&self, other: &SoundWave) -> SoundWave {
        let (a, b) = equalize(self, other);
        let left = &a.left + &b.left;
        let right = &a.right + &b.right;
        SoundWave::from_parts_unchecked(left, right).normalized()
    }

    fn add_echo(&self, delta: f64, alpha: f64) -> SoundWave {
        let echo_len = (self.len() as f64 + delta).max(0.0) as usize;
        let shift = delta.abs() as usize;
        let mut echo_left = Array1::<f64>::zeros(echo_len);
        let mut echo_right = Array1::<f64>::zeros(echo_len);

        for t in 0..echo_len {
            // A negative delta makes the echo lead the original instead of trailing it.
            let source = if delta < 0.0 {
                Some(t + shift)
            } else {
                t.checked_sub(shift)
            };
            // Filtered waves may carry channels of different lengths.
            if let Some(src) = source {
                if let Some(r) = self.right.get(src) {
                    echo_left[t] = r * alpha;
                }
                if let Some(l) = self.left.get(src) {
                    echo_right[t] = l * alpha;
                }
            }
        }

        tracing::trace!(delta, alpha, echo_len, "synthesized echo");
        let echo = SoundWave::from_parts_unchecked(echo_left, echo_right);
        self.add(&echo)
    }
}
