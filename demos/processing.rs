use std::f64::consts::PI;

use soundwaves::{
    SoundWaveResult, WaveProcessing, WaveTransforms, magnitude_spectrum, sine_wave, square_wave,
};

fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()))
}

pub fn main() -> SoundWaveResult<()> {
    // Start with a short 440 Hz sine.
    let mut wave = sine_wave(440.0, 0.0, 0.8, 0.01)?;
    println!("{wave}");
    println!("Input:  peak={:.4}", peak(&wave.left_channel()));

    // Gain past full scale is pulled back by peak normalization.
    wave.scale(3.0);
    println!("Scaled: peak={:.4}", peak(&wave.left_channel()));

    // Mix in a square wave a quarter-turn out of phase.
    let square = square_wave(220.0, PI / 2.0, 0.5, 0.01)?;
    let mixed = wave.add(&square);
    println!("Mixed:  peak={:.4}", peak(&mixed.left_channel()));

    // Echo 100 samples later at half strength.
    let echoed = mixed.add_echo(100.0, 0.5);
    println!("Echoed: {} samples", echoed.len());

    // Spectral summary on a short excerpt; the transform is quadratic.
    let excerpt = sine_wave(440.0, 0.0, 0.8, 256.0 / 44100.0)?;
    let spectrum = magnitude_spectrum(excerpt.left_view());
    println!(
        "Strongest component: {:.4} ({} bins)",
        excerpt.highest_amplitude_frequency_component(),
        spectrum.len()
    );

    Ok(())
}
