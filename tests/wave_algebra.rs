//! Cross-module properties of the time-domain algebra.

use approx_eq::assert_approx_eq;
use soundwaves::{SoundWave, WaveProcessing, sine_wave, square_wave, triangle_wave};

fn assert_bounded(wave: &SoundWave) {
    for s in wave.left_channel().iter().chain(wave.right_channel().iter()) {
        assert!(s.abs() <= 1.0 + 1e-9, "sample {s} escaped the unit range");
    }
}

fn assert_channel(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_approx_eq!(*a, *e, tol);
    }
}

#[test]
fn mixing_loud_generators_stays_in_range() {
    let sine = sine_wave(440.0, 0.0, 1.0, 0.005).unwrap();
    let square = square_wave(220.0, 0.1, 1.0, 0.004).unwrap();
    let triangle = triangle_wave(110.0, 0.7, 1.0, 0.006).unwrap();

    let mixed = sine.add(&square).add(&triangle);

    assert_eq!(mixed.len(), triangle.len());
    assert_bounded(&mixed);
}

#[test]
fn echo_of_loud_wave_stays_in_range() {
    let wave = square_wave(300.0, 0.2, 1.0, 0.003).unwrap();
    for delta in [-40.0, -1.0, 0.0, 1.0, 25.5, 200.0] {
        assert_bounded(&wave.add_echo(delta, 0.9));
    }
}

#[test]
fn scale_past_full_scale_normalizes_each_channel() {
    let mut wave =
        SoundWave::from_channels(vec![0.5, 0.4, 0.2], vec![0.7, 0.4, 0.8]).unwrap();

    wave.scale(3.0);

    assert_channel(&wave.left_channel(), &[1.0, 0.8, 0.4], 1e-5);
    assert_channel(&wave.right_channel(), &[2.1 / 2.4, 1.2 / 2.4, 1.0], 1e-5);
}

#[test]
fn echo_scenarios() {
    let ones = SoundWave::from_channels(vec![1.0; 3], vec![1.0; 3]).unwrap();

    let delayed = ones.add_echo(1.0, 0.5);
    assert_channel(&delayed.left_channel(), &[1.0 / 1.5, 1.0, 1.0, 0.5 / 1.5], 1e-4);
    assert_channel(&delayed.right_channel(), &[1.0 / 1.5, 1.0, 1.0, 0.5 / 1.5], 1e-4);

    let advanced = ones.add_echo(-1.0, 0.5);
    assert_channel(&advanced.left_channel(), &[1.0, 1.0, 1.0 / 1.5], 1e-4);
}

#[test]
fn add_pads_the_shorter_wave() {
    let a = SoundWave::from_channels(vec![0.5, 0.3, 0.2], vec![0.5, 0.3, 0.2]).unwrap();
    let b = SoundWave::from_channels(vec![0.4, 0.4, 0.3, 0.1], vec![0.4, 0.4, 0.3, 0.1]).unwrap();

    let sum = a.add(&b);

    assert_channel(&sum.left_channel(), &[0.9, 0.7, 0.5, 0.1], 1e-5);
    assert_eq!(b.add(&a), sum);
}

#[test]
fn append_then_scale_matches_pure_variants() {
    let base = SoundWave::from_channels(vec![0.1, 0.2], vec![-0.1, -0.2]).unwrap();

    let mut mutated = base.clone();
    mutated.append(&[0.9], &[-0.9]);
    mutated.scale(2.0);

    let pure = base.appended(&[0.9], &[-0.9]).scaled(2.0);

    assert_eq!(mutated, pure);
    assert_eq!(base.len(), 2);
}
