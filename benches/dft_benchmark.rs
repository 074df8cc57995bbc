//! Timing for the quadratic operations: the direct DFT, the similarity grid
//! search and the containment scan.
//!
//! Run with `cargo bench --bench dft_benchmark`.

use soundwaves::{SoundWave, WaveProcessing, WaveTransforms, contains, sine_wave, similarity};
use std::time::Instant;

/// Runs `op` a few times to warm up, then `runs` timed times, and prints the
/// statistics in milliseconds.
fn time_it<R>(label: &str, runs: usize, mut op: impl FnMut() -> R) {
    for _ in 0..2 {
        std::hint::black_box(op());
    }

    let mut times = Vec::with_capacity(runs);
    for _ in 0..runs {
        let start = Instant::now();
        std::hint::black_box(op());
        times.push(start.elapsed().as_secs_f64() * 1000.0);
    }

    times.sort_by(f64::total_cmp);
    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let std_dev =
        (times.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / times.len() as f64).sqrt();
    let median = times[times.len() / 2];

    println!(
        "{label:<32} {mean:>9.3}ms ± {std_dev:.3}ms (median: {median:.3}ms, range: {:.3}-{:.3}ms)",
        times[0],
        times[times.len() - 1]
    );
}

fn tone(samples: usize) -> SoundWave {
    let duration = samples as f64 / f64::from(soundwaves::SAMPLES_PER_SECOND);
    match sine_wave(440.0, 0.3, 0.5, duration) {
        Ok(wave) => wave,
        Err(err) => panic!("failed to generate benchmark tone: {err}"),
    }
}

/// Constant wave of `samples` samples at 0.5, dropping to 0.25 from index `step` on.
fn flat(samples: usize, step: usize) -> SoundWave {
    let channel: Vec<f64> = (0..samples)
        .map(|i| if i < step { 0.5 } else { 0.25 })
        .collect();
    match SoundWave::from_channels(channel.clone(), channel) {
        Ok(wave) => wave,
        Err(err) => panic!("failed to build benchmark wave: {err}"),
    }
}

fn main() {
    println!("Sound-wave benchmark (direct O(N²) transform)");
    println!("=============================================");

    println!("\nhighest_amplitude_frequency_component");
    for samples in [128, 512, 1024, 2048] {
        let wave = tone(samples);
        time_it(&format!("{samples} samples"), 5, || {
            wave.highest_amplitude_frequency_component()
        });
    }

    println!("\nsimilarity (10 000-point damping grid)");
    for samples in [16, 64, 256] {
        let a = tone(samples);
        let b = a.scaled(0.5);
        time_it(&format!("{samples} samples"), 5, || similarity(&a, &b));
    }

    println!("\ncontains (worst case, no match)");
    for samples in [1_000, 10_000] {
        let big = flat(samples, samples);
        // Every offset agrees with the pattern up to its last sample.
        let small = flat(samples / 10, samples / 10 - 1);
        time_it(&format!("{samples} / {} samples", samples / 10), 5, || {
            contains(&big, &small)
        });
    }
}
