//! Feeds a generated tone to a text "chart" one second at a time, and, with the
//! `decoding` feature, decodes a file given on the command line first.

use soundwaves::streaming::{DEFAULT_BLOCK_LEN, WaveSink, stream_to_sink};
use soundwaves::{SoundWave, StreamResult, sine_wave};

/// Prints a one-line amplitude summary per block.
struct TextChart {
    blocks_seen: usize,
}

impl WaveSink for TextChart {
    fn update(&mut self, block: &[f64]) {
        self.blocks_seen += 1;
        let peak = block.iter().fold(0.0_f64, |acc, s| acc.max(s.abs()));
        let bar = "#".repeat((peak * 40.0).round() as usize);
        println!("block {:>3} ({:>5} samples) |{bar}", self.blocks_seen, block.len());
    }
}

#[cfg(feature = "decoding")]
fn load(path: Option<String>) -> StreamResult<SoundWave> {
    match path {
        Some(path) => {
            let mut source = soundwaves::DecodedFileSource::open(path)?;
            SoundWave::from_source(&mut source)
        }
        None => Ok(sine_wave(6.0, 0.5, 1.0, 10.0)?),
    }
}

#[cfg(not(feature = "decoding"))]
fn load(path: Option<String>) -> StreamResult<SoundWave> {
    if path.is_some() {
        eprintln!("Decoding files requires the 'decoding' feature; using a generated tone.");
    }
    Ok(sine_wave(6.0, 0.5, 1.0, 10.0)?)
}

fn main() -> StreamResult<()> {
    let wave = load(std::env::args().nth(1))?;
    println!("{wave:#}");

    let mut chart = TextChart { blocks_seen: 0 };
    let blocks = stream_to_sink(&wave, &mut chart, DEFAULT_BLOCK_LEN)?;
    println!("{blocks} blocks drawn");
    Ok(())
}
