//! Serde support, enabled by the `serialization` feature.
#![cfg(feature = "serialization")]

use soundwaves::{Complex, FilterKind, SimilarityParams, SoundWave};

#[test]
fn sound_wave_serde_json() {
    let wave = SoundWave::from_channels(vec![0.5, -0.25], vec![0.125, 1.0]).unwrap();

    let json = serde_json::to_string(&wave).unwrap();
    let back: SoundWave = serde_json::from_str(&json).unwrap();

    assert_eq!(back, wave);
}

#[test]
fn parameter_types_serde_json() {
    let kind: FilterKind = serde_json::from_str("\"Bandpass\"").unwrap();
    assert_eq!(kind, FilterKind::Bandpass);

    let params: SimilarityParams =
        serde_json::from_str(r#"{"beta_step":0.5,"beta_max":4.0}"#).unwrap();
    assert_eq!(params.grid_len(), 8);

    let c = Complex::new(1.5, -2.0);
    assert_eq!(serde_json::to_string(&c).unwrap(), "[1.5,-2.0]");
    let back: Complex = serde_json::from_str("[1.5,-2.0]").unwrap();
    assert_eq!(back, c);
}
