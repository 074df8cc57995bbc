use soundwaves::{
    CONTAINMENT_EPSILON, SimilarityParams, SoundWaveResult, WaveProcessing, find_scaled_pattern,
    similarity, similarity_with, triangle_wave,
};

pub fn main() -> SoundWaveResult<()> {
    let reference = triangle_wave(300.0, 0.2, 0.9, 0.002)?;
    let quieter = reference.scaled(0.25);
    let echoed = reference.add_echo(20.0, 0.4);

    println!("similarity(reference, quieter) = {:.6}", similarity(&reference, &quieter));
    println!("similarity(reference, echoed)  = {:.6}", similarity(&reference, &echoed));

    // A coarser damping grid trades accuracy for speed.
    let coarse = SimilarityParams {
        beta_step: 0.5,
        beta_max: 10.0,
    };
    println!(
        "coarse similarity(reference, echoed) = {:.6}",
        similarity_with(&reference, &echoed, &coarse)?
    );

    // Look for a scaled excerpt inside the reference.
    let mut excerpt = soundwaves::SoundWave::empty();
    let left = reference.left_channel();
    let right = reference.right_channel();
    excerpt.append(&left[30..40], &right[30..40]);
    let excerpt = excerpt.scaled(0.5);

    match find_scaled_pattern(&reference, &excerpt, CONTAINMENT_EPSILON) {
        Some((offset, scale)) => println!("excerpt found at sample {offset}, scale {scale:.4}"),
        None => println!("excerpt not found"),
    }

    Ok(())
}
