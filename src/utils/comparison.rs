//! Wave comparison utilities.
//!
//! This module provides the damped least-squares similarity metric and the
//! scaled-pattern containment search.

use ndarray::{ArrayView1, s};

use crate::operations::types::{CONTAINMENT_EPSILON, SimilarityParams};
use crate::repr::equalize;
use crate::{SoundWave, SoundWaveResult};

/// Similarity of `x` to `beta · y`: `1 / (1 + Σ(Rx − βRy)² + Σ(Lx − βLy)²)`.
///
/// Both waves must already be equalized.
fn gamma(x: &SoundWave, y: &SoundWave, beta: f64) -> f64 {
    let squared_error = |a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>| -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(&p, &q)| (p - beta * q).powi(2))
            .sum()
    };
    let right = squared_error(x.right.view(), y.right.view());
    let left = squared_error(x.left.view(), y.left.view());
    1.0 / (1.0 + right + left)
}

/// Best gamma in each direction over a damping grid.
///
/// Each maximum starts at zero and only moves on a strict improvement.
fn best_gammas(a: &SoundWave, b: &SoundWave, betas: impl Iterator<Item = f64>) -> (f64, f64) {
    let (a, b) = equalize(a, b);
    betas.fold((0.0, 0.0), |(best_ab, best_ba), beta| {
        let ab = gamma(&a, &b, beta);
        let ba = gamma(&b, &a, beta);
        (
            if ab > best_ab { ab } else { best_ab },
            if ba > best_ba { ba } else { best_ba },
        )
    })
}

fn averaged(a: &SoundWave, b: &SoundWave, params: &SimilarityParams) -> f64 {
    let (best_ab, best_ba) = best_gammas(a, b, params.betas());
    let score = (best_ab + best_ba) / 2.0;
    tracing::debug!(
        len = a.len().max(b.len()),
        best_ab,
        best_ba,
        score,
        "similarity"
    );
    score
}

/// Computes the similarity of two waves, in `(0, 1]`.
///
/// The shorter wave is zero-extended. For every damping factor `β` on the
/// default grid (`0.01, 0.02, …, 100.0`) the metric
/// `1 / (1 + Σ(Rx − βRy)² + Σ(Lx − βLy)²)` is evaluated in both directions;
/// the best value of each direction is kept and the two are averaged, which
/// makes the result symmetric in `a` and `b`.
///
/// Two empty waves have similarity `1.0`.
pub fn similarity(a: &SoundWave, b: &SoundWave) -> f64 {
    averaged(a, b, &SimilarityParams::default())
}

/// [`similarity`] over a custom damping grid.
///
/// # Errors
/// Returns [`SoundWaveError::InvalidParameter`](crate::SoundWaveError::InvalidParameter)
/// if `params` fails [`SimilarityParams::validate`].
pub fn similarity_with(
    a: &SoundWave,
    b: &SoundWave,
    params: &SimilarityParams,
) -> SoundWaveResult<f64> {
    params.validate()?;
    Ok(averaged(a, b, params))
}

/// Every `window[t] / pattern[t]` lies within `epsilon` of `scale`.
fn window_matches(
    window: ArrayView1<'_, f64>,
    pattern: ArrayView1<'_, f64>,
    scale: f64,
    epsilon: f64,
) -> bool {
    window
        .iter()
        .zip(pattern.iter())
        .all(|(&w, &p)| (w / p - scale).abs() <= epsilon)
}

/// Finds the first offset at which `small` occurs inside `big` up to a single
/// amplitude scale factor.
///
/// At each offset `s` the scale is `|big.right[s] / small.right[0]|`, and every
/// sample ratio of both channels must be within `epsilon` of it. Zero samples in
/// `small` produce NaN or infinite ratios, so such offsets never match.
///
/// Returns `Some((offset, scale))` for the first match. An empty pattern
/// matches at offset 0 with scale 1.0.
///
/// For filtered waves with channels of different lengths, the pattern length
/// is the longer of `small`'s channels and the haystack is the shorter of `big`'s.
pub fn find_scaled_pattern(
    big: &SoundWave,
    small: &SoundWave,
    epsilon: f64,
) -> Option<(usize, f64)> {
    let pattern_len = small.left.len().max(small.right.len());
    if pattern_len == 0 {
        return Some((0, 1.0));
    }
    let haystack_len = big.left.len().min(big.right.len());
    if pattern_len > haystack_len {
        return None;
    }
    let &head = small.right.first()?;

    let found = (0..=haystack_len - pattern_len).find_map(|offset| {
        let scale = (big.right[offset] / head).abs();
        let end = offset + pattern_len;
        let left = big.left.slice(s![offset..end]);
        let right = big.right.slice(s![offset..end]);
        let matched = window_matches(left, small.left.view(), scale, epsilon)
            && window_matches(right, small.right.view(), scale, epsilon);
        matched.then_some((offset, scale))
    });

    if let Some((offset, scale)) = found {
        tracing::debug!(offset, scale, "scaled pattern found");
    }
    found
}

/// Returns `true` if `small` occurs in `big` up to amplitude scaling, using
/// the tolerance [`CONTAINMENT_EPSILON`].
pub fn contains(big: &SoundWave, small: &SoundWave) -> bool {
    contains_with_tolerance(big, small, CONTAINMENT_EPSILON)
}

/// [`contains`] with a caller-chosen tolerance.
pub fn contains_with_tolerance(big: &SoundWave, small: &SoundWave, epsilon: f64) -> bool {
    find_scaled_pattern(big, small, epsilon).is_some()
}
