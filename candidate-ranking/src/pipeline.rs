use crate::criteria::{Criterion, Direction};
use crate::error::RankingError;
use crate::num::Normalized;

/// Rescale each criterion column onto a unit-comparable basis: after this
/// transform, every column's Euclidean norm over the candidate set is 1.
///
/// Negative raw values are propagated, not rejected. A column with no spread
/// (all zeros, or constant over two or more candidates) is rejected before it
/// can surface as NaN downstream. A single-candidate set trivially has
/// constant columns; that case resolves later through the equidistance
/// fallback in [`closeness`].
pub fn vector_normalize<const C: usize>(
    criteria: &[Criterion; C],
    raw: &[[f64; C]],
) -> Result<Vec<[f64; C]>, RankingError> {
    let mut norms = [0.0_f64; C];
    for row in raw {
        for (norm, value) in norms.iter_mut().zip(row) {
            *norm += value * value;
        }
    }
    for (j, norm) in norms.iter_mut().enumerate() {
        *norm = norm.sqrt();
        let constant = raw.len() > 1 && raw.iter().all(|row| row[j] == raw[0][j]);
        if *norm == 0.0 || constant {
            return Err(RankingError::DegenerateColumn {
                criterion: criteria[j].name,
            });
        }
    }
    Ok(raw
        .iter()
        .map(|row| std::array::from_fn(|j| row[j] / norms[j]))
        .collect())
}

/// Scale each normalized column by its criterion weight. This stage is
/// agnostic to the weight scale: the next stage only compares distances
/// within the same weighted basis.
pub fn apply_weights<const C: usize>(
    normalized: &[[f64; C]],
    weights: &[f64; C],
) -> Vec<[f64; C]> {
    normalized
        .iter()
        .map(|row| std::array::from_fn(|j| row[j] * weights[j]))
        .collect()
}

/// Best-possible and worst-possible reference profiles, derived per
/// invocation from the observed candidate population.
#[derive(Clone, Copy, Debug)]
pub struct IdealProfile<const C: usize> {
    pub positive: [f64; C],
    pub negative: [f64; C],
}

/// Derive the two reference profiles over the weighted matrix: per column,
/// the best observed value (maximum for benefit criteria, minimum for cost)
/// and the worst.
pub fn ideal_profile<const C: usize>(
    criteria: &[Criterion; C],
    weighted: &[[f64; C]],
) -> IdealProfile<C> {
    assert!(!weighted.is_empty());
    let mut positive = weighted[0];
    let mut negative = weighted[0];
    for row in &weighted[1..] {
        for j in 0..C {
            positive[j] = positive[j].max(row[j]);
            negative[j] = negative[j].min(row[j]);
        }
    }
    for j in 0..C {
        if criteria[j].direction == Direction::Cost {
            std::mem::swap(&mut positive[j], &mut negative[j]);
        }
    }
    IdealProfile { positive, negative }
}

/// Relative proximity of each candidate to the positive profile versus the
/// negative one, rounded to 3 decimal places.
///
/// A candidate equidistant at zero from both profiles (only possible when the
/// weighted profiles coincide, i.e. a single-candidate population once
/// degenerate columns are rejected) falls back to 0.5.
pub fn closeness<const C: usize>(
    weighted: &[[f64; C]],
    profile: &IdealProfile<C>,
) -> Vec<Normalized> {
    weighted
        .iter()
        .map(|row| {
            let d_positive = distance(row, &profile.positive);
            let d_negative = distance(row, &profile.negative);
            let ratio = if d_positive + d_negative == 0.0 {
                0.5
            } else {
                d_negative / (d_positive + d_negative)
            };
            Normalized::new(ratio).unwrap().rounded()
        })
        .collect()
}

fn distance<const C: usize>(row: &[f64; C], profile: &[f64; C]) -> f64 {
    row.iter()
        .zip(profile)
        .map(|(value, reference)| (value - reference) * (value - reference))
        .sum::<f64>()
        .sqrt()
}
