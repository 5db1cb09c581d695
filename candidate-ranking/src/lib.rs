pub mod criteria;
mod error;
pub mod num;
pub mod pipeline;
#[cfg(test)]
mod test;

pub use crate::criteria::{Criterion, Direction};
pub use crate::error::RankingError;
pub use crate::num::Normalized;

/// A scorable alternative, exposing one raw attribute value per criterion in
/// criteria order.
pub trait Candidate<const C: usize> {
    fn attributes(&self) -> [f64; C];
}

/// One entry of a ranking, referencing the candidate it was computed from.
#[derive(Clone, Copy, Debug)]
pub struct Ranked<'c, T> {
    pub candidate: &'c T,
    /// Closeness coefficient in [0, 1], rounded to 3 decimal places.
    pub closeness: Normalized,
    /// 1 = best. Candidates with equal closeness keep their input order.
    pub rank: usize,
}

/// Rank the provided candidates by their relative closeness to the best
/// observed attribute profile versus the worst, under the given criterion
/// weights.
///
/// The computation is a pure function of the full candidate set: attribute
/// normalization and the two reference profiles are population-relative, so
/// adding a candidate or changing a weight requires calling this again over
/// the whole set. An empty candidate set yields an empty ranking.
///
/// Weights must be non-negative and finite, but are otherwise unconstrained:
/// the outcome is invariant to scaling all weights by a common factor.
pub fn rank<'c, T, const C: usize>(
    criteria: &[Criterion; C],
    weights: &[f64; C],
    candidates: &'c [T],
) -> Result<Vec<Ranked<'c, T>>, RankingError>
where
    T: Candidate<C>,
{
    for (criterion, &weight) in criteria.iter().zip(weights) {
        if !weight.is_finite() || weight < 0.0 {
            return Err(RankingError::InvalidWeight {
                criterion: criterion.name,
                value: weight,
            });
        }
    }
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let raw: Vec<[f64; C]> = candidates.iter().map(Candidate::attributes).collect();
    let normalized = pipeline::vector_normalize(criteria, &raw)?;
    let weighted = pipeline::apply_weights(&normalized, weights);
    let profile = pipeline::ideal_profile(criteria, &weighted);
    let scores = pipeline::closeness(&weighted, &profile);

    // Stable sort, so equal scores preserve input order.
    let refs: Vec<&'c T> = candidates.iter().collect();
    let sort = permutation::sort_by(&scores[..], |a, b| b.cmp(a));
    let candidates_by_rank = sort.apply_slice(&refs[..]);
    let scores_by_rank = sort.apply_slice(&scores[..]);

    Ok(candidates_by_rank
        .into_iter()
        .zip(scores_by_rank)
        .enumerate()
        .map(|(i, (candidate, closeness))| Ranked {
            candidate,
            closeness,
            rank: i + 1,
        })
        .collect())
}
