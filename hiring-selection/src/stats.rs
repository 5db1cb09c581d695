use serde::Serialize;

use crate::{CandidateRecord, Status};

/// Aggregate view of a scored pool. Every figure is defined for the empty
/// pool: the average over zero candidates is 0, never NaN.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct PoolStats {
    pub total: usize,
    pub recommended: usize,
    pub average_score: f64,
    pub top_score: f64,
}

impl PoolStats {
    pub fn collect(candidates: &[CandidateRecord]) -> Self {
        if candidates.is_empty() {
            return Self::default();
        }
        let scores: Vec<f64> = candidates
            .iter()
            .map(|c| c.final_score.unwrap_or(0.0))
            .collect();
        let recommended = scores
            .iter()
            .filter(|&&score| Status::from_closeness(score) == Status::Recommended)
            .count();
        let average = scores.iter().sum::<f64>() / scores.len() as f64;
        Self {
            total: candidates.len(),
            recommended,
            average_score: (average * 1e3).round() / 1e3,
            top_score: scores.iter().copied().fold(0.0, f64::max),
        }
    }
}
