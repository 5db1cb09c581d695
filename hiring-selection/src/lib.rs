pub mod service;
pub mod stats;
pub mod store;

use candidate_ranking::{rank, Criterion, Direction, RankingError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use candidate_ranking::Normalized;

/// The fixed decision criteria, in scoring order. Age is scored as a cost:
/// a younger candidate sits closer to the positive reference profile. This
/// tagging is a domain decision and must not be inferred from the data.
pub const CRITERIA: [Criterion; 4] = [
    Criterion {
        name: "experience",
        direction: Direction::Benefit,
    },
    Criterion {
        name: "education",
        direction: Direction::Benefit,
    },
    Criterion {
        name: "interview",
        direction: Direction::Benefit,
    },
    Criterion {
        name: "age",
        direction: Direction::Cost,
    },
];

/// A validated applicant row. Field ranges (education 1-5, interview 0-100,
/// age 18-65) are enforced at the parsing boundary before a record is ever
/// constructed; scoring only owns the numeric invariants of the computation
/// itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: u32,
    pub name: String,
    pub experience_years: u32,
    pub education_level: u32,
    pub interview_score: u32,
    pub age_years: u32,
    /// Last persisted closeness coefficient, `None` until the first rescore.
    pub final_score: Option<f64>,
}

/// The insert shape: an applicant row before the store has assigned an id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub experience_years: u32,
    pub education_level: u32,
    pub interview_score: u32,
    pub age_years: u32,
}

impl candidate_ranking::Candidate<4> for CandidateRecord {
    fn attributes(&self) -> [f64; 4] {
        [
            self.experience_years as f64,
            self.education_level as f64,
            self.interview_score as f64,
            self.age_years as f64,
        ]
    }
}

/// Relative importance of each criterion, expressed as percentages. The
/// ranking itself is invariant to uniform scaling; the sum-to-100 convention
/// is a presentation policy enforced by [`service::SelectionService::reweigh`],
/// never by the scoring computation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub experience: f64,
    pub education: f64,
    pub interview: f64,
    pub age: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            experience: 25.0,
            education: 20.0,
            interview: 40.0,
            age: 15.0,
        }
    }
}

impl ScoringWeights {
    /// Weights in criteria order.
    pub fn as_array(&self) -> [f64; 4] {
        [self.experience, self.education, self.interview, self.age]
    }

    pub fn total(&self) -> f64 {
        self.experience + self.education + self.interview + self.age
    }
}

/// Shortlist label derived from the closeness coefficient. The cut points are
/// the traditional 80/70/60 marks re-based onto the unit scale of the
/// closeness coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Recommended,
    Consider,
    Review,
    NotRecommended,
}

impl Status {
    pub fn from_closeness(closeness: f64) -> Self {
        if closeness >= 0.8 {
            Status::Recommended
        } else if closeness >= 0.7 {
            Status::Consider
        } else if closeness >= 0.6 {
            Status::Review
        } else {
            Status::NotRecommended
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Recommended => "Recommended",
            Status::Consider => "Consider",
            Status::Review => "Review",
            Status::NotRecommended => "Not Recommended",
        }
    }
}

/// One row of a ranking: the closeness coefficient in [0, 1] rounded to 3
/// decimal places, with rank 1 = best.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub id: u32,
    pub name: String,
    pub closeness: f64,
    pub rank: usize,
    pub status: Status,
}

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(transparent)]
    Ranking(#[from] RankingError),
    #[error("weights must sum to 100, got {total}")]
    WeightBudget { total: f64 },
    #[error("no candidate with id {id}")]
    UnknownCandidate { id: u32 },
}

/// Score and rank the given candidates under the given weights.
///
/// Pure and stateless: the full four-stage pipeline runs over the complete
/// candidate set on every call, because attribute normalization and the
/// reference profiles are population-relative. Results come back sorted by
/// descending closeness, ties keeping input order.
pub fn score(
    candidates: &[CandidateRecord],
    weights: &ScoringWeights,
) -> Result<Vec<ScoreResult>, ScoringError> {
    let ranking = rank(&CRITERIA, &weights.as_array(), candidates)?;
    Ok(ranking
        .into_iter()
        .map(|entry| {
            let closeness = entry.closeness.as_f64();
            ScoreResult {
                id: entry.candidate.id,
                name: entry.candidate.name.clone(),
                closeness,
                rank: entry.rank,
                status: Status::from_closeness(closeness),
            }
        })
        .collect())
}
