use std::collections::BTreeMap;

use crate::{CandidateRecord, NewCandidate, ScoreResult, ScoringError};

/// In-memory candidate repository. It owns the authoritative candidate list
/// and the persisted final score per candidate; callers hold it directly or
/// behind a service, and exclusive borrows serialize score writes.
#[derive(Debug, Default)]
pub struct CandidateStore {
    candidates: BTreeMap<u32, CandidateRecord>,
    next_id: u32,
}

impl CandidateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new applicant row, assigning the next id (starting at 1).
    pub fn insert(&mut self, row: NewCandidate) -> u32 {
        self.next_id += 1;
        let id = self.next_id;
        self.candidates.insert(
            id,
            CandidateRecord {
                id,
                name: row.name,
                experience_years: row.experience_years,
                education_level: row.education_level,
                interview_score: row.interview_score,
                age_years: row.age_years,
                final_score: None,
            },
        );
        id
    }

    pub fn insert_many(&mut self, rows: impl IntoIterator<Item = NewCandidate>) -> Vec<u32> {
        rows.into_iter().map(|row| self.insert(row)).collect()
    }

    pub fn get(&self, id: u32) -> Option<&CandidateRecord> {
        self.candidates.get(&id)
    }

    /// Replace a candidate's attributes. The stored final score is cleared:
    /// it is stale until the next full rescore.
    pub fn update(&mut self, id: u32, row: NewCandidate) -> Result<&CandidateRecord, ScoringError> {
        let record = self
            .candidates
            .get_mut(&id)
            .ok_or(ScoringError::UnknownCandidate { id })?;
        record.name = row.name;
        record.experience_years = row.experience_years;
        record.education_level = row.education_level;
        record.interview_score = row.interview_score;
        record.age_years = row.age_years;
        record.final_score = None;
        Ok(record)
    }

    pub fn remove(&mut self, id: u32) -> bool {
        self.candidates.remove(&id).is_some()
    }

    /// Drop all candidates and restart id assignment at 1.
    pub fn clear(&mut self) {
        self.candidates.clear();
        self.next_id = 0;
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Immutable snapshot of the whole pool for one scoring pass.
    pub fn snapshot(&self) -> Vec<CandidateRecord> {
        self.candidates.values().cloned().collect()
    }

    /// All candidates ordered by final score descending; unscored rows count
    /// as 0. Stable within equal scores (id order).
    pub fn all_by_score(&self) -> Vec<CandidateRecord> {
        let mut rows = self.snapshot();
        rows.sort_by(|a, b| {
            b.final_score
                .unwrap_or(0.0)
                .total_cmp(&a.final_score.unwrap_or(0.0))
        });
        rows
    }

    /// Persist the closeness coefficients of a completed scoring pass.
    pub fn record_scores(&mut self, results: &[ScoreResult]) {
        for result in results {
            if let Some(record) = self.candidates.get_mut(&result.id) {
                record.final_score = Some(result.closeness);
            }
        }
    }
}
