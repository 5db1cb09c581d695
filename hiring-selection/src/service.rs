use tracing::{info, warn};

use crate::stats::PoolStats;
use crate::store::CandidateStore;
use crate::{score, CandidateRecord, NewCandidate, ScoreResult, ScoringError, ScoringWeights};

const WEIGHT_BUDGET: f64 = 100.0;
const WEIGHT_TOLERANCE: f64 = 0.1;

/// Orchestrates scoring over an owned candidate store.
///
/// Every mutation path takes `&mut self`, so at most one rescore is in flight
/// against the store at a time and score writes never interleave. The scoring
/// computation itself stays pure; this layer is where logging and the
/// weight-budget policy live.
#[derive(Debug, Default)]
pub struct SelectionService {
    store: CandidateStore,
    weights: ScoringWeights,
}

impl SelectionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            store: CandidateStore::new(),
            weights,
        }
    }

    /// Replace the whole pool and rescore it under the current weights.
    pub fn load(&mut self, rows: Vec<NewCandidate>) -> Result<Vec<ScoreResult>, ScoringError> {
        self.store.clear();
        let count = rows.len();
        self.store.insert_many(rows);
        info!(candidates = count, "loaded candidate pool");
        self.rescore()
    }

    /// Swap in a new weight vector and rescore the whole pool. Weights must
    /// sum to 100 within a ±0.1 tolerance; the ranking itself would be
    /// unaffected by uniform scaling, the budget is a presentation
    /// convention.
    pub fn reweigh(&mut self, weights: ScoringWeights) -> Result<Vec<ScoreResult>, ScoringError> {
        let total = weights.total();
        if (total - WEIGHT_BUDGET).abs() > WEIGHT_TOLERANCE {
            return Err(ScoringError::WeightBudget { total });
        }
        self.weights = weights;
        info!(total, "applied new scoring weights");
        self.rescore()
    }

    /// Full recomputation over the current pool. Scores are population-
    /// relative, so there is no incremental path: any candidate or weight
    /// change flows through here.
    pub fn rescore(&mut self) -> Result<Vec<ScoreResult>, ScoringError> {
        let snapshot = self.store.snapshot();
        let results = match score(&snapshot, &self.weights) {
            Ok(results) => results,
            Err(err) => {
                warn!(error = %err, candidates = snapshot.len(), "scoring failed");
                return Err(err);
            }
        };
        self.store.record_scores(&results);
        Ok(results)
    }

    /// Current pool ordered by persisted final score, best first.
    pub fn ranking(&self) -> Vec<CandidateRecord> {
        self.store.all_by_score()
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats::collect(&self.store.snapshot())
    }

    pub fn weights(&self) -> ScoringWeights {
        self.weights
    }

    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut CandidateStore {
        &mut self.store
    }
}
