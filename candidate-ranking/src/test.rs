use crate::num::assert_within;
use crate::{rank, Candidate, Criterion, Direction, Normalized, RankingError};
use proptest::test_runner::TestCaseError;
use proptest::{prelude::prop, prop_assert, prop_assert_eq, prop_compose, proptest};
use rand::{rngs::SmallRng, seq::SliceRandom as _, SeedableRng as _};

const CRITERIA: [Criterion; 4] = [
    Criterion {
        name: "throughput",
        direction: Direction::Benefit,
    },
    Criterion {
        name: "coverage",
        direction: Direction::Benefit,
    },
    Criterion {
        name: "accuracy",
        direction: Direction::Benefit,
    },
    Criterion {
        name: "latency",
        direction: Direction::Cost,
    },
];

const DEFAULT_WEIGHTS: [f64; 4] = [25.0, 20.0, 40.0, 15.0];

#[derive(Clone, Debug, PartialEq)]
struct TestCandidate {
    id: usize,
    attributes: [f64; 4],
}

impl Candidate<4> for TestCandidate {
    fn attributes(&self) -> [f64; 4] {
        self.attributes
    }
}

prop_compose! {
    // Integer-valued attributes keep the column norms exactly representable,
    // so scores are reproducible across input permutations.
    fn attribute_row()(
        throughput in 1..=30_u32,
        coverage in 1..=5_u32,
        accuracy in 1..=100_u32,
        latency in 2..=65_u32,
    ) -> [f64; 4] {
        [throughput as f64, coverage as f64, accuracy as f64, latency as f64]
    }
}
prop_compose! {
    fn pool()(rows in prop::collection::vec(attribute_row(), 1..24)) -> Vec<TestCandidate> {
        rows.into_iter()
            .enumerate()
            .map(|(id, attributes)| TestCandidate { id, attributes })
            .collect()
    }
}
prop_compose! {
    fn weights()(weights in prop::array::uniform4(0.0..50.0_f64)) -> [f64; 4] {
        weights
    }
}
prop_compose! {
    fn positive_weights()(weights in prop::array::uniform4(0.5..50.0_f64)) -> [f64; 4] {
        weights
    }
}

proptest! {
    #[test]
    fn closeness_bounded_and_ranking_sorted(pool in pool(), weights in weights()) {
        let ranking = match rank(&CRITERIA, &weights, &pool) {
            Ok(ranking) => ranking,
            // Random pools can legitimately produce constant columns.
            Err(RankingError::DegenerateColumn { .. }) => return Ok(()),
            Err(err) => return Err(TestCaseError::fail(format!("unexpected error: {err}"))),
        };
        prop_assert_eq!(ranking.len(), pool.len());
        for entry in &ranking {
            prop_assert!((0.0..=1.0).contains(&entry.closeness.as_f64()));
        }
        for pair in ranking.windows(2) {
            prop_assert!(pair[0].closeness >= pair[1].closeness);
        }
        for (i, entry) in ranking.iter().enumerate() {
            prop_assert_eq!(entry.rank, i + 1);
        }
    }

    #[test]
    fn weight_scaling_preserves_the_outcome(
        pool in pool(),
        weights in weights(),
        exponent in 1..=6_i32,
    ) {
        // Powers of two scale f64 values exactly.
        let scale = 2.0_f64.powi(exponent);
        let scaled: [f64; 4] = std::array::from_fn(|j| weights[j] * scale);
        match (rank(&CRITERIA, &weights, &pool), rank(&CRITERIA, &scaled, &pool)) {
            (Ok(base), Ok(rescaled)) => {
                prop_assert_eq!(base.len(), rescaled.len());
                for (a, b) in base.iter().zip(&rescaled) {
                    prop_assert_eq!(a.candidate.id, b.candidate.id);
                    prop_assert_eq!(a.closeness, b.closeness);
                }
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => {
                return Err(TestCaseError::fail(format!(
                    "scaling changed the outcome class: {a:?} vs {b:?}"
                )))
            }
        }
    }

    #[test]
    fn input_order_does_not_affect_scores(seed: u64, pool in pool(), weights in weights()) {
        let mut shuffled = pool.clone();
        shuffled.shuffle(&mut SmallRng::seed_from_u64(seed));
        match (rank(&CRITERIA, &weights, &pool), rank(&CRITERIA, &weights, &shuffled)) {
            (Ok(base), Ok(reordered)) => {
                let key = |entry: &crate::Ranked<'_, TestCandidate>| {
                    (entry.closeness, entry.candidate.id)
                };
                let mut base: Vec<_> = base.iter().map(key).collect();
                let mut reordered: Vec<_> = reordered.iter().map(key).collect();
                base.sort();
                reordered.sort();
                prop_assert_eq!(base, reordered);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => {
                return Err(TestCaseError::fail(format!(
                    "reordering changed the outcome class: {a:?} vs {b:?}"
                )))
            }
        }
    }

    #[test]
    fn dominant_candidate_ranks_first(mut pool in pool(), weights in positive_weights()) {
        let best = [
            pool.iter().map(|c| c.attributes[0]).fold(0.0, f64::max) + 1.0,
            pool.iter().map(|c| c.attributes[1]).fold(0.0, f64::max) + 1.0,
            pool.iter().map(|c| c.attributes[2]).fold(0.0, f64::max) + 1.0,
            pool.iter().map(|c| c.attributes[3]).fold(f64::INFINITY, f64::min) - 1.0,
        ];
        pool.push(TestCandidate { id: pool.len(), attributes: best });

        // Every column now has a strict extreme, so no column is degenerate.
        let ranking = rank(&CRITERIA, &weights, &pool).unwrap();
        prop_assert_eq!(ranking[0].candidate.id, pool.len() - 1);
        prop_assert_eq!(ranking[0].closeness, Normalized::ONE);
    }
}

#[test]
fn empty_pool_yields_empty_ranking() {
    let ranking = rank::<TestCandidate, 4>(&CRITERIA, &DEFAULT_WEIGHTS, &[]).unwrap();
    assert!(ranking.is_empty());
}

#[test]
fn single_candidate_scores_at_the_equidistance_fallback() {
    let pool = [TestCandidate {
        id: 0,
        attributes: [5.0, 4.0, 85.0, 30.0],
    }];
    let ranking = rank(&CRITERIA, &DEFAULT_WEIGHTS, &pool).unwrap();
    assert_eq!(ranking.len(), 1);
    assert_eq!(ranking[0].rank, 1);
    assert_within(ranking[0].closeness.as_f64(), 0.5, 1e-12);
}

#[test]
fn identical_candidates_are_rejected() {
    let attributes = [5.0, 4.0, 85.0, 30.0];
    let pool = [
        TestCandidate { id: 0, attributes },
        TestCandidate { id: 1, attributes },
    ];
    let err = rank(&CRITERIA, &DEFAULT_WEIGHTS, &pool).unwrap_err();
    assert!(matches!(err, RankingError::DegenerateColumn { .. }));
}

#[test]
fn all_zero_column_is_rejected_by_name() {
    let pool = [
        TestCandidate {
            id: 0,
            attributes: [0.0, 4.0, 85.0, 30.0],
        },
        TestCandidate {
            id: 1,
            attributes: [0.0, 5.0, 92.0, 28.0],
        },
    ];
    let err = rank(&CRITERIA, &DEFAULT_WEIGHTS, &pool).unwrap_err();
    assert_eq!(
        err,
        RankingError::DegenerateColumn {
            criterion: "throughput"
        }
    );
}

#[test]
fn negative_weight_is_rejected() {
    let pool = [
        TestCandidate {
            id: 0,
            attributes: [5.0, 4.0, 85.0, 30.0],
        },
        TestCandidate {
            id: 1,
            attributes: [3.0, 5.0, 92.0, 28.0],
        },
    ];
    let err = rank(&CRITERIA, &[25.0, -1.0, 40.0, 15.0], &pool).unwrap_err();
    assert!(matches!(
        err,
        RankingError::InvalidWeight {
            criterion: "coverage",
            ..
        }
    ));
    let err = rank(&CRITERIA, &[25.0, 20.0, f64::NAN, 15.0], &pool).unwrap_err();
    assert!(matches!(err, RankingError::InvalidWeight { .. }));
}

// An infinite weight would make the weighted column all-infinite and the
// distances NaN; it must surface as a typed error, not reach the math.
#[test]
fn infinite_weight_is_rejected() {
    let pool = [
        TestCandidate {
            id: 0,
            attributes: [5.0, 4.0, 85.0, 30.0],
        },
        TestCandidate {
            id: 1,
            attributes: [3.0, 5.0, 92.0, 28.0],
        },
    ];
    let err = rank(&CRITERIA, &[25.0, f64::INFINITY, 40.0, 15.0], &pool).unwrap_err();
    assert!(matches!(
        err,
        RankingError::InvalidWeight {
            criterion: "coverage",
            ..
        }
    ));
    let err = rank(&CRITERIA, &[25.0, 20.0, 40.0, f64::NEG_INFINITY], &pool).unwrap_err();
    assert!(matches!(err, RankingError::InvalidWeight { .. }));
}

#[test]
fn tied_scores_keep_input_order() {
    struct Mirrored(usize, [f64; 2]);
    impl Candidate<2> for Mirrored {
        fn attributes(&self) -> [f64; 2] {
            self.1
        }
    }
    const MIRROR: [Criterion; 2] = [
        Criterion {
            name: "left",
            direction: Direction::Benefit,
        },
        Criterion {
            name: "right",
            direction: Direction::Benefit,
        },
    ];
    // Mirror-image candidates under equal weights tie exactly at 0.5.
    let pool = [Mirrored(0, [1.0, 2.0]), Mirrored(1, [2.0, 1.0])];
    let ranking = rank(&MIRROR, &[10.0, 10.0], &pool).unwrap();
    assert_eq!(ranking[0].closeness, ranking[1].closeness);
    assert_eq!(ranking[0].candidate.0, 0);
    assert_eq!(ranking[1].candidate.0, 1);
}

#[test]
fn normalized_columns_have_unit_norm() {
    let raw = [
        [5.0, 4.0, 85.0, 30.0],
        [3.0, 5.0, 92.0, 28.0],
        [7.0, 2.0, 61.0, 45.0],
    ];
    let normalized = crate::pipeline::vector_normalize(&CRITERIA, &raw).unwrap();
    for j in 0..4 {
        let norm = normalized
            .iter()
            .map(|row| row[j] * row[j])
            .sum::<f64>()
            .sqrt();
        assert_within(norm, 1.0, 1e-12);
    }
}

#[test]
fn cost_criteria_invert_the_reference_profiles() {
    let weighted = [[1.0, 1.0, 1.0, 9.0], [2.0, 2.0, 2.0, 3.0]];
    let profile = crate::pipeline::ideal_profile(&CRITERIA, &weighted);
    assert_eq!(profile.positive, [2.0, 2.0, 2.0, 3.0]);
    assert_eq!(profile.negative, [1.0, 1.0, 1.0, 9.0]);
}
