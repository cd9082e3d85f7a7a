//! Classification record: one featureset, a category, and a score.

use std::cmp::Ordering;

/// An immutable (featureset, category, score) triple.
///
/// Produced by training with an implicit score of 1.0, or by
/// classification with a computed log-domain score. Never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<F, C> {
    featureset: Vec<F>,
    category: C,
    score: f64,
}

impl<F, C> Classification<F, C> {
    /// A classification with an explicit score.
    pub fn new(featureset: Vec<F>, category: C, score: f64) -> Self {
        Self {
            featureset,
            category,
            score,
        }
    }

    /// A training record: score defaults to 1.0.
    pub fn training(featureset: Vec<F>, category: C) -> Self {
        Self::new(featureset, category, 1.0)
    }

    pub fn featureset(&self) -> &[F] {
        &self.featureset
    }

    pub fn category(&self) -> &C {
        &self.category
    }

    /// The probability (training records) or log-domain score
    /// (classification results).
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Consumes the record, yielding its category.
    pub fn into_category(self) -> C {
        self.category
    }
}

impl<F, C: Ord> Classification<F, C> {
    /// Ranking comparison: ascending by score, then by category.
    ///
    /// The category tie-break keeps the ranking total and deterministic;
    /// equal-score records for *different* categories never compare
    /// equal, so a uniqueness-sensitive consumer cannot collapse them.
    /// Scores compare via `f64::total_cmp`, so negative infinity
    /// ("impossible category") orders below every finite score.
    pub fn ranking_cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.category.cmp(&other.category))
    }
}
