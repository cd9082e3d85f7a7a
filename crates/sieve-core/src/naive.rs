//! Naive-Bayes decision rule over the counting core.
//!
//! classify(f1..fN) = argmax over categories of
//! `ln(P(cat)) + Σ ln(P(fI | cat))`. Log-domain summation avoids
//! floating-point underflow from multiplying many small probabilities.

use std::hash::Hash;

use crate::classification::Classification;
use crate::classifier::Classifier;

/// A naive-Bayes classifier: the counting core composed with the
/// log-domain scoring rule. Each classification is computed fresh from
/// current core state; the rule itself holds no per-call state.
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier<F, C>
where
    F: Eq + Hash + Clone,
    C: Eq + Hash + Ord + Clone,
{
    core: Classifier<F, C>,
}

impl<F, C> Default for NaiveBayesClassifier<F, C>
where
    F: Eq + Hash + Clone,
    C: Eq + Hash + Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F, C> NaiveBayesClassifier<F, C>
where
    F: Eq + Hash + Clone,
    C: Eq + Hash + Ord + Clone,
{
    pub fn new() -> Self {
        Self {
            core: Classifier::new(),
        }
    }

    pub fn with_memory_capacity(capacity: usize) -> Self {
        Self {
            core: Classifier::with_memory_capacity(capacity),
        }
    }

    /// The underlying counting core, for introspection and the
    /// primitive count operations.
    pub fn core(&self) -> &Classifier<F, C> {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut Classifier<F, C> {
        &mut self.core
    }

    /// Train on one labeled example. See [`Classifier::learn`].
    pub fn learn(&mut self, category: C, features: Vec<F>) {
        self.core.learn(category, features);
    }

    /// The most probable category for `features`, or `None` if the
    /// classifier has not been trained yet.
    pub fn classify(&self, features: &[F]) -> Option<Classification<F, C>> {
        self.classify_detailed(features).pop()
    }

    /// All known categories scored and ranked ascending, best last.
    ///
    /// Scores are natural-log joint scores
    /// `ln(prior) + Σ ln(P(f | c))`, so they are `≤ 0`; a substituted
    /// estimator returning 0 yields negative infinity ("impossible
    /// category"). Exact ties rank by the category order; callers must
    /// not read meaning into tie order. Untrained: empty.
    pub fn classify_detailed(&self, features: &[F]) -> Vec<Classification<F, C>> {
        let total = self.core.categories_total();
        if total == 0 {
            return Vec::new();
        }
        let mut ranking: Vec<Classification<F, C>> = self
            .core
            .categories()
            .into_iter()
            .map(|category| {
                let score = self.category_score(features, &category, total);
                Classification::new(features.to_vec(), category, score)
            })
            .collect();
        ranking.sort_by(|a, b| a.ranking_cmp(b));
        ranking
    }

    /// `ln(P(c)) + Σ ln(P(f | c))`. An empty featureset contributes
    /// nothing beyond the log-prior, so classification degenerates to
    /// "most frequent category".
    fn category_score(&self, features: &[F], category: &C, total: u64) -> f64 {
        let prior = self.core.category_count(category) as f64 / total as f64;
        let mut score = prior.ln();
        for feature in features {
            score += self.core.feature_weighed_average(feature, category).ln();
        }
        score
    }
}
