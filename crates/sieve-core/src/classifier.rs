//! Counting core: per-category feature tables plus a bounded FIFO memory
//! of accepted training examples.
//!
//! The count tables always equal the aggregation over the samples
//! currently held in memory. Every mutation flows through the
//! increment/decrement primitives, which enforce the zero-removal
//! invariant (a key is removed, not left at zero) in one place.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::classification::Classification;
use crate::estimator::FeatureProbability;

/// How many training examples are memorized by default.
pub const DEFAULT_MEMORY_CAPACITY: usize = 1000;

/// Default Laplace smoothing strength.
pub const DEFAULT_SMOOTHING_LAMBDA: f64 = 1.0;

/// The counting model and sliding-window memory behind a classifier.
///
/// `F` is the feature type, `C` the category type. Both are opaque;
/// categories carry a total order used only as a deterministic
/// tie-break by the decision rule.
#[derive(Debug, Clone)]
pub struct Classifier<F, C> {
    /// category -> feature -> occurrence count. A category key is absent
    /// once all its feature counts reach zero; a feature key is absent
    /// once its count reaches zero.
    feature_count_per_category: FxHashMap<C, FxHashMap<F, u64>>,
    /// feature -> occurrence count summed over all categories. Its key
    /// set is the vocabulary used for Laplace smoothing.
    total_feature_count: FxHashMap<F, u64>,
    /// category -> number of retained training examples (learn calls),
    /// not feature occurrences.
    total_category_count: FxHashMap<C, u64>,
    /// Retained training examples, oldest first.
    memory: VecDeque<Classification<F, C>>,
    memory_capacity: usize,
}

impl<F, C> Classifier<F, C>
where
    F: Eq + Hash + Clone,
    C: Eq + Hash + Ord + Clone,
{
    /// An untrained classifier with the default memory capacity.
    pub fn new() -> Self {
        Self::with_memory_capacity(DEFAULT_MEMORY_CAPACITY)
    }

    /// An untrained classifier retaining at most `capacity` examples.
    ///
    /// A capacity of 0 is accepted and means "retain nothing": every
    /// learned example is immediately forgotten again.
    pub fn with_memory_capacity(capacity: usize) -> Self {
        Self {
            feature_count_per_category: FxHashMap::default(),
            total_feature_count: FxHashMap::default(),
            total_category_count: FxHashMap::default(),
            memory: VecDeque::new(),
            memory_capacity: capacity,
        }
    }

    /// Discards all learned counts and the memory queue. Capacity is
    /// unchanged.
    pub fn reset(&mut self) {
        self.feature_count_per_category.clear();
        self.total_feature_count.clear();
        self.total_category_count.clear();
        self.memory.clear();
        debug!("classifier state reset");
    }

    /// Train on one labeled example.
    pub fn learn(&mut self, category: C, features: Vec<F>) {
        self.learn_sample(Classification::training(features, category));
    }

    /// Train on a pre-built record. The sample is appended to memory;
    /// if capacity is now exceeded the oldest sample is popped and its
    /// count contributions rolled back, so the model always reflects
    /// exactly the most recent `memory_capacity` examples.
    pub fn learn_sample(&mut self, sample: Classification<F, C>) {
        for feature in sample.featureset() {
            self.increment_feature(feature.clone(), sample.category().clone());
        }
        self.increment_category(sample.category().clone());

        self.memory.push_back(sample);
        while self.memory.len() > self.memory_capacity {
            if let Some(oldest) = self.memory.pop_front() {
                self.forget(oldest);
            }
        }
    }

    fn forget(&mut self, sample: Classification<F, C>) {
        for feature in sample.featureset() {
            self.decrement_feature(feature, sample.category());
        }
        self.decrement_category(sample.category());
        debug!(retained = self.memory.len(), "forgot oldest training sample");
    }

    /// Records one occurrence of `feature` under `category`.
    pub fn increment_feature(&mut self, feature: F, category: C) {
        *self
            .feature_count_per_category
            .entry(category)
            .or_default()
            .entry(feature.clone())
            .or_insert(0) += 1;
        *self.total_feature_count.entry(feature).or_insert(0) += 1;
    }

    /// Removes one occurrence of `feature` under `category`. A no-op if
    /// the pair was never recorded. Counts that reach zero have their
    /// keys removed.
    pub fn decrement_feature(&mut self, feature: &F, category: &C) {
        let Some(features) = self.feature_count_per_category.get_mut(category) else {
            return;
        };
        let Some(count) = features.get_mut(feature) else {
            return;
        };
        if *count <= 1 {
            features.remove(feature);
            if features.is_empty() {
                self.feature_count_per_category.remove(category);
            }
        } else {
            *count -= 1;
        }

        let Some(total) = self.total_feature_count.get_mut(feature) else {
            return;
        };
        if *total <= 1 {
            self.total_feature_count.remove(feature);
        } else {
            *total -= 1;
        }
    }

    /// Records one training example under `category`.
    pub fn increment_category(&mut self, category: C) {
        *self.total_category_count.entry(category).or_insert(0) += 1;
    }

    /// Removes one training example from `category`'s total. A no-op if
    /// the category is unknown.
    pub fn decrement_category(&mut self, category: &C) {
        let Some(count) = self.total_category_count.get_mut(category) else {
            return;
        };
        if *count <= 1 {
            self.total_category_count.remove(category);
        } else {
            *count -= 1;
        }
    }

    /// Occurrences of `feature` under `category`; 0 if either is unknown.
    pub fn feature_count(&self, feature: &F, category: &C) -> u64 {
        self.feature_count_per_category
            .get(category)
            .and_then(|features| features.get(feature))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all feature counts recorded under `category`; 0 if unknown.
    pub fn category_feature_count(&self, category: &C) -> u64 {
        self.feature_count_per_category
            .get(category)
            .map(|features| features.values().sum())
            .unwrap_or(0)
    }

    /// Number of retained training examples under `category`; 0 if unknown.
    pub fn category_count(&self, category: &C) -> u64 {
        self.total_category_count
            .get(category)
            .copied()
            .unwrap_or(0)
    }

    /// Total number of retained training examples across all categories.
    pub fn categories_total(&self) -> u64 {
        self.total_category_count.values().sum()
    }

    /// Number of distinct features the model currently knows about.
    pub fn vocabulary_size(&self) -> usize {
        self.total_feature_count.len()
    }

    /// Unsmoothed estimate: `featureCount / categoryCount`. 0 if the
    /// category is unknown. Can return 0 for unseen features, so the
    /// decision rule uses the smoothed estimate instead.
    pub fn raw_feature_probability(&self, feature: &F, category: &C) -> f64 {
        let category_count = self.category_count(category);
        if category_count == 0 {
            return 0.0;
        }
        self.feature_count(feature, category) as f64 / category_count as f64
    }

    /// Laplace-smoothed estimate with λ = 1; see
    /// [`feature_probability_lambda`](Self::feature_probability_lambda).
    pub fn feature_probability(&self, feature: &F, category: &C) -> f64 {
        self.feature_probability_lambda(feature, category, DEFAULT_SMOOTHING_LAMBDA)
    }

    /// Laplace-smoothed estimate:
    /// `(featureCount + λ) / (categoryFeatureCount + λ · vocabularySize)`.
    ///
    /// Returns 0 for an unknown category (smoothing applies only to
    /// known categories) or while the vocabulary is empty. For a known
    /// category and non-empty vocabulary the result is in `(0, 1]` for
    /// any `λ > 0`, including for features never seen before.
    pub fn feature_probability_lambda(&self, feature: &F, category: &C, lambda: f64) -> f64 {
        debug_assert!(lambda > 0.0, "smoothing lambda must be positive");
        if self.category_count(category) == 0 {
            return 0.0;
        }
        let vocabulary = self.vocabulary_size() as f64;
        let denominator = self.category_feature_count(category) as f64 + lambda * vocabulary;
        if denominator <= 0.0 {
            return 0.0;
        }
        (self.feature_count(feature, category) as f64 + lambda) / denominator
    }

    /// P(feature | category) from the default estimator: the core's own
    /// smoothed [`feature_probability`](Self::feature_probability).
    pub fn feature_weighed_average(&self, feature: &F, category: &C) -> f64 {
        self.feature_probability(feature, category)
    }

    /// P(feature | category) from a substituted estimator. This
    /// indirection lets callers inject externally computed
    /// probabilities without touching the decision rule's code path.
    pub fn feature_weighed_average_with(
        &self,
        feature: &F,
        category: &C,
        estimator: &dyn FeatureProbability<F, C>,
    ) -> f64 {
        estimator.feature_probability(feature, category)
    }

    /// Current memory capacity.
    pub fn memory_capacity(&self) -> usize {
        self.memory_capacity
    }

    /// Sets the memory capacity. Shrinking below the current number of
    /// retained examples evicts the oldest ones and rolls back their
    /// count contributions, leaving exactly the `capacity` most recent
    /// examples' evidence in the model. Growing never has side effects.
    pub fn set_memory_capacity(&mut self, capacity: usize) {
        let mut evicted = 0usize;
        while self.memory.len() > capacity {
            if let Some(oldest) = self.memory.pop_front() {
                self.forget(oldest);
                evicted += 1;
            }
        }
        if evicted > 0 {
            debug!(evicted, capacity, "shrunk classifier memory");
        }
        self.memory_capacity = capacity;
    }

    /// Number of currently retained training examples.
    pub fn len(&self) -> usize {
        self.memory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memory.is_empty()
    }

    /// Snapshot of every feature the model knows about. Order is
    /// unspecified.
    pub fn features(&self) -> Vec<F> {
        self.total_feature_count.keys().cloned().collect()
    }

    /// Snapshot of every category the model knows about, sorted for
    /// deterministic iteration.
    pub fn categories(&self) -> Vec<C> {
        let mut categories: Vec<C> = self.total_category_count.keys().cloned().collect();
        categories.sort();
        categories
    }
}

impl<F, C> Default for Classifier<F, C>
where
    F: Eq + Hash + Clone,
    C: Eq + Hash + Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F, C> FeatureProbability<F, C> for Classifier<F, C>
where
    F: Eq + Hash + Clone,
    C: Eq + Hash + Ord + Clone,
{
    fn feature_probability(&self, feature: &F, category: &C) -> f64 {
        Classifier::feature_probability(self, feature, category)
    }
}
