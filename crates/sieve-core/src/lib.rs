//! Generic trainable naive-Bayes classification engine.
//!
//! Feed labeled featuresets with [`Classifier::learn`] (or the
//! [`NaiveBayesClassifier`] wrapper) and ask for the most probable
//! category of an unlabeled featureset with
//! [`NaiveBayesClassifier::classify`]. Both the feature type `F` and the
//! category type `C` are opaque to the engine: features need equality
//! and hashing, categories additionally need a total order used as a
//! deterministic tie-break.
//!
//! The engine keeps a sliding window of the most recent training
//! examples (default 1000). Evidence older than the window is forgotten,
//! which bounds memory and lets the model adapt to concept drift.

pub mod classification;
pub mod classifier;
pub mod estimator;
pub mod naive;

pub use classification::Classification;
pub use classifier::{Classifier, DEFAULT_MEMORY_CAPACITY, DEFAULT_SMOOTHING_LAMBDA};
pub use estimator::FeatureProbability;
pub use naive::NaiveBayesClassifier;
