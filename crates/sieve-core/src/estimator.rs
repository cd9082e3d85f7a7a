//! Pluggable feature-probability estimation.

/// Estimates P(feature | category).
///
/// The counting core ([`crate::Classifier`]) implements this with its
/// own Laplace-smoothed tables. Any other implementation may be
/// substituted at the weighted-average call site to inject externally
/// computed probabilities without retraining; see
/// [`crate::Classifier::feature_weighed_average_with`].
pub trait FeatureProbability<F, C> {
    /// Estimated probability in `[0, 1]` that `feature` occurs given
    /// `category`. Must be side-effect free.
    ///
    /// Returning exactly `0.0` is permitted but makes the category
    /// impossible for any featureset containing the feature: its
    /// log-domain score becomes negative infinity and it ranks last.
    fn feature_probability(&self, feature: &F, category: &C) -> f64;
}
