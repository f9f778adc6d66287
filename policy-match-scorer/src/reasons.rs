//! Short textual justifications drawn from category scores.

use std::sync::Arc;

use policy_match_core::{CategoryLabels, CategoryScores, IdentifierLabels, Percent, PolicyCategory};

/// Categories at or above this score are worth mentioning.
pub const DEFAULT_REASON_THRESHOLD: Percent = Percent::saturating(75);

/// Maximum number of reasons attached to a result.
pub const DEFAULT_MAX_REASONS: usize = 3;

/// A category that cleared the reason threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchReason {
    /// The matching category.
    pub category: PolicyCategory,
    /// Its score.
    pub score: Percent,
}

/// Selects and renders the strongest categories as reasons.
///
/// Selection keeps categories scoring at least the threshold, never the
/// catch-all [`PolicyCategory::Other`], ordered by descending score. Equal
/// scores keep canonical category order. At most `max_reasons` are returned
/// and nothing is padded.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use policy_match_core::{CategoryScores, Percent, PolicyCategory};
/// use policy_match_scorer::ReasonGenerator;
///
/// let scores = CategoryScores::from(BTreeMap::from([
///     (PolicyCategory::Welfare, Percent::FULL),
///     (PolicyCategory::Economy, Percent::FULL),
/// ]));
/// let reasons = ReasonGenerator::default().reasons(&scores);
/// assert_eq!(reasons, ["economy 100% match", "welfare 100% match"]);
/// ```
#[derive(Clone)]
pub struct ReasonGenerator {
    threshold: Percent,
    max_reasons: usize,
    labels: Arc<dyn CategoryLabels>,
}

impl ReasonGenerator {
    /// Construct a generator using identifier labels.
    #[must_use]
    pub fn new(threshold: Percent, max_reasons: usize) -> Self {
        Self {
            threshold,
            max_reasons,
            labels: Arc::new(IdentifierLabels),
        }
    }

    /// Replace the label vocabulary while returning `self` for chaining.
    #[must_use]
    pub fn with_labels(mut self, labels: impl CategoryLabels + 'static) -> Self {
        self.labels = Arc::new(labels);
        self
    }

    /// Minimum score a category needs to be mentioned.
    #[must_use]
    pub const fn threshold(&self) -> Percent {
        self.threshold
    }

    /// Upper bound on the number of reasons.
    #[must_use]
    pub const fn max_reasons(&self) -> usize {
        self.max_reasons
    }

    /// Select the qualifying categories, strongest first.
    #[must_use]
    pub fn select(&self, scores: &CategoryScores) -> Vec<MatchReason> {
        let mut selected: Vec<MatchReason> = scores
            .iter()
            .filter(|(category, score)| !category.is_catch_all() && *score >= self.threshold)
            .map(|(category, score)| MatchReason { category, score })
            .collect();
        // `scores` iterates in canonical order and `sort_by` is stable, so
        // ties keep canonical order.
        selected.sort_by(|a, b| b.score.cmp(&a.score));
        selected.truncate(self.max_reasons);
        selected
    }

    /// Render a reason as `"<label> <score>% match"`.
    #[must_use]
    pub fn render(&self, reason: MatchReason) -> String {
        format!("{} {} match", self.labels.label(reason.category), reason.score)
    }

    /// Select and render reasons for `scores`.
    #[must_use]
    pub fn reasons(&self, scores: &CategoryScores) -> Vec<String> {
        self.select(scores)
            .into_iter()
            .map(|reason| self.render(reason))
            .collect()
    }
}

impl Default for ReasonGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_REASON_THRESHOLD, DEFAULT_MAX_REASONS)
    }
}

impl std::fmt::Debug for ReasonGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReasonGenerator")
            .field("threshold", &self.threshold)
            .field("max_reasons", &self.max_reasons)
            .finish_non_exhaustive()
    }
}
