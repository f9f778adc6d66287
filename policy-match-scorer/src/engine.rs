//! Rank candidates against a respondent.
//!
//! The engine holds no state between calls: every invocation recomputes each
//! [`MatchingResult`] from the supplied answers. Scoring a candidate does not
//! depend on any other candidate, so with the `parallel` feature candidates
//! are scored on the `rayon` pool; the final ordering is always a sequential
//! stable sort, so both paths return identical output.

use std::collections::BTreeMap;

use log::debug;
use policy_match_core::{
    AnswerSet, Candidate, CandidateSummary, CategoryLabels, MatchingResult, Percent, Questionnaire,
};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::reasons::{DEFAULT_MAX_REASONS, DEFAULT_REASON_THRESHOLD, ReasonGenerator};
use crate::{category_scores, overall_score};

static NO_ANSWERS: AnswerSet = AnswerSet::new();

/// Tunable knobs for result assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingConfig {
    /// Minimum category score mentioned as a reason.
    pub reason_threshold: Percent,
    /// Maximum number of reasons per result.
    pub max_reasons: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            reason_threshold: DEFAULT_REASON_THRESHOLD,
            max_reasons: DEFAULT_MAX_REASONS,
        }
    }
}

/// Scores and ranks candidates for one questionnaire.
///
/// # Examples
/// ```
/// use policy_match_core::{Answer, AnswerSet, Candidate, PolicyCategory, Question, Questionnaire};
/// use policy_match_scorer::{MatchingConfig, MatchingEngine};
///
/// # fn main() -> Result<(), policy_match_core::QuestionnaireError> {
/// let questionnaire = Questionnaire::new(vec![
///     Question::scale("q1", PolicyCategory::Economy).with_weight(2.0),
///     Question::scale("q2", PolicyCategory::Welfare),
/// ])?;
/// let user: AnswerSet = [Answer::new("q1", 5), Answer::new("q2", 1)].into_iter().collect();
/// let candidates = vec![
///     Candidate::new("b", "B").with_answers(
///         [Answer::new("q1", 1), Answer::new("q2", 1)].into_iter().collect(),
///     ),
///     Candidate::new("a", "A").with_answers(user.clone()),
/// ];
///
/// let engine = MatchingEngine::new(&questionnaire, MatchingConfig::default());
/// let ranked = engine.rank(&user, &candidates);
/// assert_eq!(ranked[0].candidate_id(), "a");
/// assert_eq!(ranked[0].overall_score().get(), 100);
/// assert_eq!(ranked[1].overall_score().get(), 33);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MatchingEngine<'q> {
    questionnaire: &'q Questionnaire,
    reasons: ReasonGenerator,
}

impl<'q> MatchingEngine<'q> {
    /// Construct an engine for `questionnaire`.
    #[must_use]
    pub fn new(questionnaire: &'q Questionnaire, config: MatchingConfig) -> Self {
        Self {
            questionnaire,
            reasons: ReasonGenerator::new(config.reason_threshold, config.max_reasons),
        }
    }

    /// Replace the label vocabulary used to render reasons.
    #[must_use]
    pub fn with_labels(mut self, labels: impl CategoryLabels + 'static) -> Self {
        self.reasons = self.reasons.with_labels(labels);
        self
    }

    /// The questionnaire results are computed against.
    #[must_use]
    pub const fn questionnaire(&self) -> &'q Questionnaire {
        self.questionnaire
    }

    /// Score one candidate.
    #[must_use]
    pub fn score(&self, user: &AnswerSet, candidate: &Candidate) -> MatchingResult {
        self.score_answers(user, &candidate.id, &candidate.name, &candidate.answers)
    }

    /// Score and rank candidates carrying their own answers.
    ///
    /// Results are ordered by descending overall score. Candidates with equal
    /// scores keep their relative order from `candidates`.
    #[must_use]
    pub fn rank(&self, user: &AnswerSet, candidates: &[Candidate]) -> Vec<MatchingResult> {
        let results = score_each(candidates, |candidate| self.score(user, candidate));
        self.finish(results)
    }

    /// Score and rank a roster whose answers are supplied separately.
    ///
    /// A candidate without an entry in `answers_by_candidate` is scored
    /// against an empty answer set. Ordering matches [`MatchingEngine::rank`].
    #[must_use]
    pub fn rank_roster(
        &self,
        user: &AnswerSet,
        roster: &[CandidateSummary],
        answers_by_candidate: &BTreeMap<String, AnswerSet>,
    ) -> Vec<MatchingResult> {
        let results = score_each(roster, |summary| {
            let answers = answers_by_candidate
                .get(&summary.id)
                .unwrap_or(&NO_ANSWERS);
            self.score_answers(user, &summary.id, &summary.name, answers)
        });
        self.finish(results)
    }

    fn score_answers(
        &self,
        user: &AnswerSet,
        id: &str,
        name: &str,
        answers: &AnswerSet,
    ) -> MatchingResult {
        let overall = overall_score(user, answers, self.questionnaire);
        let categories = category_scores(user, answers, self.questionnaire);
        let reasons = self.reasons.reasons(&categories);
        MatchingResult::new(id.to_owned(), name.to_owned(), overall, categories, reasons)
    }

    fn finish(&self, mut results: Vec<MatchingResult>) -> Vec<MatchingResult> {
        // Stable: equal scores keep input order.
        results.sort_by(|a, b| b.overall_score().cmp(&a.overall_score()));
        debug!(
            "ranked {} candidates against {} questions",
            results.len(),
            self.questionnaire.len()
        );
        results
    }
}

#[cfg(not(feature = "parallel"))]
fn score_each<T, F>(items: &[T], score: F) -> Vec<MatchingResult>
where
    F: Fn(&T) -> MatchingResult,
{
    items.iter().map(score).collect()
}

// `collect` on an indexed parallel iterator preserves input order.
#[cfg(feature = "parallel")]
fn score_each<T, F>(items: &[T], score: F) -> Vec<MatchingResult>
where
    T: Sync,
    F: Fn(&T) -> MatchingResult + Sync + Send,
{
    items.par_iter().map(score).collect()
}
