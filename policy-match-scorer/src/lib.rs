//! Preference matching between a respondent and policy candidates.
//!
//! Given a respondent's answers to a policy questionnaire and candidates'
//! recorded answers to the same questions, the crate computes:
//! - a **weighted overall score** ([`overall_score`]) using question weights,
//!   falling back to the respondent's per-answer weight and then to one;
//! - an **unweighted per-category breakdown** ([`category_scores`]) covering
//!   every [`PolicyCategory`](policy_match_core::PolicyCategory);
//! - up to three **reasons** ([`ReasonGenerator`]) naming the strongest
//!   categories;
//! - a **ranked result list** ([`MatchingEngine`]) sorted by overall score with
//!   a stable tie-break on input order.
//!
//! Every function is pure. Questions either party left unanswered are excluded
//! from both aggregations, and an empty overlap scores zero.
//!
//! # Examples
//!
//! ```
//! use policy_match_core::{Answer, AnswerSet, Candidate, PolicyCategory, Question, Questionnaire};
//! use policy_match_scorer::rank_candidates;
//!
//! # fn main() -> Result<(), policy_match_core::QuestionnaireError> {
//! let questionnaire = Questionnaire::new(vec![
//!     Question::scale("q1", PolicyCategory::Economy).with_weight(2.0),
//!     Question::scale("q2", PolicyCategory::Welfare),
//! ])?;
//! let user: AnswerSet = [Answer::new("q1", 5), Answer::new("q2", 1)].into_iter().collect();
//! let candidates = vec![Candidate::new("a", "A").with_answers(user.clone())];
//!
//! let ranked = rank_candidates(&user, &candidates, &questionnaire);
//! assert_eq!(ranked[0].reasons(), ["economy 100% match", "welfare 100% match"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod category;
mod engine;
mod overall;
mod pairs;
mod reasons;

pub use category::category_scores;
pub use engine::{MatchingConfig, MatchingEngine};
pub use overall::overall_score;
pub use reasons::{DEFAULT_MAX_REASONS, DEFAULT_REASON_THRESHOLD, MatchReason, ReasonGenerator};

use policy_match_core::{
    Answer, AnswerSet, Candidate, CategoryScores, MatchingResult, Percent, Questionnaire,
    similarity,
};

/// Similarity in `0.0..=1.0` between two answers on the canonical scale.
///
/// # Examples
/// ```
/// use policy_match_core::Answer;
/// use policy_match_scorer::compute_similarity;
///
/// let score = compute_similarity(&Answer::new("q1", 2), &Answer::new("q1", 3));
/// assert_eq!(score, 0.75);
/// ```
#[must_use]
pub fn compute_similarity(user: &Answer, candidate: &Answer) -> f64 {
    similarity(&user.value, &candidate.value)
}

/// Overall score and category breakdown for one candidate's answers.
#[must_use]
pub fn compute_overall_and_category_scores(
    user: &AnswerSet,
    candidate: &AnswerSet,
    questionnaire: &Questionnaire,
) -> (Percent, CategoryScores) {
    (
        overall_score(user, candidate, questionnaire),
        category_scores(user, candidate, questionnaire),
    )
}

/// Rank candidates with the default [`MatchingConfig`].
#[must_use]
pub fn rank_candidates(
    user: &AnswerSet,
    candidates: &[Candidate],
    questionnaire: &Questionnaire,
) -> Vec<MatchingResult> {
    MatchingEngine::new(questionnaire, MatchingConfig::default()).rank(user, candidates)
}
