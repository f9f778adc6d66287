//! Facade crate for the policy-match scoring engine.
//!
//! This crate re-exports the domain model and the scorer. Serialisation
//! support and parallel candidate scoring sit behind the `serde` and
//! `parallel` feature flags.
//!
//! # Examples
//!
//! ```
//! use policy_match::{Answer, AnswerSet, Candidate, PolicyCategory, Question, Questionnaire};
//!
//! # fn main() -> Result<(), policy_match::QuestionnaireError> {
//! let questionnaire = Questionnaire::new(vec![
//!     Question::scale("q1", PolicyCategory::Environment),
//!     Question::scale("q2", PolicyCategory::Local),
//! ])?;
//! let user: AnswerSet = [Answer::new("q1", 4), Answer::new("q2", 2)].into_iter().collect();
//! let candidate = Candidate::new("c1", "Sato").with_answers(
//!     [Answer::new("q1", 5), Answer::new("q2", 2)].into_iter().collect(),
//! );
//!
//! let ranked = policy_match::rank_candidates(&user, &[candidate], &questionnaire);
//! assert_eq!(ranked[0].overall_score().get(), 88);
//! assert_eq!(ranked[0].reasons(), ["local 100% match", "environment 75% match"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use policy_match_core::{
    Answer, AnswerKind, AnswerSet, AnswerValue, CANONICAL_SCALE_WIDTH, Candidate,
    CandidateSummary, CategoryLabels, CategoryScores, IdentifierLabels, JapaneseLabels,
    MatchingResult, Percent, PercentOutOfRange, PolicyCategory, Question, QuestionDefinition,
    Questionnaire, QuestionnaireError, ScaleRange, UnknownCategory, similarity,
    similarity_on_scale,
};

pub use policy_match_scorer::{
    DEFAULT_MAX_REASONS, DEFAULT_REASON_THRESHOLD, MatchReason, MatchingConfig, MatchingEngine,
    ReasonGenerator, category_scores, compute_overall_and_category_scores, compute_similarity,
    overall_score, rank_candidates,
};

#[cfg(feature = "test-support")]
pub use policy_match_core::test_support;
