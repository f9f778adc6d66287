//! Core domain types for the policy matching engine.
//!
//! A citizen answers a fixed policy questionnaire; candidates have recorded
//! answers to the same questions. This crate models the questionnaire, the
//! answers and the computed results, and provides the per-answer
//! [`similarity`] function the aggregators in `policy-match-scorer` build on.
//!
//! Configuration errors are reported when a [`Questionnaire`] is loaded.
//! Everything downstream is total: malformed answers degrade to zero
//! similarity instead of failing.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod answer;
pub mod candidate;
pub mod category;
pub mod question;
pub mod result;
pub mod similarity;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use answer::{Answer, AnswerSet, AnswerValue};
pub use candidate::{Candidate, CandidateSummary};
pub use category::{
    CategoryLabels, IdentifierLabels, JapaneseLabels, PolicyCategory, UnknownCategory,
};
pub use question::{
    AnswerKind, CANONICAL_SCALE_WIDTH, Question, QuestionDefinition, Questionnaire,
    QuestionnaireError, ScaleRange,
};
pub use result::{CategoryScores, MatchingResult, Percent, PercentOutOfRange};
pub use similarity::{similarity, similarity_on_scale};
