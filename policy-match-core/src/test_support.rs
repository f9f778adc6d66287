//! Fixture builders shared by unit, behaviour and property tests.
//!
//! Enabled for this crate's own tests and, for downstream crates, through the
//! `test-support` feature.

use crate::{Answer, AnswerSet, Candidate, PolicyCategory, Question, Questionnaire};

/// Two-question questionnaire: `q1` (economy, weight 2) and `q2` (welfare).
#[must_use]
pub fn economy_welfare_questionnaire() -> Questionnaire {
    Questionnaire::new(vec![
        Question::scale("q1", PolicyCategory::Economy).with_weight(2.0),
        Question::scale("q2", PolicyCategory::Welfare),
    ])
    .unwrap_or_default()
}

/// Build an answer set from `(question id, scale value)` pairs.
#[must_use]
pub fn scale_answers(pairs: &[(&str, i32)]) -> AnswerSet {
    pairs
        .iter()
        .map(|(id, value)| Answer::new(*id, *value))
        .collect()
}

/// Build a candidate answering scale questions.
#[must_use]
pub fn scale_candidate(id: &str, pairs: &[(&str, i32)]) -> Candidate {
    Candidate::new(id, format!("Candidate {id}")).with_answers(scale_answers(pairs))
}

/// One scale question per category, ids `"economy"`, `"welfare"`, and so on.
#[must_use]
pub fn one_question_per_category() -> Questionnaire {
    Questionnaire::new(
        PolicyCategory::ALL
            .into_iter()
            .map(|category| Question::scale(category.as_str(), category))
            .collect(),
    )
    .unwrap_or_default()
}
