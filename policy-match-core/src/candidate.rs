//! Candidates whose recorded answers are compared against a respondent.

use crate::AnswerSet;

/// Identity of a candidate without answers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateSummary {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl CandidateSummary {
    /// Construct a summary.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A candidate together with their recorded answers.
///
/// Not every question needs an answer; unanswered questions are left out of
/// the comparison.
///
/// # Examples
/// ```
/// use policy_match_core::{Answer, AnswerSet, Candidate};
///
/// let candidate = Candidate::new("c1", "Sato Hanako")
///     .with_answers(AnswerSet::new().with_answer(Answer::new("q1", 4)));
/// assert_eq!(candidate.answers.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Recorded answers keyed by question id.
    #[cfg_attr(feature = "serde", serde(default))]
    pub answers: AnswerSet,
}

impl Candidate {
    /// Construct a candidate with no recorded answers.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            answers: AnswerSet::new(),
        }
    }

    /// Replace the recorded answers while returning `self` for chaining.
    #[must_use]
    pub fn with_answers(mut self, answers: AnswerSet) -> Self {
        self.answers = answers;
        self
    }

    /// Identity of the candidate.
    #[must_use]
    pub fn summary(&self) -> CandidateSummary {
        CandidateSummary::new(self.id.clone(), self.name.clone())
    }
}
