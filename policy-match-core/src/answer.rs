//! Respondent answers and the per-respondent answer index.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use log::warn;

/// A recorded answer value.
///
/// Numbers are positions on an ordinal scale; strings are selected options.
/// In JSON a number deserialises to [`AnswerValue::Scale`] and a string to
/// [`AnswerValue::Choice`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum AnswerValue {
    /// Position on an ordinal numeric scale.
    Scale(f64),
    /// A selected categorical option.
    Choice(String),
}

impl From<f64> for AnswerValue {
    fn from(value: f64) -> Self {
        Self::Scale(value)
    }
}

impl From<i32> for AnswerValue {
    fn from(value: i32) -> Self {
        Self::Scale(f64::from(value))
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        Self::Choice(value.to_owned())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        Self::Choice(value)
    }
}

/// One respondent's answer to one question.
///
/// # Examples
/// ```
/// use policy_match_core::{Answer, AnswerValue};
///
/// let answer = Answer::new("q1", 5).with_weight(3.0);
/// assert_eq!(answer.value, AnswerValue::Scale(5.0));
/// assert_eq!(answer.effective_weight(), Some(3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Answer {
    /// Identifier of the answered question.
    pub question_id: String,
    /// The recorded value.
    pub value: AnswerValue,
    /// Optional per-answer importance override.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub weight: Option<f64>,
}

impl Answer {
    /// Construct an answer without a weight override.
    pub fn new(question_id: impl Into<String>, value: impl Into<AnswerValue>) -> Self {
        Self {
            question_id: question_id.into(),
            value: value.into(),
            weight: None,
        }
    }

    /// Attach a weight override while returning `self` for chaining.
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Weight override when it is finite and positive.
    #[must_use]
    pub fn effective_weight(&self) -> Option<f64> {
        self.weight.filter(|weight| weight.is_finite() && *weight > 0.0)
    }
}

/// Answers indexed by question id.
///
/// When a question is answered more than once the first answer is kept and
/// later ones are dropped with a warning.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Answer>", into = "Vec<Answer>")
)]
pub struct AnswerSet {
    answers: BTreeMap<String, Answer>,
}

impl AnswerSet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            answers: BTreeMap::new(),
        }
    }

    /// Record an answer unless the question already has one.
    ///
    /// Returns `true` when the answer was stored.
    pub fn insert(&mut self, answer: Answer) -> bool {
        match self.answers.entry(answer.question_id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(answer);
                true
            }
            Entry::Occupied(_) => {
                warn!(
                    "ignoring repeated answer for question '{}'",
                    answer.question_id
                );
                false
            }
        }
    }

    /// Add an answer while returning `self` for chaining.
    #[must_use]
    pub fn with_answer(mut self, answer: Answer) -> Self {
        self.insert(answer);
        self
    }

    /// Answer recorded for `question_id`, if any.
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&Answer> {
        self.answers.get(question_id)
    }

    /// Number of answered questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Report whether no question was answered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate over answers ordered by question id.
    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.answers.values()
    }
}

impl FromIterator<Answer> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = Answer>>(iter: T) -> Self {
        let mut set = Self::new();
        for answer in iter {
            set.insert(answer);
        }
        set
    }
}

impl From<Vec<Answer>> for AnswerSet {
    fn from(answers: Vec<Answer>) -> Self {
        answers.into_iter().collect()
    }
}

impl From<AnswerSet> for Vec<Answer> {
    fn from(set: AnswerSet) -> Self {
        set.answers.into_values().collect()
    }
}
