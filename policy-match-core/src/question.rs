//! Questionnaire items and their load-time validation.
//!
//! A [`Questionnaire`] is read-only configuration: it is validated once when
//! loaded and then passed by reference into every scoring call. All
//! configuration mistakes surface here, before any scoring runs.

use std::collections::HashSet;
use std::str::FromStr;

use thiserror::Error;

use crate::{PolicyCategory, UnknownCategory};

/// Width of the canonical five-point scale (`1..=5`).
pub const CANONICAL_SCALE_WIDTH: f64 = 4.0;

/// Bounds of an ordinal numeric scale.
///
/// The default is the canonical five-point scale `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ScaleRange {
    /// Lowest selectable value.
    pub min: f64,
    /// Highest selectable value.
    pub max: f64,
}

impl ScaleRange {
    /// Construct a scale range without validation.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Largest representable difference between two answers on the scale.
    ///
    /// # Examples
    /// ```
    /// use policy_match_core::ScaleRange;
    ///
    /// assert_eq!(ScaleRange::default().width(), 4.0);
    /// ```
    #[must_use]
    pub fn width(self) -> f64 {
        self.max - self.min
    }

    fn is_valid(self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self::new(1.0, 5.0)
    }
}

/// The value domain of a question.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", rename_all = "lowercase")
)]
pub enum AnswerKind {
    /// Position on an ordinal numeric scale.
    Scale(ScaleRange),
    /// One option out of an enumerated set.
    Choice {
        /// Selectable options, in display order.
        options: Vec<String>,
    },
}

impl AnswerKind {
    /// Scale width used when comparing answers to this question.
    ///
    /// Choice questions report the canonical width; it is never consulted for
    /// string comparisons.
    #[must_use]
    pub fn scale_width(&self) -> f64 {
        match self {
            Self::Scale(range) => range.width(),
            Self::Choice { .. } => CANONICAL_SCALE_WIDTH,
        }
    }
}

impl Default for AnswerKind {
    fn default() -> Self {
        Self::Scale(ScaleRange::default())
    }
}

/// A single questionnaire item.
///
/// # Examples
/// ```
/// use policy_match_core::{AnswerKind, PolicyCategory, Question};
///
/// let question = Question::new("q1", PolicyCategory::Economy, AnswerKind::default())
///     .with_weight(2.0);
/// assert_eq!(question.id(), "q1");
/// assert_eq!(question.weight(), Some(2.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    id: String,
    category: PolicyCategory,
    weight: Option<f64>,
    kind: AnswerKind,
    text: Option<String>,
    order: Option<u32>,
}

impl Question {
    /// Construct a question with no weight, text or explicit order.
    pub fn new(id: impl Into<String>, category: PolicyCategory, kind: AnswerKind) -> Self {
        Self {
            id: id.into(),
            category,
            weight: None,
            kind,
            text: None,
            order: None,
        }
    }

    /// Construct a question on the canonical five-point scale.
    pub fn scale(id: impl Into<String>, category: PolicyCategory) -> Self {
        Self::new(id, category, AnswerKind::default())
    }

    /// Construct a choice question with the given options.
    pub fn choice<I, S>(id: impl Into<String>, category: PolicyCategory, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options = options.into_iter().map(Into::into).collect();
        Self::new(id, category, AnswerKind::Choice { options })
    }

    /// Set the importance weight while returning `self` for chaining.
    #[must_use]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Attach the prompt text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the display position.
    #[must_use]
    pub const fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    /// Unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Policy category the question contributes to.
    #[must_use]
    pub const fn category(&self) -> PolicyCategory {
        self.category
    }

    /// Importance weight as configured, if any.
    #[must_use]
    pub const fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Importance weight when it is set and non-zero.
    ///
    /// A zero weight counts as unset so that answer-level overrides apply.
    #[must_use]
    pub fn effective_weight(&self) -> Option<f64> {
        self.weight.filter(|weight| *weight > 0.0)
    }

    /// Value domain of the question.
    #[must_use]
    pub const fn kind(&self) -> &AnswerKind {
        &self.kind
    }

    /// Prompt text, if supplied.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Display position, if supplied.
    #[must_use]
    pub const fn order(&self) -> Option<u32> {
        self.order
    }
}

/// Unvalidated question as it appears in questionnaire files.
///
/// The category is kept as a string so an unknown name is reported with the
/// offending question id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestionDefinition {
    /// Unique identifier.
    pub id: String,
    /// Category name, e.g. `"economy"`.
    pub category: String,
    /// Optional importance weight.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub weight: Option<f64>,
    /// Value domain; defaults to the five-point scale.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: AnswerKind,
    /// Optional prompt text.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub text: Option<String>,
    /// Optional display position.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub order: Option<u32>,
}

impl TryFrom<QuestionDefinition> for Question {
    type Error = QuestionnaireError;

    fn try_from(definition: QuestionDefinition) -> Result<Self, Self::Error> {
        let category = PolicyCategory::from_str(&definition.category).map_err(|source| {
            QuestionnaireError::UnknownCategory {
                id: definition.id.clone(),
                source,
            }
        })?;
        Ok(Self {
            id: definition.id,
            category,
            weight: definition.weight,
            kind: definition.kind,
            text: definition.text,
            order: definition.order,
        })
    }
}

impl From<Question> for QuestionDefinition {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            category: question.category.as_str().to_owned(),
            weight: question.weight,
            kind: question.kind,
            text: question.text,
            order: question.order,
        }
    }
}

/// Errors raised while loading a questionnaire.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuestionnaireError {
    /// A question had an empty or whitespace identifier.
    #[error("question at position {index} has an empty id")]
    EmptyId {
        /// Zero-based position in the supplied list.
        index: usize,
    },
    /// Two questions shared an identifier.
    #[error("question id '{id}' is defined more than once")]
    DuplicateId {
        /// The repeated identifier.
        id: String,
    },
    /// A question referenced a category outside the fixed enumeration.
    #[error("question '{id}' references an undefined category")]
    UnknownCategory {
        /// Identifier of the offending question.
        id: String,
        /// Parse failure for the category name.
        #[source]
        source: UnknownCategory,
    },
    /// A weight was negative or not finite.
    #[error("question '{id}' has invalid weight {weight}")]
    InvalidWeight {
        /// Identifier of the offending question.
        id: String,
        /// The rejected weight.
        weight: f64,
    },
    /// A scale did not span a positive, finite range.
    #[error("question '{id}' has an invalid scale {min}..={max}")]
    InvalidScale {
        /// Identifier of the offending question.
        id: String,
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// A choice question listed no options.
    #[error("choice question '{id}' has no options")]
    EmptyOptions {
        /// Identifier of the offending question.
        id: String,
    },
    /// A choice question listed the same option twice.
    #[error("choice question '{id}' lists option '{option}' more than once")]
    DuplicateOption {
        /// Identifier of the offending question.
        id: String,
        /// The repeated option.
        option: String,
    },
}

/// A validated, immutable list of questions.
///
/// # Examples
/// ```
/// use policy_match_core::{PolicyCategory, Question, Questionnaire};
///
/// # fn main() -> Result<(), policy_match_core::QuestionnaireError> {
/// let questionnaire = Questionnaire::new(vec![
///     Question::scale("q1", PolicyCategory::Economy).with_weight(2.0),
///     Question::scale("q2", PolicyCategory::Welfare),
/// ])?;
/// assert_eq!(questionnaire.len(), 2);
/// assert!(questionnaire.get("q2").is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<QuestionDefinition>",
        into = "Vec<QuestionDefinition>"
    )
)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    /// Validate and construct a questionnaire.
    ///
    /// Questions keep their supplied order unless every question carries an
    /// explicit `order`, in which case they are sorted by it (stable).
    ///
    /// # Errors
    /// Returns [`QuestionnaireError`] for empty or duplicate ids, invalid
    /// weights, degenerate scales and malformed option lists.
    pub fn new(mut questions: Vec<Question>) -> Result<Self, QuestionnaireError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for (index, question) in questions.iter().enumerate() {
            if question.id.trim().is_empty() {
                return Err(QuestionnaireError::EmptyId { index });
            }
            if !seen.insert(question.id.as_str()) {
                return Err(QuestionnaireError::DuplicateId {
                    id: question.id.clone(),
                });
            }
            validate_question(question)?;
        }
        if !questions.is_empty() && questions.iter().all(|q| q.order.is_some()) {
            questions.sort_by_key(|q| q.order);
        }
        Ok(Self { questions })
    }

    /// Validate raw definitions, resolving category names first.
    ///
    /// # Errors
    /// Returns [`QuestionnaireError::UnknownCategory`] for an undefined
    /// category, plus every error reported by [`Questionnaire::new`].
    pub fn from_definitions<I>(definitions: I) -> Result<Self, QuestionnaireError>
    where
        I: IntoIterator<Item = QuestionDefinition>,
    {
        let questions = definitions
            .into_iter()
            .map(Question::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(questions)
    }

    /// A questionnaire with no questions.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            questions: Vec::new(),
        }
    }

    /// Questions in scoring order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Iterate over the questions in scoring order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Look up a question by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Number of questions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Report whether the questionnaire has no questions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl<'a> IntoIterator for &'a Questionnaire {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<QuestionDefinition>> for Questionnaire {
    type Error = QuestionnaireError;

    fn try_from(definitions: Vec<QuestionDefinition>) -> Result<Self, Self::Error> {
        Self::from_definitions(definitions)
    }
}

impl From<Questionnaire> for Vec<QuestionDefinition> {
    fn from(questionnaire: Questionnaire) -> Self {
        questionnaire
            .questions
            .into_iter()
            .map(QuestionDefinition::from)
            .collect()
    }
}

fn validate_question(question: &Question) -> Result<(), QuestionnaireError> {
    if let Some(weight) = question.weight
        && (!weight.is_finite() || weight < 0.0)
    {
        return Err(QuestionnaireError::InvalidWeight {
            id: question.id.clone(),
            weight,
        });
    }
    match &question.kind {
        AnswerKind::Scale(range) if !range.is_valid() => Err(QuestionnaireError::InvalidScale {
            id: question.id.clone(),
            min: range.min,
            max: range.max,
        }),
        AnswerKind::Scale(_) => Ok(()),
        AnswerKind::Choice { options } => validate_options(&question.id, options),
    }
}

fn validate_options(id: &str, options: &[String]) -> Result<(), QuestionnaireError> {
    if options.is_empty() {
        return Err(QuestionnaireError::EmptyOptions { id: id.to_owned() });
    }
    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        if !seen.insert(option.as_str()) {
            return Err(QuestionnaireError::DuplicateOption {
                id: id.to_owned(),
                option: option.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn two_questions() -> Vec<Question> {
        vec![
            Question::scale("q1", PolicyCategory::Economy).with_weight(2.0),
            Question::scale("q2", PolicyCategory::Welfare),
        ]
    }

    #[rstest]
    fn accepts_valid_questions(two_questions: Vec<Question>) {
        let questionnaire = Questionnaire::new(two_questions).expect("valid questionnaire");
        assert_eq!(questionnaire.len(), 2);
        assert_eq!(
            questionnaire.get("q1").map(Question::category),
            Some(PolicyCategory::Economy)
        );
    }

    #[rstest]
    fn rejects_duplicate_ids(mut two_questions: Vec<Question>) {
        two_questions.push(Question::scale("q1", PolicyCategory::Local));
        let err = Questionnaire::new(two_questions).expect_err("duplicate id");
        assert_eq!(err, QuestionnaireError::DuplicateId { id: "q1".into() });
    }

    #[rstest]
    fn rejects_blank_ids() {
        let err = Questionnaire::new(vec![Question::scale("  ", PolicyCategory::Other)])
            .expect_err("blank id");
        assert_eq!(err, QuestionnaireError::EmptyId { index: 0 });
    }

    #[rstest]
    #[case(-1.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn rejects_invalid_weights(#[case] weight: f64) {
        let question = Question::scale("q1", PolicyCategory::Economy).with_weight(weight);
        let err = Questionnaire::new(vec![question]).expect_err("invalid weight");
        assert!(matches!(err, QuestionnaireError::InvalidWeight { .. }));
    }

    #[rstest]
    fn zero_weight_is_accepted_but_ineffective() {
        let question = Question::scale("q1", PolicyCategory::Economy).with_weight(0.0);
        assert_eq!(question.effective_weight(), None);
        assert!(Questionnaire::new(vec![question]).is_ok());
    }

    #[rstest]
    #[case(5.0, 5.0)]
    #[case(5.0, 1.0)]
    #[case(f64::NEG_INFINITY, 5.0)]
    fn rejects_degenerate_scales(#[case] min: f64, #[case] max: f64) {
        let question = Question::new(
            "q1",
            PolicyCategory::Economy,
            AnswerKind::Scale(ScaleRange::new(min, max)),
        );
        let err = Questionnaire::new(vec![question]).expect_err("invalid scale");
        assert!(matches!(err, QuestionnaireError::InvalidScale { .. }));
    }

    #[rstest]
    fn rejects_choice_without_options() {
        let question = Question::choice("q1", PolicyCategory::Diplomacy, Vec::<String>::new());
        let err = Questionnaire::new(vec![question]).expect_err("no options");
        assert_eq!(err, QuestionnaireError::EmptyOptions { id: "q1".into() });
    }

    #[rstest]
    fn rejects_repeated_options() {
        let question = Question::choice("q1", PolicyCategory::Diplomacy, ["yes", "no", "yes"]);
        let err = Questionnaire::new(vec![question]).expect_err("repeated option");
        assert!(matches!(
            err,
            QuestionnaireError::DuplicateOption { ref option, .. } if option == "yes"
        ));
    }

    #[rstest]
    fn unknown_category_names_the_question() {
        let definition = QuestionDefinition {
            id: "q9".into(),
            category: "healthcare".into(),
            weight: None,
            kind: AnswerKind::default(),
            text: None,
            order: None,
        };
        let err = Questionnaire::from_definitions([definition]).expect_err("unknown category");
        assert!(matches!(err, QuestionnaireError::UnknownCategory { ref id, .. } if id == "q9"));
    }

    #[rstest]
    fn explicit_order_sorts_questions() {
        let questionnaire = Questionnaire::new(vec![
            Question::scale("b", PolicyCategory::Economy).with_order(2),
            Question::scale("a", PolicyCategory::Economy).with_order(1),
        ])
        .expect("valid questionnaire");
        let ids: Vec<&str> = questionnaire.iter().map(Question::id).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[rstest]
    fn partial_order_keeps_declaration_order() {
        let questionnaire = Questionnaire::new(vec![
            Question::scale("b", PolicyCategory::Economy).with_order(2),
            Question::scale("a", PolicyCategory::Economy),
        ])
        .expect("valid questionnaire");
        let ids: Vec<&str> = questionnaire.iter().map(Question::id).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialising_validates_definitions() {
        let json = r#"[
            {"id": "q1", "category": "economy", "weight": 2,
             "kind": {"type": "scale", "min": 1, "max": 5}},
            {"id": "q2", "category": "diplomacy",
             "kind": {"type": "choice", "options": ["yes", "no"]}},
            {"id": "q3", "category": "welfare"}
        ]"#;
        let questionnaire: Questionnaire = serde_json::from_str(json).expect("parse questionnaire");
        assert_eq!(questionnaire.len(), 3);
        assert_eq!(
            questionnaire.get("q3").map(Question::kind),
            Some(&AnswerKind::default())
        );

        let bad = r#"[{"id": "q1", "category": "sports"}]"#;
        let err = serde_json::from_str::<Questionnaire>(bad).expect_err("unknown category");
        assert!(err.to_string().contains("undefined category"));
    }
}
