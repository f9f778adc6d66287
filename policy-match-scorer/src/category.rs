//! Unweighted per-category compatibility for one candidate.
//!
//! Unlike [`overall_score`](crate::overall_score), question weights are not
//! applied here: each category score is the plain mean of the similarities of
//! its included questions. The two aggregations intentionally differ.

use std::collections::BTreeMap;

use policy_match_core::{AnswerSet, CategoryScores, Percent, PolicyCategory, Questionnaire};

use crate::pairs::answered_pairs;

#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    count: u32,
    matched: f64,
}

impl Tally {
    #[expect(
        clippy::float_arithmetic,
        reason = "accumulates similarities for the category mean"
    )]
    fn record(&mut self, similarity: f64) {
        self.count = self.count.saturating_add(1);
        self.matched += similarity;
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "category scores are the mean similarity"
    )]
    fn percent(self) -> Percent {
        if self.count == 0 {
            return Percent::ZERO;
        }
        Percent::from_ratio(self.matched / f64::from(self.count))
    }
}

/// Mean similarity per policy category, as percentages.
///
/// Every category is present in the result; categories without an included
/// question score zero.
///
/// # Examples
/// ```
/// use policy_match_core::{Answer, AnswerSet, PolicyCategory, Question, Questionnaire};
/// use policy_match_scorer::category_scores;
///
/// # fn main() -> Result<(), policy_match_core::QuestionnaireError> {
/// let questionnaire = Questionnaire::new(vec![
///     Question::scale("q1", PolicyCategory::Economy).with_weight(2.0),
///     Question::scale("q2", PolicyCategory::Welfare),
/// ])?;
/// let user: AnswerSet = [Answer::new("q1", 5), Answer::new("q2", 1)].into_iter().collect();
/// let candidate: AnswerSet = [Answer::new("q1", 1), Answer::new("q2", 1)].into_iter().collect();
/// let scores = category_scores(&user, &candidate, &questionnaire);
/// assert_eq!(scores.get(PolicyCategory::Economy).get(), 0);
/// assert_eq!(scores.get(PolicyCategory::Welfare).get(), 100);
/// assert_eq!(scores.get(PolicyCategory::Local).get(), 0);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn category_scores(
    user: &AnswerSet,
    candidate: &AnswerSet,
    questionnaire: &Questionnaire,
) -> CategoryScores {
    let mut tallies: BTreeMap<PolicyCategory, Tally> = PolicyCategory::ALL
        .into_iter()
        .map(|category| (category, Tally::default()))
        .collect();
    for pair in answered_pairs(user, candidate, questionnaire) {
        if let Some(tally) = tallies.get_mut(&pair.question.category()) {
            tally.record(pair.similarity());
        }
    }
    CategoryScores::from_fn(|category| {
        tallies
            .get(&category)
            .copied()
            .map_or(Percent::ZERO, Tally::percent)
    })
}
