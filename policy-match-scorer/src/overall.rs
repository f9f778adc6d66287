//! Weighted overall compatibility for one candidate.

use policy_match_core::{AnswerSet, Percent, Questionnaire};

use crate::pairs::answered_pairs;

/// Weighted mean similarity over questions both parties answered, as a
/// percentage.
///
/// Each included question contributes `weight * similarity` to the numerator
/// and `weight` to the denominator, where the weight is the question's weight,
/// else the respondent's answer override, else one. When nothing overlaps the
/// score is exactly zero.
///
/// # Examples
/// ```
/// use policy_match_core::{Answer, AnswerSet, PolicyCategory, Question, Questionnaire};
/// use policy_match_scorer::overall_score;
///
/// # fn main() -> Result<(), policy_match_core::QuestionnaireError> {
/// let questionnaire = Questionnaire::new(vec![
///     Question::scale("q1", PolicyCategory::Economy).with_weight(2.0),
///     Question::scale("q2", PolicyCategory::Welfare),
/// ])?;
/// let user: AnswerSet = [Answer::new("q1", 5), Answer::new("q2", 1)].into_iter().collect();
/// let candidate: AnswerSet = [Answer::new("q1", 1), Answer::new("q2", 1)].into_iter().collect();
/// assert_eq!(overall_score(&user, &candidate, &questionnaire).get(), 33);
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the overall score is a weighted mean of similarities"
)]
pub fn overall_score(
    user: &AnswerSet,
    candidate: &AnswerSet,
    questionnaire: &Questionnaire,
) -> Percent {
    let weighted: Vec<(f64, f64)> = answered_pairs(user, candidate, questionnaire)
        .map(|pair| (pair.weight(), pair.similarity()))
        .collect();
    // Scale by the largest weight so the sums stay finite for huge weights.
    let largest = weighted
        .iter()
        .map(|&(weight, _)| weight)
        .fold(0.0_f64, f64::max);
    if largest <= 0.0 || !largest.is_finite() {
        return Percent::ZERO;
    }

    let mut total_weight = 0.0_f64;
    let mut matched_weight = 0.0_f64;
    for (weight, similarity) in weighted {
        let scaled = weight / largest;
        total_weight += scaled;
        matched_weight += scaled * similarity;
    }
    if total_weight <= 0.0 || !total_weight.is_finite() {
        return Percent::ZERO;
    }
    Percent::from_ratio(matched_weight / total_weight)
}
