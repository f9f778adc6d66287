//! Agreement between two answers to the same question.
//!
//! Similarity is a total, symmetric function into `0.0..=1.0`:
//! - two scale values score `1 - |a - b| / width`, clamped;
//! - two choices score `1.0` when identical and `0.0` otherwise;
//! - mixed kinds, and non-finite numbers, score `0.0`.

use crate::{AnswerValue, CANONICAL_SCALE_WIDTH};

/// Similarity of two values on the canonical five-point scale.
///
/// # Examples
/// ```
/// use policy_match_core::{AnswerValue, similarity};
///
/// assert_eq!(similarity(&AnswerValue::Scale(5.0), &AnswerValue::Scale(5.0)), 1.0);
/// assert_eq!(similarity(&AnswerValue::Scale(1.0), &AnswerValue::Scale(5.0)), 0.0);
/// assert_eq!(similarity(&AnswerValue::Scale(2.0), &AnswerValue::Scale(3.0)), 0.75);
/// assert_eq!(similarity(&"yes".into(), &"no".into()), 0.0);
/// ```
#[must_use]
pub fn similarity(user: &AnswerValue, candidate: &AnswerValue) -> f64 {
    similarity_on_scale(user, candidate, CANONICAL_SCALE_WIDTH)
}

/// Similarity of two values on a scale of the given width.
///
/// A non-positive or non-finite `width` makes every scale comparison score
/// `1.0` only for identical values.
#[must_use]
pub fn similarity_on_scale(user: &AnswerValue, candidate: &AnswerValue, width: f64) -> f64 {
    match (user, candidate) {
        (AnswerValue::Scale(a), AnswerValue::Scale(b)) => scale_similarity(*a, *b, width),
        (AnswerValue::Choice(a), AnswerValue::Choice(b)) => {
            if a == b {
                1.0
            } else {
                0.0
            }
        }
        (AnswerValue::Scale(_), AnswerValue::Choice(_))
        | (AnswerValue::Choice(_), AnswerValue::Scale(_)) => 0.0,
    }
}

fn scale_similarity(a: f64, b: f64, width: f64) -> f64 {
    if !a.is_finite() || !b.is_finite() {
        return 0.0;
    }
    let difference = (a - b).abs();
    if !width.is_finite() || width <= 0.0 {
        return if difference == 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - difference / width).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE: f64 = 1e-12;

    #[rstest]
    #[case(3.0, 3.0, 1.0)]
    #[case(5.0, 1.0, 0.0)]
    #[case(1.0, 2.0, 0.75)]
    #[case(2.0, 4.0, 0.5)]
    #[case(4.0, 1.0, 0.25)]
    // Values outside the scale clamp instead of going negative.
    #[case(0.0, 7.0, 0.0)]
    #[case(f64::NAN, 3.0, 0.0)]
    #[case(3.0, f64::INFINITY, 0.0)]
    fn scale_scenarios(#[case] a: f64, #[case] b: f64, #[case] expected: f64) {
        let score = similarity(&AnswerValue::Scale(a), &AnswerValue::Scale(b));
        assert!((score - expected).abs() <= TOLERANCE, "got {score}");
    }

    #[rstest]
    #[case("yes", "yes", 1.0)]
    #[case("yes", "no", 0.0)]
    // No partial credit for near matches.
    #[case("Yes", "yes", 0.0)]
    #[case("", "", 1.0)]
    fn choice_scenarios(#[case] a: &str, #[case] b: &str, #[case] expected: f64) {
        assert!((similarity(&a.into(), &b.into()) - expected).abs() <= TOLERANCE);
    }

    #[rstest]
    fn mixed_kinds_disagree_totally() {
        let scale = AnswerValue::Scale(3.0);
        let choice = AnswerValue::Choice("3".into());
        assert_eq!(similarity(&scale, &choice), 0.0);
        assert_eq!(similarity(&choice, &scale), 0.0);
    }

    #[rstest]
    fn custom_width_rescales_difference() {
        let score = similarity_on_scale(&AnswerValue::Scale(0.0), &AnswerValue::Scale(5.0), 10.0);
        assert!((score - 0.5).abs() <= TOLERANCE);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-2.0)]
    #[case(f64::NAN)]
    fn degenerate_width_only_rewards_identical_values(#[case] width: f64) {
        let same = similarity_on_scale(&AnswerValue::Scale(2.0), &AnswerValue::Scale(2.0), width);
        let apart = similarity_on_scale(&AnswerValue::Scale(2.0), &AnswerValue::Scale(3.0), width);
        assert_eq!((same, apart), (1.0, 0.0));
    }
}
