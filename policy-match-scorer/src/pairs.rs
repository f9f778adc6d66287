//! Questions answered by both parties.

use log::trace;
use policy_match_core::{Answer, AnswerSet, Question, Questionnaire, similarity_on_scale};

/// A question together with the respondent's and the candidate's answers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnsweredPair<'a> {
    pub(crate) question: &'a Question,
    pub(crate) user: &'a Answer,
    pub(crate) candidate: &'a Answer,
}

impl AnsweredPair<'_> {
    /// Agreement between the two answers on this question's scale.
    pub(crate) fn similarity(&self) -> f64 {
        similarity_on_scale(
            &self.user.value,
            &self.candidate.value,
            self.question.kind().scale_width(),
        )
    }

    /// Question weight, else the respondent's override, else one.
    pub(crate) fn weight(&self) -> f64 {
        self.question
            .effective_weight()
            .or_else(|| self.user.effective_weight())
            .unwrap_or(1.0)
    }
}

/// Walk the questionnaire in order, yielding questions both parties answered.
///
/// Questions missing an answer from either side are skipped, not penalised.
pub(crate) fn answered_pairs<'a>(
    user: &'a AnswerSet,
    candidate: &'a AnswerSet,
    questionnaire: &'a Questionnaire,
) -> impl Iterator<Item = AnsweredPair<'a>> + 'a {
    questionnaire.iter().filter_map(move |question| {
        let (Some(user_answer), Some(candidate_answer)) =
            (user.get(question.id()), candidate.get(question.id()))
        else {
            trace!("question '{}' excluded: not answered by both", question.id());
            return None;
        };
        Some(AnsweredPair {
            question,
            user: user_answer,
            candidate: candidate_answer,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use policy_match_core::test_support::{economy_welfare_questionnaire, scale_answers};
    use rstest::rstest;

    #[rstest]
    fn skips_questions_missing_either_answer() {
        let questionnaire = economy_welfare_questionnaire();
        let user = scale_answers(&[("q1", 5), ("q2", 1)]);
        let candidate = scale_answers(&[("q2", 1), ("q3", 4)]);
        let ids: Vec<&str> = answered_pairs(&user, &candidate, &questionnaire)
            .map(|pair| pair.question.id())
            .collect();
        assert_eq!(ids, ["q2"]);
    }

    #[rstest]
    #[case(None, None, 1.0)]
    #[case(None, Some(3.0), 3.0)]
    #[case(Some(2.0), Some(3.0), 2.0)]
    // A zero question weight defers to the answer override.
    #[case(Some(0.0), Some(3.0), 3.0)]
    #[case(Some(0.0), None, 1.0)]
    fn weight_resolution(
        #[case] question_weight: Option<f64>,
        #[case] answer_weight: Option<f64>,
        #[case] expected: f64,
    ) {
        let mut question = Question::scale("q1", policy_match_core::PolicyCategory::Economy);
        if let Some(weight) = question_weight {
            question = question.with_weight(weight);
        }
        let mut user = Answer::new("q1", 3);
        user.weight = answer_weight;
        let candidate = Answer::new("q1", 3);
        let pair = AnsweredPair {
            question: &question,
            user: &user,
            candidate: &candidate,
        };
        assert_eq!(pair.weight(), expected);
    }
}
