//! Property-based tests for scoring and ranking.
//!
//! # Invariants tested
//!
//! - **Self match:** a candidate answering exactly like the respondent scores
//!   100 overall whenever any question is answered, and 100 in every
//!   category with an answered question.
//! - **Symmetry:** similarity of any two answer values ignores their order and
//!   stays within `0..=1`; swapping respondent and candidate leaves the
//!   overall score unchanged when answers carry no weights.
//! - **Vacuous input:** a respondent without answers scores zero everywhere.
//! - **Reasons:** at most three, never the catch-all category, never below
//!   the threshold.
//! - **Ordering:** ranking is a permutation sorted by descending score, with
//!   ties in input order, and repeated calls agree.


use std::collections::{HashMap, HashSet};

use policy_match_core::{
    AnswerSet, MatchingResult, Percent, PolicyCategory, Question, similarity, similarity_on_scale,
};
use policy_match_scorer::{
    DEFAULT_MAX_REASONS, DEFAULT_REASON_THRESHOLD, MatchReason, MatchingConfig, MatchingEngine,
    ReasonGenerator, category_scores, overall_score, rank_candidates,
};
use proptest::prelude::*;

use proptest_support::{
    answer_value_strategy, answers_for, questionnaire_strategy, scenario_strategy,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: identical answer sets are a perfect match.
    #[test]
    fn identical_answers_score_full_marks(
        (questionnaire, user) in questionnaire_strategy(1, 12)
            .prop_flat_map(|questionnaire| {
                let user = answers_for(&questionnaire);
                (Just(questionnaire), user)
            }),
    ) {
        let expected = if user.is_empty() { Percent::ZERO } else { Percent::FULL };
        prop_assert_eq!(overall_score(&user, &user, &questionnaire), expected);

        let answered: HashSet<PolicyCategory> = questionnaire
            .iter()
            .filter(|question| user.get(question.id()).is_some())
            .map(Question::category)
            .collect();
        for (category, score) in category_scores(&user, &user, &questionnaire).iter() {
            let full = if answered.contains(&category) { Percent::FULL } else { Percent::ZERO };
            prop_assert_eq!(score, full);
        }
    }

    /// Property: similarity is symmetric and bounded for every value pair.
    #[test]
    fn similarity_is_symmetric_for_any_values(
        a in answer_value_strategy(),
        b in answer_value_strategy(),
        width in prop_oneof![Just(4.0_f64), 0.5_f64..20.0, Just(0.0), Just(f64::NAN)],
    ) {
        let forward = similarity(&a, &b);
        prop_assert_eq!(forward.to_bits(), similarity(&b, &a).to_bits());
        prop_assert!((0.0..=1.0).contains(&forward));

        let scaled = similarity_on_scale(&a, &b, width);
        prop_assert_eq!(scaled.to_bits(), similarity_on_scale(&b, &a, width).to_bits());
        prop_assert!((0.0..=1.0).contains(&scaled));
    }

    /// Property: the overall score does not depend on who is the respondent.
    #[test]
    fn overall_score_is_symmetric(
        (questionnaire, user, candidates) in scenario_strategy(1),
    ) {
        for candidate in &candidates {
            prop_assert_eq!(
                overall_score(&user, &candidate.answers, &questionnaire),
                overall_score(&candidate.answers, &user, &questionnaire)
            );
        }
    }

    /// Property: without respondent answers nothing can match.
    #[test]
    fn empty_respondent_scores_zero(
        (questionnaire, _user, candidates) in scenario_strategy(4),
    ) {
        let ranked = rank_candidates(&AnswerSet::new(), &candidates, &questionnaire);
        for result in &ranked {
            prop_assert_eq!(result.overall_score(), Percent::ZERO);
            prop_assert!(result.category_scores().iter().all(|(_, score)| score == Percent::ZERO));
            prop_assert!(result.reasons().is_empty());
        }
    }

    /// Property: reasons name only strong, specific categories.
    #[test]
    fn reasons_are_bounded_and_qualified(
        (questionnaire, user, candidates) in scenario_strategy(4),
    ) {
        let generator = ReasonGenerator::default();
        for result in rank_candidates(&user, &candidates, &questionnaire) {
            let selected = generator.select(result.category_scores());
            prop_assert!(selected.len() <= DEFAULT_MAX_REASONS);
            prop_assert_eq!(selected.len(), result.reasons().len());
            for MatchReason { category, score } in selected {
                prop_assert_ne!(category, PolicyCategory::Other);
                prop_assert!(score >= DEFAULT_REASON_THRESHOLD);
                prop_assert_eq!(result.category_scores().get(category), score);
            }
        }
    }

    /// Property: ranking sorts by descending score and keeps ties stable.
    #[test]
    fn ranking_is_a_stable_descending_permutation(
        (questionnaire, user, candidates) in scenario_strategy(8),
    ) {
        let engine = MatchingEngine::new(&questionnaire, MatchingConfig::default());
        let ranked = engine.rank(&user, &candidates);
        prop_assert_eq!(ranked.len(), candidates.len());

        let positions: HashMap<&str, usize> = candidates
            .iter()
            .enumerate()
            .map(|(idx, candidate)| (candidate.id.as_str(), idx))
            .collect();
        prop_assert_eq!(positions.len(), ranked.len());

        for pair in ranked.windows(2) {
            let [first, second] = pair else { continue };
            prop_assert!(first.overall_score() >= second.overall_score());
            if first.overall_score() == second.overall_score() {
                prop_assert!(position(&positions, first) < position(&positions, second));
            }
        }
    }

    /// Property: ranking recomputes the same output on every call.
    #[test]
    fn ranking_is_deterministic(
        (questionnaire, user, candidates) in scenario_strategy(6),
    ) {
        let engine = MatchingEngine::new(&questionnaire, MatchingConfig::default());
        let first = engine.rank(&user, &candidates);
        prop_assert_eq!(&first, &engine.rank(&user, &candidates));
        for result in &first {
            let source = candidates
                .iter()
                .find(|candidate| candidate.id == result.candidate_id());
            prop_assert!(source.is_some());
            if let Some(found) = source {
                prop_assert_eq!(result, &engine.score(&user, found));
            }
        }
    }
}

fn position(positions: &HashMap<&str, usize>, result: &MatchingResult) -> usize {
    positions
        .get(result.candidate_id())
        .copied()
        .unwrap_or(usize::MAX)
}
