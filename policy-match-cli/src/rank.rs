//! Rank command implementation for the policy-match CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use policy_match_core::{AnswerSet, Candidate, MatchingResult, Percent};
use policy_match_scorer::{MatchingConfig, MatchingEngine};
use serde::{Deserialize, Serialize};

use crate::input::{load_json, load_questionnaire, require_existing, write_json};
use crate::{
    ARG_CANDIDATES, ARG_MAX_REASONS, ARG_QUESTIONNAIRE, ARG_RANK_ANSWERS, ARG_THRESHOLD, CliError,
    ENV_RANK_ANSWERS, ENV_RANK_CANDIDATES, ENV_RANK_QUESTIONNAIRE,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every candidate against the respondent's answers and \
                 print the results as JSON, best match first. Answers, \
                 candidates and the questionnaire are JSON files.",
    about = "Rank candidates for a respondent"
)]
#[ortho_config(prefix = "POLICY_MATCH")]
pub(crate) struct RankArgs {
    /// Path to a JSON array of the respondent's answers.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) answers_path: Option<Utf8PathBuf>,
    /// Path to the questionnaire definition.
    #[arg(long = ARG_QUESTIONNAIRE, value_name = "path")]
    #[serde(default)]
    pub(crate) questionnaire: Option<Utf8PathBuf>,
    /// Path to a JSON array of candidates with their answers.
    #[arg(long = ARG_CANDIDATES, value_name = "path")]
    #[serde(default)]
    pub(crate) candidates: Option<Utf8PathBuf>,
    /// Minimum category score (0-100) mentioned as a reason.
    #[arg(long = ARG_THRESHOLD, value_name = "percent")]
    #[serde(default)]
    pub(crate) threshold: Option<u8>,
    /// Maximum number of reasons per candidate.
    #[arg(long = ARG_MAX_REASONS, value_name = "count")]
    #[serde(default)]
    pub(crate) max_reasons: Option<usize>,
}

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankConfig {
    /// Path to the respondent's answers.
    pub(crate) answers_path: Utf8PathBuf,
    /// Path to the questionnaire definition.
    pub(crate) questionnaire: Utf8PathBuf,
    /// Path to the candidate list.
    pub(crate) candidates: Utf8PathBuf,
    /// Reason selection settings.
    pub(crate) matching: MatchingConfig,
}

impl RankConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.answers_path, ARG_RANK_ANSWERS)?;
        require_existing(&self.questionnaire, ARG_QUESTIONNAIRE)?;
        require_existing(&self.candidates, ARG_CANDIDATES)?;
        Ok(())
    }
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let answers_path = args.answers_path.ok_or(CliError::MissingPositional {
            field: ARG_RANK_ANSWERS,
            env: ENV_RANK_ANSWERS,
        })?;
        let questionnaire = args.questionnaire.ok_or(CliError::MissingArgument {
            field: ARG_QUESTIONNAIRE,
            env: ENV_RANK_QUESTIONNAIRE,
        })?;
        let candidates = args.candidates.ok_or(CliError::MissingArgument {
            field: ARG_CANDIDATES,
            env: ENV_RANK_CANDIDATES,
        })?;

        let defaults = MatchingConfig::default();
        let reason_threshold = match args.threshold {
            Some(value) => Percent::new(value).map_err(CliError::InvalidThreshold)?,
            None => defaults.reason_threshold,
        };
        let max_reasons = args.max_reasons.unwrap_or(defaults.max_reasons);

        Ok(Self {
            answers_path,
            questionnaire,
            candidates,
            matching: MatchingConfig {
                reason_threshold,
                max_reasons,
            },
        })
    }
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_rank_with(args, &mut stdout)
}

pub(crate) fn run_rank_with(args: RankArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let results = execute_rank(&config)?;
    write_json(writer, &results)
}

/// Load every input named by `config` and rank the candidates.
pub(crate) fn execute_rank(config: &RankConfig) -> Result<Vec<MatchingResult>, CliError> {
    let questionnaire = load_questionnaire(&config.questionnaire)?;
    let user: AnswerSet = load_json(&config.answers_path, ARG_RANK_ANSWERS)?;
    let candidates: Vec<Candidate> = load_json(&config.candidates, ARG_CANDIDATES)?;
    debug!(
        "loaded {} answers and {} candidates from {}",
        user.len(),
        candidates.len(),
        config.candidates
    );
    let engine = MatchingEngine::new(&questionnaire, config.matching);
    Ok(engine.rank(&user, &candidates))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RankConfig, CliError> {
    let merged = RankArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RankConfig::try_from(merged)
}
