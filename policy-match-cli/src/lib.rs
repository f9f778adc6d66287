//! Command-line interface for ranking policy candidates against a respondent.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod fs;
mod input;
mod rank;
mod validate;

pub use error::CliError;

use rank::{RankArgs, run_rank};
use validate::{ValidateArgs, run_validate};

pub(crate) const ARG_RANK_ANSWERS: &str = "answers";
pub(crate) const ARG_QUESTIONNAIRE: &str = "questionnaire";
pub(crate) const ARG_CANDIDATES: &str = "candidates";
pub(crate) const ARG_THRESHOLD: &str = "threshold";
pub(crate) const ARG_MAX_REASONS: &str = "max-reasons";
pub(crate) const ENV_RANK_ANSWERS: &str = "POLICY_MATCH_CMDS_RANK_ANSWERS_PATH";
pub(crate) const ENV_RANK_QUESTIONNAIRE: &str = "POLICY_MATCH_CMDS_RANK_QUESTIONNAIRE";
pub(crate) const ENV_RANK_CANDIDATES: &str = "POLICY_MATCH_CMDS_RANK_CANDIDATES";
pub(crate) const ENV_VALIDATE_QUESTIONNAIRE: &str = "POLICY_MATCH_CMDS_VALIDATE_QUESTIONNAIRE";

/// Run the policy-match CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when writing the output fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
        Command::Validate(args) => run_validate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "policy-match",
    about = "Match a respondent's policy answers against candidates",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank candidates by compatibility with a respondent.
    Rank(RankArgs),
    /// Validate a questionnaire definition.
    Validate(ValidateArgs),
}

#[cfg(test)]
mod tests;
