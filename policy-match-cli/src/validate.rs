//! Validate command implementation for the policy-match CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{load_questionnaire, require_existing};
use crate::{ARG_QUESTIONNAIRE, CliError, ENV_VALIDATE_QUESTIONNAIRE};

/// CLI arguments for the `validate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "Check a questionnaire definition for errors")]
#[ortho_config(prefix = "POLICY_MATCH")]
pub(crate) struct ValidateArgs {
    /// Path to the questionnaire definition.
    #[arg(long = ARG_QUESTIONNAIRE, value_name = "path")]
    #[serde(default)]
    pub(crate) questionnaire: Option<Utf8PathBuf>,
}

impl ValidateArgs {
    fn into_questionnaire_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        resolve_questionnaire_path(merged)
    }
}

pub(crate) fn resolve_questionnaire_path(args: ValidateArgs) -> Result<Utf8PathBuf, CliError> {
    args.questionnaire.ok_or(CliError::MissingArgument {
        field: ARG_QUESTIONNAIRE,
        env: ENV_VALIDATE_QUESTIONNAIRE,
    })
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_validate_with(args, &mut stdout)
}

pub(crate) fn run_validate_with(
    args: ValidateArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let path = args.into_questionnaire_path()?;
    require_existing(&path, ARG_QUESTIONNAIRE)?;
    let questionnaire = load_questionnaire(&path)?;
    writeln!(writer, "{path}: {} questions", questionnaire.len()).map_err(CliError::WriteOutput)
}
