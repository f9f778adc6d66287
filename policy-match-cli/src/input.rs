//! Loading JSON inputs and writing JSON output.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use policy_match_core::{QuestionDefinition, Questionnaire};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::fs::{file_is_file, open_utf8_file};
use crate::{ARG_QUESTIONNAIRE, CliError};

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Decode a JSON document from `path`.
pub(crate) fn load_json<T: DeserializeOwned>(
    path: &Utf8Path,
    field: &'static str,
) -> Result<T, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a questionnaire stored as a JSON array of definitions.
pub(crate) fn load_questionnaire(path: &Utf8Path) -> Result<Questionnaire, CliError> {
    let definitions: Vec<QuestionDefinition> = load_json(path, ARG_QUESTIONNAIRE)?;
    Questionnaire::from_definitions(definitions).map_err(|source| {
        CliError::InvalidQuestionnaire {
            path: Utf8PathBuf::from(path),
            source,
        }
    })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}
