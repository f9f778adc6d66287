//! Test helpers for writing CLI input files into a temporary workspace.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test input");
}

fn write_json(path: &Utf8Path, value: &Value) {
    let payload = serde_json::to_vec_pretty(value).expect("serialise test input");
    write_utf8(path, &payload);
}

/// A temporary directory holding a questionnaire, answers and candidates.
pub(super) struct Inputs {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Inputs {
    /// Two questions (weighted economy, welfare), a respondent agreeing on
    /// economy and disagreeing on welfare, and candidates `b` then `a`.
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        let inputs = Self { _dir: dir, root };
        write_json(
            &inputs.questionnaire(),
            &json!([
                { "id": "q1", "category": "economy", "weight": 2.0 },
                { "id": "q2", "category": "welfare", "text": "Expand pensions?" },
            ]),
        );
        write_json(
            &inputs.answers(),
            &json!([
                { "questionId": "q1", "value": 5 },
                { "questionId": "q2", "value": 1 },
            ]),
        );
        write_json(
            &inputs.candidates(),
            &json!([
                {
                    "id": "b",
                    "name": "Candidate B",
                    "answers": [
                        { "questionId": "q1", "value": 1 },
                        { "questionId": "q2", "value": 1 },
                    ],
                },
                {
                    "id": "a",
                    "name": "Candidate A",
                    "answers": [
                        { "questionId": "q1", "value": 5 },
                        { "questionId": "q2", "value": 1 },
                    ],
                },
                { "id": "c", "name": "Candidate C" },
            ]),
        );
        inputs
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn questionnaire(&self) -> Utf8PathBuf {
        self.root.join("questionnaire.json")
    }

    pub(super) fn answers(&self) -> Utf8PathBuf {
        self.root.join("answers.json")
    }

    pub(super) fn candidates(&self) -> Utf8PathBuf {
        self.root.join("candidates.json")
    }

    /// Overwrite the questionnaire with `value`.
    pub(super) fn replace_questionnaire(&self, value: &Value) {
        write_json(&self.questionnaire(), value);
    }
}
