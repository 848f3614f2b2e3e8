//! CSV answer sheets (`question_id,points`) for scoring outside an interactive session.

mod parser;

use crate::workflows::assessment::{AnswerMap, QuestionCatalog, QuestionId};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AnswerSheetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    UnknownQuestion { line: u64, question_id: String },
    InvalidPoints { line: u64, question_id: String, points: u8 },
}

impl std::fmt::Display for AnswerSheetImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerSheetImportError::Io(err) => write!(f, "failed to read answer sheet: {}", err),
            AnswerSheetImportError::Csv(err) => write!(f, "invalid answer sheet CSV: {}", err),
            AnswerSheetImportError::UnknownQuestion { line, question_id } => write!(
                f,
                "line {}: question '{}' is not part of the catalog",
                line, question_id
            ),
            AnswerSheetImportError::InvalidPoints {
                line,
                question_id,
                points,
            } => write!(
                f,
                "line {}: question '{}' has no option worth {} points",
                line, question_id, points
            ),
        }
    }
}

impl std::error::Error for AnswerSheetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnswerSheetImportError::Io(err) => Some(err),
            AnswerSheetImportError::Csv(err) => Some(err),
            AnswerSheetImportError::UnknownQuestion { .. }
            | AnswerSheetImportError::InvalidPoints { .. } => None,
        }
    }
}

impl From<std::io::Error> for AnswerSheetImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AnswerSheetImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct AnswerSheetImporter;

impl AnswerSheetImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        catalog: &QuestionCatalog,
    ) -> Result<AnswerMap, AnswerSheetImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, catalog)
    }

    /// Later rows for the same question overwrite earlier ones.
    pub fn from_reader<R: Read>(
        reader: R,
        catalog: &QuestionCatalog,
    ) -> Result<AnswerMap, AnswerSheetImportError> {
        let mut answers = AnswerMap::new();

        for row in parser::parse_rows(reader)? {
            let id = QuestionId(row.question_id);
            let question =
                catalog
                    .question(&id)
                    .ok_or_else(|| AnswerSheetImportError::UnknownQuestion {
                        line: row.line,
                        question_id: id.0.clone(),
                    })?;
            if question.option_for_points(row.points).is_none() {
                return Err(AnswerSheetImportError::InvalidPoints {
                    line: row.line,
                    question_id: id.0,
                    points: row.points,
                });
            }
            answers.record(id, row.points);
        }

        Ok(answers)
    }
}
