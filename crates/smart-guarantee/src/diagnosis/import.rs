use std::io::Read;
use std::path::Path;

use serde::Serialize;

use super::domain::{DiagnosisDraft, DiagnosisInput, DiagnosisResult};
use super::engine::ScoringEngine;
use super::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum DiagnosisImportError {
    #[error("failed to read diagnosis batch: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid diagnosis CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Outcome for a single submission in a batch.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatchOutcome {
    Scored { result: DiagnosisResult },
    Rejected { errors: ValidationErrors },
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    /// 1-based position among data rows (the header is not counted).
    pub line: usize,
    #[serde(flatten)]
    pub outcome: BatchOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchDiagnosis {
    pub rows: Vec<BatchRow>,
}

impl BatchDiagnosis {
    pub fn score(drafts: impl IntoIterator<Item = DiagnosisDraft>, engine: &ScoringEngine) -> Self {
        Self::from_validated(drafts.into_iter().map(DiagnosisDraft::validate), engine)
    }

    /// Score already-validated submissions, keeping rejected ones in place.
    pub fn from_validated(
        submissions: impl IntoIterator<Item = Result<DiagnosisInput, ValidationErrors>>,
        engine: &ScoringEngine,
    ) -> Self {
        let rows = submissions
            .into_iter()
            .enumerate()
            .map(|(index, submission)| BatchRow {
                line: index + 1,
                outcome: match submission {
                    Ok(input) => BatchOutcome::Scored {
                        result: engine.score(&input),
                    },
                    Err(errors) => BatchOutcome::Rejected { errors },
                },
            })
            .collect();

        Self { rows }
    }

    pub fn scored(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row.outcome, BatchOutcome::Scored { .. }))
            .count()
    }

    pub fn rejected(&self) -> usize {
        self.rows.len() - self.scored()
    }
}

/// Reads questionnaire rows from CSV. Headers name draft fields (snake_case or the
/// camelCase form names); empty cells count as unanswered.
pub struct DiagnosisCsvImporter;

impl DiagnosisCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        engine: &ScoringEngine,
    ) -> Result<BatchDiagnosis, DiagnosisImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, engine)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        engine: &ScoringEngine,
    ) -> Result<BatchDiagnosis, DiagnosisImportError> {
        let drafts = parse_drafts(reader)?;
        Ok(BatchDiagnosis::score(drafts, engine))
    }
}

pub(crate) fn parse_drafts<R: Read>(reader: R) -> Result<Vec<DiagnosisDraft>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<DiagnosisDraft>().collect()
}
