use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::catalog::ReferenceData;
use super::domain::{DiagnosisDraft, DiagnosisInput};
use super::engine::ScoringEngine;
use super::import::{parse_drafts, BatchDiagnosis, DiagnosisImportError};
use super::report::DiagnosisReport;
use super::validation::ValidationErrors;

/// Facade composing the validation guard, scoring engine and reference data.
pub struct DiagnosisService {
    engine: ScoringEngine,
    reference: Arc<ReferenceData>,
    analysis_delay: Duration,
}

impl DiagnosisService {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        let engine = ScoringEngine::new(reference.industries.clone());
        Self {
            engine,
            reference,
            analysis_delay: Duration::ZERO,
        }
    }

    /// Pause HTTP callers observe before a diagnosis is returned.
    pub fn with_analysis_delay(mut self, delay: Duration) -> Self {
        self.analysis_delay = delay;
        self
    }

    pub fn analysis_delay(&self) -> Duration {
        self.analysis_delay
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Validate a draft and build the full report, or return every invalid field.
    pub fn diagnose(&self, draft: DiagnosisDraft) -> Result<DiagnosisReport, ValidationErrors> {
        self.finish(draft.validate())
    }

    /// Same as [`Self::diagnose`] for a raw JSON body; mistyped answers are reported per field.
    pub fn diagnose_json(&self, payload: &Value) -> Result<DiagnosisReport, ValidationErrors> {
        self.finish(DiagnosisDraft::validate_json(payload))
    }

    fn finish(
        &self,
        validated: Result<DiagnosisInput, ValidationErrors>,
    ) -> Result<DiagnosisReport, ValidationErrors> {
        let input = validated.map_err(|errors| {
            warn!(invalid_fields = errors.len(), %errors, "diagnosis input rejected");
            errors
        })?;

        let report = self.report_for(&input);
        info!(
            industry = input.industry().0,
            approval_probability = report.result.approval_probability,
            risk_level = report.result.risk_level.label(),
            "diagnosis scored"
        );
        Ok(report)
    }

    pub fn report_for(&self, input: &DiagnosisInput) -> DiagnosisReport {
        let (result, breakdown) = self.engine.score_with_breakdown(input);
        debug!(total = breakdown.total, "score breakdown computed");
        DiagnosisReport::build(result, breakdown, &self.reference, Utc::now())
    }

    pub fn diagnose_batch(&self, drafts: Vec<DiagnosisDraft>) -> BatchDiagnosis {
        self.log_batch(BatchDiagnosis::score(drafts, &self.engine))
    }

    pub fn diagnose_batch_json(&self, payloads: &[Value]) -> BatchDiagnosis {
        let validated = payloads.iter().map(DiagnosisDraft::validate_json);
        self.log_batch(BatchDiagnosis::from_validated(validated, &self.engine))
    }

    fn log_batch(&self, batch: BatchDiagnosis) -> BatchDiagnosis {
        info!(
            scored = batch.scored(),
            rejected = batch.rejected(),
            "diagnosis batch processed"
        );
        batch
    }

    pub fn import_csv<R: Read>(&self, reader: R) -> Result<BatchDiagnosis, DiagnosisImportError> {
        let drafts = parse_drafts(reader)?;
        Ok(self.diagnose_batch(drafts))
    }
}
