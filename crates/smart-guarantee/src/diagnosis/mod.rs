//! Loan-guarantee diagnosis: questionnaire validation, weighted scoring, reference data
//! and the report/HTTP surfaces built on top of them.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod import;
pub mod report;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use catalog::{
    IndustryCatalog, IndustryProfile, Recommendation, RecommendationCatalog, ReferenceData,
    StatisticsSnapshot,
};
pub use domain::{
    DiagnosisDraft, DiagnosisInput, DiagnosisResult, IndustryId, RecommendationType, RiskLevel,
    Tone,
};
pub use engine::{generate_diagnosis_result, ScoreBreakdown, ScoringEngine};
pub use import::{BatchDiagnosis, BatchOutcome, BatchRow, DiagnosisCsvImporter, DiagnosisImportError};
pub use report::{DiagnosisReport, IndustryComparison};
pub use router::diagnosis_router;
pub use service::DiagnosisService;
pub use validation::{DiagnosisField, FieldViolation, ValidationErrors};
