//! Weighted-factor scoring of a validated diagnosis input.
//!
//! Every function here is pure: no I/O, no clock, no shared mutable state. Callers are
//! expected to pass inputs built through the validation guard.

mod rounding;
mod rules;

pub use rounding::{round_half_up, round_to_tenth};
pub use rules::{
    calculate_approval_probability, calculate_guarantee_fee_rate, calculate_guarantee_limit,
    recommendation_type, risk_level, score_breakdown, ScoreBreakdown, ScoreComponent,
    ScoreFactor, BASE_FEE_RATE, BUSINESS_PERIOD_WEIGHT, COLLATERAL_WEIGHT, CREDIT_WEIGHT,
    DEBT_WEIGHT, LARGE_REQUEST_SURCHARGE, LARGE_REQUEST_THRESHOLD, MAX_GUARANTEE_LIMIT,
    REVENUE_NORMALIZER, REVENUE_WEIGHT,
};

use std::sync::Arc;

use super::catalog::IndustryCatalog;
use super::domain::{DiagnosisInput, DiagnosisResult};

/// Assemble the full result for `input`: probability first, since the limit depends on it.
pub fn generate_diagnosis_result(
    input: &DiagnosisInput,
    industries: &IndustryCatalog,
) -> DiagnosisResult {
    let approval_probability = calculate_approval_probability(input);
    let guarantee_limit = calculate_guarantee_limit(input, approval_probability);
    let guarantee_fee_rate = calculate_guarantee_fee_rate(input, industries);

    DiagnosisResult {
        approval_probability,
        guarantee_limit,
        guarantee_fee_rate,
        risk_level: risk_level(approval_probability),
        recommendation_type: recommendation_type(approval_probability),
        input: input.clone(),
    }
}

/// Stateless scorer bound to the industry table used for fee lookups.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    industries: Arc<IndustryCatalog>,
}

impl ScoringEngine {
    pub fn new(industries: Arc<IndustryCatalog>) -> Self {
        Self { industries }
    }

    pub fn score(&self, input: &DiagnosisInput) -> DiagnosisResult {
        generate_diagnosis_result(input, &self.industries)
    }

    /// Result together with the component audit trail it was derived from.
    pub fn score_with_breakdown(&self, input: &DiagnosisInput) -> (DiagnosisResult, ScoreBreakdown) {
        (self.score(input), score_breakdown(input))
    }

    pub fn industries(&self) -> &IndustryCatalog {
        &self.industries
    }
}
