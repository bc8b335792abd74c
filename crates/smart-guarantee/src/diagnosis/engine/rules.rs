use serde::{Deserialize, Serialize};

use super::rounding::{round_half_up, round_to_tenth};
use crate::diagnosis::catalog::IndustryCatalog;
use crate::diagnosis::domain::{DiagnosisInput, RecommendationType, RiskLevel};

pub const CREDIT_WEIGHT: f64 = 0.3;
pub const REVENUE_WEIGHT: f64 = 0.25;
pub const BUSINESS_PERIOD_WEIGHT: f64 = 0.2;
pub const DEBT_WEIGHT: f64 = 0.15;
pub const COLLATERAL_WEIGHT: f64 = 0.1;

/// Monthly revenue (won) at which the revenue score saturates.
pub const REVENUE_NORMALIZER: f64 = 50_000.0;

pub const LIMIT_ROUNDING_UNIT: f64 = 1_000_000.0;
pub const MAX_GUARANTEE_LIMIT: u64 = 500_000_000;

pub const BASE_FEE_RATE: f64 = 1.5;
pub const LARGE_REQUEST_THRESHOLD: u64 = 100_000_000;
pub const LARGE_REQUEST_SURCHARGE: f64 = 0.2;

/// Factors feeding the approval probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    CreditRating,
    Revenue,
    BusinessPeriod,
    ExistingDebt,
    Collateral,
}

impl ScoreFactor {
    pub const fn label(self) -> &'static str {
        match self {
            ScoreFactor::CreditRating => "신용등급",
            ScoreFactor::Revenue => "매출액",
            ScoreFactor::BusinessPeriod => "사업기간",
            ScoreFactor::ExistingDebt => "기존부채",
            ScoreFactor::Collateral => "담보",
        }
    }
}

/// One weighted contribution to the approval probability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub weight: f64,
    pub score: f64,
    pub weighted: f64,
}

/// Component scores behind an approval probability, before rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub components: Vec<ScoreComponent>,
    pub total: f64,
}

impl ScoreBreakdown {
    pub fn component(&self, factor: ScoreFactor) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }
}

/// Compute the five component scores and their weighted sum.
///
/// Components are accumulated in a fixed order so the floating-point total is
/// reproducible. The debt score is floored at 0 but has no ceiling.
pub fn score_breakdown(input: &DiagnosisInput) -> ScoreBreakdown {
    let revenue = input.revenue as f64;

    let credit_score = f64::from(11 - input.credit_rating) * 10.0;
    let revenue_score = (revenue / REVENUE_NORMALIZER * 100.0).min(100.0);
    let period_score = (input.business_period * 20.0).min(100.0);
    let debt_score = (100.0 - (input.existing_debt as f64 / revenue * 100.0)).max(0.0);
    let collateral_score = if input.has_collateral { 100.0 } else { 50.0 };

    let weighted = [
        (ScoreFactor::CreditRating, CREDIT_WEIGHT, credit_score),
        (ScoreFactor::Revenue, REVENUE_WEIGHT, revenue_score),
        (ScoreFactor::BusinessPeriod, BUSINESS_PERIOD_WEIGHT, period_score),
        (ScoreFactor::ExistingDebt, DEBT_WEIGHT, debt_score),
        (ScoreFactor::Collateral, COLLATERAL_WEIGHT, collateral_score),
    ];

    let mut total = 0.0;
    let mut components = Vec::with_capacity(weighted.len());
    for (factor, weight, score) in weighted {
        let contribution = score * weight;
        total += contribution;
        components.push(ScoreComponent {
            factor,
            weight,
            score,
            weighted: contribution,
        });
    }

    ScoreBreakdown { components, total }
}

/// Weighted approval score rounded to a whole percentage.
pub fn calculate_approval_probability(input: &DiagnosisInput) -> u8 {
    probability_from_total(score_breakdown(input).total)
}

pub(crate) fn probability_from_total(total: f64) -> u8 {
    // Weights sum to 1 and every component is floored at 0, so the rounded total
    // already sits in 0..=100; the cast only narrows the type.
    round_half_up(total) as u8
}

/// Half of annualised revenue, scaled by credit and probability, rounded to the nearest
/// million won and capped at 500 million.
pub fn calculate_guarantee_limit(input: &DiagnosisInput, approval_probability: u8) -> u64 {
    let base_limit = input.revenue as f64 * 12.0 * 0.5;
    let credit_multiplier = f64::from(11 - input.credit_rating) * 0.1;
    let probability_multiplier = f64::from(approval_probability) / 100.0;

    let estimated_limit = base_limit * credit_multiplier * probability_multiplier;
    let rounded = round_half_up(estimated_limit / LIMIT_ROUNDING_UNIT) * LIMIT_ROUNDING_UNIT;

    (rounded as u64).min(MAX_GUARANTEE_LIMIT)
}

/// Annual guarantee fee in percent, rounded to one decimal place.
///
/// No floor or ceiling is applied to the result.
pub fn calculate_guarantee_fee_rate(input: &DiagnosisInput, industries: &IndustryCatalog) -> f64 {
    let credit_adjustment = f64::from(input.credit_rating - 1) * 0.1;
    let industry_adjustment = industries.risk_adjustment(input.industry);
    let amount_adjustment = if input.requested_amount > LARGE_REQUEST_THRESHOLD {
        LARGE_REQUEST_SURCHARGE
    } else {
        0.0
    };

    round_to_tenth(BASE_FEE_RATE + credit_adjustment + industry_adjustment + amount_adjustment)
}

pub fn risk_level(approval_probability: u8) -> RiskLevel {
    RiskLevel::from_probability(approval_probability)
}

pub fn recommendation_type(approval_probability: u8) -> RecommendationType {
    RecommendationType::from_probability(approval_probability)
}
