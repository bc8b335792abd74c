//! Presentation of a scored diagnosis: reference data lookups, comparisons and display
//! strings. Nothing here feeds back into the score.

mod format;

pub use format::{business_period_label, credit_rating_label, format_currency, format_percentage};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::catalog::{IndustryProfile, Recommendation, ReferenceData};
use super::domain::{DiagnosisResult, Tone};
use super::engine::ScoreBreakdown;

/// Approval rate assumed when the applicant's industry has no catalog entry.
pub const FALLBACK_INDUSTRY_AVERAGE: u8 = 70;

/// Applicant probability against the industry baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndustryComparison {
    pub industry_average: u8,
    pub applicant: u8,
    pub delta_points: u8,
    pub above_average: bool,
}

impl IndustryComparison {
    pub fn new(applicant: u8, industry_average: Option<u8>) -> Self {
        let industry_average = industry_average.unwrap_or(FALLBACK_INDUSTRY_AVERAGE);
        Self {
            industry_average,
            applicant,
            delta_points: applicant.abs_diff(industry_average),
            above_average: applicant > industry_average,
        }
    }

    pub fn summary(&self) -> String {
        if self.above_average {
            format!("업종 평균보다 {}%p 높습니다!", self.delta_points)
        } else if self.delta_points == 0 {
            "업종 평균과 같습니다.".to_string()
        } else {
            format!("업종 평균보다 {}%p 낮습니다.", self.delta_points)
        }
    }
}

/// Preformatted strings for a result screen or terminal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayFigures {
    pub approval_probability: String,
    pub guarantee_limit: String,
    pub guarantee_fee_rate: String,
    pub risk_grade: String,
    pub tone: Tone,
    pub industry: String,
    pub revenue: String,
    pub business_period: String,
    pub credit_rating: String,
    pub existing_debt: String,
    pub collateral: &'static str,
    pub requested_amount: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisReport {
    pub generated_at: DateTime<Utc>,
    pub result: DiagnosisResult,
    pub breakdown: ScoreBreakdown,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<IndustryProfile>,
    pub comparison: IndustryComparison,
    pub comparison_summary: String,
    pub recommendation: Recommendation,
    pub display: DisplayFigures,
}

impl DiagnosisReport {
    pub fn build(
        result: DiagnosisResult,
        breakdown: ScoreBreakdown,
        reference: &ReferenceData,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let industry = reference.industries.get(result.input.industry()).cloned();
        let comparison = IndustryComparison::new(
            result.approval_probability,
            industry.as_ref().map(|profile| profile.avg_approval_rate),
        );
        let recommendation = reference
            .recommendations
            .for_type(result.recommendation_type)
            .clone();
        let display = display_figures(&result, industry.as_ref());

        Self {
            generated_at,
            comparison_summary: comparison.summary(),
            result,
            breakdown,
            industry,
            comparison,
            recommendation,
            display,
        }
    }
}

fn display_figures(result: &DiagnosisResult, industry: Option<&IndustryProfile>) -> DisplayFigures {
    let input = &result.input;
    DisplayFigures {
        approval_probability: format!("{}%", result.approval_probability),
        guarantee_limit: format_currency(result.guarantee_limit),
        guarantee_fee_rate: format_percentage(result.guarantee_fee_rate),
        risk_grade: format!("{} 등급", result.risk_level.label()),
        tone: result.risk_level.tone(),
        industry: industry
            .map(|profile| profile.name.to_string())
            .unwrap_or_else(|| format!("미등록 업종 ({})", input.industry().0)),
        revenue: format_currency(input.revenue()),
        business_period: business_period_label(input.business_period()).to_string(),
        credit_rating: credit_rating_label(input.credit_rating()),
        existing_debt: format_currency(input.existing_debt()),
        collateral: if input.has_collateral() { "있음" } else { "없음" },
        requested_amount: format_currency(input.requested_amount()),
    }
}
