use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use serde_json::Value;

use crate::diagnosis::catalog::{IndustryCatalog, ReferenceData};
use crate::diagnosis::domain::{DiagnosisDraft, DiagnosisInput, IndustryId};
use crate::diagnosis::engine::ScoringEngine;
use crate::diagnosis::{diagnosis_router, DiagnosisService};

#[allow(clippy::too_many_arguments)]
pub(super) fn draft(
    industry: i64,
    revenue: i64,
    business_period: f64,
    credit_rating: i64,
    existing_debt: i64,
    has_collateral: bool,
    requested_amount: i64,
) -> DiagnosisDraft {
    DiagnosisDraft {
        industry: Some(industry),
        revenue: Some(revenue),
        business_period: Some(business_period),
        credit_rating: Some(credit_rating),
        existing_debt: Some(existing_debt),
        has_collateral: Some(has_collateral),
        requested_amount: Some(requested_amount),
    }
}

/// Food service, 10M monthly revenue, one year, grade 5, no debt, collateral, 30M asked.
pub(super) fn food_service_draft() -> DiagnosisDraft {
    draft(1, 10_000_000, 1.0, 5, 0, true, 30_000_000)
}

pub(super) fn food_service_input() -> DiagnosisInput {
    food_service_draft().validate().expect("valid draft")
}

/// Retail with moderate debt and a large request; lands in grade B.
pub(super) fn retail_input() -> DiagnosisInput {
    draft(2, 20_000_000, 3.0, 3, 5_000_000, false, 150_000_000)
        .validate()
        .expect("valid draft")
}

pub(super) fn input_for_industry(industry: u8, credit_rating: u8) -> DiagnosisInput {
    DiagnosisInput {
        industry: IndustryId(industry),
        revenue: 10_000_000,
        business_period: 1.0,
        credit_rating,
        existing_debt: 0,
        has_collateral: true,
        requested_amount: 30_000_000,
    }
}

pub(super) fn industries() -> IndustryCatalog {
    IndustryCatalog::standard()
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(Arc::new(industries()))
}

pub(super) fn service() -> DiagnosisService {
    DiagnosisService::new(Arc::new(ReferenceData::standard()))
}

pub(super) fn router() -> Router {
    diagnosis_router(Arc::new(service()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
