use super::common::*;
use serde_json::json;
use std::time::Duration;

use crate::diagnosis::domain::{RecommendationType, Tone};
use crate::diagnosis::import::BatchOutcome;
use crate::diagnosis::validation::{DiagnosisField, FieldViolation};

#[test]
fn diagnose_builds_report_with_reference_data() {
    let report = service().diagnose(food_service_draft()).expect("valid");

    assert_eq!(report.result.approval_probability, 72);
    assert_close(report.breakdown.total, 72.0);
    assert_eq!(
        report.industry.as_ref().map(|profile| profile.name),
        Some("음식업")
    );
    assert_eq!(report.comparison.industry_average, 72);
    assert_eq!(report.comparison_summary, "업종 평균과 같습니다.");
    assert_eq!(
        report.recommendation.recommendation_type,
        RecommendationType::MediumApproval
    );
    assert_eq!(report.display.tone, Tone::Fair);
    assert_eq!(report.display.approval_probability, "72%");
    assert_eq!(report.display.guarantee_fee_rate, "2.0%");
    assert_eq!(report.display.credit_rating, "5등급 (보통)");
    assert_eq!(report.display.collateral, "있음");
}

#[test]
fn diagnose_surfaces_validation_errors() {
    let mut draft = food_service_draft();
    draft.industry = Some(42);

    let errors = service().diagnose(draft).expect_err("unknown industry");
    assert_eq!(errors.len(), 1);
    assert!(errors.get(DiagnosisField::Industry).is_some());
}

#[test]
fn report_compares_against_industry_average() {
    let report = service().report_for(&retail_input());
    assert_eq!(report.comparison.industry_average, 70);
    assert!(report.comparison.above_average);
    assert_eq!(report.comparison_summary, "업종 평균보다 7%p 높습니다!");
}

#[test]
fn analysis_delay_is_configurable() {
    let service = service();
    assert!(service.analysis_delay().is_zero());

    let delayed = service.with_analysis_delay(Duration::from_millis(1500));
    assert_eq!(delayed.analysis_delay(), Duration::from_millis(1500));
}

#[test]
fn batch_keeps_row_order_and_line_numbers() {
    let mut invalid = food_service_draft();
    invalid.requested_amount = Some(10);

    let batch = service().diagnose_batch(vec![
        food_service_draft(),
        invalid,
        retail_input().to_draft(),
    ]);

    assert_eq!(batch.rows.len(), 3);
    assert_eq!(batch.scored(), 2);
    assert_eq!(batch.rejected(), 1);

    let lines: Vec<_> = batch.rows.iter().map(|row| row.line).collect();
    assert_eq!(lines, vec![1, 2, 3]);

    match &batch.rows[1].outcome {
        BatchOutcome::Rejected { errors } => {
            assert!(errors.get(DiagnosisField::RequestedAmount).is_some())
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    match &batch.rows[2].outcome {
        BatchOutcome::Scored { result } => assert_eq!(result.approval_probability, 77),
        other => panic!("expected score, got {other:?}"),
    }
}

#[test]
fn json_intake_reports_mistyped_answers_per_field() {
    let service = service();
    let errors = service
        .diagnose_json(&json!({ "industry": 1, "revenue": "10000000", "creditRating": 42 }))
        .expect_err("mistyped body");
    assert!(errors.get(DiagnosisField::Industry).is_none());
    assert!(matches!(
        errors.get(DiagnosisField::Revenue),
        Some(FieldViolation::OutOfRange { .. })
    ));
    assert!(matches!(
        errors.get(DiagnosisField::CreditRating),
        Some(FieldViolation::OutOfRange { .. })
    ));
    assert_eq!(
        errors.get(DiagnosisField::BusinessPeriod),
        Some(&FieldViolation::MissingRequiredField)
    );

    let body = serde_json::to_value(food_service_draft()).expect("serialize draft");
    let batch = service.diagnose_batch_json(&[json!("not an object"), body]);
    assert_eq!(batch.rejected(), 1);
    assert_eq!(batch.scored(), 1);
    assert_eq!(batch.rows[1].line, 2);
}

#[test]
fn csv_import_accepts_form_headers_and_blank_cells() {
    let csv = "\
industry,revenue,businessPeriod,creditRating,existingDebt,hasCollateral,requestedAmount
1,10000000,1,5,0,true,30000000
2, ,3,3,5000000,false,150000000
";

    let batch = service().import_csv(csv.as_bytes()).expect("parse csv");
    assert_eq!(batch.scored(), 1);
    assert_eq!(batch.rejected(), 1);

    match &batch.rows[1].outcome {
        BatchOutcome::Rejected { errors } => {
            assert_eq!(errors.len(), 1);
            assert!(errors.get(DiagnosisField::Revenue).is_some());
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn csv_import_reports_malformed_cells() {
    let csv = "industry,revenue\nfood,10000000\n";
    assert!(service().import_csv(csv.as_bytes()).is_err());
}

#[test]
fn engine_uses_shared_industry_catalog() {
    let service = service();
    assert_eq!(service.engine().industries().len(), 15);
    assert_eq!(service.reference().industries.len(), 15);
    assert_eq!(engine().score(&food_service_input()).guarantee_fee_rate, 2.0);
}
