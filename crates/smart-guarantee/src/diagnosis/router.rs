use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use super::catalog::{IndustryApprovalStat, StatisticsSnapshot};
use super::domain::{IndustryId, RecommendationType};
use super::service::DiagnosisService;

const RANKED_INDUSTRIES: usize = 5;

/// Router builder exposing the diagnosis and reference-data endpoints.
pub fn diagnosis_router(service: Arc<DiagnosisService>) -> Router {
    Router::new()
        .route("/api/v1/diagnosis", post(diagnose_handler))
        .route("/api/v1/diagnosis/batch", post(batch_handler))
        .route("/api/v1/industries", get(industries_handler))
        .route("/api/v1/industries/:industry_id", get(industry_handler))
        .route(
            "/api/v1/recommendations/:recommendation_type",
            get(recommendation_handler),
        )
        .route("/api/v1/statistics", get(statistics_handler))
        .with_state(service)
}

pub(crate) async fn diagnose_handler(
    State(service): State<Arc<DiagnosisService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(rejection),
    };

    let delay = service.analysis_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    match service.diagnose_json(&payload) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(errors) => {
            let payload = json!({
                "error": errors.to_string(),
                "fields": errors.to_messages(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn batch_handler(
    State(service): State<Arc<DiagnosisService>>,
    payloads: Result<Json<Vec<Value>>, JsonRejection>,
) -> Response {
    let Json(payloads) = match payloads {
        Ok(payloads) => payloads,
        Err(rejection) => return rejection_response(rejection),
    };

    let batch = service.diagnose_batch_json(&payloads);
    (StatusCode::OK, Json(batch)).into_response()
}

pub(crate) async fn industries_handler(State(service): State<Arc<DiagnosisService>>) -> Response {
    let industries: Vec<_> = service.reference().industries.iter().collect();
    Json(industries).into_response()
}

pub(crate) async fn industry_handler(
    State(service): State<Arc<DiagnosisService>>,
    Path(industry_id): Path<u8>,
) -> Response {
    match service.reference().industries.get(IndustryId(industry_id)) {
        Some(profile) => Json(profile).into_response(),
        None => not_found(format!("unknown industry {industry_id}")),
    }
}

pub(crate) async fn recommendation_handler(
    State(service): State<Arc<DiagnosisService>>,
    Path(recommendation_type): Path<String>,
) -> Response {
    match RecommendationType::from_key(&recommendation_type) {
        Some(kind) => Json(service.reference().recommendations.for_type(kind)).into_response(),
        None => not_found(format!("unknown recommendation type '{recommendation_type}'")),
    }
}

#[derive(Serialize)]
struct StatisticsView<'a> {
    snapshot: &'a StatisticsSnapshot,
    top_industries: Vec<&'a IndustryApprovalStat>,
    bottom_industries: Vec<&'a IndustryApprovalStat>,
    total_industry_applications: u64,
}

pub(crate) async fn statistics_handler(State(service): State<Arc<DiagnosisService>>) -> Response {
    let snapshot = &service.reference().statistics;
    let view = StatisticsView {
        snapshot,
        top_industries: snapshot.top_industries(RANKED_INDUSTRIES),
        bottom_industries: snapshot.bottom_industries(RANKED_INDUSTRIES),
        total_industry_applications: snapshot.total_industry_applications(),
    };
    Json(view).into_response()
}

/// Body-level failures (malformed JSON, wrong content type, non-array batch) in the same
/// envelope as field errors.
fn rejection_response(rejection: JsonRejection) -> Response {
    let payload = json!({
        "error": rejection.body_text(),
        "fields": {},
    });
    (rejection.status(), Json(payload)).into_response()
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": message }))).into_response()
}
