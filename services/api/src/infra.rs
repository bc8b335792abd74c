use metrics_exporter_prometheus::PrometheusHandle;
use smart_guarantee::diagnosis::{DiagnosisService, ReferenceData};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service wired to the bundled reference data.
pub(crate) fn diagnosis_service(analysis_delay: Duration) -> DiagnosisService {
    DiagnosisService::new(Arc::new(ReferenceData::standard())).with_analysis_delay(analysis_delay)
}
