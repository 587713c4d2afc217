use metrics_exporter_prometheus::PrometheusHandle;
use siteguard_ai::workflows::assessment::ReportMode;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_mode(raw: &str) -> Result<ReportMode, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "site-photo" | "photo" => Ok(ReportMode::SitePhoto),
        "work-description" | "text" => Ok(ReportMode::WorkDescription),
        other => Err(format!(
            "unknown report mode '{other}' (expected site-photo or work-description)"
        )),
    }
}
