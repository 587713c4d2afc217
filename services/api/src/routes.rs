use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use siteguard_ai::error::AppError;
use siteguard_ai::workflows::assessment::{
    checklist_csv, risk_csv, AssessmentOptions, AssessmentSummary, ChecklistRow, FallbackRows,
    ReportMode, RiskRow, Section, SiteAssessment,
};

#[derive(Debug, Deserialize)]
pub(crate) struct AssessmentRequest {
    pub(crate) report_text: String,
    #[serde(default)]
    pub(crate) mode: ReportMode,
    #[serde(default = "default_apply_baseline")]
    pub(crate) apply_baseline: bool,
    #[serde(default)]
    pub(crate) include_sections: bool,
    #[serde(default)]
    pub(crate) include_exports: bool,
}

fn default_apply_baseline() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub(crate) struct AssessmentResponse {
    pub(crate) mode: ReportMode,
    pub(crate) generated_at: String,
    pub(crate) data_source: AssessmentDataSource,
    pub(crate) summary: AssessmentSummary,
    pub(crate) risk_rows: Vec<RiskRow>,
    pub(crate) checklist_rows: Vec<ChecklistRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) sections: Option<Vec<Section>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) exports: Option<AssessmentExports>,
}

/// CSV documents for the download-button collaborator.
#[derive(Debug, Serialize)]
pub(crate) struct AssessmentExports {
    pub(crate) risk_csv: String,
    pub(crate) checklist_csv: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum AssessmentDataSource {
    Extracted,
    Fallback,
}

pub(crate) fn assessment_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment/report", post(assessment_report_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn assessment_report_endpoint(
    Json(payload): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let AssessmentRequest {
        report_text,
        mode,
        apply_baseline,
        include_sections,
        include_exports,
    } = payload;

    let options = AssessmentOptions {
        mode,
        fallback: FallbackRows::standard(),
        baseline_coverage: apply_baseline,
    };
    let assessment = SiteAssessment::from_report(&report_text, &options);
    let summary = assessment.summary();

    let data_source = if assessment.fallback_used {
        AssessmentDataSource::Fallback
    } else {
        AssessmentDataSource::Extracted
    };

    let exports = if include_exports {
        Some(AssessmentExports {
            risk_csv: risk_csv(&assessment.risk_rows)?,
            checklist_csv: checklist_csv(&assessment.checklist_rows)?,
        })
    } else {
        None
    };

    let sections = include_sections.then_some(assessment.sections);

    Ok(Json(AssessmentResponse {
        mode,
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        data_source,
        summary,
        risk_rows: assessment.risk_rows,
        checklist_rows: assessment.checklist_rows,
        sections,
        exports,
    }))
}
