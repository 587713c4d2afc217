use super::common::*;
use crate::workflows::assessment::{
    ensure_baseline_coverage, ComplianceStatus, FallbackRows, ReportMode, RiskRow, SectionId,
    SiteAssessment,
};

#[test]
fn site_photo_report_yields_sections_rows_and_no_fallback() {
    let assessment = SiteAssessment::from_report(SITE_PHOTO_REPORT, &options(ReportMode::SitePhoto));

    assert_eq!(assessment.sections.len(), 4);
    assert!(!assessment.fallback_used);

    // Both extracted rows already cover PPE and TBM, so the coverage stage
    // appends nothing.
    let numbers: Vec<u32> = assessment.risk_rows.iter().map(|row| row.number).collect();
    assert_eq!(numbers, vec![1, 2]);

    assert_eq!(assessment.checklist_rows.len(), 3);
    assert_eq!(
        assessment.checklist_rows[0].status,
        ComplianceStatus::NonCompliant
    );
}

#[test]
fn work_description_report_uses_its_own_heading_set() {
    let assessment = SiteAssessment::from_report(
        WORK_DESCRIPTION_REPORT,
        &options_without_coverage(ReportMode::WorkDescription),
    );

    assert!(assessment.section(SectionId::RiskAnalysis).is_some());
    assert_eq!(assessment.risk_rows.len(), 1);
    assert_eq!(assessment.risk_rows[0].hazard, "산소 결핍");
    assert_eq!(assessment.checklist_rows.len(), 1);
    assert_eq!(
        assessment.checklist_rows[0].status,
        ComplianceStatus::NotApplicable
    );
}

#[test]
fn missing_risk_table_substitutes_the_injected_fallback() {
    let fallback = FallbackRows::new(vec![RiskRow {
        number: 1,
        hazard: "기본 점검".to_string(),
        description: "변형 프롬프트용 기본 항목".to_string(),
        mitigations: "① 현장 확인".to_string(),
    }]);
    let options = crate::workflows::assessment::AssessmentOptions {
        mode: ReportMode::SitePhoto,
        fallback,
        baseline_coverage: false,
    };

    let assessment =
        SiteAssessment::from_report("## 통합 작업 환경 설명\n표가 없는 응답.\n", &options);

    assert!(assessment.fallback_used);
    assert_eq!(assessment.risk_rows.len(), 1);
    assert_eq!(assessment.risk_rows[0].hazard, "기본 점검");
}

#[test]
fn standard_fallback_covers_ppe_and_briefing() {
    let assessment = SiteAssessment::from_report("표 없는 응답", &options(ReportMode::SitePhoto));

    assert!(assessment.fallback_used);
    let numbers: Vec<u32> = assessment.risk_rows.iter().map(|row| row.number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert!(assessment.risk_rows[0].hazard.contains("개인보호구"));
    assert!(assessment.risk_rows[1].description.contains("TBM"));
}

#[test]
fn coverage_stage_appends_missing_baseline_rows_with_sequential_numbers() {
    let mut rows = vec![RiskRow {
        number: 1,
        hazard: "감전 위험".to_string(),
        description: "가설 전선 피복 손상".to_string(),
        mitigations: "① 절연 조치 ② 접지 확인".to_string(),
    }];

    ensure_baseline_coverage(&mut rows);

    let numbers: Vec<u32> = rows.iter().map(|row| row.number).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert!(rows[1].hazard.contains("개인보호구"));
    assert!(rows[2].hazard.contains("안전교육"));
}

#[test]
fn coverage_stage_leaves_an_empty_set_alone() {
    let mut rows: Vec<RiskRow> = Vec::new();
    ensure_baseline_coverage(&mut rows);
    assert!(rows.is_empty());
}

#[test]
fn coverage_stage_recognizes_keywords_in_any_column() {
    let mut rows = vec![RiskRow {
        number: 1,
        hazard: "고소 작업".to_string(),
        description: "안전모 턱끈 미체결 사례 확인".to_string(),
        mitigations: "① 작업 전 안전교육 실시".to_string(),
    }];

    ensure_baseline_coverage(&mut rows);

    assert_eq!(rows.len(), 1, "both keyword groups already covered");
}

#[test]
fn coverage_can_be_disabled_for_checklist_style_callers() {
    let report = "\
## 1. 현장 전체 잠재 위험요인 분석 및 위험성 감소대책
| 1 | 감전 위험 | 설명 | ① 절연 조치 |
";
    let assessment =
        SiteAssessment::from_report(report, &options_without_coverage(ReportMode::SitePhoto));

    assert_eq!(assessment.risk_rows.len(), 1);
}

#[test]
fn summary_tallies_statuses_categories_and_attention_items() {
    let assessment = SiteAssessment::from_report(SITE_PHOTO_REPORT, &options(ReportMode::SitePhoto));
    let summary = assessment.summary();

    assert_eq!(summary.risk_count, 2);
    assert_eq!(summary.checklist_count, 3);
    assert!(!summary.fallback_used);

    let labels: Vec<&str> = summary
        .status_tallies
        .iter()
        .map(|tally| tally.status_label)
        .collect();
    assert_eq!(labels, vec!["준수", "미준수", "확인불가"]);

    assert_eq!(summary.category_tallies.len(), 2);
    assert_eq!(summary.category_tallies[0].category, "SGR 준수");
    assert_eq!(summary.category_tallies[0].total, 2);
    assert_eq!(summary.category_tallies[0].non_compliant, 1);
    assert_eq!(summary.category_tallies[1].category, "화기 작업");
    assert_eq!(summary.category_tallies[1].compliant, 1);

    let attention: Vec<u32> = summary
        .attention_items
        .iter()
        .map(|item| item.number)
        .collect();
    assert_eq!(attention, vec![1, 2]);
}

#[test]
fn pipeline_is_idempotent_over_the_same_input() {
    let options = options(ReportMode::SitePhoto);
    let first = SiteAssessment::from_report(SITE_PHOTO_REPORT, &options);
    let second = SiteAssessment::from_report(SITE_PHOTO_REPORT, &options);

    assert_eq!(first.sections, second.sections);
    assert_eq!(first.risk_rows, second.risk_rows);
    assert_eq!(first.checklist_rows, second.checklist_rows);
    assert_eq!(first.fallback_used, second.fallback_used);
}
