use crate::infra::parse_mode;
use chrono::Local;
use clap::Args;
use siteguard_ai::error::AppError;
use siteguard_ai::workflows::assessment::{
    checklist_csv, risk_csv, section_markdown, AssessmentOptions, FallbackRows, ReportMode,
    SiteAssessment,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to a saved model response (markdown text)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Prompt variant the report came from: site-photo or work-description
    #[arg(long, value_parser = parse_mode, default_value = "site-photo")]
    pub(crate) mode: ReportMode,
    /// Skip the PPE/TBM baseline coverage stage
    #[arg(long)]
    pub(crate) skip_baseline: bool,
    /// Print full section bodies as well as the summary
    #[arg(long)]
    pub(crate) show_sections: bool,
    /// Write CSV and markdown exports into this directory
    #[arg(long)]
    pub(crate) export_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Print full section bodies as well as the summary
    #[arg(long)]
    pub(crate) show_sections: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        mode,
        skip_baseline,
        show_sections,
        export_dir,
    } = args;

    // Saved responses occasionally carry mangled bytes; a lossy read keeps
    // every parsable line instead of refusing the whole file.
    let bytes = fs::read(&input)?;
    let report_text = String::from_utf8_lossy(&bytes);

    let options = AssessmentOptions {
        mode,
        fallback: FallbackRows::standard(),
        baseline_coverage: !skip_baseline,
    };
    let assessment = SiteAssessment::from_report(&report_text, &options);
    render_assessment(&assessment, mode, show_sections);

    if let Some(dir) = export_dir {
        write_exports(&assessment, &dir)?;
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Assessment pipeline demo (bundled sample report)");
    let assessment = SiteAssessment::from_report(SAMPLE_REPORT, &AssessmentOptions::default());
    render_assessment(&assessment, ReportMode::SitePhoto, args.show_sections);
    Ok(())
}

fn render_assessment(assessment: &SiteAssessment, mode: ReportMode, show_sections: bool) {
    let summary = assessment.summary();

    println!("Report mode: {}", mode.label());
    println!("\nSections ({})", summary.sections.len());
    for entry in &summary.sections {
        println!("- {}", entry.label);
    }

    if show_sections {
        for section in &assessment.sections {
            println!("\n## {}\n{}", section.id.label(), section.body);
        }
    }

    if summary.fallback_used {
        println!(
            "\nRisk rows: {} (no table found, fallback substituted)",
            summary.risk_count
        );
    } else {
        println!("\nRisk rows: {}", summary.risk_count);
    }
    for row in &assessment.risk_rows {
        println!("- {}. {} | {}", row.number, row.hazard, row.description);
    }

    if assessment.checklist_rows.is_empty() {
        println!("\nChecklist: not present in this report");
    } else {
        println!("\nChecklist compliance ({} items)", summary.checklist_count);
        for tally in &summary.status_tallies {
            println!("- {}: {}", tally.status_label, tally.count);
        }
        println!("\nBy category");
        for tally in &summary.category_tallies {
            println!(
                "- {}: {}/{} 준수, 미준수 {}",
                tally.category, tally.compliant, tally.total, tally.non_compliant
            );
        }
    }

    if summary.attention_items.is_empty() {
        println!("\nFollow-up items: none");
    } else {
        println!("\nFollow-up items");
        for item in &summary.attention_items {
            println!(
                "- [{}] {}. {} ({})",
                item.status_label, item.number, item.item, item.detail
            );
        }
    }
}

fn write_exports(assessment: &SiteAssessment, dir: &Path) -> Result<(), AppError> {
    fs::create_dir_all(dir)?;
    let now = Local::now();
    let stamp = now.format("%Y%m%d_%H%M%S").to_string();
    let generated_at = now.naive_local();

    let risk = risk_csv(&assessment.risk_rows)?;
    fs::write(dir.join(format!("risk_analysis_{stamp}.csv")), risk)?;

    if !assessment.checklist_rows.is_empty() {
        let checklist = checklist_csv(&assessment.checklist_rows)?;
        fs::write(dir.join(format!("sgr_checklist_{stamp}.csv")), checklist)?;
    }

    for section in &assessment.sections {
        let doc = section_markdown(section, generated_at);
        fs::write(
            dir.join(format!("{}_{stamp}.md", section.id.file_stem())),
            doc,
        )?;
    }

    println!("\nExports written to {}", dir.display());
    Ok(())
}

const SAMPLE_REPORT: &str = "\
## 통합 작업 환경 설명

지하 주차장 전기 배선 교체 공사 현장으로, 천장 트레이를 따라 케이블 포설이 진행 중이다.
이동식 비계 2대가 배치되어 있고 바닥에 자재가 임시 적치되어 있다.

## 1. 현장 전체 잠재 위험요인 분석 및 위험성 감소대책

| 번호 | 잠재 위험요인 | 잠재 위험요인 설명 | 위험성 감소대책 |
|------|-------------|------------------|----------------|
| 1 | 감전 위험 | 활선 인근에서 케이블 포설 작업이 이루어지고 있음 | ① 전원 차단 확인 ② 절연 장갑 사용 ③ 검전기 점검 ④ 접지 상태 확인 |
| 2 | 협착 위험 | 이동식 비계 이동 시 주변 자재와의 협착 우려 | ① 비계 이동 경로 확보 ② 유도자 배치 ③ 바퀴 고정 상태 확인 ④ 자재 정리정돈 |

## 2. SGR 체크리스트 항목별 통합 체크 결과

| 번호 | 대분류 | 소분류 | 준수여부 | 세부 내용 |
|------|--------|--------|----------|-----------|
| 1 | SGR 준수 | 모든 작업자는 작업조건에 맞는 안전보호구를 착용한다. | O | 전원 안전모 및 절연 장갑 착용 확인 |
| 2 | SGR 준수 | 전원작업 및 고압선 주변 작업 시 감전예방 조치를 취한다. | X | 검전기 비치가 확인되지 않음 |
| 3 | 중량물 이동 | 중량물이동-평지 이동 시 이동수레 활용 주의사항 | 알수없음 | 사진에 이동 장면이 없어 확인 불가 |

## 3. 현장 전체 통합 추가 권장사항

야간 작업 시 조도를 확보하고, 분전반 주변 적치물을 제거할 것을 권장한다.

## 4. 현장 사진별 주요 관찰 사항

사진 1: 비계 상부 작업자 1명이 안전대를 체결하지 않은 것으로 보인다.
사진 2: 분전반 인근 소화기 비치 상태 양호.
";

#[cfg(test)]
mod tests {
    use super::*;
    use siteguard_ai::workflows::assessment::SectionId;

    #[test]
    fn sample_report_exercises_the_whole_pipeline() {
        let assessment = SiteAssessment::from_report(SAMPLE_REPORT, &AssessmentOptions::default());

        assert_eq!(assessment.sections.len(), 5);
        assert!(assessment.section(SectionId::PhotoObservations).is_some());

        // Neither sample risk row mentions PPE or TBM, so the coverage stage
        // appends both baseline rows after the extracted ones.
        let numbers: Vec<u32> = assessment.risk_rows.iter().map(|row| row.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert!(assessment.risk_rows[2].hazard.contains("개인보호구"));

        assert_eq!(assessment.checklist_rows.len(), 3);
        let summary = assessment.summary();
        assert_eq!(summary.attention_items.len(), 2);
    }
}
