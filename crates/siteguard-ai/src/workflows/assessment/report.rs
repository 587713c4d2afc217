use super::baseline::{ensure_baseline_coverage, FallbackRows};
use super::domain::{ChecklistRow, ComplianceStatus, RiskRow, Section, SectionId};
use super::sections::SectionSplitter;
use super::tables;
use serde::{Deserialize, Serialize};

/// Which prompt variant produced the report, and therefore which heading set
/// to split on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    SitePhoto,
    WorkDescription,
}

impl ReportMode {
    pub fn splitter(self) -> SectionSplitter {
        match self {
            Self::SitePhoto => SectionSplitter::site_photo(),
            Self::WorkDescription => SectionSplitter::work_description(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SitePhoto => "현장 사진 분석",
            Self::WorkDescription => "작업 내용 분석",
        }
    }
}

impl Default for ReportMode {
    fn default() -> Self {
        Self::SitePhoto
    }
}

/// Pipeline configuration. The fallback rows and the coverage stage are
/// policy dials owned by the caller, not by extraction.
#[derive(Debug, Clone)]
pub struct AssessmentOptions {
    pub mode: ReportMode,
    pub fallback: FallbackRows,
    pub baseline_coverage: bool,
}

impl Default for AssessmentOptions {
    fn default() -> Self {
        Self {
            mode: ReportMode::default(),
            fallback: FallbackRows::standard(),
            baseline_coverage: true,
        }
    }
}

/// Everything recovered from one model response: the named sections plus the
/// structured rows pulled out of the risk-analysis and checklist sections.
#[derive(Debug)]
pub struct SiteAssessment {
    pub sections: Vec<Section>,
    pub risk_rows: Vec<RiskRow>,
    pub checklist_rows: Vec<ChecklistRow>,
    pub fallback_used: bool,
}

impl SiteAssessment {
    pub fn from_report(text: &str, options: &AssessmentOptions) -> Self {
        let sections = options.mode.splitter().split(text);

        let extracted = sections
            .iter()
            .find(|section| section.id == SectionId::RiskAnalysis)
            .map(|section| tables::risk_rows(&section.body))
            .unwrap_or_default();
        let (mut risk_rows, fallback_used) = options.fallback.apply(extracted);
        if options.baseline_coverage {
            ensure_baseline_coverage(&mut risk_rows);
        }

        let checklist_rows = sections
            .iter()
            .find(|section| section.id == SectionId::Checklist)
            .map(|section| tables::checklist_rows(&section.body))
            .unwrap_or_default();

        Self {
            sections,
            risk_rows,
            checklist_rows,
            fallback_used,
        }
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn summary(&self) -> AssessmentSummary {
        let sections = self
            .sections
            .iter()
            .map(|section| SectionEntry {
                id: section.id,
                label: section.id.label(),
            })
            .collect();

        let status_tallies = ComplianceStatus::ordered()
            .into_iter()
            .filter_map(|status| {
                let count = self
                    .checklist_rows
                    .iter()
                    .filter(|row| row.status == status)
                    .count();
                (count > 0).then_some(StatusTally {
                    status,
                    status_label: status.label(),
                    count,
                })
            })
            .collect();

        let mut category_tallies: Vec<CategoryTally> = Vec::new();
        for row in &self.checklist_rows {
            let position = match category_tallies
                .iter()
                .position(|tally| tally.category == row.category)
            {
                Some(existing) => existing,
                None => {
                    category_tallies.push(CategoryTally::new(row.category.clone()));
                    category_tallies.len() - 1
                }
            };
            category_tallies[position].record(row.status);
        }

        let attention_items = self
            .checklist_rows
            .iter()
            .filter(|row| {
                matches!(
                    row.status,
                    ComplianceStatus::NonCompliant | ComplianceStatus::Unknown
                )
            })
            .map(|row| AttentionItem {
                number: row.number,
                category: row.category.clone(),
                item: row.item.clone(),
                status: row.status,
                status_label: row.status.label(),
                detail: row.detail.clone(),
            })
            .collect();

        AssessmentSummary {
            sections,
            risk_count: self.risk_rows.len(),
            fallback_used: self.fallback_used,
            checklist_count: self.checklist_rows.len(),
            status_tallies,
            category_tallies,
            attention_items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionEntry {
    pub id: SectionId,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusTally {
    pub status: ComplianceStatus,
    pub status_label: &'static str,
    pub count: usize,
}

/// Per-category compliance counts, in first-appearance order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTally {
    pub category: String,
    pub total: usize,
    pub compliant: usize,
    pub non_compliant: usize,
    pub not_applicable: usize,
    pub unknown: usize,
}

impl CategoryTally {
    fn new(category: String) -> Self {
        Self {
            category,
            total: 0,
            compliant: 0,
            non_compliant: 0,
            not_applicable: 0,
            unknown: 0,
        }
    }

    fn record(&mut self, status: ComplianceStatus) {
        self.total += 1;
        match status {
            ComplianceStatus::Compliant => self.compliant += 1,
            ComplianceStatus::NonCompliant => self.non_compliant += 1,
            ComplianceStatus::NotApplicable => self.not_applicable += 1,
            ComplianceStatus::Unknown => self.unknown += 1,
        }
    }
}

/// A checklist row that needs human follow-up: confirmed non-compliance or a
/// verdict the photos could not settle.
#[derive(Debug, Clone, Serialize)]
pub struct AttentionItem {
    pub number: u32,
    pub category: String,
    pub item: String,
    pub status: ComplianceStatus,
    pub status_label: &'static str,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub sections: Vec<SectionEntry>,
    pub risk_count: usize,
    pub fallback_used: bool,
    pub checklist_count: usize,
    pub status_tallies: Vec<StatusTally>,
    pub category_tallies: Vec<CategoryTally>,
    pub attention_items: Vec<AttentionItem>,
}
