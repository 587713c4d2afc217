//! Structured extraction over AI site-inspection reports.
//!
//! The model returns one markdown-ish string per analysis request. This
//! module splits it into named sections, recovers rows from the embedded
//! pipe-delimited tables, and layers the caller-owned fallback and
//! baseline-coverage policies on top. Everything here is a pure, single-pass
//! text transformation: any input string yields a (possibly empty) result.

pub mod domain;

mod baseline;
mod export;
mod report;
mod sections;
mod tables;

#[cfg(test)]
mod tests;

pub use baseline::{ensure_baseline_coverage, FallbackRows};
pub use domain::{ChecklistRow, ComplianceStatus, RiskRow, Section, SectionId};
pub use export::{
    checklist_csv, risk_csv, section_markdown, ExportError, CHECKLIST_CSV_HEADERS,
    RISK_CSV_HEADERS,
};
pub use report::{
    AssessmentOptions, AssessmentSummary, AttentionItem, CategoryTally, ReportMode, SectionEntry,
    SiteAssessment, StatusTally,
};
pub use sections::{HeadingRule, SectionSplitter};
pub use tables::{
    checklist_rows, extract, extract_bounded, risk_rows, RawRow, CHECKLIST_COLUMNS, RISK_COLUMNS,
};
