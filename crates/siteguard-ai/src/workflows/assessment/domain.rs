use serde::{Deserialize, Serialize};

/// Named spans of an inspection report. The set is closed; a given prompt
/// variant only produces a subset of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    WorkEnvironment,
    RiskAnalysis,
    Checklist,
    Recommendations,
    PhotoObservations,
}

impl SectionId {
    /// Report heading used when a section is rendered or written out.
    pub const fn label(self) -> &'static str {
        match self {
            Self::WorkEnvironment => "통합 작업 환경 설명",
            Self::RiskAnalysis => "현장 전체 잠재 위험요인 분석 및 위험성 감소대책",
            Self::Checklist => "SGR 체크리스트 항목별 통합 체크 결과",
            Self::Recommendations => "현장 전체 통합 추가 권장사항",
            Self::PhotoObservations => "현장 사진별 주요 관찰 사항",
        }
    }

    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::WorkEnvironment => "work_environment",
            Self::RiskAnalysis => "risk_analysis",
            Self::Checklist => "sgr_checklist",
            Self::Recommendations => "recommendations",
            Self::PhotoObservations => "photo_observations",
        }
    }
}

/// One contiguous span of report text. `body` never contains the heading
/// line that opened the section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub body: String,
}

/// One identified hazard with its description and mitigation list. `number`
/// always comes from a successful parse of the source row, never a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiskRow {
    pub number: u32,
    pub hazard: String,
    pub description: String,
    pub mitigations: String,
}

/// Compliance verdict for one checklist item, derived from the single-token
/// status cell the model was instructed to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    NotApplicable,
    Unknown,
}

impl ComplianceStatus {
    /// Maps a status cell to a verdict. Tokens are matched case-sensitively
    /// against the fixed set the prompt requests; anything else (empty,
    /// garbled, free prose) degrades to `Unknown` rather than failing.
    pub fn from_marker(token: &str) -> Self {
        match token {
            "O" => Self::Compliant,
            "X" => Self::NonCompliant,
            "해당없음" | "N/A" => Self::NotApplicable,
            _ => Self::Unknown,
        }
    }

    /// Canonical report token, suitable for re-export.
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Compliant => "O",
            Self::NonCompliant => "X",
            Self::NotApplicable => "해당없음",
            Self::Unknown => "알수없음",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "준수",
            Self::NonCompliant => "미준수",
            Self::NotApplicable => "해당없음",
            Self::Unknown => "확인불가",
        }
    }

    pub const fn ordered() -> [Self; 4] {
        [
            Self::Compliant,
            Self::NonCompliant,
            Self::NotApplicable,
            Self::Unknown,
        ]
    }
}

/// One compliance-checklist item with its derived status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistRow {
    pub number: u32,
    pub category: String,
    pub item: String,
    pub status: ComplianceStatus,
    pub detail: String,
}
