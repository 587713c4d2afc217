use super::domain::RiskRow;

const PPE_KEYWORDS: [&str; 2] = ["개인보호구", "안전모"];
const BRIEFING_KEYWORDS: [&str; 2] = ["TBM", "안전교육"];

/// Rows substituted when extraction finds no risk table at all. The content
/// is caller-supplied because prompt variants ship different defaults; the
/// extractor itself never injects rows.
#[derive(Debug, Clone)]
pub struct FallbackRows {
    rows: Vec<RiskRow>,
}

impl FallbackRows {
    pub fn new(rows: Vec<RiskRow>) -> Self {
        Self { rows }
    }

    /// The baseline universal safety items: PPE and the pre-work TBM
    /// briefing.
    pub fn standard() -> Self {
        Self::new(vec![ppe_row(1), briefing_row(2)])
    }

    pub fn rows(&self) -> &[RiskRow] {
        &self.rows
    }

    /// Returns the extracted rows untouched when there are any, otherwise
    /// the fallback set; the flag reports which happened.
    pub fn apply(&self, extracted: Vec<RiskRow>) -> (Vec<RiskRow>, bool) {
        if extracted.is_empty() {
            (self.rows.clone(), true)
        } else {
            (extracted, false)
        }
    }
}

impl Default for FallbackRows {
    fn default() -> Self {
        Self::standard()
    }
}

/// Tops up a non-empty risk table so at least one row covers PPE and one
/// covers the pre-work briefing, numbering appended rows after the last
/// existing row. A completeness guarantee layered above extraction; it
/// applies to risk rows only and callers may switch it off.
pub fn ensure_baseline_coverage(rows: &mut Vec<RiskRow>) {
    if rows.is_empty() {
        return;
    }

    if !rows.iter().any(|row| mentions_any(row, &PPE_KEYWORDS)) {
        rows.push(ppe_row(rows.len() as u32 + 1));
    }
    if !rows.iter().any(|row| mentions_any(row, &BRIEFING_KEYWORDS)) {
        rows.push(briefing_row(rows.len() as u32 + 1));
    }
}

fn mentions_any(row: &RiskRow, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| {
        row.hazard.contains(keyword)
            || row.description.contains(keyword)
            || row.mitigations.contains(keyword)
    })
}

fn ppe_row(number: u32) -> RiskRow {
    RiskRow {
        number,
        hazard: "개인보호구 착용".to_string(),
        description: "작업 시 필수 개인보호구 착용 필요".to_string(),
        mitigations: "① 안전모 착용 ② 안전화 착용 ③ 필요시 안전대 착용 ④ 보호장갑 착용"
            .to_string(),
    }
}

fn briefing_row(number: u32) -> RiskRow {
    RiskRow {
        number,
        hazard: "작업 전 안전교육".to_string(),
        description: "작업 전 TBM 실시 및 안전교육".to_string(),
        mitigations: "① 작업 전 TBM 실시 ② 작업자 건강상태 확인 ③ 작업계획 및 위험요소 공유 ④ 비상연락체계 확인"
            .to_string(),
    }
}
