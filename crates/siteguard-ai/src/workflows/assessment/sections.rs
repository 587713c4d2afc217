use super::domain::{Section, SectionId};
use tracing::warn;

/// One heading predicate: a line opens `section` when it contains every
/// substring in `required`. Multi-token rules disambiguate headings that
/// share a word with another section's heading.
#[derive(Debug, Clone, Copy)]
pub struct HeadingRule {
    section: SectionId,
    required: &'static [&'static str],
}

impl HeadingRule {
    pub const fn new(section: SectionId, required: &'static [&'static str]) -> Self {
        Self { section, required }
    }

    pub fn section(&self) -> SectionId {
        self.section
    }

    pub fn matches(&self, line: &str) -> bool {
        !self.required.is_empty() && self.required.iter().all(|needle| line.contains(needle))
    }
}

/// Splits one model response into named sections by scanning for heading
/// lines. Rules are evaluated in order and the first match wins, so more
/// specific rules must precede looser ones.
#[derive(Debug, Clone)]
pub struct SectionSplitter {
    rules: Vec<HeadingRule>,
}

impl SectionSplitter {
    pub fn new(rules: Vec<HeadingRule>) -> Self {
        Self { rules }
    }

    /// Heading set produced by the site-photo prompt.
    pub fn site_photo() -> Self {
        Self::new(vec![
            HeadingRule::new(SectionId::WorkEnvironment, &["통합 작업 환경 설명"]),
            HeadingRule::new(SectionId::RiskAnalysis, &["1. 현장 전체 잠재 위험요인 분석"]),
            HeadingRule::new(SectionId::RiskAnalysis, &["잠재 위험요인 분석"]),
            HeadingRule::new(SectionId::Checklist, &["2. SGR 체크리스트"]),
            HeadingRule::new(SectionId::Checklist, &["체크리스트 항목별"]),
            HeadingRule::new(SectionId::Recommendations, &["3. 현장 전체", "추가 권장사항"]),
            HeadingRule::new(SectionId::PhotoObservations, &["4. 현장 사진별"]),
            HeadingRule::new(SectionId::PhotoObservations, &["사진별 주요 관찰"]),
        ])
    }

    /// Heading set produced by the free-text work-description prompt.
    pub fn work_description() -> Self {
        Self::new(vec![
            HeadingRule::new(SectionId::WorkEnvironment, &["작업 내용 분석"]),
            HeadingRule::new(SectionId::RiskAnalysis, &["위험성 평가 표"]),
            HeadingRule::new(SectionId::RiskAnalysis, &["위험요인과 감소대책"]),
            HeadingRule::new(SectionId::Recommendations, &["추가 안전 조치"]),
            HeadingRule::new(SectionId::Checklist, &["작업 전 체크리스트"]),
        ])
    }

    /// True when the trimmed line opens any section. Useful as a scan
    /// boundary when extracting tables from a response that has not been
    /// pre-split.
    pub fn is_heading(&self, line: &str) -> bool {
        self.heading_for(line.trim()).is_some()
    }

    fn heading_for(&self, trimmed: &str) -> Option<SectionId> {
        self.rules
            .iter()
            .find(|rule| rule.matches(trimmed))
            .map(HeadingRule::section)
    }

    /// Single top-to-bottom pass. Heading lines are consumed, never copied
    /// into a body; lines before the first heading are dropped; blank lines
    /// inside a section are kept so paragraph breaks survive. A heading whose
    /// span turns out empty after trimming produces no section at all.
    pub fn split(&self, text: &str) -> Vec<Section> {
        let mut sections: Vec<Section> = Vec::new();
        let mut current: Option<SectionId> = None;
        let mut buffer: Vec<&str> = Vec::new();

        for line in text.lines() {
            if let Some(id) = self.heading_for(line.trim()) {
                flush(&mut sections, current.take(), &mut buffer);
                current = Some(id);
                continue;
            }

            if current.is_some() {
                buffer.push(line);
            }
        }

        flush(&mut sections, current, &mut buffer);
        sections
    }
}

fn flush(sections: &mut Vec<Section>, id: Option<SectionId>, buffer: &mut Vec<&str>) {
    let Some(id) = id else {
        buffer.clear();
        return;
    };

    let body = buffer.join("\n").trim().to_string();
    buffer.clear();
    if body.is_empty() {
        return;
    }

    // Real responses are not expected to repeat a heading; when one does,
    // the later span replaces the earlier body at its original position.
    if let Some(existing) = sections.iter_mut().find(|section| section.id == id) {
        warn!(section = ?id, "repeated section heading in model output, replacing earlier body");
        existing.body = body;
    } else {
        sections.push(Section { id, body });
    }
}
