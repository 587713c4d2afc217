use super::domain::{ChecklistRow, RiskRow, Section};
use chrono::NaiveDateTime;

pub const RISK_CSV_HEADERS: [&str; 4] =
    ["번호", "잠재 위험요인", "잠재 위험요인 설명", "위험성 감소대책"];
pub const CHECKLIST_CSV_HEADERS: [&str; 5] = ["번호", "대분류", "소분류", "준수여부", "세부내용"];

// Spreadsheet apps need the BOM to detect UTF-8 in Korean CSV files.
const UTF8_BOM: &str = "\u{feff}";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode CSV export: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush CSV export: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV export produced invalid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// CSV document for a risk-analysis row set.
pub fn risk_csv(rows: &[RiskRow]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(RISK_CSV_HEADERS)?;
        for row in rows {
            writer.write_record([
                row.number.to_string().as_str(),
                &row.hazard,
                &row.description,
                &row.mitigations,
            ])?;
        }
        writer.flush()?;
    }
    finish(buffer)
}

/// CSV document for a checklist row set; statuses serialize back to their
/// report tokens (O/X/해당없음/알수없음).
pub fn checklist_csv(rows: &[ChecklistRow]) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(CHECKLIST_CSV_HEADERS)?;
        for row in rows {
            writer.write_record([
                row.number.to_string().as_str(),
                &row.category,
                &row.item,
                row.status.marker(),
                &row.detail,
            ])?;
        }
        writer.flush()?;
    }
    finish(buffer)
}

/// Standalone markdown document for one section, with the report heading
/// restored and a generation timestamp. File naming is the caller's concern.
pub fn section_markdown(section: &Section, generated_at: NaiveDateTime) -> String {
    format!(
        "# {}\n\n생성 시간: {}\n\n{}\n",
        section.id.label(),
        generated_at.format("%Y-%m-%d %H:%M:%S"),
        section.body
    )
}

fn finish(buffer: Vec<u8>) -> Result<String, ExportError> {
    let body = String::from_utf8(buffer)?;
    Ok(format!("{UTF8_BOM}{body}"))
}
