use super::domain::{ChecklistRow, ComplianceStatus, RiskRow};

pub const RISK_COLUMNS: usize = 4;
pub const CHECKLIST_COLUMNS: usize = 5;

/// A table line that survived every skip rule: `number` is the parsed first
/// cell, `cells` holds exactly the expected column count, trimmed, with the
/// raw number cell still at index 0.
#[derive(Debug, Clone)]
pub struct RawRow<'a> {
    pub number: u32,
    pub cells: Vec<&'a str>,
}

/// Recovers structured rows from a pipe-delimited table embedded in
/// arbitrary text. Lines that are separators, too narrow, header rows, or
/// prose that merely contains a pipe are skipped; a malformed line never
/// aborts the scan. Rows come back in encounter order so duplicate or
/// out-of-order numbering from the model stays visible.
pub fn extract<'a, R, F>(text: &'a str, expected_columns: usize, row_factory: F) -> Vec<R>
where
    F: FnMut(&RawRow<'a>) -> Option<R>,
{
    extract_bounded(text, expected_columns, |_| false, row_factory)
}

/// Like [`extract`], but stops scanning when `boundary` recognizes a line as
/// the start of the next major section. Used when the input is a full
/// response rather than a pre-isolated section body.
pub fn extract_bounded<'a, R, F, B>(
    text: &'a str,
    expected_columns: usize,
    boundary: B,
    mut row_factory: F,
) -> Vec<R>
where
    F: FnMut(&RawRow<'a>) -> Option<R>,
    B: Fn(&str) -> bool,
{
    let mut rows = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if boundary(line) {
            break;
        }
        if is_separator_or_blank(line) || !line.contains('|') {
            continue;
        }

        // `| a | b |` splits to ["", "a", "b", ""]; dropping empty cells
        // handles the leading/trailing pipes in one stroke.
        let cells: Vec<&str> = line
            .split('|')
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .collect();

        if cells.len() < expected_columns || is_header_cell(cells[0]) {
            continue;
        }

        // The leading positive integer is what separates a data row from
        // prose that happens to contain a pipe.
        let Some(number) = parse_row_number(cells[0]) else {
            continue;
        };

        let raw = RawRow {
            number,
            cells: cells[..expected_columns].to_vec(),
        };
        if let Some(row) = row_factory(&raw) {
            rows.push(row);
        }
    }

    rows
}

/// Risk-analysis table: 번호 | 잠재 위험요인 | 설명 | 감소대책.
pub fn risk_rows(text: &str) -> Vec<RiskRow> {
    extract(text, RISK_COLUMNS, |raw| {
        Some(RiskRow {
            number: raw.number,
            hazard: raw.cells[1].to_string(),
            description: raw.cells[2].to_string(),
            mitigations: raw.cells[3].to_string(),
        })
    })
}

/// Checklist table: 번호 | 대분류 | 소분류 | 준수여부 | 세부내용.
pub fn checklist_rows(text: &str) -> Vec<ChecklistRow> {
    extract(text, CHECKLIST_COLUMNS, |raw| {
        Some(ChecklistRow {
            number: raw.number,
            category: raw.cells[1].to_string(),
            item: raw.cells[2].to_string(),
            status: ComplianceStatus::from_marker(raw.cells[3]),
            detail: raw.cells[4].to_string(),
        })
    })
}

fn is_separator_or_blank(line: &str) -> bool {
    line.is_empty()
        || line
            .chars()
            .all(|c| matches!(c, '|' | '-' | '=') || c.is_whitespace())
}

fn is_header_cell(cell: &str) -> bool {
    let lowered = cell.to_lowercase();
    lowered == "no"
        || lowered.contains("header")
        || cell.contains("번호")
        || cell.contains("순번")
        || cell.contains("대분류")
}

fn parse_row_number(cell: &str) -> Option<u32> {
    cell.parse::<u32>().ok().filter(|number| *number > 0)
}
