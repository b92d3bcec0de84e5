//! Minimal CSV reader for the sheet export format.
//!
//! Records are line-oriented: a quoted field cannot span lines. Malformed
//! quoting never fails; an unterminated quote closes at end of line.

use crate::types::RawRow;

/// Splits one CSV line into fields.
///
/// `"` toggles quoted context, `""` inside quotes is a literal quote, and a
/// comma only separates fields outside quotes. The last field is always
/// emitted, so `a,,` yields three fields.
#[must_use]
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    fields.push(current);
    fields
}

/// Parses a whole CSV document into header-keyed rows.
///
/// Headers and values are trimmed and lose one surrounding `"` on each side.
/// Short rows are padded with empty cells. A line is dropped only when every
/// field it tokenizes to is empty before trimming, so `,,` is skipped but
/// ` , ` is kept. Fewer than two lines yields no rows.
#[must_use]
pub fn parse_csv(text: &str) -> Vec<RawRow> {
    let mut lines = text.trim().split('\n');
    let Some(header_line) = lines.next() else {
        return Vec::new();
    };
    let headers: Vec<String> = tokenize_line(header_line)
        .iter()
        .map(|h| clean_cell(h))
        .collect();

    lines
        .filter_map(|line| {
            let values = tokenize_line(line);
            if values.iter().all(String::is_empty) {
                return None;
            }
            let row: RawRow = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    let value = values.get(i).map_or_else(String::new, |v| clean_cell(v));
                    (header.clone(), value)
                })
                .collect();
            Some(row)
        })
        .collect()
}

fn clean_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}
