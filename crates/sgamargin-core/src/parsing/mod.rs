pub mod values;

use crate::model::{FinancialLines, LineEvidence, LineKind, YearLabel, NOT_FOUND};
use values::{first_number, trim_line};

const REVENUE_PREFIX: &str = "Revenue";
const SGA_MARKER: &str = "SG&A";

/// Scan document text for the Revenue and SG&A lines.
///
/// Every line is trimmed of control characters and ASCII spaces, then
/// classified. Unicode spaces such as NBSP are not trimmed. A matching line
/// overwrites the earlier value for its kind, so the last match wins even
/// when it has no numeric token (it then records `NOT_FOUND`).
///
/// The year only determines the column index reported in logs. The value is
/// always the first numeric token on the matched line, whichever year is
/// selected.
pub fn extract_financials(text: &str, year: YearLabel) -> FinancialLines {
    tracing::debug!(year = %year, index = year.index(), "scanning document text");

    let mut result = FinancialLines::default();
    let mut page_number = 1;

    for (i, raw) in text.split('\n').enumerate() {
        let line = trim_line(raw);

        // A form feed before the content starts the next page; one after it
        // belongs to this line's page.
        let leading = raw.len() - raw.trim_start_matches(|c: char| c <= ' ').len();
        page_number += raw[..leading].matches('\x0c').count();
        let line_page = page_number;
        page_number += raw[leading..].matches('\x0c').count();

        let Some(kind) = classify_line(line) else {
            continue;
        };

        let parsed = first_number(line);
        let value = parsed.map(|(v, _)| v).unwrap_or(NOT_FOUND);
        let evidence = LineEvidence {
            line_number: i + 1,
            page_number: line_page,
            text: line.to_string(),
            token: parsed.map(|(_, t)| t.to_string()),
        };

        tracing::debug!(kind = %kind, line = i + 1, value, "matched line");

        match kind {
            LineKind::Revenue => {
                result.revenue = value;
                result.revenue_line = Some(evidence);
            }
            LineKind::Sga => {
                result.sga = value;
                result.sga_line = Some(evidence);
            }
        }
    }

    result
}

/// Classify a trimmed line. Revenue takes precedence over SG&A.
pub fn classify_line(line: &str) -> Option<LineKind> {
    if line.starts_with(REVENUE_PREFIX) {
        Some(LineKind::Revenue)
    } else if line.contains(SGA_MARKER) {
        Some(LineKind::Sga)
    } else {
        None
    }
}
