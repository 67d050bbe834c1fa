use sgamargin_core::model::LineEvidence;
use sgamargin_core::report::MarginReport;
use std::fmt::Write;

use crate::commands::analyze::FileOutcome;

pub fn print(outcomes: &[FileOutcome], show_lines: bool) {
    print!("{}", render(outcomes, show_lines));

    // A lone failure is reported by main.
    if outcomes.len() > 1 {
        for outcome in outcomes {
            if let Err(e) = &outcome.result {
                eprintln!("Error: {}: {e}", outcome.file.display());
            }
        }
    }
}

/// Stdout part of the text output. Failed files keep their header but get
/// no body; their errors go to stderr.
pub fn render(outcomes: &[FileOutcome], show_lines: bool) -> String {
    let multi_file = outcomes.len() > 1;
    let mut out = String::new();

    for (i, outcome) in outcomes.iter().enumerate() {
        if multi_file {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "--- {} ---\n", outcome.file.display());
        }

        if let Ok(report) = &outcome.result {
            out.push_str(&report.render_text());
            if show_lines {
                out.push_str(&render_lines(report));
            }
        }
    }

    out
}

fn render_lines(report: &MarginReport) -> String {
    let mut out = String::from("\nSource lines:\n");
    if let Some(ev) = &report.revenue_line {
        let _ = writeln!(out, "  Revenue  {}", describe(ev));
    }
    if let Some(ev) = &report.sga_line {
        let _ = writeln!(out, "  SG&A     {}", describe(ev));
    }
    out
}

fn describe(ev: &LineEvidence) -> String {
    format!("page {}, line {}: {}", ev.page_number, ev.line_number, ev.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sgamargin_core::model::YearLabel;
    use std::path::PathBuf;

    fn outcome(file: &str, text: &str) -> FileOutcome {
        FileOutcome {
            file: PathBuf::from(file),
            result: sgamargin_core::analyze_text(text, YearLabel::Y2023A),
        }
    }

    #[test]
    fn test_single_file_has_no_header() {
        let out = render(&[outcome("a.txt", "Revenue 500\nSG&A 50")], false);
        assert!(out.starts_with("Financial Analysis for 2023A\n"));
        assert!(!out.contains("---"));
        assert!(!out.contains("Source lines"));
    }

    #[test]
    fn test_show_lines_block() {
        let text = "Income statement\n  Revenue   500  480\n\x0cTotal SG&A   50  45";
        let out = render(&[outcome("a.txt", text)], true);
        assert!(out.ends_with(
            "SG&A Margin: 10.00%\n\
             \n\
             Source lines:\n  \
             Revenue  page 1, line 2: Revenue   500  480\n  \
             SG&A     page 2, line 3: Total SG&A   50  45\n"
        ));
    }

    #[test]
    fn test_multi_file_headers_and_failed_body() {
        let out = render(
            &[
                outcome("good.txt", "Revenue 200\nSG&A 30"),
                outcome("bad.txt", "SG&A 30"),
            ],
            false,
        );
        assert!(out.starts_with("--- good.txt ---\n\nFinancial Analysis for 2023A\n"));
        assert!(out.ends_with("SG&A Margin: 15.00%\n\n--- bad.txt ---\n\n"));
    }

    #[test]
    fn test_single_failure_renders_nothing() {
        assert_eq!(render(&[outcome("a.txt", "Revenue 1")], true), "");
    }
}
