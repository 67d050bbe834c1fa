use crate::error::SgaError;
use crate::model::{FinancialLines, LineEvidence, YearLabel};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// SG&A margin for one fiscal year of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginReport {
    /// Year label the analysis was requested for.
    pub year: YearLabel,
    /// Revenue in millions, as printed in the statement.
    pub revenue: f64,
    /// SG&A in millions, as printed in the statement.
    pub sga: f64,
    /// SG&A as a percentage of revenue.
    pub margin_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_line: Option<LineEvidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sga_line: Option<LineEvidence>,
}

impl MarginReport {
    /// Multi-line result block shown to the user.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Financial Analysis for {}", self.year);
        out.push_str("=====================================\n\n");
        let _ = writeln!(out, "Revenue: ${:.1} million", self.revenue);
        let _ = writeln!(out, "SG&A: ${:.1} million", self.sga);
        let _ = writeln!(out, "SG&A Margin: {:.2}%", self.margin_pct);
        out
    }
}

/// SG&A as a percentage of revenue.
pub fn margin_pct(revenue: f64, sga: f64) -> f64 {
    (sga / revenue) * 100.0
}

/// Turn extracted lines into a report, rejecting non-positive values.
///
/// Revenue is checked before SG&A, so a document missing both reports the
/// revenue error.
pub fn build_report(lines: &FinancialLines, year: YearLabel) -> Result<MarginReport, SgaError> {
    if lines.revenue <= 0.0 {
        return Err(SgaError::RevenueNotFound { year });
    }
    if lines.sga <= 0.0 {
        return Err(SgaError::SgaNotFound { year });
    }

    Ok(MarginReport {
        year,
        revenue: lines.revenue,
        sga: lines.sga,
        margin_pct: margin_pct(lines.revenue, lines.sga),
        revenue_line: lines.revenue_line.clone(),
        sga_line: lines.sga_line.clone(),
    })
}
