pub mod error;
pub mod extraction;
pub mod model;
pub mod parsing;
pub mod report;

use error::SgaError;
use extraction::PdfExtractor;
use model::YearLabel;
use report::MarginReport;

/// Analyze already-extracted statement text for one year.
pub fn analyze_text(text: &str, year: YearLabel) -> Result<MarginReport, SgaError> {
    let lines = parsing::extract_financials(text, year);
    let report = report::build_report(&lines, year)?;

    tracing::info!(
        year = %year,
        revenue = report.revenue,
        sga = report.sga,
        margin_pct = report.margin_pct,
        "computed SG&A margin"
    );

    Ok(report)
}

/// Main API entry point: extract a PDF's text and analyze it for one year.
pub fn analyze_pdf(
    pdf_bytes: &[u8],
    extractor: &dyn PdfExtractor,
    year: YearLabel,
) -> Result<MarginReport, SgaError> {
    let text = extract_text(pdf_bytes, extractor)?;
    analyze_text(&text, year)
}

/// Extract a PDF's text, rejecting documents with no text at all
/// (typically scanned, image-only statements).
pub fn extract_text(pdf_bytes: &[u8], extractor: &dyn PdfExtractor) -> Result<String, SgaError> {
    tracing::debug!(
        backend = extractor.backend_name(),
        bytes = pdf_bytes.len(),
        "extracting text"
    );

    let text = extractor.extract_text(pdf_bytes)?;
    if text.trim().is_empty() {
        return Err(SgaError::NoText);
    }
    Ok(text)
}
