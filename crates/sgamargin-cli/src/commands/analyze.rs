use sgamargin_core::error::SgaError;
use sgamargin_core::extraction::{Backend, PdfExtractor};
use sgamargin_core::model::YearLabel;
use sgamargin_core::report::MarginReport;
use std::path::{Path, PathBuf};

use crate::output;

/// Result of analyzing one input file.
pub struct FileOutcome {
    pub file: PathBuf,
    pub result: Result<MarginReport, SgaError>,
}

pub fn run(
    input_files: Vec<PathBuf>,
    year_label: &str,
    output_format: &str,
    backend: &str,
    layout: bool,
    show_lines: bool,
) -> Result<(), SgaError> {
    let year = YearLabel::from_str_loose(year_label);
    if year.as_str() != year_label.trim() {
        tracing::warn!("unrecognized year label '{}', using {}", year_label, year);
    }
    let backend: Backend = backend.parse()?;

    let outcomes = analyze_files(input_files, year, backend, layout);

    match output_format {
        "json" => output::json::print(&outcomes)?,
        _ => output::text::print(&outcomes, show_lines),
    }

    into_exit_result(outcomes)
}

/// Analyze every file in order. A failing file does not stop the others.
pub fn analyze_files(
    input_files: Vec<PathBuf>,
    year: YearLabel,
    backend: Backend,
    layout: bool,
) -> Vec<FileOutcome> {
    // Built on first PDF so plain-text inputs never check for pdftotext.
    let mut extractor: Option<Box<dyn PdfExtractor>> = None;
    let mut outcomes = Vec::new();

    for file in input_files {
        tracing::info!("analyzing {} for {}", file.display(), year);
        let result = analyze_file(&file, year, backend, layout, &mut extractor);
        if let Err(e) = &result {
            tracing::debug!("{} failed: {}", file.display(), e);
        }
        outcomes.push(FileOutcome { file, result });
    }

    outcomes
}

fn analyze_file(
    path: &Path,
    year: YearLabel,
    backend: Backend,
    layout: bool,
    extractor: &mut Option<Box<dyn PdfExtractor>>,
) -> Result<MarginReport, SgaError> {
    if is_text_file(path) {
        let text = std::fs::read_to_string(path)?;
        return sgamargin_core::analyze_text(&text, year);
    }

    let pdf_bytes = std::fs::read(path)?;
    let extractor = extractor.get_or_insert_with(|| backend.build(layout));
    sgamargin_core::analyze_pdf(&pdf_bytes, &**extractor, year)
}

fn is_text_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("txt"))
        .unwrap_or(false)
}

/// Fail only when nothing could be analyzed. A single failing file returns
/// its own error.
fn into_exit_result(mut outcomes: Vec<FileOutcome>) -> Result<(), SgaError> {
    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed < outcomes.len() {
        return Ok(());
    }
    if outcomes.len() == 1 {
        if let Some(FileOutcome { result: Err(e), .. }) = outcomes.pop() {
            return Err(e);
        }
    }
    Err(SgaError::NothingAnalyzed { failed })
}
