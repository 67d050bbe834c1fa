use crate::model::YearLabel;

#[derive(Debug, thiserror::Error)]
pub enum SgaError {
    #[error("PDF text extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux), or use --backend pdf-extract")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("no text content found in document")]
    NoText,

    #[error("Could not find Revenue for {year}")]
    RevenueNotFound { year: YearLabel },

    #[error("Could not find SG&A for {year}")]
    SgaNotFound { year: YearLabel },

    #[error("no statement could be analyzed ({failed} file(s) failed)")]
    NothingAnalyzed { failed: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
