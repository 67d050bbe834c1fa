pub mod pdf_extract_rs;
pub mod pdftotext;

use crate::error::SgaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract the document text from PDF bytes. Pages are separated by form
    /// feeds where the backend reports them.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, SgaError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Selectable extraction backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// pdftotext when installed, otherwise pdf-extract.
    #[default]
    Auto,
    Pdftotext,
    PdfExtract,
}

impl Backend {
    pub const NAMES: &'static [&'static str] = &["auto", "pdftotext", "pdf-extract"];

    /// Build the extractor for this backend. `layout` only affects pdftotext.
    pub fn build(self, layout: bool) -> Box<dyn PdfExtractor> {
        match self {
            Backend::Pdftotext => Box::new(pdftotext::PdftotextExtractor::with_layout(layout)),
            Backend::PdfExtract => Box::new(pdf_extract_rs::PdfExtractRsExtractor::new()),
            Backend::Auto => {
                if pdftotext::PdftotextExtractor::is_available() {
                    Box::new(pdftotext::PdftotextExtractor::with_layout(layout))
                } else {
                    tracing::info!("pdftotext not available, falling back to pdf-extract");
                    Box::new(pdf_extract_rs::PdfExtractRsExtractor::new())
                }
            }
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Auto => write!(f, "auto"),
            Backend::Pdftotext => write!(f, "pdftotext"),
            Backend::PdfExtract => write!(f, "pdf-extract"),
        }
    }
}

impl FromStr for Backend {
    type Err = SgaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Backend::Auto),
            "pdftotext" | "poppler" => Ok(Backend::Pdftotext),
            "pdf-extract" | "pdf_extract" => Ok(Backend::PdfExtract),
            other => Err(SgaError::Extraction(format!(
                "unknown backend '{}'. Available: {}",
                other,
                Backend::NAMES.join(", ")
            ))),
        }
    }
}
