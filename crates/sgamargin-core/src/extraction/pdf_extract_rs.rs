use crate::error::SgaError;
use crate::extraction::PdfExtractor;

/// Pure-Rust PDF extraction backend using the `pdf-extract` crate.
///
/// Needs no external binaries. Column alignment is not preserved, so values
/// may land on a different line than their label in some statements.
pub struct PdfExtractRsExtractor;

impl PdfExtractRsExtractor {
    pub fn new() -> Self {
        PdfExtractRsExtractor
    }
}

impl Default for PdfExtractRsExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for PdfExtractRsExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, SgaError> {
        pdf_extract::extract_text_from_mem(pdf_bytes).map_err(|e| {
            let msg = e.to_string();
            if msg.contains("decrypt") || msg.contains("password") || msg.contains("encrypt") {
                SgaError::Extraction(format!("PDF appears to be encrypted: {}", msg))
            } else {
                SgaError::Extraction(msg)
            }
        })
    }

    fn backend_name(&self) -> &str {
        "pdf-extract"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_an_extraction_error() {
        let err = PdfExtractRsExtractor::new()
            .extract_text(b"this is not a pdf")
            .unwrap_err();
        assert!(matches!(err, SgaError::Extraction(_)));
    }
}
