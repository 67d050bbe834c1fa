use crate::error::SgaError;
use crate::extraction::PdfExtractor;
use std::io::Write;
use std::process::Command;

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// With `layout` set it runs `pdftotext -layout`, which keeps a statement's
/// columns on the same line as their row label.
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn with_layout(layout: bool) -> Self {
        PdftotextExtractor { layout }
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    fn args(&self, pdf_path: &std::path::Path) -> Vec<std::ffi::OsString> {
        let mut args = Vec::new();
        if self.layout {
            args.push("-layout".into());
        }
        args.push(pdf_path.as_os_str().to_owned());
        args.push("-".into()); // output to stdout
        args
    }
}

impl PdfExtractor for PdftotextExtractor {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, SgaError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| SgaError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| SgaError::Extraction(e.to_string()))?;

        tracing::debug!(layout = self.layout, "running pdftotext");

        let output = Command::new("pdftotext")
            .args(self.args(tmpfile.path()))
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SgaError::PdftotextNotFound
                } else {
                    SgaError::Extraction(format!("pdftotext failed: {}", e))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(SgaError::PdftotextFailed { code, stderr });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn arg_strings(extractor: &PdftotextExtractor, path: &str) -> Vec<String> {
        extractor
            .args(Path::new(path))
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_layout_args() {
        let args = arg_strings(&PdftotextExtractor::with_layout(true), "/tmp/statement.pdf");
        assert_eq!(args, ["-layout", "/tmp/statement.pdf", "-"]);
    }

    #[test]
    fn test_raw_order_args() {
        let args = arg_strings(&PdftotextExtractor::with_layout(false), "a.pdf");
        assert_eq!(args, ["a.pdf", "-"]);
    }
}
