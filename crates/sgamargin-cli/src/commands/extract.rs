use sgamargin_core::error::SgaError;
use sgamargin_core::extraction::Backend;
use std::path::PathBuf;

pub fn run(
    pdf_file: PathBuf,
    backend: &str,
    layout: bool,
    output_file: Option<PathBuf>,
) -> Result<(), SgaError> {
    let backend: Backend = backend.parse()?;
    let pdf_bytes = std::fs::read(&pdf_file)?;
    let extractor = backend.build(layout);
    let text = sgamargin_core::extract_text(&pdf_bytes, extractor.as_ref())?;

    match output_file {
        Some(path) => {
            std::fs::write(&path, &text)?;
            eprintln!(
                "Extracted {} line(s) with {}, written to {}",
                text.lines().count(),
                extractor.backend_name(),
                path.display()
            );
        }
        None => {
            print!("{text}");
        }
    }

    Ok(())
}
