use sgamargin_core::error::SgaError;
use sgamargin_core::model::YearLabel;

pub fn list() -> Result<(), SgaError> {
    println!("Fiscal year labels:\n");
    for year in YearLabel::ALL {
        let kind = if year.is_estimate() {
            "estimate"
        } else {
            "actual"
        };
        let default_marker = if year == YearLabel::default() {
            " (default)"
        } else {
            ""
        };
        println!(
            "  {}  FY{}  column {}  {}{}",
            year,
            year.fiscal_year(),
            year.index(),
            kind,
            default_marker
        );
    }
    Ok(())
}
