use serde::Serialize;
use sgamargin_core::error::SgaError;
use sgamargin_core::report::MarginReport;

use crate::commands::analyze::FileOutcome;

#[derive(Serialize)]
struct JsonOutcome<'a> {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<&'a MarginReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn print(outcomes: &[FileOutcome]) -> Result<(), SgaError> {
    if let Some(value) = to_json(outcomes)? {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}

/// A single file yields its bare report, or nothing when it failed (main
/// reports the error). Several files yield an array of per-file outcomes.
pub fn to_json(outcomes: &[FileOutcome]) -> Result<Option<serde_json::Value>, SgaError> {
    if let [single] = outcomes {
        return match &single.result {
            Ok(report) => Ok(Some(serde_json::to_value(report)?)),
            Err(_) => Ok(None),
        };
    }

    let entries: Vec<JsonOutcome> = outcomes
        .iter()
        .map(|o| JsonOutcome {
            file: o.file.display().to_string(),
            report: o.result.as_ref().ok(),
            error: o.result.as_ref().err().map(|e| e.to_string()),
        })
        .collect();

    Ok(Some(serde_json::to_value(&entries)?))
}
