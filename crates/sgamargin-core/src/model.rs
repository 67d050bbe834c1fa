use serde::{Deserialize, Serialize};
use std::fmt;

/// Value recorded for a line item that was not found or had no numeric token.
pub const NOT_FOUND: f64 = -1.0;

/// Fiscal year column selector, most recent (projected) first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearLabel {
    #[default]
    #[serde(rename = "2026E")]
    Y2026E,
    #[serde(rename = "2025E")]
    Y2025E,
    #[serde(rename = "2024A")]
    Y2024A,
    #[serde(rename = "2023A")]
    Y2023A,
    #[serde(rename = "2022A")]
    Y2022A,
}

impl YearLabel {
    /// All labels in selector order; position equals `index()`.
    pub const ALL: [YearLabel; 5] = [
        YearLabel::Y2026E,
        YearLabel::Y2025E,
        YearLabel::Y2024A,
        YearLabel::Y2023A,
        YearLabel::Y2022A,
    ];

    /// Map a label string to a `YearLabel`.
    ///
    /// Never fails: anything outside the fixed set falls back to the
    /// default label (`2026E`).
    pub fn from_str_loose(s: &str) -> YearLabel {
        match s.trim() {
            "2026E" => YearLabel::Y2026E,
            "2025E" => YearLabel::Y2025E,
            "2024A" => YearLabel::Y2024A,
            "2023A" => YearLabel::Y2023A,
            "2022A" => YearLabel::Y2022A,
            _ => YearLabel::default(),
        }
    }

    /// Zero-based column position, 0 = 2026E ... 4 = 2022A.
    pub fn index(self) -> usize {
        match self {
            YearLabel::Y2026E => 0,
            YearLabel::Y2025E => 1,
            YearLabel::Y2024A => 2,
            YearLabel::Y2023A => 3,
            YearLabel::Y2022A => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            YearLabel::Y2026E => "2026E",
            YearLabel::Y2025E => "2025E",
            YearLabel::Y2024A => "2024A",
            YearLabel::Y2023A => "2023A",
            YearLabel::Y2022A => "2022A",
        }
    }

    pub fn fiscal_year(self) -> u16 {
        match self {
            YearLabel::Y2026E => 2026,
            YearLabel::Y2025E => 2025,
            YearLabel::Y2024A => 2024,
            YearLabel::Y2023A => 2023,
            YearLabel::Y2022A => 2022,
        }
    }

    /// True for projected (`E`) columns, false for reported actuals (`A`).
    pub fn is_estimate(self) -> bool {
        self.as_str().ends_with('E')
    }
}

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Revenue,
    Sga,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Revenue => write!(f, "Revenue"),
            LineKind::Sga => write!(f, "SG&A"),
        }
    }
}

/// Where a line item value came from in the document text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineEvidence {
    /// 1-based line number within the whole text.
    pub line_number: usize,
    /// 1-based page number, advanced by form feeds.
    pub page_number: usize,
    /// The trimmed line as it was matched.
    pub text: String,
    /// Token the value was parsed from, if any token parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Revenue and SG&A values found in a document, `NOT_FOUND` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialLines {
    pub revenue: f64,
    pub sga: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_line: Option<LineEvidence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sga_line: Option<LineEvidence>,
}

impl Default for FinancialLines {
    fn default() -> Self {
        FinancialLines {
            revenue: NOT_FOUND,
            sga: NOT_FOUND,
            revenue_line: None,
            sga_line: None,
        }
    }
}
