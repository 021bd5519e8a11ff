#![warn(missing_docs)]
//! RankBench Report - Reporting
//!
//! Generates various output formats:
//! - Human-readable text (the runner's `Display` form)
//! - JSON (machine-readable)
//! - CSV (spreadsheet-compatible)

mod csv;
mod formatting;
mod json;
mod report;

pub use csv::generate_csv_report;
pub use formatting::{NO_BENCHMARK_MESSAGE, format_human_output};
pub use json::generate_json_report;
pub use report::{
    FunctionMetrics, FunctionResult, FunctionStatus, RankedEntry, Report, ReportConfig,
    ReportMeta, ReportSummary, SCHEMA_VERSION,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON with full schema
    Json,
    /// CSV for spreadsheets
    Csv,
    /// Human-readable terminal output
    Human,
}

impl OutputFormat {
    /// Conventional file extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Human => "txt",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "human" | "text" => Ok(OutputFormat::Human),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("CSV".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_extension() {
        assert_eq!(OutputFormat::Json.extension(), "json");
        assert_eq!(OutputFormat::Csv.extension(), "csv");
        assert_eq!(OutputFormat::Human.extension(), "txt");
    }
}
