//! CSV Output

use crate::report::Report;

const HEADER: &str = "rank,name,status,mean_ns,std_dev_ns,total_ns,samples,failures";

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Generate a CSV table with one row per function, fastest first
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::from(HEADER);
    output.push('\n');

    for result in &report.results {
        let status = match result.status {
            crate::FunctionStatus::Passed => "passed",
            crate::FunctionStatus::Failed => "failed",
            crate::FunctionStatus::Pending => "pending",
        };
        output.push_str(&format!(
            "{},{},{},{:.2},{:.2},{},{},{}\n",
            result.rank,
            escape(&result.name),
            status,
            result.metrics.mean_ns,
            result.metrics.std_dev_ns,
            result.metrics.total_ns,
            result.metrics.samples,
            result.failures
        ));
    }

    output
}
