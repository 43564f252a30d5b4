//! Terminal output for the command line front end.

use crate::models::{Alert, Severity};
use crate::processing::GenerationSummary;
use colored::Colorize;
use std::path::PathBuf;

/// One alert as a single uncoloured line, severity right-aligned.
///
/// # Arguments
/// * `alert` - The alert to format
///
/// # Returns
/// e.g. `  Error VirtualMachine 'vm01' - Target Storage Account ...`
pub fn alert_line(alert: &Alert) -> String {
    format!(
        "{severity:>7} {subject} - {message}",
        severity = alert.severity.to_string(),
        subject = alert.subject,
        message = alert.message
    )
}

/// Print alerts, errors in red and warnings in yellow.
pub fn print_alerts(alerts: &[Alert]) {
    for alert in alerts {
        let line = alert_line(alert);
        match alert.severity {
            Severity::Error => println!("{}", line.red()),
            Severity::Warning => println!("{}", line.yellow()),
        }
    }
}

/// Print the run summary and the files that were written.
pub fn print_summary(summary: &GenerationSummary, written: &[PathBuf]) {
    println!(
        "#{}# resources={} parameters={} copies={} errors={} warnings={}",
        "DONE".on_green(),
        summary.resources,
        summary.parameters,
        summary.copy_blob_details,
        summary.errors,
        summary.warnings
    );
    for path in written {
        println!("  wrote {}", path.display());
    }
    if summary.errors > 0 {
        println!(
            "#{}# Resolve the errors above before deploying the template",
            "NOTE".on_red()
        );
    }
}
