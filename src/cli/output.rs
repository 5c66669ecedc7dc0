//! Output formatting for CLI commands.

use crate::cli::args::{BookwormArgs, OutputFormat};
use crate::error::Result;
use crate::report::BookReport;

/// Output a report in the format selected by the arguments.
pub fn output_report(report: &BookReport, args: &BookwormArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(report),
        OutputFormat::Json => output_json(report, args),
    }
}

/// Output the report in human-readable form.
fn output_human(report: &BookReport) -> Result<()> {
    print!("{}", format_report_human(report));
    Ok(())
}

/// Output the report as JSON.
fn output_json(report: &BookReport, args: &BookwormArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };

    println!("{json}");
    Ok(())
}

/// Render the report sections in their fixed order.
///
/// Length groups are printed longest first.
pub fn format_report_human(report: &BookReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total Words: {}\n", report.total_words));

    out.push_str("Most Frequent Words:\n");
    for entry in &report.frequent_words {
        out.push_str(&format!("  {}: {}\n", entry.word, entry.count));
    }

    out.push_str("Longest Words Grouped by Length:\n");
    for (length, words) in report.longest_words.iter().rev() {
        out.push_str(&format!("  {}: {}\n", length, words.join(", ")));
    }

    out.push_str("Longest Palindromes:\n");
    for word in &report.palindromes {
        out.push_str(&format!("  {word}\n"));
    }

    out
}
