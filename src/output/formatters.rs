//! Output formatting functionality
//!
//! This module provides formatters for different output formats.

use crate::error::{BannerError, Result};
use crate::models::summary::SyncResults;
use ansi_term::Colour::{Green, Red, Yellow};
use ansi_term::Style;

/// Format the batch result as human-readable text
pub fn format_results_text(results: &SyncResults, use_colors: bool, verbose: bool) -> String {
    let mut output = String::new();
    let summary = &results.summary;

    let headline = format!(
        "Files updated: {}, skipped: {}, errors: {}, total: {}",
        summary.updated, summary.skipped, summary.errors, summary.total
    );

    if summary.is_clean() {
        if use_colors {
            output.push_str(&format!("{}\n", Green.paint(headline)));
        } else {
            output.push_str(&format!("{}\n", headline));
        }
    } else {
        if use_colors {
            output.push_str(&format!("{}\n", Red.bold().paint(headline)));
        } else {
            output.push_str(&format!("{} [FAILED]\n", headline));
        }

        if let Some(log_file) = &summary.log_file {
            let note = format!("Error details written to {}", log_file.display());
            if use_colors {
                output.push_str(&format!("{}\n", Yellow.paint(note)));
            } else {
                output.push_str(&format!("{}\n", note));
            }
        }
    }

    if verbose {
        output.push('\n');
        for record in &results.files {
            let line = match &record.detail {
                Some(detail) => format!(
                    "  {} {} ({}/{}): {}",
                    record.outcome,
                    record.path.display(),
                    record.covered_line_count,
                    record.total_line_count,
                    detail
                ),
                None => format!(
                    "  {} {} ({}/{})",
                    record.outcome,
                    record.path.display(),
                    record.covered_line_count,
                    record.total_line_count
                ),
            };

            if use_colors {
                let styled = match record.outcome.as_str() {
                    "updated" => Green.paint(line).to_string(),
                    "error" => Red.paint(line).to_string(),
                    _ => Style::new().dimmed().paint(line).to_string(),
                };
                output.push_str(&format!("{}\n", styled));
            } else {
                output.push_str(&format!("{}\n", line));
            }
        }
    }

    output
}

/// Format the batch result as pretty-printed JSON
pub fn format_results_json(results: &SyncResults) -> Result<String> {
    let json = serde_json::to_string_pretty(results)?;
    Ok(format!("{}\n", json))
}

/// Format the per-file records as CSV
pub fn format_results_csv(results: &SyncResults) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record([
        "path",
        "covered_line_count",
        "total_line_count",
        "outcome",
        "detail",
    ])?;

    for record in &results.files {
        writer.write_record([
            record.path.display().to_string(),
            record.covered_line_count.to_string(),
            record.total_line_count.to_string(),
            record.outcome.clone(),
            record.detail.clone().unwrap_or_default(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| BannerError::config_error(format!("CSV writer error: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| BannerError::CsvSerialize { source: e })
}
