//! Report command handler
//!
//! Exports the result slip in Markdown, HTML or PDF.

use super::open_store;
use cgpa_planner::config::Config;
use cgpa_planner::core::report::{export_report, write_report, ReportFormat, ReportRequest};
use cgpa_planner::{error, warn};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `config` - Effective configuration (student name, paths, converter)
/// * `format_str` - Report format (markdown, html, pdf)
/// * `output` - Optional explicit output path
/// * `pdf_converter` - Optional browser overriding config `pdf_converter`
///
/// # Errors
/// Returns a message if the format is unknown, records cannot be loaded or
/// the slip cannot be written.
pub fn run(
    config: &Config,
    format_str: &str,
    output: Option<&Path>,
    pdf_converter: Option<&str>,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str)?;
    let store = open_store(config)?;
    if store.is_empty() {
        warn!("Exporting a result slip with no recorded courses");
    }

    let request = ReportRequest {
        student_name: &config.report.student_name,
        institution: &config.report.institution,
        format,
        pdf_converter: pdf_converter.or_else(|| config.pdf_converter()),
    };

    let written: Result<PathBuf, _> = match output {
        Some(path) => write_report(store.all(), &request, path).map(|()| path.to_path_buf()),
        None => export_report(
            store.all(),
            &request,
            Path::new(&config.paths.reports_dir),
        ),
    };

    match written {
        Ok(path) => {
            println!("✓ Result slip generated: {}", path.display());
            Ok(())
        }
        Err(err) => {
            error!("Result slip export failed: {err}");
            Err(err.to_string())
        }
    }
}
