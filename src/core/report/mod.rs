//! Result slip generation
//!
//! This module renders a student's grade records into a result slip in
//! Markdown, HTML, or PDF, including the grade frequency and performance
//! trend charts.

pub mod formats;
pub mod visualization;

use crate::core::models::GradeRecord;
use crate::core::stats::{self, AcademicStats, GradeDistribution, TrendPoint};
use crate::info;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

pub use formats::{HtmlReporter, MarkdownReporter, PdfReporter, ReportFormat};
pub use visualization::{MermaidGenerator, SvgGenerator};

/// File name (without extension) every exported slip is written to
pub const REPORT_FILE_STEM: &str = "result_slip";

/// Heading used when no institution is configured
pub const SLIP_TITLE: &str = "Academic Result Slip";

/// Data context for report generation
///
/// Aggregates everything a template needs so the individual formats only
/// decide how to lay it out.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Name printed on the slip
    pub student_name: &'a str,
    /// Institution shown in the heading, may be empty
    pub institution: &'a str,
    /// Records in entry order
    pub records: &'a [GradeRecord],
    /// Cumulative totals
    pub stats: AcademicStats,
    /// Courses per grade
    pub distribution: GradeDistribution,
    /// Score by course position
    pub trend: Vec<TrendPoint>,
}

impl<'a> ReportContext<'a> {
    /// Build a context, computing stats and chart data from `records`
    #[must_use]
    pub fn new(student_name: &'a str, institution: &'a str, records: &'a [GradeRecord]) -> Self {
        Self {
            student_name,
            institution,
            records,
            stats: stats::compute_stats(records),
            distribution: stats::grade_distribution(records),
            trend: stats::performance_trend(records),
        }
    }

    /// Slip heading, prefixed with the institution when one is set
    #[must_use]
    pub fn title(&self) -> String {
        let institution = self.institution.trim();
        if institution.is_empty() {
            SLIP_TITLE.to_string()
        } else {
            format!("{institution} - {SLIP_TITLE}")
        }
    }

    /// CGPA with two decimals
    #[must_use]
    pub fn gpa_display(&self) -> String {
        format!("{:.2}", self.stats.gpa)
    }

    /// Get course count
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.records.len()
    }

    /// One display row per record
    #[must_use]
    pub fn rows(&self) -> Vec<SlipRow> {
        self.records.iter().map(SlipRow::from).collect()
    }
}

/// A record pre-formatted for templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlipRow {
    /// Course code
    pub course_code: String,
    /// Credit units
    pub units: u32,
    /// Score without trailing zeros
    pub score: String,
    /// Grade letter
    pub grade: char,
    /// Grade point
    pub grade_point: u32,
    /// Weighted points
    pub weighted_points: u32,
}

impl From<&GradeRecord> for SlipRow {
    fn from(record: &GradeRecord) -> Self {
        Self {
            course_code: record.course_code().to_string(),
            units: record.units(),
            score: record.score().to_string(),
            grade: record.grade().letter(),
            grade_point: record.grade_point(),
            weighted_points: record.weighted_points(),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// What to put on the slip and how to write it
#[derive(Debug, Clone, Copy)]
pub struct ReportRequest<'a> {
    /// Name printed on the slip
    pub student_name: &'a str,
    /// Institution shown in the heading
    pub institution: &'a str,
    /// Output format
    pub format: ReportFormat,
    /// Browser used for PDF conversion, auto-detected when `None`
    pub pdf_converter: Option<&'a str>,
}

/// Path a slip of `format` is exported to inside `reports_dir`
#[must_use]
pub fn report_path(reports_dir: &Path, format: ReportFormat) -> PathBuf {
    reports_dir.join(format!("{REPORT_FILE_STEM}.{}", format.extension()))
}

/// Write the slip for `records` to `reports_dir/result_slip.<ext>`
///
/// An existing slip of the same format is overwritten.
///
/// # Errors
/// Returns an error if the directory cannot be created or rendering fails
pub fn export_report(
    records: &[GradeRecord],
    request: &ReportRequest,
    reports_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = report_path(reports_dir, request.format);
    write_report(records, request, &path)?;
    Ok(path)
}

/// Write the slip for `records` to an explicit path
///
/// # Errors
/// Returns an error if the parent directory cannot be created or rendering fails
pub fn write_report(
    records: &[GradeRecord],
    request: &ReportRequest,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let ctx = ReportContext::new(request.student_name, request.institution, records);
    let reporter = request.format.reporter(request.pdf_converter);
    reporter.generate(&ctx, output_path)?;

    info!(
        "Wrote {} result slip for {} course(s) to {}",
        request.format,
        ctx.course_count(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_with_and_without_institution() {
        let ctx = ReportContext::new("Ada", "Bells University", &[]);
        assert_eq!(ctx.title(), "Bells University - Academic Result Slip");

        let ctx = ReportContext::new("Ada", "  ", &[]);
        assert_eq!(ctx.title(), SLIP_TITLE);
    }

    #[test]
    fn test_context_computes_stats() {
        let records = vec![
            GradeRecord::new("CVE311", 3, 75.0).unwrap(),
            GradeRecord::new("CVE313", 4, 55.0).unwrap(),
        ];
        let ctx = ReportContext::new("Ada", "", &records);
        assert_eq!(ctx.gpa_display(), "3.86");
        assert_eq!(ctx.course_count(), 2);
        assert_eq!(ctx.trend.len(), 2);
        assert_eq!(ctx.distribution.total(), 2);
    }

    #[test]
    fn test_slip_row_formatting() {
        let record = GradeRecord::new("mth201", 2, 62.5).unwrap();
        let row = SlipRow::from(&record);
        assert_eq!(row.course_code, "MTH201");
        assert_eq!(row.score, "62.5");
        assert_eq!(row.grade, 'B');
        assert_eq!(row.weighted_points, 8);
    }

    #[test]
    fn test_report_path() {
        let path = report_path(Path::new("out"), ReportFormat::Pdf);
        assert_eq!(path, Path::new("out").join("result_slip.pdf"));
    }
}
