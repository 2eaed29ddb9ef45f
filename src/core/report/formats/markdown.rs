//! Markdown report generator
//!
//! Generates result slips in Markdown with embedded Mermaid charts. These
//! render well in GitHub, GitLab, and VS Code.

use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{ReportContext, ReportGenerator, SlipRow};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Template)]
#[template(path = "result_slip.md")]
struct MarkdownSlip<'a> {
    title: String,
    student_name: &'a str,
    rows: Vec<SlipRow>,
    course_count: usize,
    total_units: u32,
    total_weighted_points: u32,
    gpa: String,
    distribution_chart: String,
    trend_chart: String,
}

/// Escape pipes so a course code cannot split its table cell
fn escape_row(mut row: SlipRow) -> SlipRow {
    row.course_code = row.course_code.replace('|', "\\|");
    row
}

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let slip = MarkdownSlip {
            title: ctx.title(),
            student_name: ctx.student_name,
            rows: ctx.rows().into_iter().map(escape_row).collect(),
            course_count: ctx.course_count(),
            total_units: ctx.stats.total_units,
            total_weighted_points: ctx.stats.total_weighted_points,
            gpa: ctx.gpa_display(),
            distribution_chart: MermaidGenerator::grade_distribution(&ctx.distribution),
            trend_chart: MermaidGenerator::performance_trend(&ctx.trend),
        };
        let mut output = slip.render()?;
        if !output.ends_with('\n') {
            output.push('\n');
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::GradeRecord;

    #[test]
    fn test_render_table_and_summary() {
        let records = vec![
            GradeRecord::new("CVE311", 3, 75.0).unwrap(),
            GradeRecord::new("MTH201", 2, 62.5).unwrap(),
        ];
        let ctx = ReportContext::new("Ada Obi", "Bells University", &records);
        let output = MarkdownReporter::new().render(&ctx).unwrap();

        assert!(output.starts_with("# Bells University - Academic Result Slip\n"));
        assert!(output.contains("**Student:** Ada Obi"));
        assert!(output.contains("| CVE311 | 3 | 75 | A | 5 | 15 |\n"));
        assert!(output.contains("| MTH201 | 2 | 62.5 | B | 4 | 8 |\n"));
        assert!(output.contains("| **CGPA** | **4.60** |"));
        assert!(output.contains("```mermaid"));
    }

    #[test]
    fn test_pipe_in_course_code_is_escaped() {
        let records = vec![GradeRecord::new("A|B", 3, 75.0).unwrap()];
        let ctx = ReportContext::new("Ada", "", &records);
        let output = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(output.contains("| A\\|B | 3 | 75 | A | 5 | 15 |\n"));
    }

    #[test]
    fn test_render_empty() {
        let ctx = ReportContext::new("Ada", "", &[]);
        let output = MarkdownReporter::new().render(&ctx).unwrap();
        assert!(output.contains("_No courses recorded yet._"));
        assert!(output.contains("| **CGPA** | **0.00** |"));
        assert!(!output.contains("| Course Code |"));
    }
}
