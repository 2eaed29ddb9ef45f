//! HTML report generator
//!
//! Generates self-contained result slips with embedded CSS and inline SVG
//! charts. The same output feeds PDF conversion.

use crate::core::report::visualization::SvgGenerator;
use crate::core::report::{ReportContext, ReportGenerator, SlipRow};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Template)]
#[template(path = "result_slip.html")]
struct HtmlSlip<'a> {
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

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        let slip = HtmlSlip {
            title: ctx.title(),
            student_name: ctx.student_name,
            rows: ctx.rows(),
            course_count: ctx.course_count(),
            total_units: ctx.stats.total_units,
            total_weighted_points: ctx.stats.total_weighted_points,
            gpa: ctx.gpa_display(),
            distribution_chart: SvgGenerator::grade_distribution(&ctx.distribution),
            trend_chart: SvgGenerator::performance_trend(&ctx.trend),
        };
        Ok(slip.render()?)
    }
}
