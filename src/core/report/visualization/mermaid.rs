//! Mermaid chart generator for result slips
//!
//! Generates `xychart-beta` blocks that can be embedded in Markdown files
//! and rendered by GitHub, GitLab, and other Markdown viewers.

use crate::core::stats::{GradeDistribution, TrendPoint};
use std::fmt::Write;

/// Shown instead of a chart when there is nothing to plot
pub const NO_DATA: &str = "_No courses recorded yet._";

/// Generator for Mermaid chart syntax
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Bar chart of how many courses earned each grade
    #[must_use]
    pub fn grade_distribution(distribution: &GradeDistribution) -> String {
        if distribution.total() == 0 {
            return NO_DATA.to_string();
        }

        let labels: Vec<String> = distribution.iter().map(|(g, _)| g.to_string()).collect();
        let counts: Vec<String> = distribution.iter().map(|(_, c)| c.to_string()).collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        let _ = writeln!(output, "    title \"Grade Frequency Distribution\"");
        let _ = writeln!(output, "    x-axis [{}]", labels.join(", "));
        let _ = writeln!(
            output,
            "    y-axis \"Courses\" 0 --> {}",
            distribution.max_count()
        );
        let _ = writeln!(output, "    bar [{}]", counts.join(", "));
        output.push_str("```\n");
        output
    }

    /// Line chart of scores in the order courses were added
    #[must_use]
    pub fn performance_trend(trend: &[TrendPoint]) -> String {
        if trend.is_empty() {
            return NO_DATA.to_string();
        }

        let positions: Vec<String> = trend.iter().map(|p| p.position.to_string()).collect();
        let scores: Vec<String> = trend.iter().map(|p| p.score.to_string()).collect();

        let mut output = String::from("```mermaid\nxychart-beta\n");
        let _ = writeln!(output, "    title \"Performance Trend (Course by Course)\"");
        let _ = writeln!(
            output,
            "    x-axis \"Courses Added\" [{}]",
            positions.join(", ")
        );
        let _ = writeln!(output, "    y-axis \"Score\" 0 --> 100");
        let _ = writeln!(output, "    line [{}]", scores.join(", "));
        output.push_str("```\n");
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::GradeRecord;
    use crate::core::stats::{grade_distribution, performance_trend};

    fn records() -> Vec<GradeRecord> {
        vec![
            GradeRecord::new("CVE311", 3, 75.0).unwrap(),
            GradeRecord::new("CVE313", 4, 55.0).unwrap(),
            GradeRecord::new("MTH201", 2, 62.5).unwrap(),
        ]
    }

    #[test]
    fn test_distribution_chart() {
        let chart = MermaidGenerator::grade_distribution(&grade_distribution(&records()));
        assert!(chart.starts_with("```mermaid\nxychart-beta\n"));
        assert!(chart.contains("x-axis [A, B, C, D, E, F]"));
        assert!(chart.contains("y-axis \"Courses\" 0 --> 1"));
        assert!(chart.contains("bar [1, 1, 1, 0, 0, 0]"));
        assert!(chart.ends_with("```\n"));
    }

    #[test]
    fn test_trend_chart() {
        let chart = MermaidGenerator::performance_trend(&performance_trend(&records()));
        assert!(chart.contains("x-axis \"Courses Added\" [1, 2, 3]"));
        assert!(chart.contains("line [75, 55, 62.5]"));
    }

    #[test]
    fn test_empty_charts() {
        assert_eq!(
            MermaidGenerator::grade_distribution(&grade_distribution(&[])),
            NO_DATA
        );
        assert_eq!(MermaidGenerator::performance_trend(&[]), NO_DATA);
    }
}
