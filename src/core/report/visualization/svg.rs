//! Inline SVG charts for HTML result slips

use crate::core::stats::{GradeDistribution, TrendPoint};
use std::fmt::Write;

const WIDTH: f64 = 420.0;
const HEIGHT: f64 = 240.0;
const LEFT: f64 = 40.0;
const RIGHT: f64 = 20.0;
const TOP: f64 = 30.0;
const BOTTOM: f64 = 40.0;
const PLOT_HEIGHT: f64 = HEIGHT - TOP - BOTTOM;
const PLOT_WIDTH: f64 = WIDTH - LEFT - RIGHT;

/// Palette for bars, best grade first
const BAR_COLORS: [&str; 6] = [
    "#440154", "#414487", "#2a788e", "#22a884", "#7ad151", "#fde725",
];

/// Generator for self-contained SVG chart markup
pub struct SvgGenerator;

impl SvgGenerator {
    /// Bar chart of how many courses earned each grade
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn grade_distribution(distribution: &GradeDistribution) -> String {
        let mut svg = Self::open("Grade Frequency Distribution");
        let max = distribution.max_count().max(1) as f64;
        let slot = PLOT_WIDTH / 6.0;
        let bar_width = slot * 0.6;

        for (idx, (grade, count)) in distribution.iter().enumerate() {
            let height = count as f64 / max * PLOT_HEIGHT;
            let x = (idx as f64).mul_add(slot, LEFT + (slot - bar_width) / 2.0);
            let y = TOP + PLOT_HEIGHT - height;
            let _ = writeln!(
                svg,
                "  <rect class=\"bar\" x=\"{x:.1}\" y=\"{y:.1}\" width=\"{bar_width:.1}\" height=\"{height:.1}\" fill=\"{}\"><title>{grade}: {count}</title></rect>",
                BAR_COLORS[grade.index()]
            );
            let _ = writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">{grade}</text>",
                x + bar_width / 2.0,
                HEIGHT - BOTTOM + 18.0
            );
            if count > 0 {
                let _ = writeln!(
                    svg,
                    "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" class=\"count\">{count}</text>",
                    x + bar_width / 2.0,
                    y - 4.0
                );
            }
        }

        Self::axis(&mut svg);
        svg.push_str("</svg>\n");
        svg
    }

    /// Line chart of scores (0-100) in the order courses were added
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn performance_trend(trend: &[TrendPoint]) -> String {
        let mut svg = Self::open("Performance Trend (Course by Course)");
        let step = if trend.len() > 1 {
            PLOT_WIDTH / (trend.len() - 1) as f64
        } else {
            0.0
        };
        let x_for = |position: usize| {
            if trend.len() > 1 {
                (position - 1) as f64 * step + LEFT
            } else {
                LEFT + PLOT_WIDTH / 2.0
            }
        };
        let y_for = |score: f64| TOP + PLOT_HEIGHT - score / 100.0 * PLOT_HEIGHT;

        let points: Vec<String> = trend
            .iter()
            .map(|p| format!("{:.1},{:.1}", x_for(p.position), y_for(p.score)))
            .collect();
        if points.len() > 1 {
            let _ = writeln!(
                svg,
                "  <polyline class=\"trend\" fill=\"none\" stroke=\"#3b82f6\" stroke-width=\"2\" points=\"{}\"/>",
                points.join(" ")
            );
        }
        for point in trend {
            let _ = writeln!(
                svg,
                "  <circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"#3b82f6\"><title>{}: {}</title></circle>",
                x_for(point.position),
                y_for(point.score),
                escape(&point.course_code),
                point.score
            );
        }

        Self::axis(&mut svg);
        let _ = writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\">Courses Added</text>",
            LEFT + PLOT_WIDTH / 2.0,
            HEIGHT - 8.0
        );
        svg.push_str("</svg>\n");
        svg
    }

    fn open(title: &str) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" class=\"chart\" viewBox=\"0 0 {WIDTH} {HEIGHT}\" role=\"img\" aria-label=\"{title}\">"
        );
        let _ = writeln!(
            svg,
            "  <text x=\"{:.1}\" y=\"18\" text-anchor=\"middle\" class=\"chart-title\">{title}</text>",
            WIDTH / 2.0
        );
        svg
    }

    fn axis(svg: &mut String) {
        let base = TOP + PLOT_HEIGHT;
        let _ = writeln!(
            svg,
            "  <line class=\"axis\" x1=\"{LEFT}\" y1=\"{base}\" x2=\"{:.1}\" y2=\"{base}\" stroke=\"#64748b\"/>",
            WIDTH - RIGHT
        );
        let _ = writeln!(
            svg,
            "  <line class=\"axis\" x1=\"{LEFT}\" y1=\"{TOP}\" x2=\"{LEFT}\" y2=\"{base}\" stroke=\"#64748b\"/>"
        );
    }
}

/// Escape text placed inside SVG elements
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
