//! Aggregate statistics over the grade records
//!
//! Computes the CGPA and credit load, plus the two series the charts draw:
//! how often each grade occurs and the score of each course in entry order.

use crate::core::grading::round2;
use crate::core::models::{Grade, GradeRecord};
use serde::Serialize;

/// CGPA together with the sums it was computed from
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AcademicStats {
    /// Cumulative grade point average, rounded to two decimals
    pub gpa: f64,
    /// Sum of credit units
    pub total_units: u32,
    /// Sum of weighted points
    pub total_weighted_points: u32,
}

impl AcademicStats {
    /// Build stats from raw totals, computing the rounded GPA
    ///
    /// A zero unit total yields a GPA of 0.0.
    #[must_use]
    pub fn from_totals(total_units: u32, total_weighted_points: u32) -> Self {
        let gpa = if total_units == 0 {
            0.0
        } else {
            round2(f64::from(total_weighted_points) / f64::from(total_units))
        };
        Self {
            gpa,
            total_units,
            total_weighted_points,
        }
    }
}

/// Compute the CGPA, total units and total weighted points
///
/// An empty slice gives `(0.0, 0, 0)`.
#[must_use]
pub fn compute_stats(records: &[GradeRecord]) -> AcademicStats {
    let (units, weighted) = records.iter().fold((0u32, 0u32), |(u, w), r| {
        (u + r.units(), w + r.weighted_points())
    });
    AcademicStats::from_totals(units, weighted)
}

/// Number of courses per grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GradeDistribution {
    counts: [usize; 6],
}

impl GradeDistribution {
    /// Count for a single grade
    #[must_use]
    pub const fn count(&self, grade: Grade) -> usize {
        self.counts[grade.index()]
    }

    /// All six grades with their counts, A first
    pub fn iter(&self) -> impl Iterator<Item = (Grade, usize)> + '_ {
        Grade::ALL.iter().map(|g| (*g, self.count(*g)))
    }

    /// Total number of courses counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest single count, used to scale bar charts
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Count how many records fall in each grade
#[must_use]
pub fn grade_distribution(records: &[GradeRecord]) -> GradeDistribution {
    let mut distribution = GradeDistribution::default();
    for record in records {
        distribution.counts[record.grade().index()] += 1;
    }
    distribution
}

/// One point of the course-by-course performance trend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// 1-based position in entry order
    pub position: usize,
    /// Course code
    pub course_code: String,
    /// Exam score
    pub score: f64,
}

/// Scores in the order the courses were entered
#[must_use]
pub fn performance_trend(records: &[GradeRecord]) -> Vec<TrendPoint> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| TrendPoint {
            position: idx + 1,
            course_code: record.course_code().to_string(),
            score: record.score(),
        })
        .collect()
}
