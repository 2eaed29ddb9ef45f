//! Grade record model

use crate::core::error::InvalidInputError;
use crate::core::grading::{self, grade_for, grade_point_for, weighted_points};
use crate::core::models::Grade;
use serde::Serialize;

/// One graded course
///
/// The grade, grade point and weighted points are derived from the score and
/// units when the record is created and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRecord {
    course_code: String,
    units: u32,
    score: f64,
    grade: Grade,
    grade_point: u32,
    weighted_points: u32,
}

impl GradeRecord {
    /// Create a record from user input
    ///
    /// The course code is trimmed and uppercased.
    ///
    /// # Errors
    /// Returns an error if `units` is outside `1..=6` or `score` outside `0..=100`.
    pub fn new(course_code: &str, units: i64, score: f64) -> Result<Self, InvalidInputError> {
        if !grading::units_in_range(units) {
            return Err(InvalidInputError::UnitsOutOfRange(units));
        }
        if !grading::score_in_range(score) {
            return Err(InvalidInputError::ScoreOutOfRange(score));
        }
        let units = u32::try_from(units).map_err(|_| InvalidInputError::UnitsOutOfRange(units))?;

        let grade = grade_for(score);
        let grade_point = grade_point_for(grade);
        Ok(Self {
            course_code: normalize_course_code(course_code),
            units,
            score,
            grade,
            grade_point,
            weighted_points: weighted_points(units, grade_point),
        })
    }

    /// Course code, uppercased (e.g., "CVE311")
    #[must_use]
    pub fn course_code(&self) -> &str {
        &self.course_code
    }

    /// Credit units
    #[must_use]
    pub const fn units(&self) -> u32 {
        self.units
    }

    /// Exam score
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.score
    }

    /// Letter grade
    #[must_use]
    pub const fn grade(&self) -> Grade {
        self.grade
    }

    /// Grade point (0-5)
    #[must_use]
    pub const fn grade_point(&self) -> u32 {
        self.grade_point
    }

    /// Units multiplied by grade point
    #[must_use]
    pub const fn weighted_points(&self) -> u32 {
        self.weighted_points
    }
}

/// Trim and uppercase a course code
#[must_use]
pub fn normalize_course_code(code: &str) -> String {
    code.trim().to_uppercase()
}
