//! Score to grade point arithmetic
//!
//! Pure functions mapping an exam score to a letter grade, a grade point and the
//! weighted points a course contributes to the CGPA numerator.

use crate::core::models::Grade;

/// Lowest valid exam score
pub const MIN_SCORE: f64 = 0.0;
/// Highest valid exam score
pub const MAX_SCORE: f64 = 100.0;
/// Lowest valid credit unit weight
pub const MIN_UNITS: i64 = 1;
/// Highest valid credit unit weight
pub const MAX_UNITS: i64 = 6;
/// Best grade point attainable on the scale
pub const MAX_GRADE_POINT: f64 = 5.0;

/// Lower bound of each band, best grade first. Bounds are inclusive.
const GRADE_BANDS: [(f64, Grade); 5] = [
    (70.0, Grade::A),
    (60.0, Grade::B),
    (50.0, Grade::C),
    (45.0, Grade::D),
    (40.0, Grade::E),
];

/// Letter grade for an exam score
///
/// Anything below 40 (including NaN) is an F.
#[must_use]
pub fn grade_for(score: f64) -> Grade {
    GRADE_BANDS
        .iter()
        .find(|(lower, _)| score >= *lower)
        .map_or(Grade::F, |(_, grade)| *grade)
}

/// Grade point for a letter grade
#[must_use]
pub const fn grade_point_for(grade: Grade) -> u32 {
    grade.point()
}

/// Weighted points a course contributes: `units * grade_point`
#[must_use]
pub const fn weighted_points(units: u32, grade_point: u32) -> u32 {
    units * grade_point
}

/// Whether `units` is an accepted credit weight
#[must_use]
pub fn units_in_range(units: i64) -> bool {
    (MIN_UNITS..=MAX_UNITS).contains(&units)
}

/// Whether `score` is an accepted exam score (NaN is not)
#[must_use]
pub fn score_in_range(score: f64) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&score)
}

/// Round to two decimal places using the exact binary value
///
/// A tie such as `3.125` rounds to even (`3.12`), the same result as Python's
/// `round(x, 2)`. Scaling by 100 first would round it up.
#[must_use]
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
