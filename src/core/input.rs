//! Parsing of raw text field values
//!
//! Front ends hand over whatever the user typed. Units are integers, scores and
//! targets may be fractional. Nothing here touches the record store.

use crate::core::error::InvalidInputError;
use crate::core::grading;

/// A validated course entry ready for [`RecordStore::add`](crate::core::store::RecordStore::add)
#[derive(Debug, Clone, PartialEq)]
pub struct CourseEntry {
    /// Course code as typed
    pub course_code: String,
    /// Credit units, within `1..=6`
    pub units: i64,
    /// Exam score, within `0..=100`
    pub score: f64,
}

fn parse_integer(field: &'static str, raw: &str) -> Result<i64, InvalidInputError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| InvalidInputError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

fn parse_decimal(field: &'static str, raw: &str) -> Result<f64, InvalidInputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| InvalidInputError::NotANumber {
            field,
            value: raw.to_string(),
        })
}

/// Parse credit units (integer only; range is checked separately)
///
/// # Errors
/// Returns `NotANumber` if the text is not an integer.
pub fn parse_units(raw: &str) -> Result<i64, InvalidInputError> {
    parse_integer("credit unit count", raw)
}

/// Parse an exam score (range is checked separately)
///
/// # Errors
/// Returns `NotANumber` if the text is not a finite number.
pub fn parse_score(raw: &str) -> Result<f64, InvalidInputError> {
    parse_decimal("score", raw)
}

/// Parse a target CGPA
///
/// # Errors
/// Returns `NotANumber` if the text is not a finite number.
pub fn parse_target_cgpa(raw: &str) -> Result<f64, InvalidInputError> {
    parse_decimal("target CGPA", raw)
}

/// Parse the number of remaining credit units
///
/// # Errors
/// Returns `NotANumber` if the text is not an integer.
pub fn parse_remaining_units(raw: &str) -> Result<i64, InvalidInputError> {
    parse_integer("remaining unit count", raw)
}

/// Parse and range-check the three fields of a new course
///
/// # Errors
/// Returns the first parse or range error encountered.
pub fn parse_course_entry(
    course_code: &str,
    units: &str,
    score: &str,
) -> Result<CourseEntry, InvalidInputError> {
    let units = parse_units(units)?;
    let score = parse_score(score)?;

    if !grading::units_in_range(units) {
        return Err(InvalidInputError::UnitsOutOfRange(units));
    }
    if !grading::score_in_range(score) {
        return Err(InvalidInputError::ScoreOutOfRange(score));
    }

    Ok(CourseEntry {
        course_code: course_code.to_string(),
        units,
        score,
    })
}
