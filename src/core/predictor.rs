//! Target CGPA prediction
//!
//! Answers "what average grade point do I need in my remaining units to finish
//! on a target CGPA?" from the current totals.

use crate::core::grading::{round2, MAX_GRADE_POINT};
use crate::core::stats::AcademicStats;
use crate::debug;
use std::fmt;

/// Average grade point needed over `remaining_units` to reach `target_cgpa`
///
/// Returns 0.0 when `remaining_units <= 0`. Otherwise the result is the raw
/// rounded value: it can exceed the 5.0 ceiling or be negative when the target
/// is already below what has been earned.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn predict(target_cgpa: f64, remaining_units: i64, current: &AcademicStats) -> f64 {
    if remaining_units <= 0 {
        return 0.0;
    }
    let remaining = remaining_units as f64;
    let required_total_wp = target_cgpa * (f64::from(current.total_units) + remaining);
    let needed_wp = required_total_wp - f64::from(current.total_weighted_points);
    round2(needed_wp / remaining)
}

/// How a required average compares with what the scale allows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feasibility {
    /// No remaining units were given, so there is nothing to plan
    NoRemainingUnits,
    /// The target is met even with zero grade points from here on
    AlreadySecured,
    /// The required average is attainable
    Achievable,
    /// The required average is above the maximum grade point
    Impossible,
}

/// A prediction with its verdict
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Requested CGPA
    pub target_cgpa: f64,
    /// Units still to be taken
    pub remaining_units: i64,
    /// Result of [`predict`]
    pub required_average: f64,
    /// Verdict on `required_average`
    pub feasibility: Feasibility,
}

impl Prediction {
    /// Run [`predict`] and classify the outcome
    #[must_use]
    pub fn evaluate(target_cgpa: f64, remaining_units: i64, current: &AcademicStats) -> Self {
        let required_average = predict(target_cgpa, remaining_units, current);
        let feasibility = if remaining_units <= 0 {
            Feasibility::NoRemainingUnits
        } else if required_average <= 0.0 {
            Feasibility::AlreadySecured
        } else if required_average > MAX_GRADE_POINT {
            Feasibility::Impossible
        } else {
            Feasibility::Achievable
        };
        debug!(
            "Target {target_cgpa} over {remaining_units} units from {}/{}: {required_average} ({feasibility:?})",
            current.total_weighted_points,
            current.total_units
        );
        Self {
            target_cgpa,
            remaining_units,
            required_average,
            feasibility,
        }
    }

    /// Whether the target can still be reached
    #[must_use]
    pub const fn is_attainable(&self) -> bool {
        !matches!(self.feasibility, Feasibility::Impossible)
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self.target_cgpa;
        let required = self.required_average;
        match self.feasibility {
            Feasibility::NoRemainingUnits => write!(
                f,
                "No remaining units to plan for; enter the units you still have to take."
            ),
            Feasibility::AlreadySecured => write!(
                f,
                "A {target:.2} CGPA is already secured (required average {required:.2})."
            ),
            Feasibility::Achievable => write!(
                f,
                "To achieve {target:.2} CGPA, you must maintain an average GPA of {required:.2} in your remaining units."
            ),
            Feasibility::Impossible => write!(
                f,
                "Warning: You need a GPA of {required:.2}. This is impossible on a {MAX_GRADE_POINT:.1} scale."
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(units: u32, wp: u32) -> AcademicStats {
        AcademicStats::from_totals(units, wp)
    }

    #[test]
    fn test_exact_maximum() {
        let stats = current(10, 40);
        assert!((stats.gpa - 4.0).abs() < f64::EPSILON);
        let required = predict(4.5, 10, &stats);
        assert!((required - 5.0).abs() < f64::EPSILON);

        let prediction = Prediction::evaluate(4.5, 10, &stats);
        assert_eq!(prediction.feasibility, Feasibility::Achievable);
    }

    #[test]
    fn test_zero_remaining_units() {
        for target in [0.0, 3.5, 5.0, 42.0] {
            assert!(predict(target, 0, &current(10, 40)).abs() < f64::EPSILON);
            assert!(predict(target, -4, &current(0, 0)).abs() < f64::EPSILON);
        }
        let prediction = Prediction::evaluate(4.0, 0, &current(10, 40));
        assert_eq!(prediction.feasibility, Feasibility::NoRemainingUnits);
    }

    #[test]
    fn test_no_history() {
        let required = predict(3.5, 20, &AcademicStats::default());
        assert!((required - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_impossible_target_is_not_clamped() {
        let prediction = Prediction::evaluate(4.9, 5, &current(30, 60));
        // 4.9 * 35 = 171.5, needed 111.5 over 5 units
        assert!((prediction.required_average - 22.3).abs() < 1e-9);
        assert_eq!(prediction.feasibility, Feasibility::Impossible);
        assert!(!prediction.is_attainable());
        assert!(prediction.to_string().contains("impossible"));
    }

    #[test]
    fn test_target_below_current_is_negative() {
        let prediction = Prediction::evaluate(2.0, 10, &current(30, 150));
        // 2.0 * 40 = 80, needed -70 over 10 units
        assert!((prediction.required_average + 7.0).abs() < 1e-9);
        assert_eq!(prediction.feasibility, Feasibility::AlreadySecured);
        assert!(prediction.is_attainable());
    }

    #[test]
    fn test_result_is_rounded() {
        let required = predict(3.0, 3, &current(7, 20));
        // 3.0 * 10 = 30, needed 10 over 3 units
        assert!((required - 3.33).abs() < 1e-9);
    }

    #[test]
    fn test_achievable_message() {
        let prediction = Prediction::evaluate(4.5, 10, &current(10, 40));
        assert_eq!(
            prediction.to_string(),
            "To achieve 4.50 CGPA, you must maintain an average GPA of 5.00 in your remaining units."
        );
    }

    #[test]
    fn test_tie_rounds_to_even() {
        // 0.625 * 8 = 5 over 8 units, exactly 0.625
        let required = predict(0.625, 8, &AcademicStats::default());
        assert!((required - 0.62).abs() < 1e-12);
    }
}
