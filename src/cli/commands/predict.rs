//! Predict command handler

use super::open_store;
use cgpa_planner::config::Config;
use cgpa_planner::core::input::{parse_remaining_units, parse_target_cgpa};
use cgpa_planner::core::predictor::{Feasibility, Prediction};
use cgpa_planner::{info, verbose};

/// Print the average grade point needed on the remaining units
///
/// # Errors
/// Returns the message for unparseable input or an unreadable record file.
pub fn run(config: &Config, target: &str, remaining_units: &str) -> Result<(), String> {
    let target = parse_target_cgpa(target).map_err(|e| e.to_string())?;
    let remaining_units = parse_remaining_units(remaining_units).map_err(|e| e.to_string())?;

    let store = open_store(config)?;
    let current = store.stats();
    verbose!(
        "Current CGPA {:.2} over {} units",
        current.gpa,
        current.total_units
    );

    let prediction = Prediction::evaluate(target, remaining_units, &current);
    info!(
        "Prediction for target {target} over {remaining_units} units: {:.2} ({:?})",
        prediction.required_average, prediction.feasibility
    );

    match prediction.feasibility {
        Feasibility::Impossible => eprintln!("{prediction}"),
        Feasibility::Achievable | Feasibility::AlreadySecured | Feasibility::NoRemainingUnits => {
            println!("{prediction}");
        }
    }
    Ok(())
}
