//! Record command handlers: `add`, `list` and `stats`

use super::open_store;
use cgpa_planner::config::Config;
use cgpa_planner::core::input::parse_course_entry;
use cgpa_planner::core::models::GradeRecord;
use cgpa_planner::core::stats::{grade_distribution, performance_trend, AcademicStats};
use cgpa_planner::verbose;
use comfy_table::{Cell, Table};

/// Widest bar drawn by `stats`
const BAR_WIDTH: usize = 30;

/// Validate raw field values and append the course
///
/// # Errors
/// Returns the validation or storage error message; the store is unchanged.
pub fn add(config: &Config, course_code: &str, units: &str, score: &str) -> Result<(), String> {
    let entry = parse_course_entry(course_code, units, score).map_err(|e| e.to_string())?;
    let mut store = open_store(config)?;

    let added = store
        .add(&entry.course_code, entry.units, entry.score)
        .map_err(|e| e.to_string())?;
    println!(
        "✓ Added {}: {} units, score {} → grade {} ({} GP, {} WP)",
        added.course_code(),
        added.units(),
        added.score(),
        added.grade(),
        added.grade_point(),
        added.weighted_points()
    );
    verbose!("Saved to {}", store.path().display());

    print_summary(&store.stats());
    Ok(())
}

/// Print every record as a table followed by the CGPA
///
/// # Errors
/// Returns the storage error message if the record file cannot be loaded.
pub fn list(config: &Config) -> Result<(), String> {
    let store = open_store(config)?;
    if store.is_empty() {
        println!("No courses recorded yet.");
        return Ok(());
    }

    println!("{}", records_table(store.all()));
    print_summary(&store.stats());
    Ok(())
}

/// Print totals, grade distribution and performance trend
///
/// # Errors
/// Returns the storage error message if the record file cannot be loaded.
pub fn stats(config: &Config) -> Result<(), String> {
    let store = open_store(config)?;
    let records = store.all();
    let stats = store.stats();

    println!("\n=== Academic Summary ===\n");
    println!("Courses:               {}", records.len());
    println!("Total units:           {}", stats.total_units);
    println!("Total weighted points: {}", stats.total_weighted_points);
    println!("CGPA:                  {:.2}", stats.gpa);

    if records.is_empty() {
        return Ok(());
    }

    println!("\n=== Grade Frequency Distribution ===\n");
    let distribution = grade_distribution(records);
    let max = distribution.max_count().max(1);
    for (grade, count) in distribution.iter() {
        let bar = "█".repeat(count * BAR_WIDTH / max);
        println!("  {grade} | {bar} {count}");
    }

    println!("\n=== Performance Trend (Course by Course) ===\n");
    let mut table = Table::new();
    table.set_header(vec!["#", "Course", "Score", "Grade"]);
    for (point, record) in performance_trend(records).iter().zip(records) {
        table.add_row(vec![
            Cell::new(point.position),
            Cell::new(&point.course_code),
            Cell::new(point.score),
            Cell::new(record.grade()),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Records as a `comfy-table` grid in entry order
pub fn records_table(records: &[GradeRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Course_Code", "Units", "Score", "Grade", "GP", "WP"]);
    for record in records {
        table.add_row(vec![
            Cell::new(record.course_code()),
            Cell::new(record.units()),
            Cell::new(record.score()),
            Cell::new(record.grade()),
            Cell::new(record.grade_point()),
            Cell::new(record.weighted_points()),
        ]);
    }
    table
}

fn print_summary(stats: &AcademicStats) {
    println!(
        "CGPA: {:.2} over {} units ({} weighted points)",
        stats.gpa, stats.total_units, stats.total_weighted_points
    );
}
