//! Clear command handler

use super::open_store;
use cgpa_planner::config::Config;
use std::io::{self, Write};

/// Delete all records, asking first unless `yes` is set
///
/// # Errors
/// Returns the storage error message if the record file cannot be removed.
pub fn run(config: &Config, yes: bool) -> Result<(), String> {
    let mut store = open_store(config)?;

    if !yes {
        print!(
            "Delete all {} recorded course(s)? This cannot be undone. (y/n): ",
            store.len()
        );
        io::stdout().flush().ok();

        let mut response = String::new();
        io::stdin().read_line(&mut response).ok();
        let response = response.trim();
        if !(response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")) {
            println!("✗ Clear cancelled");
            return Ok(());
        }
    }

    store.clear().map_err(|e| e.to_string())?;
    println!("✓ All records cleared");
    Ok(())
}
