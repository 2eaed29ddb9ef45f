//! CLI command handlers for `cgpa`.
//!
//! Each command is implemented in its own submodule. Handlers return a
//! printable error message; `main` reports it and exits with status 1.

pub mod clear;
pub mod config;
pub mod predict;
pub mod record;
pub mod report;

use cgpa_planner::config::Config;
use cgpa_planner::core::store::RecordStore;

/// Open the record store named by config `data_file`
fn open_store(config: &Config) -> Result<RecordStore, String> {
    RecordStore::open(&config.paths.data_file).map_err(|e| e.to_string())
}
