//! Core planner functionality shared by the library and the CLI

pub mod config;
pub mod error;
pub mod grading;
pub mod input;
pub mod models;
pub mod predictor;
pub mod report;
pub mod stats;
pub mod store;

/// Returns the current version of the `cgpa-planner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
