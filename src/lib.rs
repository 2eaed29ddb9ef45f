//! Library for `cgpa-planner`
//!
//! Grade records on a 5-point scale: entry validation, grading, CSV
//! persistence, CGPA statistics, target prediction, and result slip export.
//! The `cgpa` binary is a thin command-line layer over this crate.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
pub use crate::core::error::{InvalidInputError, PlannerError, StorageError};
pub use crate::core::models::{Grade, GradeRecord};
pub use crate::core::store::RecordStore;
