//! Data models for `cgpa-planner`

pub mod grade;
pub mod record;

pub use grade::Grade;
pub use record::GradeRecord;
