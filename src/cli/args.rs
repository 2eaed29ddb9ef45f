//! CLI argument definitions for `cgpa`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cgpa_planner::config::ConfigOverrides;
use cgpa_planner::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_file`, `student_name`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a course result.
    ///
    /// The grade, grade point and weighted points are derived from the score
    /// and the record is saved immediately.
    Add {
        /// Course code (e.g., CVE311)
        #[arg(value_name = "COURSE_CODE")]
        course_code: String,

        /// Credit units, 1 to 6
        #[arg(value_name = "UNITS", allow_hyphen_values = true)]
        units: String,

        /// Exam score, 0 to 100
        #[arg(value_name = "SCORE", allow_hyphen_values = true)]
        score: String,
    },
    /// Show all recorded courses with the current CGPA.
    List,
    /// Show CGPA, totals, grade distribution and performance trend.
    Stats,
    /// Work out the average grade point needed to reach a target CGPA.
    Predict {
        /// Desired final CGPA
        #[arg(value_name = "TARGET_CGPA", allow_hyphen_values = true)]
        target: String,

        /// Credit units still to be taken
        #[arg(value_name = "REMAINING_UNITS", allow_hyphen_values = true)]
        remaining_units: String,
    },
    /// Delete every recorded course.
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Export the result slip.
    ///
    /// Written to `<reports_dir>/result_slip.<ext>` unless --output is given.
    Report {
        /// Student name printed on the slip (defaults to config `student_name`)
        #[arg(short, long, value_name = "NAME")]
        student: Option<String>,

        /// Report format: markdown (md), html, or pdf
        #[arg(short, long, value_name = "FORMAT", default_value = "pdf")]
        format: String,

        /// Output file path (optional; overrides the fixed slip location)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Browser used for PDF conversion (defaults to config `pdf_converter`)
        #[arg(long, value_name = "PATH")]
        pdf_converter: Option<String>,
    },
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "cgpa",
    about = "Record course grades, track CGPA and plan for a target",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Use this record file instead of config `data_file`
    #[arg(long, value_name = "PATH", global = true)]
    pub data_file: Option<PathBuf>,

    /// Use this directory for result slips instead of config `reports_dir`
    #[arg(long, value_name = "DIR", global = true)]
    pub reports_dir: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum, global = true)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH", global = true)]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new(), global = true)]
    pub config_verbose: Option<bool>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// The `report --student` value travels as an override too, so the rest of
    /// the run sees a single effective student name.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            data_file: self.data_file.as_ref().map(path_string),
            reports_dir: self.reports_dir.as_ref().map(path_string),
            student_name: match &self.command {
                Command::Report { student, .. } => student.clone(),
                _ => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            data_file: None,
            reports_dir: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            command,
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let overrides = bare_cli(Command::List).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_file.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.student_name.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Report {
            student: Some("Ada Obi".to_string()),
            format: "md".to_string(),
            output: None,
            pdf_converter: None,
        });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.data_file = Some(PathBuf::from("/tmp/records.csv"));
        cli.reports_dir = Some(PathBuf::from("/tmp/reports"));

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.data_file, Some("/tmp/records.csv".to_string()));
        assert_eq!(overrides.reports_dir, Some("/tmp/reports".to_string()));
        assert_eq!(overrides.student_name, Some("Ada Obi".to_string()));
    }

    #[test]
    fn test_parse_add_with_negative_score() {
        let cli = Cli::try_parse_from(["cgpa", "add", "CVE311", "3", "-1"]).unwrap();
        match cli.command {
            Command::Add {
                course_code,
                units,
                score,
            } => {
                assert_eq!(course_code, "CVE311");
                assert_eq!(units, "3");
                assert_eq!(score, "-1");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["cgpa", "list", "--data-file", "x.csv", "-v"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("x.csv")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_report_defaults_to_pdf() {
        let cli = Cli::try_parse_from(["cgpa", "report"]).unwrap();
        match cli.command {
            Command::Report { format, output, .. } => {
                assert_eq!(format, "pdf");
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
