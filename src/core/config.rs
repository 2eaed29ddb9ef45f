//! Configuration module for `cgpa-planner`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Environment variable that relocates the planner directory
pub const HOME_ENV_VAR: &str = "CGPA_PLANNER_HOME";

/// Placeholder expanded to the planner directory in config values
const DIR_VARIABLE: &str = "$CGPA_PLANNER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// CSV file holding the grade records
    #[serde(default)]
    pub data_file: String,
    /// Directory result slips are written to
    #[serde(default)]
    pub reports_dir: String,
}

/// Result slip configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Name printed on the result slip
    #[serde(default)]
    pub student_name: String,
    /// Institution printed in the slip title
    #[serde(default)]
    pub institution: String,
    /// Browser used for HTML-to-PDF conversion (auto-detected when empty)
    #[serde(default)]
    pub pdf_converter: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Result slip settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override record file path
    pub data_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override student name on the result slip
    pub student_name: Option<String>,
}

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`]
pub const CONFIG_KEYS: [&str; 8] = [
    "level",
    "file",
    "verbose",
    "data_file",
    "reports_dir",
    "student_name",
    "institution",
    "pdf_converter",
];

impl Config {
    /// Get the `$CGPA_PLANNER` directory path
    ///
    /// Uses `CGPA_PLANNER_HOME` when set, otherwise:
    /// - Linux: `~/.config/cgpa-planner`
    /// - macOS: `~/Library/Application Support/cgpa-planner`
    /// - Windows: `%APPDATA%\cgpa-planner`
    #[must_use]
    pub fn get_planner_dir() -> PathBuf {
        if let Some(home) = std::env::var_os(HOME_ENV_VAR).filter(|v| !v.is_empty()) {
            return PathBuf::from(home);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cgpa-planner")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are filled,
    /// so upgrading picks up new settings without touching user edits.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        for (mine, theirs) in [
            (&mut self.logging.level, &defaults.logging.level),
            (&mut self.logging.file, &defaults.logging.file),
            (&mut self.paths.data_file, &defaults.paths.data_file),
            (&mut self.paths.reports_dir, &defaults.paths.reports_dir),
            (&mut self.report.student_name, &defaults.report.student_name),
            (&mut self.report.institution, &defaults.report.institution),
        ] {
            if mine.is_empty() && !theirs.is_empty() {
                mine.clone_from(theirs);
                changed = true;
            }
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides affect this run only; the config file is not modified.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(data_file) = &overrides.data_file {
            self.paths.data_file.clone_from(data_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }

        if let Some(student_name) = &overrides.student_name {
            self.report.student_name.clone_from(student_name);
        }
    }

    /// Get the user config file path
    ///
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (keeps development settings separate)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_planner_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CGPA_PLANNER` in a string to the planner directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let planner_dir = Self::get_planner_dir();
            value.replace(DIR_VARIABLE, planner_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields fall back to their serde defaults (empty strings, false)
    /// and `$CGPA_PLANNER` is expanded in path-like values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_file = Self::expand_variables(&config.paths.data_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);
        config.report.pdf_converter = Self::expand_variables(&config.report.pdf_converter);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults
    /// are compiled in, so this is caught by the test suite.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it on first run
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`, or create it from defaults if missing
    ///
    /// - If the file exists: loads it, merges missing fields from defaults and
    ///   saves the result when anything was added
    /// - If it doesn't: writes the defaults there and returns them
    ///
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save_to(config_file);
                    }
                    return config;
                }
            }
        } else {
            // First run
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration as pretty TOML to `config_file`
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys are listed in [`CONFIG_KEYS`]; dashes and underscores are
    /// interchangeable (`data-file` == `data_file`).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key.replace('-', "_").as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_file" => Some(self.paths.data_file.clone()),
            "reports_dir" => Some(self.paths.reports_dir.clone()),
            "student_name" => Some(self.report.student_name.clone()),
            "institution" => Some(self.report.institution.clone()),
            "pdf_converter" => Some(self.report.pdf_converter.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value is invalid
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => {
                value
                    .parse::<crate::logger::Level>()
                    .map_err(|_| format!("Invalid log level for 'level': '{value}'"))?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_file" => self.paths.data_file = value.to_string(),
            "reports_dir" => self.paths.reports_dir = value.to_string(),
            "student_name" => self.report.student_name = value.to_string(),
            "institution" => self.report.institution = value.to_string(),
            "pdf_converter" => self.report.pdf_converter = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_file" => self.paths.data_file.clone_from(&defaults.paths.data_file),
            "reports_dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "student_name" => self
                .report
                .student_name
                .clone_from(&defaults.report.student_name),
            "institution" => self
                .report
                .institution
                .clone_from(&defaults.report.institution),
            "pdf_converter" => self
                .report
                .pdf_converter
                .clone_from(&defaults.report.pdf_converter),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// PDF converter command, if one is configured
    #[must_use]
    pub fn pdf_converter(&self) -> Option<&str> {
        Some(self.report.pdf_converter.as_str()).filter(|c| !c.trim().is_empty())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_file = \"{}\"", self.paths.data_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[report]")?;
        writeln!(f, "  student_name = \"{}\"", self.report.student_name)?;
        writeln!(f, "  institution = \"{}\"", self.report.institution)?;
        writeln!(f, "  pdf_converter = \"{}\"", self.report.pdf_converter)?;

        Ok(())
    }
}
