//! Leveled logger with feature-gated output.
//!
//! - `log-info` enables `info!` output (enabled by default).
//! - `log-debug` enables `debug!` output and a runtime debug flag.
//! - `verbose` enables `verbose!`, a plain printer for user-facing progress lines.
//! - `file-logging` routes tagged messages to a file once [`init_file_logging`] succeeds.
//! - `warn!` and `error!` are always active.
//!
//! Warnings and errors go to stderr, everything else to stdout.

use std::fmt::{self, Arguments};
use std::str::FromStr;
#[cfg(any(feature = "log-debug", feature = "verbose"))]
use std::sync::atomic::AtomicBool;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{self, File, OpenOptions},
    io::Write,
    sync::{LazyLock, Mutex},
};

/// Logging levels, ordered from least to most chatty.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Error-level messages (always enabled).
    Error = 1,
    /// Warning-level messages (always enabled).
    Warn = 2,
    /// Info-level messages (requires `log-info` feature).
    Info = 3,
    /// Debug-level messages (requires `log-debug` feature and runtime enablement).
    Debug = 4,
}

impl Level {
    const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Error,
            2 => Self::Warn,
            3 => Self::Info,
            _ => Self::Debug,
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" | "err" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            _ => Err(format!("Unknown log level: '{s}'")),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        f.write_str(name)
    }
}

/// Level used until [`set_level`] is called.
const fn default_level() -> Level {
    if cfg!(feature = "log-debug") {
        Level::Debug
    } else if cfg!(feature = "log-info") {
        Level::Info
    } else {
        Level::Warn
    }
}

static LOG_LEVEL: AtomicU8 = AtomicU8::new(default_level() as u8);
#[cfg(feature = "log-debug")]
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(true);
#[cfg(feature = "verbose")]
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);
#[cfg(feature = "file-logging")]
static LOG_FILE: LazyLock<Mutex<Option<File>>> = LazyLock::new(|| Mutex::new(None));

/// Set the global log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Current global log level.
#[must_use]
pub fn level() -> Level {
    Level::from_u8(LOG_LEVEL.load(Ordering::SeqCst))
}

/// Parse a level name (case-insensitive) and set it. Returns `true` on success.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    level.parse::<Level>().map(set_level).is_ok()
}

/// Enable debug logging at runtime (no-op without `log-debug`).
pub fn enable_debug() {
    #[cfg(feature = "log-debug")]
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable debug logging at runtime (no-op without `log-debug`).
pub fn disable_debug() {
    #[cfg(feature = "log-debug")]
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Returns whether debug logging is enabled (always false without `log-debug`).
#[must_use]
pub fn is_debug_enabled() -> bool {
    #[cfg(feature = "log-debug")]
    {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }
    #[cfg(not(feature = "log-debug"))]
    {
        false
    }
}

/// Enable `verbose!` output at runtime (no-op without `verbose`).
pub fn enable_verbose() {
    #[cfg(feature = "verbose")]
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}

/// Disable `verbose!` output at runtime (no-op without `verbose`).
pub fn disable_verbose() {
    #[cfg(feature = "verbose")]
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}

/// Returns whether `verbose!` output is enabled (always false without `verbose`).
#[must_use]
pub fn is_verbose_enabled() -> bool {
    #[cfg(feature = "verbose")]
    {
        VERBOSE_ENABLED.load(Ordering::SeqCst)
    }
    #[cfg(not(feature = "verbose"))]
    {
        false
    }
}

/// Start appending tagged log lines to `path`, creating parent directories.
///
/// Returns `false` if the file cannot be opened or file logging is compiled out.
#[must_use]
pub fn init_file_logging(path: &std::path::Path) -> bool {
    #[cfg(feature = "file-logging")]
    {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && fs::create_dir_all(parent).is_err() {
                return false;
            }
        }
        let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
            return false;
        };
        LOG_FILE.lock().map_or(false, |mut slot| {
            *slot = Some(file);
            true
        })
    }
    #[cfg(not(feature = "file-logging"))]
    {
        let _ = path;
        false
    }
}

/// Write `line` to the log file if one is open. Returns `true` when it was written.
fn write_to_file(line: &str) -> bool {
    #[cfg(feature = "file-logging")]
    {
        if let Ok(mut slot) = LOG_FILE.lock() {
            if let Some(file) = slot.as_mut() {
                let _ = writeln!(file, "{line}");
                let _ = file.flush();
                return true;
            }
        }
        false
    }
    #[cfg(not(feature = "file-logging"))]
    {
        let _ = line;
        false
    }
}

/// Feature gates first, then the runtime level and debug flag.
fn should_log(level: Level) -> bool {
    let compiled_in = match level {
        Level::Info => cfg!(feature = "log-info"),
        Level::Debug => cfg!(feature = "log-debug"),
        Level::Error | Level::Warn => true,
    };
    compiled_in && level <= self::level() && (level != Level::Debug || is_debug_enabled())
}

/// Dispatch used by the logging macros.
pub fn log_impl(level: Level, args: Arguments) {
    if !should_log(level) {
        return;
    }
    let line = format!("{} {args}", level.tag());
    if write_to_file(&line) {
        return;
    }
    match level {
        Level::Error | Level::Warn => eprintln!("{line}"),
        Level::Info | Level::Debug => println!("{line}"),
    }
}

/// Logs an error-level message (always enabled).
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Error, format_args!($($arg)*)) };
}

/// Logs a warning-level message (always enabled).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Warn, format_args!($($arg)*)) };
}

/// Logs an info-level message (requires `log-info`).
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Info, format_args!($($arg)*)) };
}

/// Logs a debug-level message (requires `log-debug` and the runtime flag).
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Debug, format_args!($($arg)*)) };
}

/// Prints an untagged line when verbose output is enabled. Never goes to the log file.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose_enabled() {
            println!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parse_accepts_aliases() {
        assert_eq!("ERR".parse::<Level>(), Ok(Level::Error));
        assert_eq!("warning".parse::<Level>(), Ok(Level::Warn));
        assert_eq!(" Info ".parse::<Level>(), Ok(Level::Info));
        assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
        assert!("trace".parse::<Level>().is_err());
    }

    #[test]
    fn level_display_round_trips() {
        for level in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
    }

    #[test]
    fn levels_are_ordered_by_chattiness() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Info < Level::Debug);
    }

    #[test]
    fn macros_do_not_panic() {
        crate::info!("info {}", 1);
        crate::warn!("warn {}", 2);
        crate::error!("error {}", 3);
        crate::debug!("debug {}", 4);
        crate::verbose!("verbose {}", 5);
    }
}
