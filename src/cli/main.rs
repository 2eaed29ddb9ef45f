//! Command-line interface entry point for `cgpa`

mod args;
mod commands;

use args::{Cli, Command};
use cgpa_planner::config::Config;
use cgpa_planner::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use cgpa_planner::{debug, info};
use clap::Parser;
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup; overrides only apply to this run
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let mut config = stored.clone();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path = Some(&config.logging.file)
        .filter(|f| !f.is_empty())
        .map(PathBuf::from);

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }
    debug!("Using record file {}", config.paths.data_file);

    let result = match args.command {
        Command::Add {
            course_code,
            units,
            score,
        } => commands::record::add(&config, &course_code, &units, &score),
        Command::List => commands::record::list(&config),
        Command::Stats => commands::record::stats(&config),
        Command::Predict {
            target,
            remaining_units,
        } => commands::predict::run(&config, &target, &remaining_units),
        Command::Clear { yes } => commands::clear::run(&config, yes),
        Command::Report {
            format,
            output,
            pdf_converter,
            ..
        } => commands::report::run(
            &config,
            &format,
            output.as_deref(),
            pdf_converter.as_deref(),
        ),
        Command::Config { subcommand } => commands::config::run(subcommand, &mut stored, &defaults),
    };

    if let Err(message) = result {
        eprintln!("✗ {message}");
        std::process::exit(1);
    }
}
