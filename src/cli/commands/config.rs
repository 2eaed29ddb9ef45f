//! Config command handler

use crate::args::ConfigSubcommand;
use cgpa_planner::config::{Config, CONFIG_KEYS};
use std::io::{self, Write};

/// Dispatch config subcommands
///
/// `config` is the stored configuration without CLI overrides, so `set` and
/// `unset` never persist one-off flags.
///
/// # Errors
/// Returns a message for unknown keys, invalid values or a failed save.
pub fn run(
    subcommand: Option<ConfigSubcommand>,
    config: &mut Config,
    defaults: &Config,
) -> Result<(), String> {
    match subcommand {
        None => handle_config_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_config_get(config, key),
        Some(ConfigSubcommand::Set { key, value }) => handle_config_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_config_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_config_reset(),
    }
}

/// Handle the config get subcommand
///
/// # Errors
/// Returns a message listing the valid keys if `key` is unknown.
pub fn handle_config_get(config: &Config, key: Option<String>) -> Result<(), String> {
    if let Some(k) = key {
        let value = config.get(&k).ok_or_else(|| unknown_key(&k))?;
        println!("{value}");
    } else {
        println!("\n=== Configuration ===\n");
        print!("{config}");
        println!("\nFile: {}", Config::get_config_file_path().display());
    }
    Ok(())
}

/// Handle the config set subcommand
///
/// # Errors
/// Returns a message if the key or value is invalid or the file cannot be saved.
pub fn handle_config_set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;

    println!("✓ Set {key} = {value}");
    Ok(())
}

/// Handle the config unset subcommand
///
/// # Errors
/// Returns a message if the key is unknown or the file cannot be saved.
pub fn handle_config_unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))?;

    println!("✓ Reset {key} to default");
    Ok(())
}

/// Handle the config reset subcommand
///
/// # Errors
/// Returns a message if the config file cannot be removed.
pub fn handle_config_reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}

fn unknown_key(key: &str) -> String {
    format!(
        "Unknown config key: '{key}' (expected one of: {})",
        CONFIG_KEYS.join(", ")
    )
}
