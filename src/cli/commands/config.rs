//! Config command handler

use crate::args::ConfigSubcommand;
use nu_registrar::config::Config;
use nu_registrar::{error, info};
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let ok = match subcommand {
        None => show(config, None),
        Some(ConfigSubcommand::Get { key }) => show(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            let saved = edit(config, &key, |c| c.set(&key, &value));
            if saved {
                println!("✓ Set {key} = {value}");
            }
            saved
        }
        Some(ConfigSubcommand::Unset { key }) => {
            let saved = edit(config, &key, |c| c.unset(&key, defaults));
            if saved {
                println!("✓ Reset {key} to default");
            }
            saved
        }
        Some(ConfigSubcommand::Reset) => reset(&mut io::stdin().lock()),
    };
    if !ok {
        std::process::exit(1);
    }
}

fn show(config: &Config, key: Option<&str>) -> bool {
    let Some(key) = key else {
        println!("\n=== Configuration ({}) ===\n", Config::get_config_file_path().display());
        print!("{config}");
        return true;
    };
    match config.get(key) {
        Some(value) => {
            println!("{value}");
            true
        }
        None => {
            eprintln!("✗ Unknown config key: '{key}'");
            false
        }
    }
}

/// Apply `change` and persist the result
fn edit(
    config: &mut Config,
    key: &str,
    change: impl FnOnce(&mut Config) -> Result<(), String>,
) -> bool {
    if let Err(e) = change(config) {
        eprintln!("✗ {e}");
        return false;
    }
    if let Err(e) = config.save() {
        error!("Failed to save config after editing '{key}': {e}");
        eprintln!("✗ Failed to save config: {e}");
        return false;
    }
    info!("Config key '{key}' updated");
    true
}

fn reset(input: &mut impl BufRead) -> bool {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return true;
    }

    print!("Reset configuration to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    input.read_line(&mut response).ok();

    if !confirmed(&response) {
        println!("✗ Reset cancelled");
        return true;
    }
    match Config::reset() {
        Ok(()) => {
            info!("Config file removed");
            println!("✓ Config reset to defaults");
            true
        }
        Err(e) => {
            error!("Failed to remove config file: {e}");
            eprintln!("✗ Failed to remove config file: {e}");
            false
        }
    }
}

fn confirmed(response: &str) -> bool {
    matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
