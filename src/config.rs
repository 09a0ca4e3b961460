//! Configuration for the `nuregistrar` CLI

use crate::logger::Level;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the registrar config directory
const DIR_VARIABLE: &str = "$NU_REGISTRAR";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path; empty logs to the terminal
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Seed file describing the university; empty uses the bundled sample
    #[serde(default)]
    pub seed_file: String,
    /// Directory for transcript report files
    #[serde(default)]
    pub reports_dir: String,
}

/// Registrar defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrarConfig {
    /// Semester used when a command omits `--semester`
    #[serde(default)]
    pub semester: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Registrar settings
    #[serde(default)]
    pub registrar: RegistrarConfig,
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
    /// Override seed file
    pub seed_file: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override default semester
    pub semester: Option<String>,
}

/// Overwrite `target` with `default` when it is empty. Returns whether it changed.
fn fill_empty(target: &mut String, default: &str) -> bool {
    if target.is_empty() && !default.is_empty() {
        default.clone_into(target);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$NU_REGISTRAR` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/nuregistrar`
    /// - macOS: `~/Library/Application Support/nuregistrar`
    /// - Windows: `%APPDATA%\nuregistrar`
    #[must_use]
    pub fn get_nuregistrar_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nuregistrar")
    }

    /// Get the user config file path (`config.toml`, or `dconfig.toml` in debug builds)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_nuregistrar_dir().join(CONFIG_FILE_NAME)
    }

    /// Fill empty fields from `defaults`
    ///
    /// Lets an older config file pick up keys added in later releases without
    /// touching values the user already set.
    ///
    /// # Returns
    ///
    /// `true` if any field was filled in
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = fill_empty(&mut self.logging.level, &defaults.logging.level);
        changed |= fill_empty(&mut self.logging.file, &defaults.logging.file);
        changed |= fill_empty(&mut self.paths.seed_file, &defaults.paths.seed_file);
        changed |= fill_empty(&mut self.paths.reports_dir, &defaults.paths.reports_dir);
        changed |= fill_empty(&mut self.registrar.semester, &defaults.registrar.semester);
        changed
    }

    /// Apply CLI-provided overrides for this run only
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file = Self::expand_variables(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(seed_file) = &overrides.seed_file {
            self.paths.seed_file = Self::expand_variables(seed_file);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir = Self::expand_variables(reports_dir);
        }
        if let Some(semester) = &overrides.semester {
            self.registrar.semester.clone_from(semester);
        }
    }

    /// Replace `$NU_REGISTRAR` with the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_nuregistrar_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing sections and fields take their serde defaults. Path-like values
    /// have `$NU_REGISTRAR` expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.seed_file = Self::expand_variables(&config.paths.seed_file);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    /// The defaults are compiled into the binary, so this only fails on a broken build.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it from defaults on first run
    ///
    /// Falls back to defaults if the file exists but cannot be read or parsed.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save();
            return defaults;
        }

        match Self::load_from(&config_file) {
            Ok(mut config) => {
                if config.merge_defaults(&defaults) {
                    let _ = config.save();
                }
                config
            }
            Err(_) => defaults,
        }
    }

    /// Read and parse a config file at `path`
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration as pretty TOML to `path`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if serialization, directory creation or writing fails
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `seed_file`, `reports_dir`,
    /// `semester`. Dashed spellings (`seed-file`, `reports-dir`) are accepted.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "seed_file" | "seed-file" => Some(self.paths.seed_file.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "semester" => Some(self.registrar.semester.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates memory only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, `level` is not a log level,
    /// `verbose` is not a boolean, or `semester` is blank
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => {
                let level: Level = value.parse()?;
                self.logging.level = level.to_string();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "seed_file" | "seed-file" => self.paths.seed_file = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "semester" => {
                if value.trim().is_empty() {
                    return Err("Semester cannot be empty".to_string());
                }
                self.registrar.semester = value.to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single value to its entry in `defaults`
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "seed_file" | "seed-file" => self.paths.seed_file.clone_from(&defaults.paths.seed_file),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "semester" => self
                .registrar
                .semester
                .clone_from(&defaults.registrar.semester),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the user config file so the next [`load()`](Config::load) recreates it
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Seed file path, or `None` when the bundled sample should be used
    #[must_use]
    pub fn seed_path(&self) -> Option<PathBuf> {
        let trimmed = self.paths.seed_file.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  seed_file = \"{}\"", self.paths.seed_file)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[registrar]")?;
        writeln!(f, "  semester = \"{}\"", self.registrar.semester)?;

        Ok(())
    }
}
