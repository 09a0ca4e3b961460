//! Integration tests for configuration management

use nu_registrar::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("nested").join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(!config.logging.level.is_empty(), "Default log level should not be empty");
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.registrar.semester, "Fall 2025");
    assert!(config.seed_path().is_none(), "Defaults use the bundled sample");
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
seed_file = "./seed.toml"
reports_dir = "./reports"

[registrar]
semester = "Spring 2026"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.seed_file, "./seed.toml");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.registrar.semester, "Spring 2026");
}

#[test]
fn test_config_from_toml_partial() {
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.seed_file, "");
    assert_eq!(config.registrar.semester, "");
}

#[test]
fn test_config_rejects_malformed_toml() {
    assert!(Config::from_toml("[logging\nlevel = ").is_err());
    assert!(Config::from_toml("[logging]\nverbose = \"sometimes\"").is_err());
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$NU_REGISTRAR/test.log"

[paths]
seed_file = "$NU_REGISTRAR/seed.toml"
reports_dir = "$NU_REGISTRAR/reports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    for value in [
        &config.logging.file,
        &config.paths.seed_file,
        &config.paths.reports_dir,
    ] {
        assert!(value.contains("nuregistrar"), "not expanded: {value}");
        assert!(!value.contains("$NU_REGISTRAR"));
    }
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config.set("verbose", "true").expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);

    config.set("seed-file", "/data/seed.toml").expect("Failed to set seed file");
    assert_eq!(config.get("seed_file").unwrap(), "/data/seed.toml");
    assert_eq!(config.seed_path(), Some(PathBuf::from("/data/seed.toml")));

    config.set("semester", "Spring 2026").expect("Failed to set semester");
    assert_eq!(config.get("semester").unwrap(), "Spring 2026");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_set_rejects_bad_values() {
    let mut config = Config::from_defaults();
    let before = config.logging.level.clone();

    assert!(config.set("level", "chatty").is_err());
    assert!(config.set("verbose", "maybe").is_err());
    assert!(config.set("semester", "   ").is_err());

    assert_eq!(config.logging.level, before);
    assert_eq!(config.registrar.semester, "Fall 2025");
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "error").expect("Failed to set level");
    config.set("semester", "Summer 2026").expect("Failed to set semester");

    config.unset("level", &defaults).expect("Failed to unset level");
    config.unset("semester", &defaults).expect("Failed to unset semester");
    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.registrar.semester, defaults.registrar.semester);

    assert!(config.unset("bogus", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("semester", "Spring 2026").expect("Failed to set semester");

    config.save_to(&config_file).expect("Failed to save config");
    assert!(config_file.exists());

    let loaded_config = Config::load_from(&config_file).expect("Failed to load config");
    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.registrar.semester, "Spring 2026");
    assert_eq!(loaded_config.paths.reports_dir, config.paths.reports_dir);
}

#[test]
fn test_config_load_from_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    assert!(Config::load_from(&temp_dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_config_load_from_written_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[registrar]\nsemester = \"Fall 2026\"\n").expect("Failed to write");

    let config = Config::load_from(&path).expect("Failed to load config");
    assert_eq!(config.registrar.semester, "Fall 2026");
    assert_eq!(config.logging.level, "");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        seed_file: Some("./custom_seed.toml".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
        semester: Some("Spring 2026".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.seed_file, "./custom_seed.toml");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
    assert_eq!(config.registrar.semester, "Spring 2026");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..Default::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(config.registrar.semester, defaults.registrar.semester);
}

#[test]
fn test_config_overrides_expand_variables() {
    let mut config = Config::from_defaults();
    config.apply_overrides(&ConfigOverrides {
        reports_dir: Some("$NU_REGISTRAR/out".to_string()),
        ..Default::default()
    });
    assert!(!config.paths.reports_dir.contains("$NU_REGISTRAR"));
    assert!(config.paths.reports_dir.ends_with("out"));
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[registrar]"));

    assert!(display_str.contains("level"));
    assert!(display_str.contains("seed_file"));
    assert!(display_str.contains("semester = \"Fall 2025\""));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"

[paths]
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(changed, "merge_defaults should return true when fields are added");
    assert_eq!(config.paths.reports_dir, defaults.paths.reports_dir);
    assert_eq!(config.registrar.semester, defaults.registrar.semester);
    assert!(!config.merge_defaults(&defaults), "second merge is a no-op");
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[registrar]
semester = "Spring 2026"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.registrar.semester, "Spring 2026");
}

#[test]
fn test_get_nuregistrar_dir() {
    let dir = Config::get_nuregistrar_dir();

    assert!(dir.to_string_lossy().contains("nuregistrar"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
