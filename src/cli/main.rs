//! Command-line interface entry point for `nuregistrar`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use nu_registrar::config::Config;
use nu_registrar::core::University;
use nu_registrar::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use nu_registrar::{error, info, verbose};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    let config_log_path = (!config.logging.file.is_empty())
        .then(|| std::path::PathBuf::from(&config.logging.file));

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

    if let Command::Config { subcommand } = args.command {
        commands::config::run(subcommand, &mut config, &defaults);
        return;
    }

    let Some(mut university) = load_university(&config) else {
        std::process::exit(1);
    };

    let default_semester = config.registrar.semester.clone();
    let semester_or_default =
        |semester: Option<String>| semester.unwrap_or_else(|| default_semester.clone());

    let ok = match args.command {
        Command::Config { .. } => true,
        Command::Gpa { student, semester } => {
            commands::gpa::run(&university, &student, &semester_or_default(semester))
        }
        Command::Degree { name } => commands::degree::run(&university, name.as_deref()),
        Command::FindOffer {
            course_number,
            semester,
        } => commands::offer::find(&university, &course_number, &semester_or_default(semester)),
        Command::Count {
            course_number,
            semester,
        } => commands::offer::count(&university, &course_number, &semester_or_default(semester)),
        Command::Grade {
            course_number,
            student,
            grade,
            semester,
        } => commands::grade::run(
            &mut university,
            &course_number,
            &student,
            &grade,
            &semester_or_default(semester),
        ),
        Command::Report {
            student,
            semester,
            format,
            output,
        } => commands::report::run(
            &university,
            &student,
            &semester_or_default(semester),
            &format,
            output.as_deref(),
            &config,
        ),
    };

    if !ok {
        std::process::exit(1);
    }
}

/// Build the university from the configured seed file, or the bundled sample
fn load_university(config: &Config) -> Option<University> {
    let Some(path) = config.seed_path() else {
        verbose!("Using bundled sample university");
        return Some(University::sample());
    };

    match University::from_seed_file(&path) {
        Ok(university) => {
            info!("Seed loaded: {}", path.display());
            Some(university)
        }
        Err(e) => {
            error!("Failed to load seed {}: {e}", path.display());
            eprintln!("✗ Failed to load {}: {e}", path.display());
            None
        }
    }
}
