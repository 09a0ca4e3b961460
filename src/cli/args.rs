//! CLI argument definitions for `nuregistrar`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use nu_registrar::config::ConfigOverrides;
use nu_registrar::logger::Level;

/// CLI log level argument
///
/// Stored lowercase in the config file; converted to `logger::Level` at runtime.
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
        write!(f, "{}", Level::from(*self))
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key (e.g., `level`, `seed_file`, `semester`)
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
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Show a student's GPA for a semester.
    Gpa {
        /// Student identifier
        #[arg(short, long, value_name = "ID")]
        student: String,

        /// Semester (defaults to config `semester`)
        #[arg(long, value_name = "SEMESTER")]
        semester: Option<String>,
    },
    /// List the courses of a degree in order.
    ///
    /// Lists every degree when NAME is omitted.
    Degree {
        /// Degree name
        #[arg(value_name = "NAME")]
        name: Option<String>,
    },
    /// Look up the offer of a course by its number.
    FindOffer {
        /// Course number (e.g., "INFO 5001")
        #[arg(value_name = "NUMBER")]
        course_number: String,

        /// Semester (defaults to config `semester`)
        #[arg(long, value_name = "SEMESTER")]
        semester: Option<String>,
    },
    /// Assign a letter grade and show the recomputed GPA.
    ///
    /// The grade lives only for this run: the seed file is never rewritten, so
    /// the next invocation starts from the seeded grades again.
    Grade {
        /// Course number (e.g., "INFO 5001")
        #[arg(value_name = "NUMBER")]
        course_number: String,

        /// Student identifier
        #[arg(short, long, value_name = "ID")]
        student: String,

        /// Letter grade (A, A-, B+, B, B-, C+, C, C-, D+, D, D-, F)
        #[arg(short, long, value_name = "GRADE", allow_hyphen_values = true)]
        grade: String,

        /// Semester (defaults to config `semester`)
        #[arg(long, value_name = "SEMESTER")]
        semester: Option<String>,
    },
    /// Count the students enrolled in a course.
    Count {
        /// Course number (e.g., "INFO 5001")
        #[arg(value_name = "NUMBER")]
        course_number: String,

        /// Semester (defaults to config `semester`)
        #[arg(long, value_name = "SEMESTER")]
        semester: Option<String>,
    },
    /// Write a transcript report for a student's semester.
    Report {
        /// Student identifier
        #[arg(short, long, value_name = "ID")]
        student: String,

        /// Semester (defaults to config `semester`)
        #[arg(long, value_name = "SEMESTER")]
        semester: Option<String>,

        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "html")]
        format: String,

        /// Output file path (optional; defaults to config `reports_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "nuregistrar",
    about = "Course registration and academic records",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// University seed file (TOML). Falls back to config, then the bundled sample.
    #[arg(long, value_name = "PATH", global = true)]
    pub seed: Option<PathBuf>,

    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config seed file
    #[arg(long = "config-seed-file", value_name = "PATH")]
    pub config_seed_file: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config default semester
    #[arg(long = "config-semester", value_name = "SEMESTER")]
    pub config_semester: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

fn path_string(path: &std::path::Path) -> String {
    path.to_string_lossy().to_string()
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--seed` takes precedence over `--config-seed-file` when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_deref().map(path_string),
            verbose: self.config_verbose,
            seed_file: self
                .seed
                .as_deref()
                .or(self.config_seed_file.as_deref())
                .map(path_string),
            reports_dir: self.config_reports_dir.as_deref().map(path_string),
            semester: self.config_semester.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn bare_cli(command: Command) -> Cli {
        Cli {
            seed: None,
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_seed_file: None,
            config_reports_dir: None,
            config_semester: None,
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
        let overrides = bare_cli(Command::Config { subcommand: None }).to_config_overrides();
        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.seed_file.is_none());
        assert!(overrides.reports_dir.is_none());
        assert!(overrides.semester.is_none());
    }

    #[test]
    fn test_to_config_overrides_with_values() {
        let mut cli = bare_cli(Command::Degree { name: None });
        cli.config_level = Some(LogLevelArg::Debug);
        cli.config_log_file = Some(PathBuf::from("/tmp/test.log"));
        cli.config_verbose = Some(true);
        cli.config_reports_dir = Some(PathBuf::from("/reports"));
        cli.config_semester = Some("Spring 2026".to_string());

        let overrides = cli.to_config_overrides();
        assert_eq!(overrides.level, Some("debug".to_string()));
        assert_eq!(overrides.file, Some("/tmp/test.log".to_string()));
        assert_eq!(overrides.verbose, Some(true));
        assert_eq!(overrides.reports_dir, Some("/reports".to_string()));
        assert_eq!(overrides.semester, Some("Spring 2026".to_string()));
    }

    #[test]
    fn test_seed_flag_precedence() {
        let mut cli = bare_cli(Command::Degree { name: None });
        cli.config_seed_file = Some(PathBuf::from("/long/seed.toml"));
        assert_eq!(
            cli.to_config_overrides().seed_file,
            Some("/long/seed.toml".to_string())
        );

        cli.seed = Some(PathBuf::from("/short/seed.toml"));
        assert_eq!(
            cli.to_config_overrides().seed_file,
            Some("/short/seed.toml".to_string())
        );
    }

    #[test]
    fn test_parse_grade_command() {
        let cli = Cli::try_parse_from([
            "nuregistrar",
            "grade",
            "INFO 5001",
            "--student",
            "alice",
            "--grade",
            "A-",
        ])
        .unwrap();
        match cli.command {
            Command::Grade {
                course_number,
                student,
                grade,
                semester,
            } => {
                assert_eq!(course_number, "INFO 5001");
                assert_eq!(student, "alice");
                assert_eq!(grade, "A-");
                assert!(semester.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_grade_help_mentions_run_scope() {
        let cli = Cli::command();
        let grade = cli.find_subcommand("grade").unwrap();
        let long_about = grade.get_long_about().unwrap().to_string();
        assert!(long_about.contains("seed file is never rewritten"));
    }
}
