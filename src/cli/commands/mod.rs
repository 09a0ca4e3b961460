//! CLI command handlers for `nuregistrar`.
//!
//! Each command is implemented in its own submodule. Handlers print their
//! result and return `false` when the command failed.

pub mod config;
pub mod degree;
pub mod gpa;
pub mod grade;
pub mod offer;
pub mod report;

use nu_registrar::core::EnrollmentError;
use nu_registrar::error;

/// Log an enrollment failure and print it for the user
pub(crate) fn report_failure(action: &str, err: &EnrollmentError) -> bool {
    error!("{action} failed ({}): {err}", err.category());
    eprintln!("✗ {err}");
    false
}
