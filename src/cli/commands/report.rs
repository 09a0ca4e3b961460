//! Report command handler
//!
//! Writes a student's semester transcript as Markdown or HTML.

use nu_registrar::config::Config;
use nu_registrar::core::report::{ReportFormat, TranscriptReport};
use nu_registrar::core::University;
use nu_registrar::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
pub fn run(
    university: &University,
    student_id: &str,
    semester: &str,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> bool {
    match generate_report(university, student_id, semester, format_str, output_file, config) {
        Ok(path) => {
            println!("✓ Report generated: {}", path.display());
            true
        }
        Err(err) => {
            error!("Report generation failed for {student_id}: {err}");
            eprintln!("{err}");
            false
        }
    }
}

fn generate_report(
    university: &University,
    student_id: &str,
    semester: &str,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;

    let report = TranscriptReport::build(university, student_id, semester)
        .map_err(|e| format!("✗ Failed to build transcript: {e}"))?;
    info!("Transcript gathered: {student_id}, {semester}, {} rows", report.rows.len());

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => default_output_path(&config.paths.reports_dir, student_id, semester, format),
    };
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create reports directory {}: {e}", parent.display())
            })?;
        }
    }

    format
        .generator()
        .generate(&report, &output_path)
        .map_err(|e| format!("✗ Failed to write {}: {e}", output_path.display()))?;

    Ok(output_path)
}

/// `<reports_dir>/<student>_<semester>.<ext>` with spaces in the semester replaced
fn default_output_path(
    reports_dir: &str,
    student_id: &str,
    semester: &str,
    format: ReportFormat,
) -> PathBuf {
    let semester_slug = semester.replace(char::is_whitespace, "_");
    PathBuf::from(reports_dir).join(format!(
        "{student_id}_{semester_slug}.{}",
        format.extension()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let path = default_output_path("/reports", "alice", "Fall 2025", ReportFormat::Markdown);
        assert_eq!(path, PathBuf::from("/reports/alice_Fall_2025.md"));
    }
}
