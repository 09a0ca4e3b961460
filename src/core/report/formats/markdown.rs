//! Markdown report generator

use crate::core::report::{ReportGenerator, TranscriptReport};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/transcript.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, report: &TranscriptReport) -> String {
        let mut rows = String::new();
        for row in &report.rows {
            let _ = writeln!(
                rows,
                "| {} | {} | {} | {} | {} |",
                row.course_number,
                escape_cell(&row.title),
                row.section,
                row.credits,
                row.grade_display()
            );
        }

        MARKDOWN_TEMPLATE
            .replace("{{student_name}}", &report.student_name)
            .replace("{{student_id}}", &report.student_id)
            .replace("{{institution}}", &report.institution)
            .replace("{{semester}}", &report.semester)
            .replace("{{course_rows}}", rows.trim_end())
            .replace("{{course_count}}", &report.rows.len().to_string())
            .replace("{{graded_count}}", &report.summary.graded_courses.to_string())
            .replace("{{ungraded_count}}", &report.summary.ungraded_courses.to_string())
            .replace("{{graded_credits}}", &report.summary.graded_credits.to_string())
            .replace("{{total_credits}}", &report.total_credits().to_string())
            .replace("{{gpa}}", &report.gpa_display())
    }
}

/// Pipes would split a table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(
        &self,
        report: &TranscriptReport,
        output_path: &Path,
    ) -> Result<(), Box<dyn Error>> {
        let content = self.render(report)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, report: &TranscriptReport) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::university::University;

    #[test]
    fn test_render_contains_rows_and_gpa() {
        let mut uni = University::sample();
        uni.assign_grade("Fall 2025", "INFO 5001", "alice", "A").unwrap();
        uni.assign_grade("Fall 2025", "INFO 5100", "alice", "B").unwrap();
        let report = TranscriptReport::build(&uni, "alice", "Fall 2025").unwrap();

        let output = MarkdownReporter::new().render(&report).unwrap();
        assert!(output.contains("# Transcript: Alice"));
        assert!(output.contains("| INFO 5001 | Application Design & Development | 01 | 4 | A |"));
        assert!(output.contains("| INFO 5100 | AED - Java | 01 | 4 | B |"));
        assert!(output.contains("**Semester GPA:** 3.50"));
        assert!(!output.contains("{{"));
    }

    #[test]
    fn test_escape_cell() {
        assert_eq!(escape_cell("A | B"), "A \\| B");
    }
}
