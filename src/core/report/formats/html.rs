//! HTML report generator
//!
//! Produces a self-contained page with embedded CSS.

use crate::core::report::{ReportGenerator, TranscriptReport};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/transcript.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, report: &TranscriptReport) -> String {
        let mut rows = String::new();
        for row in &report.rows {
            let grade_class = if row.grade.is_some() { "graded" } else { "ungraded" };
            let _ = writeln!(
                rows,
                "<tr class=\"{grade_class}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&row.course_number),
                escape_html(&row.title),
                escape_html(&row.section),
                row.credits,
                row.grade_display()
            );
        }

        HTML_TEMPLATE
            .replace("{{student_name}}", &escape_html(&report.student_name))
            .replace("{{student_id}}", &escape_html(&report.student_id))
            .replace("{{institution}}", &escape_html(&report.institution))
            .replace("{{semester}}", &escape_html(&report.semester))
            .replace("{{course_rows}}", rows.trim_end())
            .replace("{{course_count}}", &report.rows.len().to_string())
            .replace("{{graded_count}}", &report.summary.graded_courses.to_string())
            .replace("{{ungraded_count}}", &report.summary.ungraded_courses.to_string())
            .replace("{{graded_credits}}", &report.summary.graded_credits.to_string())
            .replace("{{total_credits}}", &report.total_credits().to_string())
            .replace("{{gpa}}", &report.gpa_display())
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
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
