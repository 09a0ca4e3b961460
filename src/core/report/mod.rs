//! Transcript report generation
//!
//! Collects a student's semester (courses, credits, grades, GPA) into a
//! `TranscriptReport` and renders it as Markdown or HTML from embedded templates.

pub mod formats;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

use crate::core::error::{EnrollmentError, EnrollmentResult};
use crate::core::grade::LetterGrade;
use crate::core::record::{AssignmentLookup, GpaSummary};
use crate::core::university::University;
use std::error::Error;
use std::path::Path;

/// One course line of a transcript report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Course number (e.g., "INFO 5001")
    pub course_number: String,
    /// Course title
    pub title: String,
    /// Section the student sits in
    pub section: String,
    /// Credit weight
    pub credits: u32,
    /// Grade, `None` while ungraded
    pub grade: Option<LetterGrade>,
}

impl ReportRow {
    /// Grade token, or "—" while ungraded
    #[must_use]
    pub fn grade_display(&self) -> &str {
        self.grade.map_or("—", LetterGrade::token)
    }
}

/// Data needed to render one student's semester
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptReport {
    /// Institution name
    pub institution: String,
    /// Student display name
    pub student_name: String,
    /// Student identifier
    pub student_id: String,
    /// Semester label
    pub semester: String,
    /// One row per registered course, in registration order
    pub rows: Vec<ReportRow>,
    /// Grade aggregate
    pub summary: GpaSummary,
}

impl TranscriptReport {
    /// Gather the report data for a student's semester
    ///
    /// # Errors
    /// - `StudentNotFound` for an unknown student
    /// - `SemesterNotFound` if the student has no load for `semester`
    /// - `UnmappedAssignment` if a registration cannot be traced to its offer
    pub fn build(
        university: &University,
        student_id: &str,
        semester: &str,
    ) -> EnrollmentResult<Self> {
        let student = university
            .student(student_id)
            .ok_or_else(|| EnrollmentError::StudentNotFound(student_id.to_string()))?;
        let load = student
            .transcript()
            .course_load(semester)
            .ok_or_else(|| EnrollmentError::SemesterNotFound(semester.to_string()))?;

        let rows = load
            .assignments()
            .iter()
            .map(|id| {
                university
                    .resolve(id)
                    .map(|(assignment, course)| ReportRow {
                        course_number: course.number().to_string(),
                        title: course.title().to_string(),
                        section: id.section().to_string(),
                        credits: course.credits(),
                        grade: assignment.grade(),
                    })
                    .ok_or_else(|| EnrollmentError::UnmappedAssignment(id.clone()))
            })
            .collect::<EnrollmentResult<Vec<_>>>()?;

        Ok(Self {
            institution: university.name.clone(),
            student_name: student.name().to_string(),
            student_id: student_id.to_string(),
            semester: semester.to_string(),
            rows,
            summary: load.summarize(university)?,
        })
    }

    /// Total credits registered, graded or not
    #[must_use]
    pub fn total_credits(&self) -> u64 {
        self.rows.iter().map(|r| u64::from(r.credits)).sum()
    }

    /// GPA with two decimals, or a note when nothing is graded
    #[must_use]
    pub fn gpa_display(&self) -> String {
        self.summary
            .graded_gpa()
            .map_or_else(|| "n/a (no graded courses)".to_string(), |gpa| format!("{gpa:.2}"))
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(
        &self,
        report: &TranscriptReport,
        output_path: &Path,
    ) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, report: &TranscriptReport) -> Result<String, Box<dyn Error>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_from_sample() {
        let mut uni = University::sample();
        uni.assign_grade("Fall 2025", "INFO 5001", "alice", "A").unwrap();

        let report = TranscriptReport::build(&uni, "alice", "Fall 2025").unwrap();
        assert_eq!(report.student_name, "Alice");
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].course_number, "INFO 5001");
        assert_eq!(report.rows[0].grade_display(), "A");
        assert_eq!(report.rows[1].grade_display(), "—");
        assert_eq!(report.total_credits(), 8);
        assert_eq!(report.gpa_display(), "4.00");
    }

    #[test]
    fn test_build_without_grades() {
        let uni = University::sample();
        let report = TranscriptReport::build(&uni, "bob", "Fall 2025").unwrap();
        assert_eq!(report.gpa_display(), "n/a (no graded courses)");
    }

    #[test]
    fn test_build_errors() {
        let uni = University::sample();
        assert_eq!(
            TranscriptReport::build(&uni, "carol", "Fall 2025"),
            Err(EnrollmentError::StudentNotFound("carol".to_string()))
        );
        assert_eq!(
            TranscriptReport::build(&uni, "alice", "Spring 2026"),
            Err(EnrollmentError::SemesterNotFound("Spring 2026".to_string()))
        );
    }
}
