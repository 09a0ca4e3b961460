//! GPA command handler

use super::report_failure;
use nu_registrar::core::{EnrollmentError, University};
use nu_registrar::{debug, info};

/// Print a student's semester GPA
pub fn run(university: &University, student_id: &str, semester: &str) -> bool {
    let Some(student) = university.student(student_id) else {
        return report_failure(
            "GPA lookup",
            &EnrollmentError::StudentNotFound(student_id.to_string()),
        );
    };

    match university.semester_summary(student_id, semester) {
        Ok(summary) => {
            debug!(
                "{student_id} {semester}: {} graded, {} ungraded, {} graded credits",
                summary.graded_courses, summary.ungraded_courses, summary.graded_credits
            );
            info!("GPA computed for {student_id} in {semester}");
            println!("{} GPA for {semester}: {:.2}", student.name(), summary.gpa());
            true
        }
        Err(e) => report_failure("GPA lookup", &e),
    }
}
