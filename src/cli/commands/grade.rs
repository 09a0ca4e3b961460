//! Grade command handler

use super::report_failure;
use nu_registrar::core::University;
use nu_registrar::info;

/// Assign a grade, then print the student's recomputed semester GPA
///
/// The change lives only as long as this process; seed files are not rewritten.
pub fn run(
    university: &mut University,
    course_number: &str,
    student_id: &str,
    grade: &str,
    semester: &str,
) -> bool {
    if let Err(e) = university.assign_grade(semester, course_number, student_id, grade) {
        return report_failure("Grade assignment", &e);
    }
    info!("Graded {student_id} in {course_number} ({semester}): {grade}");
    println!("✓ Grade {grade} assigned to {student_id} in {course_number}");

    match university.semester_gpa(student_id, semester) {
        Ok(gpa) => {
            println!("  GPA for {semester}: {gpa:.2}");
            true
        }
        Err(e) => report_failure("GPA recomputation", &e),
    }
}
