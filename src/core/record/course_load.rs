//! Per-semester course loads and GPA aggregation

use super::AssignmentLookup;
use crate::core::error::{EnrollmentError, EnrollmentResult};
use crate::core::models::Course;
use crate::core::schedule::AssignmentId;
use std::collections::HashMap;

/// Grade aggregate for one semester.
///
/// Ungraded assignments are counted but contribute nothing to points or credits.
#[derive(Debug, Clone, PartialEq)]
pub struct GpaSummary {
    /// Semester label
    pub semester: String,
    /// Number of graded assignments
    pub graded_courses: usize,
    /// Number of assignments still without a grade
    pub ungraded_courses: usize,
    /// Credits of graded assignments, widened so large catalog weights cannot overflow
    pub graded_credits: u64,
    /// Sum of grade point × credits over graded assignments
    pub quality_points: f64,
}

impl GpaSummary {
    /// Credit-weighted GPA, or `None` when nothing is graded yet
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn graded_gpa(&self) -> Option<f64> {
        if self.graded_credits == 0 {
            return None;
        }
        Some((self.quality_points / self.graded_credits as f64).clamp(0.0, 4.0))
    }

    /// Credit-weighted GPA, 0.0 when nothing is graded yet
    #[must_use]
    pub fn gpa(&self) -> f64 {
        self.graded_gpa().unwrap_or(0.0)
    }

    /// Total number of assignments in the load
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.graded_courses + self.ungraded_courses
    }
}

/// The seat assignments a student holds in one semester
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLoad {
    semester: String,
    assignments: Vec<AssignmentId>,
    courses: HashMap<AssignmentId, Course>,
}

impl CourseLoad {
    /// Create an empty load
    #[must_use]
    pub fn new(semester: impl Into<String>) -> Self {
        Self {
            semester: semester.into(),
            assignments: Vec::new(),
            courses: HashMap::new(),
        }
    }

    /// Semester label
    #[must_use]
    pub fn semester(&self) -> &str {
        &self.semester
    }

    /// Assignment identifiers in registration order
    #[must_use]
    pub fn assignments(&self) -> &[AssignmentId] {
        &self.assignments
    }

    /// Whether the assignment is part of this load
    #[must_use]
    pub fn contains(&self, id: &AssignmentId) -> bool {
        self.assignments.contains(id)
    }

    /// Number of assignments
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the load has no assignments
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub(crate) fn record(&mut self, id: AssignmentId) {
        if !self.contains(&id) {
            self.assignments.push(id);
        }
    }

    /// Record which course an assignment fulfils.
    ///
    /// Credit weight is always taken from the offer's own course, so the mapping
    /// must name that same course.
    ///
    /// # Errors
    /// - `ForeignAssignment` if the assignment is not in this load
    /// - `CourseMismatch` if `course` is not the course of the assignment's offer
    pub fn map_course(&mut self, id: &AssignmentId, course: Course) -> EnrollmentResult<()> {
        if !self.contains(id) {
            return Err(EnrollmentError::ForeignAssignment {
                assignment: id.clone(),
                semester: self.semester.clone(),
            });
        }
        if course.number() != id.course_number() {
            return Err(EnrollmentError::CourseMismatch {
                assignment: id.clone(),
                expected: id.course_number().to_string(),
                actual: course.number().to_string(),
            });
        }
        self.courses.insert(id.clone(), course);
        Ok(())
    }

    /// The course explicitly mapped to an assignment
    #[must_use]
    pub fn mapped_course(&self, id: &AssignmentId) -> Option<&Course> {
        self.courses.get(id)
    }

    /// Aggregate grades for this load.
    ///
    /// # Errors
    /// Returns `UnmappedAssignment` if an assignment cannot be resolved through `lookup`
    pub fn summarize(&self, lookup: &impl AssignmentLookup) -> EnrollmentResult<GpaSummary> {
        let mut summary = GpaSummary {
            semester: self.semester.clone(),
            graded_courses: 0,
            ungraded_courses: 0,
            graded_credits: 0,
            quality_points: 0.0,
        };

        for id in &self.assignments {
            let (assignment, course) = lookup
                .resolve(id)
                .ok_or_else(|| EnrollmentError::UnmappedAssignment(id.clone()))?;

            match assignment.grade() {
                Some(grade) => {
                    summary.graded_courses += 1;
                    summary.graded_credits += u64::from(course.credits());
                    summary.quality_points += grade.grade_point() * f64::from(course.credits());
                }
                None => summary.ungraded_courses += 1,
            }
        }

        Ok(summary)
    }
}
