//! Transcript model

use super::{AssignmentLookup, CourseLoad, GpaSummary};
use crate::core::error::{EnrollmentError, EnrollmentResult};
use crate::core::models::Course;
use crate::core::schedule::AssignmentId;

/// A student's course loads, at most one per semester
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    loads: Vec<CourseLoad>,
}

impl Transcript {
    /// Create an empty transcript
    #[must_use]
    pub const fn new() -> Self {
        Self { loads: Vec::new() }
    }

    /// Add a course load
    ///
    /// # Errors
    /// Returns `DuplicateCourseLoad` if a load for that semester already exists
    pub fn add_course_load(&mut self, load: CourseLoad) -> EnrollmentResult<()> {
        if self.course_load(load.semester()).is_some() {
            return Err(EnrollmentError::DuplicateCourseLoad(
                load.semester().to_string(),
            ));
        }
        self.loads.push(load);
        Ok(())
    }

    /// The load for a semester
    #[must_use]
    pub fn course_load(&self, semester: &str) -> Option<&CourseLoad> {
        self.loads.iter().find(|l| l.semester() == semester)
    }

    /// Mutable access to the load for a semester
    pub fn course_load_mut(&mut self, semester: &str) -> Option<&mut CourseLoad> {
        self.loads.iter_mut().find(|l| l.semester() == semester)
    }

    /// The load for a semester, opened empty if the student has none yet
    pub fn open_course_load(&mut self, semester: &str) -> &mut CourseLoad {
        let index = match self.loads.iter().position(|l| l.semester() == semester) {
            Some(index) => index,
            None => {
                self.loads.push(CourseLoad::new(semester));
                self.loads.len() - 1
            }
        };
        &mut self.loads[index]
    }

    /// Drop the load for `semester` if it holds no assignment
    pub(crate) fn discard_empty_load(&mut self, semester: &str) {
        self.loads.retain(|l| l.semester() != semester || !l.is_empty());
    }

    /// All course loads in the order they were opened
    #[must_use]
    pub fn course_loads(&self) -> &[CourseLoad] {
        &self.loads
    }

    /// Semester labels in the order they were opened
    pub fn semesters(&self) -> impl Iterator<Item = &str> {
        self.loads.iter().map(CourseLoad::semester)
    }

    /// Record which course an assignment fulfils, in the load of the assignment's semester
    ///
    /// # Errors
    /// - `ForeignAssignment` if no load of this transcript holds the assignment
    /// - `CourseMismatch` if `course` is not the course of the assignment's offer
    pub fn map_course(&mut self, id: &AssignmentId, course: Course) -> EnrollmentResult<()> {
        match self.course_load_mut(id.semester()) {
            Some(load) => load.map_course(id, course),
            None => Err(EnrollmentError::ForeignAssignment {
                assignment: id.clone(),
                semester: id.semester().to_string(),
            }),
        }
    }

    /// Grade aggregate for one semester
    ///
    /// # Errors
    /// - `SemesterNotFound` if there is no load for `semester`
    /// - `UnmappedAssignment` if an assignment cannot be resolved through `lookup`
    pub fn semester_summary(
        &self,
        semester: &str,
        lookup: &impl AssignmentLookup,
    ) -> EnrollmentResult<GpaSummary> {
        self.course_load(semester)
            .ok_or_else(|| EnrollmentError::SemesterNotFound(semester.to_string()))?
            .summarize(lookup)
    }

    /// Credit-weighted GPA for one semester, 0.0 when nothing is graded.
    ///
    /// Recomputed from the current grades on every call.
    ///
    /// # Errors
    /// Same as [`semester_summary`](Self::semester_summary)
    pub fn compute_semester_gpa(
        &self,
        semester: &str,
        lookup: &impl AssignmentLookup,
    ) -> EnrollmentResult<f64> {
        self.semester_summary(semester, lookup)
            .map(|summary| summary.gpa())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Person, StudentId};
    use crate::core::record::StudentProfile;
    use crate::core::schedule::CourseSchedule;

    #[test]
    fn test_one_load_per_semester() {
        let mut transcript = Transcript::new();
        transcript
            .add_course_load(CourseLoad::new("Fall 2025"))
            .unwrap();

        let result = transcript.add_course_load(CourseLoad::new("Fall 2025"));
        assert_eq!(
            result,
            Err(EnrollmentError::DuplicateCourseLoad("Fall 2025".to_string()))
        );

        transcript.open_course_load("Fall 2025");
        transcript.open_course_load("Spring 2026");
        let semesters: Vec<&str> = transcript.semesters().collect();
        assert_eq!(semesters, vec!["Fall 2025", "Spring 2026"]);
    }

    #[test]
    fn test_gpa_for_missing_semester() {
        let transcript = Transcript::new();
        let schedule = CourseSchedule::new("Fall 2025");

        assert_eq!(
            transcript.compute_semester_gpa("Fall 2025", &schedule),
            Err(EnrollmentError::SemesterNotFound("Fall 2025".to_string()))
        );
    }

    #[test]
    fn test_gpa_reflects_regrading() {
        let mut schedule = CourseSchedule::new("Fall 2025");
        let mut transcript = Transcript::new();
        let course = Course::new("INFO 5001", "ADD", 4).unwrap();

        let id = schedule
            .add_offer(course, "01", 3)
            .unwrap()
            .register(
                &StudentId::from("alice"),
                transcript.open_course_load("Fall 2025"),
            )
            .unwrap()
            .id()
            .clone();

        schedule.assignment_mut(&id).unwrap().set_letter_grade("C").unwrap();
        let gpa = transcript.compute_semester_gpa("Fall 2025", &schedule).unwrap();
        assert!((gpa - 2.0).abs() < 1e-9);

        schedule.assignment_mut(&id).unwrap().set_letter_grade("A-").unwrap();
        let gpa = transcript.compute_semester_gpa("Fall 2025", &schedule).unwrap();
        assert!((gpa - 3.67).abs() < 1e-9);
    }

    #[test]
    fn test_map_course_without_load() {
        let mut transcript = Transcript::new();
        let id = AssignmentId::new("Fall 2025", "INFO 5001", "01", 0);
        let course = Course::new("INFO 5001", "ADD", 4).unwrap();

        assert!(matches!(
            transcript.map_course(&id, course),
            Err(EnrollmentError::ForeignAssignment { .. })
        ));
    }

    #[test]
    fn test_map_course_after_registration() {
        let mut schedule = CourseSchedule::new("Fall 2025");
        let add = Course::new("INFO 5001", "ADD", 4).unwrap();
        let aed = Course::new("INFO 5100", "AED", 4).unwrap();
        schedule.add_offer(add.clone(), "01", 2).unwrap();

        let mut alice = StudentProfile::new(Person::new("alice", "Alice"));
        let offer = schedule.find_offer_by_course_number_mut("INFO 5001").unwrap();
        let id = alice.register(offer).unwrap().id().clone();

        let transcript = alice.transcript_mut();
        assert_eq!(transcript.map_course(&id, add.clone()), Ok(()));
        assert_eq!(
            transcript.course_load("Fall 2025").unwrap().mapped_course(&id),
            Some(&add)
        );

        assert_eq!(
            transcript.map_course(&id, aed),
            Err(EnrollmentError::CourseMismatch {
                assignment: id.clone(),
                expected: "INFO 5001".to_string(),
                actual: "INFO 5100".to_string(),
            })
        );
        assert_eq!(
            transcript.course_load("Fall 2025").unwrap().mapped_course(&id),
            Some(&add)
        );
    }
}
