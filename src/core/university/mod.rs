//! The university object graph and identifier-based operations on it
//!
//! A `University` owns the catalog hierarchy, every semester's schedule and the
//! student profiles. Callers address things by course number, section, semester
//! and student id rather than by holding references into the graph.

pub mod seed;

pub use seed::SeedError;

use crate::core::error::{EnrollmentError, EnrollmentResult};
use crate::core::models::{College, Course, Degree, StudentId};
use crate::core::record::{AssignmentLookup, GpaSummary, StudentProfile};
use crate::core::schedule::{AssignmentId, CourseOffer, CourseSchedule, SeatAssignment};

/// Colleges, schedules and students of one institution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct University {
    /// Institution name
    pub name: String,
    colleges: Vec<College>,
    schedules: Vec<CourseSchedule>,
    students: Vec<StudentProfile>,
}

impl University {
    /// Create an empty university
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colleges: Vec::new(),
            schedules: Vec::new(),
            students: Vec::new(),
        }
    }

    /// Add a college
    pub fn add_college(&mut self, college: College) {
        self.colleges.push(college);
    }

    /// Colleges in insertion order
    #[must_use]
    pub fn colleges(&self) -> &[College] {
        &self.colleges
    }

    /// Find a catalog course in any college (first match)
    #[must_use]
    pub fn find_course(&self, number: &str) -> Option<&Course> {
        self.colleges.iter().find_map(|c| c.find_course(number))
    }

    /// Every degree across colleges and departments
    pub fn degrees(&self) -> impl Iterator<Item = &Degree> {
        self.colleges.iter().flat_map(College::degrees)
    }

    /// Find a degree by name
    #[must_use]
    pub fn find_degree(&self, name: &str) -> Option<&Degree> {
        self.degrees().find(|d| d.name() == name)
    }

    /// The schedule for a semester, created empty if it does not exist yet
    pub fn open_schedule(&mut self, semester: &str) -> &mut CourseSchedule {
        let index = match self.schedules.iter().position(|s| s.semester() == semester) {
            Some(index) => index,
            None => {
                self.schedules.push(CourseSchedule::new(semester));
                self.schedules.len() - 1
            }
        };
        &mut self.schedules[index]
    }

    /// The schedule for a semester
    #[must_use]
    pub fn schedule(&self, semester: &str) -> Option<&CourseSchedule> {
        self.schedules.iter().find(|s| s.semester() == semester)
    }

    /// All schedules
    #[must_use]
    pub fn schedules(&self) -> &[CourseSchedule] {
        &self.schedules
    }

    /// Add a student
    ///
    /// # Returns
    /// `false` if a student with the same id already exists
    pub fn add_student(&mut self, student: StudentProfile) -> bool {
        if self.student(student.id().as_str()).is_some() {
            return false;
        }
        self.students.push(student);
        true
    }

    /// Look up a student by id
    #[must_use]
    pub fn student(&self, id: &str) -> Option<&StudentProfile> {
        self.students.iter().find(|s| s.id().as_str() == id)
    }

    /// All students
    #[must_use]
    pub fn students(&self) -> &[StudentProfile] {
        &self.students
    }

    /// The offer for a course in a semester: the given section, or the first one listed
    #[must_use]
    pub fn find_offer(
        &self,
        semester: &str,
        course_number: &str,
        section: Option<&str>,
    ) -> Option<&CourseOffer> {
        let schedule = self.schedule(semester)?;
        match section {
            Some(section) => schedule.find_offer(course_number, section),
            None => schedule.find_offer_by_course_number(course_number),
        }
    }

    /// Number of students enrolled in the first offer of a course, `None` if not offered
    #[must_use]
    pub fn enrolled_count(&self, semester: &str, course_number: &str) -> Option<usize> {
        self.find_offer(semester, course_number, None)
            .map(CourseOffer::enrolled_count)
    }

    /// Register a student into an offer
    ///
    /// # Errors
    /// - `ScheduleNotFound`, `OfferNotFound`, `StudentNotFound` for unknown identifiers
    /// - `CapacityExceeded` when the offer is full
    pub fn register(
        &mut self,
        student_id: &str,
        semester: &str,
        course_number: &str,
        section: Option<&str>,
    ) -> EnrollmentResult<AssignmentId> {
        let schedule = self
            .schedules
            .iter_mut()
            .find(|s| s.semester() == semester)
            .ok_or_else(|| EnrollmentError::ScheduleNotFound(semester.to_string()))?;

        let offer = match section {
            Some(section) => schedule.find_offer_mut(course_number, section),
            None => schedule.find_offer_by_course_number_mut(course_number),
        }
        .ok_or_else(|| EnrollmentError::OfferNotFound {
            semester: semester.to_string(),
            course_number: course_number.to_string(),
        })?;

        let student = self
            .students
            .iter_mut()
            .find(|s| s.id().as_str() == student_id)
            .ok_or_else(|| EnrollmentError::StudentNotFound(student_id.to_string()))?;

        student.register(offer).map(|a| a.id().clone())
    }

    /// Grade a student's seat in the first offer of a course
    ///
    /// # Errors
    /// - `ScheduleNotFound`, `OfferNotFound`, `StudentNotFound` for unknown identifiers
    /// - `NotEnrolled` if the student holds no seat in that offer
    /// - `InvalidGrade` for an unrecognized grade token
    pub fn assign_grade(
        &mut self,
        semester: &str,
        course_number: &str,
        student_id: &str,
        grade: &str,
    ) -> EnrollmentResult<()> {
        let student = self
            .student(student_id)
            .map(|s| s.id().clone())
            .ok_or_else(|| EnrollmentError::StudentNotFound(student_id.to_string()))?;

        let schedule = self
            .schedules
            .iter_mut()
            .find(|s| s.semester() == semester)
            .ok_or_else(|| EnrollmentError::ScheduleNotFound(semester.to_string()))?;

        let offer = schedule
            .find_offer_by_course_number_mut(course_number)
            .ok_or_else(|| EnrollmentError::OfferNotFound {
                semester: semester.to_string(),
                course_number: course_number.to_string(),
            })?;

        offer
            .assignment_for_mut(&student)
            .ok_or_else(|| EnrollmentError::NotEnrolled {
                student: student_id.to_string(),
                course_number: course_number.to_string(),
            })?
            .set_letter_grade(grade)
    }

    /// Grade an assignment by identifier
    ///
    /// # Errors
    /// - `UnmappedAssignment` if no seat matches the identifier
    /// - `InvalidGrade` for an unrecognized grade token
    pub fn grade_assignment(&mut self, id: &AssignmentId, grade: &str) -> EnrollmentResult<()> {
        self.assignment_mut(id)
            .ok_or_else(|| EnrollmentError::UnmappedAssignment(id.clone()))?
            .set_letter_grade(grade)
    }

    /// Mutable access to an assignment by identifier
    pub fn assignment_mut(&mut self, id: &AssignmentId) -> Option<&mut SeatAssignment> {
        self.schedules
            .iter_mut()
            .find(|s| s.semester() == id.semester())?
            .assignment_mut(id)
    }

    /// Grade aggregate for a student's semester
    ///
    /// # Errors
    /// - `StudentNotFound` for an unknown student
    /// - `SemesterNotFound` if the student has no load for `semester`
    pub fn semester_summary(
        &self,
        student_id: &str,
        semester: &str,
    ) -> EnrollmentResult<GpaSummary> {
        self.student(student_id)
            .ok_or_else(|| EnrollmentError::StudentNotFound(student_id.to_string()))?
            .transcript()
            .semester_summary(semester, self)
    }

    /// Credit-weighted GPA for a student's semester, 0.0 when nothing is graded
    ///
    /// # Errors
    /// Same as [`semester_summary`](Self::semester_summary)
    pub fn semester_gpa(&self, student_id: &str, semester: &str) -> EnrollmentResult<f64> {
        self.semester_summary(student_id, semester)
            .map(|summary| summary.gpa())
    }

    /// Students holding a seat in any section of a course
    #[must_use]
    pub fn roster(&self, semester: &str, course_number: &str) -> Vec<&StudentId> {
        self.schedule(semester)
            .map(|schedule| {
                schedule
                    .offers_for_course(course_number)
                    .into_iter()
                    .flat_map(|offer| offer.seats().iter().filter_map(|s| s.assignment()))
                    .map(SeatAssignment::student)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl AssignmentLookup for University {
    fn resolve(&self, id: &AssignmentId) -> Option<(&SeatAssignment, &Course)> {
        self.schedule(id.semester())?.resolve(id)
    }
}
