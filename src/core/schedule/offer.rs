//! Course offers and seat allocation

use super::seat::{AssignmentId, Seat, SeatAssignment};
use crate::core::error::{EnrollmentError, EnrollmentResult};
use crate::core::models::{Course, StudentId};
use crate::core::record::CourseLoad;
use serde::Serialize;
use std::fmt;

/// A scheduled section of a course with a fixed number of seats
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseOffer {
    semester: String,
    course: Course,
    section: String,
    seats: Vec<Seat>,
}

impl CourseOffer {
    /// Create an offer with `capacity` empty seats
    ///
    /// # Errors
    /// Returns `InvalidCapacity` when `capacity` is zero
    pub(crate) fn new(
        semester: impl Into<String>,
        course: Course,
        section: impl Into<String>,
        capacity: usize,
    ) -> EnrollmentResult<Self> {
        let section = section.into();
        if capacity == 0 {
            return Err(EnrollmentError::InvalidCapacity {
                course_number: course.number().to_string(),
                section,
            });
        }
        Ok(Self {
            semester: semester.into(),
            course,
            section,
            seats: (0..capacity).map(Seat::new).collect(),
        })
    }

    /// The course being taught
    #[must_use]
    pub const fn course(&self) -> &Course {
        &self.course
    }

    /// Section identifier (e.g., "01")
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Semester this offer belongs to
    #[must_use]
    pub fn semester(&self) -> &str {
        &self.semester
    }

    /// Seats in index order
    #[must_use]
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    /// Number of seats
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.seats.len()
    }

    /// Number of occupied seats
    #[must_use]
    pub fn enrolled_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }

    /// Number of free seats
    #[must_use]
    pub fn available_seats(&self) -> usize {
        self.capacity() - self.enrolled_count()
    }

    /// Whether every seat is taken
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.seats.iter().all(Seat::is_occupied)
    }

    /// The assignment held by `student` in this offer, if any
    #[must_use]
    pub fn assignment_for(&self, student: &StudentId) -> Option<&SeatAssignment> {
        self.seats
            .iter()
            .find(|s| s.is_held_by(student))
            .and_then(Seat::assignment)
    }

    /// Mutable access to `student`'s assignment, for grading
    pub fn assignment_for_mut(&mut self, student: &StudentId) -> Option<&mut SeatAssignment> {
        self.seats
            .iter_mut()
            .find(|s| s.is_held_by(student))
            .and_then(Seat::assignment_mut)
    }

    /// The assignment occupying seat `index`
    #[must_use]
    pub fn assignment_at(&self, index: usize) -> Option<&SeatAssignment> {
        self.seats.get(index).and_then(Seat::assignment)
    }

    /// Mutable access to the assignment occupying seat `index`
    pub fn assignment_at_mut(&mut self, index: usize) -> Option<&mut SeatAssignment> {
        self.seats.get_mut(index).and_then(Seat::assignment_mut)
    }

    /// Register `student` into this offer and record the assignment in `load`.
    ///
    /// A student already holding a seat gets that assignment back unchanged.
    /// Otherwise the lowest-index free seat is claimed.
    ///
    /// # Errors
    /// - `SemesterMismatch` if `load` is for another semester
    /// - `CapacityExceeded` if every seat is taken by other students
    pub fn register(
        &mut self,
        student: &StudentId,
        load: &mut CourseLoad,
    ) -> EnrollmentResult<&SeatAssignment> {
        if load.semester() != self.semester {
            return Err(EnrollmentError::SemesterMismatch {
                offer_semester: self.semester.clone(),
                load_semester: load.semester().to_string(),
            });
        }

        let index = match self.seats.iter().position(|s| s.is_held_by(student)) {
            Some(index) => index,
            None => self.claim_first_open_seat(student)?,
        };

        let assignment = self
            .assignment_at(index)
            .ok_or_else(|| self.capacity_exceeded())?;
        load.record(assignment.id().clone());
        Ok(assignment)
    }

    fn claim_first_open_seat(&mut self, student: &StudentId) -> EnrollmentResult<usize> {
        let index = self
            .seats
            .iter()
            .position(|s| !s.is_occupied())
            .ok_or_else(|| self.capacity_exceeded())?;

        let id = AssignmentId::new(&self.semester, self.course.number(), &self.section, index);
        self.seats[index].claim(SeatAssignment::new(id, student.clone()));
        Ok(index)
    }

    fn capacity_exceeded(&self) -> EnrollmentError {
        EnrollmentError::CapacityExceeded {
            course_number: self.course.number().to_string(),
            section: self.section.clone(),
            capacity: self.capacity(),
        }
    }
}

impl fmt::Display for CourseOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} section {} ({})",
            self.course.number(),
            self.course.title(),
            self.section,
            self.semester
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(capacity: usize) -> CourseOffer {
        let course = Course::new("INFO 5001", "Application Design & Development", 4).unwrap();
        CourseOffer::new("Fall 2025", course, "01", capacity).unwrap()
    }

    #[test]
    fn test_offer_has_capacity_seats() {
        let offer = offer(3);
        assert_eq!(offer.capacity(), 3);
        assert_eq!(offer.seats().len(), 3);
        assert_eq!(offer.enrolled_count(), 0);
        assert_eq!(offer.available_seats(), 3);
        assert!(!offer.is_full());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let course = Course::new("INFO 5001", "ADD", 4).unwrap();
        let result = CourseOffer::new("Fall 2025", course, "01", 0);
        assert!(matches!(
            result,
            Err(EnrollmentError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn test_register_claims_lowest_free_seat() {
        let mut offer = offer(3);
        let mut alice_load = CourseLoad::new("Fall 2025");
        let mut bob_load = CourseLoad::new("Fall 2025");

        let a = offer
            .register(&StudentId::from("alice"), &mut alice_load)
            .unwrap()
            .id()
            .clone();
        let b = offer
            .register(&StudentId::from("bob"), &mut bob_load)
            .unwrap()
            .id()
            .clone();

        assert_eq!(a.seat(), 0);
        assert_eq!(b.seat(), 1);
        assert_eq!(offer.enrolled_count(), 2);
        assert!(alice_load.contains(&a));
        assert!(bob_load.contains(&b));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut offer = offer(2);
        let mut load = CourseLoad::new("Fall 2025");
        let alice = StudentId::from("alice");

        let first = offer.register(&alice, &mut load).unwrap().clone();
        let second = offer.register(&alice, &mut load).unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(offer.enrolled_count(), 1);
        assert_eq!(load.assignments().len(), 1);
    }

    #[test]
    fn test_register_beyond_capacity_fails() {
        let mut offer = offer(2);
        for name in ["alice", "bob"] {
            let mut load = CourseLoad::new("Fall 2025");
            offer.register(&StudentId::from(name), &mut load).unwrap();
        }

        let mut load = CourseLoad::new("Fall 2025");
        let result = offer.register(&StudentId::from("carol"), &mut load);
        assert_eq!(
            result.map(|a| a.id().clone()),
            Err(EnrollmentError::CapacityExceeded {
                course_number: "INFO 5001".to_string(),
                section: "01".to_string(),
                capacity: 2,
            })
        );
        assert!(load.is_empty());
        assert_eq!(offer.enrolled_count(), 2);
        assert!(offer.is_full());
    }

    #[test]
    fn test_full_offer_still_returns_existing_seat() {
        let mut offer = offer(1);
        let mut load = CourseLoad::new("Fall 2025");
        let alice = StudentId::from("alice");

        offer.register(&alice, &mut load).unwrap();
        assert!(offer.register(&alice, &mut load).is_ok());
    }

    #[test]
    fn test_register_rejects_other_semester_load() {
        let mut offer = offer(2);
        let mut load = CourseLoad::new("Spring 2026");

        let result = offer.register(&StudentId::from("alice"), &mut load);
        assert!(matches!(
            result,
            Err(EnrollmentError::SemesterMismatch { .. })
        ));
        assert_eq!(offer.enrolled_count(), 0);
    }

    #[test]
    fn test_assignment_for_student() {
        let mut offer = offer(2);
        let mut load = CourseLoad::new("Fall 2025");
        let alice = StudentId::from("alice");
        offer.register(&alice, &mut load).unwrap();

        assert!(offer.assignment_for(&alice).is_some());
        assert!(offer.assignment_for(&StudentId::from("bob")).is_none());

        offer
            .assignment_for_mut(&alice)
            .unwrap()
            .set_letter_grade("A-")
            .unwrap();
        assert_eq!(
            offer.assignment_for(&alice).unwrap().grade().map(|g| g.token()),
            Some("A-")
        );
    }
}
