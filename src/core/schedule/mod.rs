//! Semester course schedules, offers and seats

pub mod offer;
pub mod seat;

pub use offer::CourseOffer;
pub use seat::{AssignmentId, Seat, SeatAssignment};

use crate::core::error::{EnrollmentError, EnrollmentResult};
use crate::core::models::Course;
use crate::core::record::AssignmentLookup;
use serde::Serialize;

/// The offers of one semester, kept in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseSchedule {
    semester: String,
    offers: Vec<CourseOffer>,
}

impl CourseSchedule {
    /// Create an empty schedule
    #[must_use]
    pub fn new(semester: impl Into<String>) -> Self {
        Self {
            semester: semester.into(),
            offers: Vec::new(),
        }
    }

    /// Semester label (e.g., "Fall 2025")
    #[must_use]
    pub fn semester(&self) -> &str {
        &self.semester
    }

    /// All offers in insertion order
    #[must_use]
    pub fn offers(&self) -> &[CourseOffer] {
        &self.offers
    }

    /// Add a section of `course` with `capacity` seats
    ///
    /// # Errors
    /// - `DuplicateOffer` if the (course number, section) pair already exists
    /// - `InvalidCapacity` if `capacity` is zero
    pub fn add_offer(
        &mut self,
        course: Course,
        section: impl Into<String>,
        capacity: usize,
    ) -> EnrollmentResult<&mut CourseOffer> {
        let section = section.into();
        if self.find_offer(course.number(), &section).is_some() {
            return Err(EnrollmentError::DuplicateOffer {
                semester: self.semester.clone(),
                course_number: course.number().to_string(),
                section,
            });
        }

        let offer = CourseOffer::new(&self.semester, course, section, capacity)?;
        let index = self.offers.len();
        self.offers.push(offer);
        Ok(&mut self.offers[index])
    }

    /// First offer (in insertion order) for a course number
    #[must_use]
    pub fn find_offer_by_course_number(&self, number: &str) -> Option<&CourseOffer> {
        self.offers.iter().find(|o| o.course().number() == number)
    }

    /// Mutable variant of [`find_offer_by_course_number`](Self::find_offer_by_course_number)
    pub fn find_offer_by_course_number_mut(&mut self, number: &str) -> Option<&mut CourseOffer> {
        self.offers
            .iter_mut()
            .find(|o| o.course().number() == number)
    }

    /// The offer for a specific section
    #[must_use]
    pub fn find_offer(&self, number: &str, section: &str) -> Option<&CourseOffer> {
        self.offers
            .iter()
            .find(|o| o.course().number() == number && o.section() == section)
    }

    /// Mutable variant of [`find_offer`](Self::find_offer)
    pub fn find_offer_mut(&mut self, number: &str, section: &str) -> Option<&mut CourseOffer> {
        self.offers
            .iter_mut()
            .find(|o| o.course().number() == number && o.section() == section)
    }

    /// Every section of a course, in insertion order
    #[must_use]
    pub fn offers_for_course(&self, number: &str) -> Vec<&CourseOffer> {
        self.offers
            .iter()
            .filter(|o| o.course().number() == number)
            .collect()
    }

    /// Total seats taken across all offers
    #[must_use]
    pub fn total_enrolled(&self) -> usize {
        self.offers.iter().map(CourseOffer::enrolled_count).sum()
    }

    /// Mutable access to an assignment by identifier
    pub fn assignment_mut(&mut self, id: &AssignmentId) -> Option<&mut SeatAssignment> {
        if id.semester() != self.semester {
            return None;
        }
        self.find_offer_mut(id.course_number(), id.section())?
            .assignment_at_mut(id.seat())
    }
}

impl AssignmentLookup for CourseSchedule {
    fn resolve(&self, id: &AssignmentId) -> Option<(&SeatAssignment, &Course)> {
        if id.semester() != self.semester {
            return None;
        }
        let offer = self.find_offer(id.course_number(), id.section())?;
        let assignment = offer.assignment_at(id.seat())?;
        Some((assignment, offer.course()))
    }
}
