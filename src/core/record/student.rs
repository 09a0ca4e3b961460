//! Student profile model

use super::{AssignmentLookup, Transcript};
use crate::core::error::EnrollmentResult;
use crate::core::models::{Person, StudentId};
use crate::core::schedule::{CourseOffer, SeatAssignment};
use std::fmt;

/// A student: identity plus academic record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    person: Person,
    transcript: Transcript,
}

impl StudentProfile {
    /// Create a profile with an empty transcript
    #[must_use]
    pub const fn new(person: Person) -> Self {
        Self {
            person,
            transcript: Transcript::new(),
        }
    }

    /// Student identifier
    #[must_use]
    pub const fn id(&self) -> &StudentId {
        &self.person.id
    }

    /// Display name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.person.name
    }

    /// The underlying person
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// The student's transcript
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Mutable access to the transcript
    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    /// Take a seat in `offer`, recording it in this student's load for the offer's semester.
    ///
    /// Registering twice for the same offer returns the existing assignment.
    /// A failed registration leaves the transcript as it was.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` when the offer has no free seat
    pub fn register<'o>(
        &mut self,
        offer: &'o mut CourseOffer,
    ) -> EnrollmentResult<&'o SeatAssignment> {
        let semester = offer.semester().to_string();
        let opened = self.transcript.course_load(&semester).is_none();
        let result = offer.register(
            &self.person.id,
            self.transcript.open_course_load(&semester),
        );
        if result.is_err() && opened {
            self.transcript.discard_empty_load(&semester);
        }
        result
    }

    /// Credit-weighted GPA for one semester
    ///
    /// # Errors
    /// See [`Transcript::compute_semester_gpa`]
    pub fn compute_semester_gpa(
        &self,
        semester: &str,
        lookup: &impl AssignmentLookup,
    ) -> EnrollmentResult<f64> {
        self.transcript.compute_semester_gpa(semester, lookup)
    }
}

impl fmt::Display for StudentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.person.name, self.person.id)
    }
}
