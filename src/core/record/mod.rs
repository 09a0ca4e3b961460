//! Student academic records: course loads, transcripts and GPA

pub mod course_load;
pub mod student;
pub mod transcript;

pub use course_load::{CourseLoad, GpaSummary};
pub use student::StudentProfile;
pub use transcript::Transcript;

use crate::core::models::Course;
use crate::core::schedule::{AssignmentId, SeatAssignment};

/// Resolves assignment identifiers against the offers that own them.
///
/// Course loads only hold identifiers; grades and credit weights are read from
/// the owner of record at query time.
pub trait AssignmentLookup {
    /// The assignment with this identifier and the course of its offer
    fn resolve(&self, id: &AssignmentId) -> Option<(&SeatAssignment, &Course)>;
}
