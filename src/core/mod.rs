//! Core enrollment and academic record engine

pub mod error;
pub mod grade;
pub mod models;
pub mod record;
pub mod report;
pub mod schedule;
pub mod university;

pub use error::{EnrollmentError, EnrollmentResult, ErrorCategory};
pub use grade::LetterGrade;
pub use record::{AssignmentLookup, CourseLoad, GpaSummary, StudentProfile, Transcript};
pub use schedule::{AssignmentId, CourseOffer, CourseSchedule, Seat, SeatAssignment};
pub use university::{SeedError, University};

/// Returns the current version of the `NuRegistrar` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
