//! Error types for enrollment and academic record operations

use crate::core::schedule::AssignmentId;
use std::fmt;
use thiserror::Error;

/// Result type for enrollment operations
pub type EnrollmentResult<T> = Result<T, EnrollmentError>;

/// Broad class of an [`EnrollmentError`], used by callers that only need to
/// decide how to react (retry elsewhere, fix input, report a bug, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Creating something that already exists
    StructuralConflict,
    /// No capacity left
    ResourceExhaustion,
    /// Malformed input value
    Validation,
    /// Two entities disagree about how they reference each other
    ReferentialIntegrity,
    /// Lookup by identifier found nothing
    LookupFailure,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::StructuralConflict => "structural conflict",
            Self::ResourceExhaustion => "resource exhaustion",
            Self::Validation => "validation error",
            Self::ReferentialIntegrity => "referential integrity error",
            Self::LookupFailure => "lookup failure",
        };
        write!(f, "{name}")
    }
}

/// Errors raised by schedule, registration, grading and GPA operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentError {
    /// An offer with the same course and section is already scheduled
    #[error("offer {course_number} section {section} already exists in {semester}")]
    DuplicateOffer {
        /// Semester of the schedule
        semester: String,
        /// Course of the clashing offer
        course_number: String,
        /// Section of the clashing offer
        section: String,
    },

    /// The transcript already has a load for this semester
    #[error("a course load for {0} already exists in this transcript")]
    DuplicateCourseLoad(String),

    /// Every seat of the offer is taken
    #[error("capacity exceeded for {course_number} section {section} ({capacity} seats, all taken)")]
    CapacityExceeded {
        /// Course of the full offer
        course_number: String,
        /// Section of the full offer
        section: String,
        /// Seat count of the offer
        capacity: usize,
    },

    /// The token is not one of the twelve letter grades
    #[error("unrecognized letter grade '{0}'")]
    InvalidGrade(String),

    /// An offer was created with zero seats
    #[error("offer {course_number} section {section} must have at least one seat")]
    InvalidCapacity {
        /// Course of the rejected offer
        course_number: String,
        /// Section of the rejected offer
        section: String,
    },

    /// A course was defined with zero credits
    #[error("course {0} must carry a positive credit weight")]
    InvalidCredits(String),

    /// The assignment is not recorded in the course load
    #[error("assignment {assignment} does not belong to the {semester} course load")]
    ForeignAssignment {
        /// The assignment that was looked up
        assignment: AssignmentId,
        /// Semester of the load that was searched
        semester: String,
    },

    /// No offer in the lookup owns this assignment
    #[error("assignment {0} cannot be resolved to a course")]
    UnmappedAssignment(AssignmentId),

    /// The course given for an assignment is not the course of its offer
    #[error("assignment {assignment} is for {expected}, not {actual}")]
    CourseMismatch {
        /// The assignment being mapped
        assignment: AssignmentId,
        /// Course number of the assignment's offer
        expected: String,
        /// Course number that was supplied
        actual: String,
    },

    /// Registration targeted a load of another semester
    #[error("offer for {offer_semester} cannot be recorded in the {load_semester} course load")]
    SemesterMismatch {
        /// Semester of the offer
        offer_semester: String,
        /// Semester of the course load
        load_semester: String,
    },

    /// The student has no load for this semester
    #[error("no course load for semester '{0}'")]
    SemesterNotFound(String),

    /// The university has no schedule for this semester
    #[error("no course schedule for semester '{0}'")]
    ScheduleNotFound(String),

    /// The schedule has no offer for this course
    #[error("offer not found: {course_number} in {semester}")]
    OfferNotFound {
        /// Semester that was searched
        semester: String,
        /// Requested course number
        course_number: String,
    },

    /// No student with this id
    #[error("student not found: '{0}'")]
    StudentNotFound(String),

    /// The student holds no seat in the offer
    #[error("student '{student}' is not enrolled in {course_number}")]
    NotEnrolled {
        /// Student id
        student: String,
        /// Course of the offer
        course_number: String,
    },
}

impl EnrollmentError {
    /// Classify this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateOffer { .. } | Self::DuplicateCourseLoad(_) => {
                ErrorCategory::StructuralConflict
            }
            Self::CapacityExceeded { .. } => ErrorCategory::ResourceExhaustion,
            Self::InvalidGrade(_) | Self::InvalidCapacity { .. } | Self::InvalidCredits(_) => {
                ErrorCategory::Validation
            }
            Self::ForeignAssignment { .. }
            | Self::UnmappedAssignment(_)
            | Self::CourseMismatch { .. }
            | Self::SemesterMismatch { .. } => ErrorCategory::ReferentialIntegrity,
            Self::SemesterNotFound(_)
            | Self::ScheduleNotFound(_)
            | Self::OfferNotFound { .. }
            | Self::StudentNotFound(_)
            | Self::NotEnrolled { .. } => ErrorCategory::LookupFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let err = EnrollmentError::CapacityExceeded {
            course_number: "INFO 5001".to_string(),
            section: "01".to_string(),
            capacity: 3,
        };
        assert_eq!(err.category(), ErrorCategory::ResourceExhaustion);
        assert_eq!(
            EnrollmentError::InvalidGrade("X".to_string()).category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            EnrollmentError::SemesterNotFound("Spring 2026".to_string()).category(),
            ErrorCategory::LookupFailure
        );
    }

    #[test]
    fn test_messages_name_the_offending_value() {
        let err = EnrollmentError::InvalidGrade("X".to_string());
        assert_eq!(err.to_string(), "unrecognized letter grade 'X'");

        let err = EnrollmentError::OfferNotFound {
            semester: "Fall 2025".to_string(),
            course_number: "INFO 9999".to_string(),
        };
        assert!(err.to_string().contains("INFO 9999"));
    }
}
