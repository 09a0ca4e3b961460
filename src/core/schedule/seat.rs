//! Seats and the assignments that occupy them

use crate::core::error::EnrollmentResult;
use crate::core::grade::LetterGrade;
use crate::core::models::StudentId;
use serde::Serialize;
use std::fmt;

/// Stable identifier of a seat assignment: which seat of which offer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AssignmentId {
    semester: String,
    course_number: String,
    section: String,
    seat: usize,
}

impl AssignmentId {
    /// Build an identifier
    #[must_use]
    pub fn new(
        semester: impl Into<String>,
        course_number: impl Into<String>,
        section: impl Into<String>,
        seat: usize,
    ) -> Self {
        Self {
            semester: semester.into(),
            course_number: course_number.into(),
            section: section.into(),
            seat,
        }
    }

    /// Semester of the owning offer
    #[must_use]
    pub fn semester(&self) -> &str {
        &self.semester
    }

    /// Course number of the owning offer
    #[must_use]
    pub fn course_number(&self) -> &str {
        &self.course_number
    }

    /// Section of the owning offer
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Seat index within the owning offer
    #[must_use]
    pub const fn seat(&self) -> usize {
        self.seat
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}-{}#{}",
            self.semester, self.course_number, self.section, self.seat
        )
    }
}

/// Binding of one student to one seat, carrying the grade once awarded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatAssignment {
    id: AssignmentId,
    student: StudentId,
    grade: Option<LetterGrade>,
}

impl SeatAssignment {
    pub(crate) const fn new(id: AssignmentId, student: StudentId) -> Self {
        Self {
            id,
            student,
            grade: None,
        }
    }

    /// Identifier of this assignment
    #[must_use]
    pub const fn id(&self) -> &AssignmentId {
        &self.id
    }

    /// The student holding the seat
    #[must_use]
    pub const fn student(&self) -> &StudentId {
        &self.student
    }

    /// Current grade, `None` until graded
    #[must_use]
    pub const fn grade(&self) -> Option<LetterGrade> {
        self.grade
    }

    /// Whether a grade has been awarded
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        self.grade.is_some()
    }

    /// Set the grade from its transcript token (e.g. "A-"). Re-grading is allowed.
    ///
    /// # Errors
    /// Returns `InvalidGrade` for an unrecognized token; the previous grade is kept.
    pub fn set_letter_grade(&mut self, grade: &str) -> EnrollmentResult<()> {
        self.grade = Some(grade.parse()?);
        Ok(())
    }

    /// Set an already-parsed grade
    pub fn set_grade(&mut self, grade: LetterGrade) {
        self.grade = Some(grade);
    }
}

/// One unit of an offer's capacity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seat {
    index: usize,
    assignment: Option<SeatAssignment>,
}

impl Seat {
    pub(crate) const fn new(index: usize) -> Self {
        Self {
            index,
            assignment: None,
        }
    }

    /// Position of this seat within its offer
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Whether the seat holds an assignment
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.assignment.is_some()
    }

    /// Whether the seat is held by `student`
    #[must_use]
    pub fn is_held_by(&self, student: &StudentId) -> bool {
        self.assignment
            .as_ref()
            .is_some_and(|a| a.student() == student)
    }

    /// The assignment occupying this seat
    #[must_use]
    pub const fn assignment(&self) -> Option<&SeatAssignment> {
        self.assignment.as_ref()
    }

    /// Mutable access for grading
    pub fn assignment_mut(&mut self) -> Option<&mut SeatAssignment> {
        self.assignment.as_mut()
    }

    /// Occupy an empty seat. Callers check `is_occupied` first.
    pub(crate) fn claim(&mut self, assignment: SeatAssignment) {
        debug_assert!(self.assignment.is_none(), "seat {} already taken", self.index);
        self.assignment = Some(assignment);
    }
}
