//! Degree model

use super::Course;
use serde::Serialize;

/// A degree program and the courses it requires
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Degree {
    /// Degree name (e.g., "Information Systems")
    name: String,

    /// Required courses in the order they were added
    courses: Vec<Course>,
}

impl Degree {
    /// Create a degree with no required courses
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            courses: Vec::new(),
        }
    }

    /// Degree name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a required course
    ///
    /// # Returns
    /// `false` if a course with the same number is already required
    pub fn add(&mut self, course: Course) -> bool {
        if self.contains(course.number()) {
            return false;
        }
        self.courses.push(course);
        true
    }

    /// Required courses in insertion order (never sorted)
    #[must_use]
    pub fn list(&self) -> &[Course] {
        &self.courses
    }

    /// Whether a course number is required by this degree
    #[must_use]
    pub fn contains(&self, course_number: &str) -> bool {
        self.courses.iter().any(|c| c.number() == course_number)
    }

    /// Sum of the credit weights of all required courses
    #[must_use]
    pub fn total_credits(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.credits())).sum()
    }
}
