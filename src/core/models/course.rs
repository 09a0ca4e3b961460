//! Course model

use crate::core::error::{EnrollmentError, EnrollmentResult};
use serde::Serialize;
use std::fmt;

/// A catalog course. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Course {
    /// Course number (e.g., "INFO 5001"), unique within a catalog
    number: String,

    /// Course title (e.g., "Application Design & Development")
    title: String,

    /// Credit weight used for GPA averaging
    credits: u32,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `number` - Course number
    /// * `title` - Course title
    /// * `credits` - Credit weight, must be positive
    ///
    /// # Errors
    /// Returns `InvalidCredits` when `credits` is zero
    pub fn new(
        number: impl Into<String>,
        title: impl Into<String>,
        credits: u32,
    ) -> EnrollmentResult<Self> {
        let number = number.into();
        if credits == 0 {
            return Err(EnrollmentError::InvalidCredits(number));
        }
        Ok(Self {
            number,
            title: title.into(),
            credits,
        })
    }

    /// Course number (e.g., "INFO 5001")
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Course title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Credit weight
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} cr)", self.number, self.title, self.credits)
    }
}
