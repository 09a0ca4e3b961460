//! Letter grades and the grade-point table

use crate::core::error::EnrollmentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A recognized letter grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LetterGrade {
    /// A (4.0)
    A,
    /// A- (3.67)
    AMinus,
    /// B+ (3.33)
    BPlus,
    /// B (3.0)
    B,
    /// B- (2.67)
    BMinus,
    /// C+ (2.33)
    CPlus,
    /// C (2.0)
    C,
    /// C- (1.67)
    CMinus,
    /// D+ (1.33)
    DPlus,
    /// D (1.0)
    D,
    /// D- (0.67)
    DMinus,
    /// F (0.0)
    F,
}

impl LetterGrade {
    /// Every grade, best first
    pub const ALL: [Self; 12] = [
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::F,
    ];

    /// The transcript token for this grade (e.g. "B+")
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }

    /// Numeric value used for GPA averaging
    #[must_use]
    pub const fn grade_point(self) -> f64 {
        match self {
            Self::A => 4.0,
            Self::AMinus => 3.67,
            Self::BPlus => 3.33,
            Self::B => 3.0,
            Self::BMinus => 2.67,
            Self::CPlus => 2.33,
            Self::C => 2.0,
            Self::CMinus => 1.67,
            Self::DPlus => 1.33,
            Self::D => 1.0,
            Self::DMinus => 0.67,
            Self::F => 0.0,
        }
    }
}

impl FromStr for LetterGrade {
    type Err = EnrollmentError;

    /// Tokens are case-sensitive: "a" is not a grade.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.token() == s)
            .ok_or_else(|| EnrollmentError::InvalidGrade(s.to_string()))
    }
}

impl TryFrom<String> for LetterGrade {
    type Error = EnrollmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LetterGrade> for String {
    fn from(grade: LetterGrade) -> Self {
        grade.token().to_string()
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
