//! Seed loader: builds a fresh `University` from a TOML description
//!
//! The seed file lists colleges with their departments, catalogs and degrees,
//! then the semester schedules, then students with their registrations.
//! Courses are referenced by number everywhere after the catalog section.

use super::University;
use crate::core::error::EnrollmentError;
use crate::core::models::{College, Course, Degree, Department, Person};
use crate::core::record::StudentProfile;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Sample data compiled into the binary
const SAMPLE_SEED: &str = include_str!("../../../assets/sample_university.toml");

/// Errors that can occur while loading a seed
#[derive(Error, Debug)]
pub enum SeedError {
    /// The seed file could not be read
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// The seed is not valid TOML or does not match the seed layout
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A degree, offer or registration names a course missing from every catalog
    #[error("{context} references unknown course '{number}'")]
    UnknownCourse {
        /// Where the reference appeared
        context: String,
        /// The missing course number
        number: String,
    },

    /// Two catalog entries share a course number
    #[error("course '{0}' is defined more than once")]
    DuplicateCourse(String),

    /// Two students share an id
    #[error("student '{0}' is defined more than once")]
    DuplicateStudent(String),

    /// Building the graph violated an enrollment rule
    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    name: String,
    #[serde(default)]
    colleges: Vec<CollegeRecord>,
    #[serde(default)]
    schedules: Vec<ScheduleRecord>,
    #[serde(default)]
    students: Vec<StudentRecord>,
}

#[derive(Debug, Deserialize)]
struct CollegeRecord {
    name: String,
    #[serde(default)]
    departments: Vec<DepartmentRecord>,
}

#[derive(Debug, Deserialize)]
struct DepartmentRecord {
    name: String,
    #[serde(default)]
    courses: Vec<CourseRecord>,
    #[serde(default)]
    degrees: Vec<DegreeRecord>,
}

#[derive(Debug, Deserialize)]
struct CourseRecord {
    number: String,
    title: String,
    credits: u32,
}

#[derive(Debug, Deserialize)]
struct DegreeRecord {
    name: String,
    #[serde(default)]
    courses: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ScheduleRecord {
    semester: String,
    #[serde(default)]
    offers: Vec<OfferRecord>,
}

#[derive(Debug, Deserialize)]
struct OfferRecord {
    course: String,
    section: String,
    capacity: usize,
}

#[derive(Debug, Deserialize)]
struct StudentRecord {
    id: String,
    name: String,
    #[serde(default)]
    registrations: Vec<RegistrationRecord>,
}

#[derive(Debug, Deserialize)]
struct RegistrationRecord {
    semester: String,
    course: String,
    section: Option<String>,
    grade: Option<String>,
}

impl University {
    /// The built-in sample university
    ///
    /// # Panics
    /// Panics if the compiled-in sample seed is invalid, which is caught by the test suite
    #[must_use]
    pub fn sample() -> Self {
        Self::from_seed_toml(SAMPLE_SEED).expect("Failed to load compiled-in sample seed")
    }

    /// Build a university from a seed file on disk
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or describes an inconsistent university
    pub fn from_seed_file<P: AsRef<Path>>(path: P) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path)?;
        Self::from_seed_toml(&content)
    }

    /// Build a university from a TOML seed string
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed, references unknown courses,
    /// defines duplicates, or a registration fails (e.g., capacity exceeded)
    pub fn from_seed_toml(toml_str: &str) -> Result<Self, SeedError> {
        let seed: SeedFile = toml::from_str(toml_str)?;

        // First pass: every catalog course, so degrees and offers can reference
        // courses from any department
        let mut courses: HashMap<String, Course> = HashMap::new();
        for dept in seed.colleges.iter().flat_map(|c| &c.departments) {
            for record in &dept.courses {
                let course = Course::new(&record.number, &record.title, record.credits)?;
                if courses.insert(record.number.clone(), course).is_some() {
                    return Err(SeedError::DuplicateCourse(record.number.clone()));
                }
            }
        }
        let lookup = |context: &str, number: &str| {
            courses
                .get(number)
                .cloned()
                .ok_or_else(|| SeedError::UnknownCourse {
                    context: context.to_string(),
                    number: number.to_string(),
                })
        };

        let mut university = Self::new(seed.name);

        for college_record in seed.colleges {
            let mut college = College::new(college_record.name);
            for dept_record in college_record.departments {
                let mut dept = Department::new(dept_record.name);
                for course in &dept_record.courses {
                    dept.catalog_mut().add(lookup("catalog", &course.number)?);
                }
                for degree_record in dept_record.degrees {
                    let context = format!("degree '{}'", degree_record.name);
                    let mut degree = Degree::new(degree_record.name);
                    for number in &degree_record.courses {
                        degree.add(lookup(&context, number)?);
                    }
                    dept.add_degree(degree);
                }
                college.add_department(dept);
            }
            university.add_college(college);
        }

        for schedule_record in seed.schedules {
            let context = format!("schedule '{}'", schedule_record.semester);
            let schedule = university.open_schedule(&schedule_record.semester);
            for offer in schedule_record.offers {
                let course = lookup(&context, &offer.course)?;
                schedule.add_offer(course, offer.section, offer.capacity)?;
            }
        }

        for student_record in seed.students {
            let person = Person::new(&student_record.id, student_record.name);
            if !university.add_student(StudentProfile::new(person)) {
                return Err(SeedError::DuplicateStudent(student_record.id));
            }
            for registration in student_record.registrations {
                let id = university.register(
                    &student_record.id,
                    &registration.semester,
                    &registration.course,
                    registration.section.as_deref(),
                )?;
                if let Some(grade) = registration.grade {
                    university.grade_assignment(&id, &grade)?;
                }
            }
        }

        Ok(university)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_loads() {
        let uni = University::sample();

        assert_eq!(uni.name, "Northeastern University");
        assert_eq!(uni.students().len(), 2);
        assert_eq!(uni.enrolled_count("Fall 2025", "INFO 5001"), Some(2));
        assert_eq!(uni.enrolled_count("Fall 2025", "INFO 5100"), Some(1));
        assert_eq!(uni.enrolled_count("Fall 2025", "INFO 6205"), Some(0));
    }

    #[test]
    fn test_unknown_course_in_offer() {
        let seed = r#"
name = "Test"

[[schedules]]
semester = "Fall 2025"

[[schedules.offers]]
course = "INFO 9999"
section = "01"
capacity = 1
"#;
        let err = University::from_seed_toml(seed).unwrap_err();
        assert!(matches!(
            err,
            SeedError::UnknownCourse { ref number, .. } if number == "INFO 9999"
        ));
    }

    #[test]
    fn test_duplicate_course() {
        let seed = r#"
name = "Test"

[[colleges]]
name = "C"

[[colleges.departments]]
name = "D"

[[colleges.departments.courses]]
number = "INFO 5001"
title = "One"
credits = 4

[[colleges.departments.courses]]
number = "INFO 5001"
title = "Two"
credits = 4
"#;
        let err = University::from_seed_toml(seed).unwrap_err();
        assert!(matches!(err, SeedError::DuplicateCourse(ref n) if n == "INFO 5001"));
    }

    #[test]
    fn test_malformed_toml() {
        let err = University::from_seed_toml("name = ").unwrap_err();
        assert!(matches!(err, SeedError::Parse(_)));
    }
}
