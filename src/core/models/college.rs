//! College, department and course catalog containers

use super::{Course, Degree};
use serde::Serialize;

/// Courses a department defines, kept in the order they were added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Create an empty catalog
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    /// Add a course to the catalog
    ///
    /// # Returns
    /// `true` if the course was added, `false` if a course with that number already exists
    pub fn add(&mut self, course: Course) -> bool {
        if self.get(course.number()).is_some() {
            return false;
        }
        self.courses.push(course);
        true
    }

    /// Get a course by its number
    #[must_use]
    pub fn get(&self, number: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.number() == number)
    }

    /// All courses
    #[must_use]
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }
}

/// An academic department: a catalog plus the degrees built from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Department {
    /// Department name (e.g., "Information Systems")
    pub name: String,

    catalog: CourseCatalog,

    degrees: Vec<Degree>,
}

impl Department {
    /// Create a department with an empty catalog
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            catalog: CourseCatalog::new(),
            degrees: Vec::new(),
        }
    }

    /// The department's course catalog
    #[must_use]
    pub const fn catalog(&self) -> &CourseCatalog {
        &self.catalog
    }

    /// Mutable access to the catalog for seeding
    pub fn catalog_mut(&mut self) -> &mut CourseCatalog {
        &mut self.catalog
    }

    /// Add a degree program
    pub fn add_degree(&mut self, degree: Degree) {
        self.degrees.push(degree);
    }

    /// Degrees offered by this department
    #[must_use]
    pub fn degrees(&self) -> &[Degree] {
        &self.degrees
    }

    /// Get a degree by name
    #[must_use]
    pub fn degree(&self, name: &str) -> Option<&Degree> {
        self.degrees.iter().find(|d| d.name() == name)
    }
}

/// A college grouping departments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct College {
    /// College name
    pub name: String,

    departments: Vec<Department>,
}

impl College {
    /// Create a college with no departments
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            departments: Vec::new(),
        }
    }

    /// Add a department
    pub fn add_department(&mut self, department: Department) {
        self.departments.push(department);
    }

    /// Departments in insertion order
    #[must_use]
    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    /// Get a department by name
    #[must_use]
    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    /// Find a course in any department's catalog (first match)
    #[must_use]
    pub fn find_course(&self, number: &str) -> Option<&Course> {
        self.departments
            .iter()
            .find_map(|d| d.catalog().get(number))
    }

    /// All degrees across departments
    pub fn degrees(&self) -> impl Iterator<Item = &Degree> {
        self.departments.iter().flat_map(Department::degrees)
    }
}
