//! Catalog models: courses, degrees, and the containers that hold them

pub mod college;
pub mod course;
pub mod degree;
pub mod person;

pub use college::{College, CourseCatalog, Department};
pub use course::Course;
pub use degree::Degree;
pub use person::{Person, StudentId};
