//! `NuRegistrar`: enrollment and academic record engine
//!
//! Course offers with bounded seats, registration, grading and semester GPA,
//! plus the configuration and logging shared by the command-line front end.

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::get_version;
