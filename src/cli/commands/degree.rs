//! Degree command handler

use nu_registrar::core::models::Degree;
use nu_registrar::core::University;
use nu_registrar::warn;

/// List the courses of one degree, or of every degree when `name` is `None`
pub fn run(university: &University, name: Option<&str>) -> bool {
    match name {
        Some(name) => {
            let Some(degree) = university.find_degree(name) else {
                warn!("Degree not found: {name}");
                eprintln!("✗ Degree not found: {name}");
                return false;
            };
            print_degree(degree);
        }
        None => {
            let mut any = false;
            for degree in university.degrees() {
                print_degree(degree);
                any = true;
            }
            if !any {
                println!("No degrees defined");
            }
        }
    }
    true
}

fn print_degree(degree: &Degree) {
    println!("\n=== {} ===\n", degree.name());
    for course in degree.list() {
        println!("  {course}");
    }
    println!("\n  Total: {} credits", degree.total_credits());
}
