//! Offer lookup handlers (`find-offer`, `count`)

use nu_registrar::core::University;
use nu_registrar::{info, warn};

/// Print the first offer of a course in a semester
pub fn find(university: &University, course_number: &str, semester: &str) -> bool {
    match university.find_offer(semester, course_number, None) {
        Some(offer) => {
            info!("Offer found: {course_number} in {semester}");
            println!(
                "Found Offer: {offer} (capacity {}, enrolled {})",
                offer.capacity(),
                offer.enrolled_count()
            );
            true
        }
        None => {
            warn!("Offer lookup missed: {course_number} in {semester}");
            println!("Offer not found in {semester}");
            false
        }
    }
}

/// Print the number of students holding a seat in the first offer of a course
pub fn count(university: &University, course_number: &str, semester: &str) -> bool {
    match university.enrolled_count(semester, course_number) {
        Some(count) => {
            println!("Students enrolled in {course_number}: {count}");
            true
        }
        None => {
            warn!("Enrollment count requested for missing offer: {course_number} in {semester}");
            println!("Offer not found in {semester}");
            false
        }
    }
}
