//! Bundled course fixture.
//!
//! The catalog the process starts with. Parsed once at wiring time; a parse
//! failure is a packaging defect and surfaces as a seed error.

use common::AppResult;
use domain::Course;

static COURSES_JSON: &str = include_str!("../fixtures/courses.json");

/// Parse the bundled catalog fixture.
pub fn load() -> AppResult<Vec<Course>> {
    Ok(serde_json::from_str(COURSES_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_parses() {
        let courses = load().expect("bundled fixture must parse");
        assert!(!courses.is_empty());
    }

    #[test]
    fn fixture_ids_are_unique() {
        let courses = load().unwrap();
        let mut ids: Vec<_> = courses.iter().map(|course| course.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), courses.len());
    }
}
