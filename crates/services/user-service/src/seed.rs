//! Bundled user fixture.
//!
//! The accounts the process starts with. The first record doubles as the
//! demo's signed-in user.

use common::AppResult;
use domain::User;

static USERS_JSON: &str = include_str!("../fixtures/users.json");

/// Parse the bundled account fixture.
pub fn load() -> AppResult<Vec<User>> {
    Ok(serde_json::from_str(USERS_JSON)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_parses() {
        let users = load().expect("bundled fixture must parse");
        assert!(!users.is_empty());
    }

    #[test]
    fn fixture_emails_are_unique() {
        let users = load().unwrap();
        let mut emails: Vec<_> = users.iter().map(|user| user.email.as_str()).collect();
        emails.sort_unstable();
        emails.dedup();
        assert_eq!(emails.len(), users.len());
    }

    #[test]
    fn fixture_enrollments_carry_no_duplicates() {
        for user in load().unwrap() {
            let mut ids = user.enrolled_courses.clone();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), user.enrolled_courses.len());
        }
    }
}
