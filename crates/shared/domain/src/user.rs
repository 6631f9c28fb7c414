//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{TIER_BASIC, TIER_FREE, TIER_PREMIUM};
use crate::course::CourseId;

/// User identifier, allocated the same way as [`CourseId`].
pub type UserId = i64;

/// Membership tiers offered on the pricing page.
///
/// The store enforces no closed set: a tier string that is not one of the
/// named plans is preserved verbatim rather than rejected or coerced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MembershipTier {
    Free,
    Basic,
    Premium,
    Other(String),
}

impl From<String> for MembershipTier {
    fn from(s: String) -> Self {
        match s.as_str() {
            TIER_FREE => MembershipTier::Free,
            TIER_BASIC => MembershipTier::Basic,
            TIER_PREMIUM => MembershipTier::Premium,
            _ => MembershipTier::Other(s),
        }
    }
}

impl From<&str> for MembershipTier {
    fn from(s: &str) -> Self {
        MembershipTier::from(s.to_string())
    }
}

impl From<MembershipTier> for String {
    fn from(tier: MembershipTier) -> Self {
        match tier {
            MembershipTier::Free => TIER_FREE.to_string(),
            MembershipTier::Basic => TIER_BASIC.to_string(),
            MembershipTier::Premium => TIER_PREMIUM.to_string(),
            MembershipTier::Other(s) => s,
        }
    }
}

impl std::fmt::Display for MembershipTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MembershipTier::Free => write!(f, "{}", TIER_FREE),
            MembershipTier::Basic => write!(f, "{}", TIER_BASIC),
            MembershipTier::Premium => write!(f, "{}", TIER_PREMIUM),
            MembershipTier::Other(s) => write!(f, "{}", s),
        }
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "Id")]
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Stored exactly as submitted; the mock layer has no hashing step
    pub password: String,
    pub membership_tier: MembershipTier,
    /// Course ids in enrollment order; never contains duplicates
    pub enrolled_courses: Vec<CourseId>,
    pub profile_image: Option<String>,
    pub join_date: DateTime<Utc>,
    pub accepted_terms: bool,
}

impl User {
    /// Check whether the user already holds an enrollment for the course
    pub fn is_enrolled(&self, course_id: CourseId) -> bool {
        self.enrolled_courses.contains(&course_id)
    }

    /// Add an enrollment unless one already exists.
    ///
    /// Returns true when the course id was appended. Course existence is not
    /// checked here; a stale id simply dangles.
    pub fn enroll(&mut self, course_id: CourseId) -> bool {
        if self.is_enrolled(course_id) {
            return false;
        }
        self.enrolled_courses.push(course_id);
        true
    }

    /// Drop every occurrence of the course id; no-op when not enrolled.
    pub fn unenroll(&mut self, course_id: CourseId) {
        self.enrolled_courses.retain(|id| *id != course_id);
    }

    /// Apply a partial profile update, overwriting only the fields present.
    pub fn apply(&mut self, patch: UpdateProfile) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
        if let Some(membership_tier) = patch.membership_tier {
            self.membership_tier = membership_tier;
        }
        if let Some(profile_image) = patch.profile_image {
            self.profile_image = Some(profile_image);
        }
    }
}

/// Registration data transfer object, shaped like the signup form submission
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub membership_tier: MembershipTier,
    pub accept_terms: bool,
}

/// Profile update data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub membership_tier: Option<MembershipTier>,
    pub profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            name: "이지은".to_string(),
            email: "jieun@example.com".to_string(),
            password: "secret123".to_string(),
            membership_tier: MembershipTier::Premium,
            enrolled_courses: vec![1, 3],
            profile_image: None,
            join_date: Utc::now(),
            accepted_terms: true,
        }
    }

    #[test]
    fn enroll_is_idempotent() {
        let mut user = sample_user();
        assert!(user.enroll(5));
        assert!(!user.enroll(5));
        assert_eq!(user.enrolled_courses, vec![1, 3, 5]);
    }

    #[test]
    fn unenroll_missing_course_is_noop() {
        let mut user = sample_user();
        user.unenroll(99);
        assert_eq!(user.enrolled_courses, vec![1, 3]);
    }

    #[test]
    fn unknown_tier_round_trips_verbatim() {
        let tier = MembershipTier::from("Enterprise");
        assert_eq!(tier, MembershipTier::Other("Enterprise".to_string()));
        assert_eq!(String::from(tier), "Enterprise");
    }

    #[test]
    fn user_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample_user()).expect("serialize");
        assert_eq!(json["Id"], 1);
        assert_eq!(json["membershipTier"], "Premium");
        assert_eq!(json["enrolledCourses"], serde_json::json!([1, 3]));
        assert_eq!(json["acceptedTerms"], true);
        assert!(json["joinDate"].is_string());
    }
}
