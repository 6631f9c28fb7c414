//! Course domain entity and related types.

use serde::{Deserialize, Serialize};

/// Course identifier as used throughout the platform.
///
/// Identifiers are allocated by the course store (highest existing id plus
/// one) and are never reused within a store's lifetime.
pub type CourseId = i64;

/// Course domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "Id")]
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub instructor: String,
    /// Free-form length label shown on course cards (e.g. "8주 과정")
    pub duration: String,
    pub enrollment_count: u32,
}

impl Course {
    /// Apply a partial update, overwriting only the fields the patch carries.
    pub fn apply(&mut self, patch: UpdateCourse) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(instructor) = patch.instructor {
            self.instructor = instructor;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(enrollment_count) = patch.enrollment_count {
            self.enrollment_count = enrollment_count;
        }
    }
}

/// Course creation data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourse {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    /// Starts at zero unless the caller supplies a value
    pub enrollment_count: Option<u32>,
}

/// Course update data transfer object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructor: Option<String>,
    pub duration: Option<String>,
    pub enrollment_count: Option<u32>,
}
