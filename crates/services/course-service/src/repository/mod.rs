//! Repository layer for course data access.

mod course_repository;

pub use course_repository::{CourseRepository, CourseStore};

#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
