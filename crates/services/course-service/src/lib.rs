//! Course Service Library
//!
//! This crate provides the course catalog side of the mock data layer: an
//! in-memory course store with CRUD and catalog queries, plus the pure
//! filtering helpers the courses page composes on top of it.

pub mod catalog;
pub mod repository;
pub mod seed;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::{AppResult, LatencyConfig};

use crate::repository::CourseStore;
use crate::service::{CourseManager, CourseService};

/// Build a course service seeded from the bundled fixture.
///
/// Constructs the single store instance for the process and hands back the
/// service facade the pages consume. Callers that want a different data set
/// wire [`CourseStore`] and [`CourseManager`] together themselves.
pub fn build_course_service(latency: LatencyConfig) -> AppResult<Arc<dyn CourseService>> {
    let courses = seed::load()?;
    info!("seeded course store with {} courses", courses.len());

    let repo = Arc::new(CourseStore::with_courses(courses, latency));
    Ok(Arc::new(CourseManager::new(repo)))
}
