//! Course service - Handles catalog-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{Course, CourseId, CreateCourse, UpdateCourse, DEFAULT_FEATURED_LIMIT};

use crate::repository::CourseRepository;

/// Course service trait for dependency injection.
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Get course by id
    async fn get_course(&self, id: CourseId) -> AppResult<Course>;

    /// List the full catalog
    async fn list_courses(&self) -> AppResult<Vec<Course>>;

    /// Landing-page selection, most-enrolled first.
    ///
    /// `None` falls back to [`DEFAULT_FEATURED_LIMIT`].
    async fn featured_courses(&self, limit: Option<usize>) -> AppResult<Vec<Course>>;

    /// Free-text catalog search; an empty query returns everything
    async fn search_courses(&self, query: &str) -> AppResult<Vec<Course>>;

    /// Create a new course
    async fn create_course(&self, data: CreateCourse) -> AppResult<Course>;

    /// Update course details
    async fn update_course(&self, id: CourseId, patch: UpdateCourse) -> AppResult<Course>;

    /// Remove a course. Enrollments referencing it are left dangling; the
    /// account page filters them out when it joins against the catalog.
    async fn delete_course(&self, id: CourseId) -> AppResult<Course>;
}

/// Concrete implementation of CourseService using repository.
pub struct CourseManager {
    repo: Arc<dyn CourseRepository>,
}

impl CourseManager {
    /// Create new course service instance with repository
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CourseService for CourseManager {
    async fn get_course(&self, id: CourseId) -> AppResult<Course> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.repo.list().await
    }

    async fn featured_courses(&self, limit: Option<usize>) -> AppResult<Vec<Course>> {
        self.repo
            .featured(limit.unwrap_or(DEFAULT_FEATURED_LIMIT))
            .await
    }

    async fn search_courses(&self, query: &str) -> AppResult<Vec<Course>> {
        self.repo.search(query).await
    }

    async fn create_course(&self, data: CreateCourse) -> AppResult<Course> {
        self.repo.create(data).await
    }

    async fn update_course(&self, id: CourseId, patch: UpdateCourse) -> AppResult<Course> {
        self.repo.update(id, patch).await
    }

    async fn delete_course(&self, id: CourseId) -> AppResult<Course> {
        self.repo.delete(id).await
    }
}
