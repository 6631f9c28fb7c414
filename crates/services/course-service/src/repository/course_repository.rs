//! Course repository and its in-memory implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult, LatencyConfig};
use domain::{Course, CourseId, CreateCourse, UpdateCourse};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Course repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Full catalog in insertion order
    async fn list(&self) -> AppResult<Vec<Course>>;

    /// Find course by id
    async fn find_by_id(&self, id: CourseId) -> AppResult<Option<Course>>;

    /// Most-enrolled courses first, truncated to `limit`
    async fn featured(&self, limit: usize) -> AppResult<Vec<Course>>;

    /// Case-insensitive substring search over title, description and instructor
    async fn search(&self, query: &str) -> AppResult<Vec<Course>>;

    /// Create a new course with the next free id
    async fn create(&self, data: CreateCourse) -> AppResult<Course>;

    /// Update course fields in place
    async fn update(&self, id: CourseId, patch: UpdateCourse) -> AppResult<Course>;

    /// Remove a course, returning the removed record
    async fn delete(&self, id: CourseId) -> AppResult<Course>;
}

/// Concrete implementation of CourseRepository backed by process memory.
///
/// The record list stands in for a database table: reads clone records out,
/// mutations run under a single write guard, and every operation awaits its
/// latency class before touching the list so callers see the same suspending
/// contract a remote backend would give them.
pub struct CourseStore {
    courses: RwLock<Vec<Course>>,
    latency: LatencyConfig,
}

impl CourseStore {
    /// Create an empty store
    pub fn new(latency: LatencyConfig) -> Self {
        Self::with_courses(Vec::new(), latency)
    }

    /// Create a store pre-populated with seed records
    pub fn with_courses(courses: Vec<Course>, latency: LatencyConfig) -> Self {
        Self {
            courses: RwLock::new(courses),
            latency,
        }
    }

    /// Highest existing id plus one, so freed ids below the max never return
    fn next_id(courses: &[Course]) -> CourseId {
        courses.iter().map(|course| course.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl CourseRepository for CourseStore {
    async fn list(&self) -> AppResult<Vec<Course>> {
        self.latency.list().await;
        Ok(self.courses.read().await.clone())
    }

    async fn find_by_id(&self, id: CourseId) -> AppResult<Option<Course>> {
        self.latency.get().await;
        let courses = self.courses.read().await;
        Ok(courses.iter().find(|course| course.id == id).cloned())
    }

    async fn featured(&self, limit: usize) -> AppResult<Vec<Course>> {
        self.latency.list().await;
        let mut ranked = self.courses.read().await.clone();
        // Stable sort: equal enrollment counts keep their catalog order.
        ranked.sort_by(|a, b| b.enrollment_count.cmp(&a.enrollment_count));
        ranked.truncate(limit);
        Ok(ranked)
    }

    async fn search(&self, query: &str) -> AppResult<Vec<Course>> {
        self.latency.list().await;
        let courses = self.courses.read().await;
        if query.is_empty() {
            return Ok(courses.clone());
        }

        let query = query.to_lowercase();
        Ok(courses
            .iter()
            .filter(|course| {
                course.title.to_lowercase().contains(&query)
                    || course.description.to_lowercase().contains(&query)
                    || course.instructor.to_lowercase().contains(&query)
            })
            .cloned()
            .collect())
    }

    async fn create(&self, data: CreateCourse) -> AppResult<Course> {
        // The delay runs before the lock; a call cancelled mid-delay leaves
        // the store untouched.
        self.latency.write().await;
        let mut courses = self.courses.write().await;

        let course = Course {
            id: Self::next_id(&courses),
            title: data.title,
            description: data.description,
            instructor: data.instructor,
            duration: data.duration,
            enrollment_count: data.enrollment_count.unwrap_or(0),
        };
        courses.push(course.clone());
        Ok(course)
    }

    async fn update(&self, id: CourseId, patch: UpdateCourse) -> AppResult<Course> {
        self.latency.write().await;
        let mut courses = self.courses.write().await;

        let course = courses
            .iter_mut()
            .find(|course| course.id == id)
            .ok_or(AppError::NotFound)?;
        course.apply(patch);
        Ok(course.clone())
    }

    async fn delete(&self, id: CourseId) -> AppResult<Course> {
        self.latency.write().await;
        let mut courses = self.courses.write().await;

        let index = courses
            .iter()
            .position(|course| course.id == id)
            .ok_or(AppError::NotFound)?;
        Ok(courses.remove(index))
    }
}
