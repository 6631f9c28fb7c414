//! User repository and its in-memory implementation.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use common::{AppError, AppResult, LatencyConfig};
use domain::{CourseId, RegisterUser, UpdateProfile, User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in registration order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by id
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find user by email address (exact, case-sensitive match)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// First user in store order
    async fn first(&self) -> AppResult<Option<User>>;

    /// Create a new user from a registration submission
    async fn create(&self, data: RegisterUser) -> AppResult<User>;

    /// Update profile fields in place
    async fn update(&self, id: UserId, patch: UpdateProfile) -> AppResult<User>;

    /// Add an enrollment unless one already exists
    async fn enroll(&self, user_id: UserId, course_id: CourseId) -> AppResult<User>;

    /// Remove an enrollment; no-op when the user never enrolled
    async fn unenroll(&self, user_id: UserId, course_id: CourseId) -> AppResult<User>;
}

/// Concrete implementation of UserRepository backed by process memory.
///
/// Same discipline as the course store: reads clone records out, mutations
/// run under a single write guard, and every operation awaits its latency
/// class before touching the list.
pub struct UserStore {
    users: RwLock<Vec<User>>,
    latency: LatencyConfig,
}

impl UserStore {
    /// Create an empty store
    pub fn new(latency: LatencyConfig) -> Self {
        Self::with_users(Vec::new(), latency)
    }

    /// Create a store pre-populated with seed records
    pub fn with_users(users: Vec<User>, latency: LatencyConfig) -> Self {
        Self {
            users: RwLock::new(users),
            latency,
        }
    }

    /// Highest existing id plus one, so freed ids below the max never return
    fn next_id(users: &[User]) -> UserId {
        users.iter().map(|user| user.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        self.latency.list().await;
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        self.latency.get().await;
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.latency.get().await;
        let users = self.users.read().await;
        Ok(users.iter().find(|user| user.email == email).cloned())
    }

    async fn first(&self) -> AppResult<Option<User>> {
        self.latency.get().await;
        Ok(self.users.read().await.first().cloned())
    }

    async fn create(&self, data: RegisterUser) -> AppResult<User> {
        self.latency.write().await;
        let mut users = self.users.write().await;

        // Uniqueness check and insert share one guard so concurrent
        // registrations cannot race the same email.
        if users.iter().any(|user| user.email == data.email) {
            return Err(AppError::DuplicateEmail);
        }

        let user = User {
            id: Self::next_id(&users),
            name: data.full_name,
            email: data.email,
            password: data.password,
            membership_tier: data.membership_tier,
            enrolled_courses: Vec::new(),
            profile_image: None,
            join_date: Utc::now(),
            accepted_terms: data.accept_terms,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: UserId, patch: UpdateProfile) -> AppResult<User> {
        self.latency.write().await;
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or(AppError::NotFound)?;
        user.apply(patch);
        Ok(user.clone())
    }

    async fn enroll(&self, user_id: UserId, course_id: CourseId) -> AppResult<User> {
        self.latency.write().await;
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(AppError::NotFound)?;
        user.enroll(course_id);
        Ok(user.clone())
    }

    async fn unenroll(&self, user_id: UserId, course_id: CourseId) -> AppResult<User> {
        self.latency.write().await;
        let mut users = self.users.write().await;

        let user = users
            .iter_mut()
            .find(|user| user.id == user_id)
            .ok_or(AppError::NotFound)?;
        user.unenroll(course_id);
        Ok(user.clone())
    }
}
