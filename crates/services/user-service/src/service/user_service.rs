//! User service - Handles account-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{CourseId, RegisterUser, UpdateProfile, User, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by id
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// List all users in registration order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// The signed-in user.
    ///
    /// There is no session concept in the mock layer; the first record in
    /// store order stands in for the authenticated account.
    async fn current_user(&self) -> AppResult<User>;

    /// Update profile fields
    async fn update_profile(&self, id: UserId, patch: UpdateProfile) -> AppResult<User>;

    /// Enroll the user in a course; enrolling twice is a no-op.
    ///
    /// The course id is not checked against the catalog, so an id that was
    /// deleted later simply dangles.
    async fn enroll_course(&self, user_id: UserId, course_id: CourseId) -> AppResult<User>;

    /// Drop a course enrollment; succeeds even when the user never enrolled
    async fn unenroll_course(&self, user_id: UserId, course_id: CourseId) -> AppResult<User>;

    /// Register a new account from the signup form submission
    async fn register(&self, data: RegisterUser) -> AppResult<User>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn current_user(&self) -> AppResult<User> {
        self.repo.first().await?.ok_or_not_found()
    }

    async fn update_profile(&self, id: UserId, patch: UpdateProfile) -> AppResult<User> {
        self.repo.update(id, patch).await
    }

    async fn enroll_course(&self, user_id: UserId, course_id: CourseId) -> AppResult<User> {
        self.repo.enroll(user_id, course_id).await
    }

    async fn unenroll_course(&self, user_id: UserId, course_id: CourseId) -> AppResult<User> {
        self.repo.unenroll(user_id, course_id).await
    }

    async fn register(&self, data: RegisterUser) -> AppResult<User> {
        // Check if email already exists; the store repeats this under its
        // write lock as the atomic backstop.
        if self.repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::DuplicateEmail);
        }

        self.repo.create(data).await
    }
}
