//! User Service Library
//!
//! This crate provides the account side of the mock data layer: an in-memory
//! user store with profile management, registration and course enrollment.

pub mod repository;
pub mod seed;
pub mod service;

use std::sync::Arc;

use tracing::info;

use common::{AppResult, LatencyConfig};

use crate::repository::UserStore;
use crate::service::{UserManager, UserService};

/// Build a user service seeded from the bundled fixture.
///
/// Constructs the single store instance for the process and hands back the
/// service facade the pages consume. Callers that want a different data set
/// wire [`UserStore`] and [`UserManager`] together themselves.
pub fn build_user_service(latency: LatencyConfig) -> AppResult<Arc<dyn UserService>> {
    let users = seed::load()?;
    info!("seeded user store with {} users", users.len());

    let repo = Arc::new(UserStore::with_users(users, latency));
    Ok(Arc::new(UserManager::new(repo)))
}
