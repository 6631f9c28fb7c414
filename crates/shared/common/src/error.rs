//! Unified error handling for the data layer.
//!
//! Every store operation fails with a single terminal [`AppError`]; the
//! presentation layer catches it and displays the message. No recovery or
//! fallback happens below that boundary.

use serde::Serialize;
use thiserror::Error;

/// Application error types surfaced to the presentation layer.
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("Email already in use")]
    DuplicateEmail,

    // Validation
    #[error("{0}")]
    Validation(String),

    // Seed fixture errors (wiring time only)
    #[error("Invalid seed data")]
    Seed(#[from] serde_json::Error),
}

/// Error payload handed to display components
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::DuplicateEmail => "DUPLICATE_EMAIL",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Seed(_) => "SEED_ERROR",
        }
    }

    /// Build the payload display components render
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(AppError::NotFound.code(), "NOT_FOUND");
        assert_eq!(AppError::DuplicateEmail.code(), "DUPLICATE_EMAIL");
        assert_eq!(AppError::validation("nope").code(), "VALIDATION_ERROR");
    }

    #[test]
    fn body_carries_code_and_message() {
        let body = AppError::DuplicateEmail.body();
        assert_eq!(body.code, "DUPLICATE_EMAIL");
        assert_eq!(body.message, "Email already in use");
    }

    #[test]
    fn option_ext_maps_none_to_not_found() {
        let missing: Option<u8> = None;
        assert!(matches!(
            missing.ok_or_not_found().unwrap_err(),
            AppError::NotFound
        ));
        assert_eq!(Some(7).ok_or_not_found().unwrap(), 7);
    }
}
