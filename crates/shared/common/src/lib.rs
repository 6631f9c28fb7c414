//! Common utilities shared across the service crates.
//!
//! This crate provides:
//! - Unified error handling for the data layer
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::LatencyConfig;
pub use error::{AppError, AppResult, OptionExt};
