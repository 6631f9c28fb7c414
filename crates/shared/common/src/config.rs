//! Shared configuration structures.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Simulated backing-store latency, in milliseconds per operation class.
///
/// The stores are plain in-memory collections, but callers are written
/// against an asynchronous contract, so every operation sleeps for its class
/// before touching data. A zero value skips the sleep entirely, which is what
/// tests use to stay deterministic.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LatencyConfig {
    /// Single-record lookups
    pub get_ms: u64,
    /// List and search reads
    pub list_ms: u64,
    /// Creates, updates, deletes and enrollment changes
    pub write_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            get_ms: 200,
            list_ms: 300,
            write_ms: 300,
        }
    }
}

impl LatencyConfig {
    /// All delays disabled; used by tests and the demo's `--instant` mode.
    pub fn none() -> Self {
        Self {
            get_ms: 0,
            list_ms: 0,
            write_ms: 0,
        }
    }

    /// Await the single-record lookup delay
    pub async fn get(&self) {
        Self::sleep(self.get_ms).await;
    }

    /// Await the list/search delay
    pub async fn list(&self) {
        Self::sleep(self.list_ms).await;
    }

    /// Await the mutation delay
    pub async fn write(&self) {
        Self::sleep(self.write_ms).await;
    }

    async fn sleep(ms: u64) {
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}
