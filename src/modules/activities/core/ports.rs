// Ports the activity use cases code against.
//
// Purpose
// - Keep the decide functions and command handlers independent of where the
//   roster lives.
//
// Responsibilities
// - Load one activity together with its version.
// - Save one activity only if nobody else saved it since it was loaded.

use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("activity not found: {0}")]
    NotFound(String),

    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone)]
pub struct LoadedActivity {
    pub activity: Activity,
    pub version: i64,
}

#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn load(&self, name: &str) -> Result<Option<LoadedActivity>, StoreError>;
    async fn save(
        &self,
        name: &str,
        expected_version: i64,
        activity: Activity,
    ) -> Result<(), StoreError>;
}
