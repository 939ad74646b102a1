// In memory implementation of the activity store and query ports.
//
// Purpose
// - Hold the roster for the lifetime of the process.
// - Support handler tests without any backend.
//
// Responsibilities
// - Keep every activity with a version that moves on each save.
// - Reject a save whose expected version is stale.

use crate::modules::activities::core::activity::{Activity, Roster};
use crate::modules::activities::core::ports::{ActivityStore, LoadedActivity, StoreError};
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug)]
struct StoredActivity {
    name: String,
    activity: Activity,
    version: i64,
}

#[derive(Debug, Default)]
pub struct InMemoryActivityStore {
    inner: RwLock<Vec<StoredActivity>>,
    is_offline: bool,
    delay_save_ms: AtomicU64,
}

impl InMemoryActivityStore {
    pub fn new(roster: Roster) -> Self {
        let stored = roster
            .into_iter()
            .map(|(name, activity)| StoredActivity {
                name,
                activity,
                version: 0,
            })
            .collect();
        Self {
            inner: RwLock::new(stored),
            ..Self::default()
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Sleep before taking the write lock on save, widening the window in
    /// which a concurrent save can land.
    pub fn set_delay_save_ms(&self, ms: u64) {
        self.delay_save_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Activity store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn load(&self, name: &str) -> Result<Option<LoadedActivity>, StoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard
            .iter()
            .find(|stored| stored.name == name)
            .map(|stored| LoadedActivity {
                activity: stored.activity.clone(),
                version: stored.version,
            }))
    }

    async fn save(
        &self,
        name: &str,
        expected_version: i64,
        activity: Activity,
    ) -> Result<(), StoreError> {
        self.ensure_online()?;
        let delay = self.delay_save_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        let mut guard = self.inner.write().await;
        let stored = guard
            .iter_mut()
            .find(|stored| stored.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        if stored.version != expected_version {
            return Err(StoreError::VersionMismatch {
                expected: expected_version,
                actual: stored.version,
            });
        }
        stored.activity = activity;
        stored.version += 1;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityStore {
    async fn list_activities(&self) -> anyhow::Result<Roster> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity store offline"));
        }
        let guard = self.inner.read().await;
        Ok(guard
            .iter()
            .map(|stored| (stored.name.clone(), stored.activity.clone()))
            .collect())
    }
}
