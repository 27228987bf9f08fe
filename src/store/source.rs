//! Data source port behind the profile repository.
//!
//! The repository never talks to a transport directly; it loads and writes
//! whole profile sets through a [`ProfileSource`]. [`InMemorySource`] is the
//! stand-in backend: it answers from a vector after an optional artificial
//! delay.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use thiserror::Error;

use crate::domain::sample::sample_profiles;
use crate::domain::Profile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("profile source unavailable: {0}")]
    Unavailable(String),

    #[error("profile source rejected the write: {0}")]
    Rejected(String),
}

/// Backend holding the canonical profile set.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Returns the full profile set, in stored order.
    async fn fetch_all(&self) -> Result<Vec<Profile>, SourceError>;

    /// Replaces the stored set with `profiles`.
    async fn persist(&self, profiles: &[Profile]) -> Result<(), SourceError>;
}

/// Volatile source backed by a vector. State lives as long as the value.
pub struct InMemorySource {
    data: Mutex<Vec<Profile>>,
    latency: Duration,
    offline: AtomicBool,
}

impl InMemorySource {
    /// Source answering instantly from `initial`.
    pub fn new(initial: Vec<Profile>) -> Self {
        Self {
            data: Mutex::new(initial),
            latency: Duration::ZERO,
            offline: AtomicBool::new(false),
        }
    }

    /// Source seeded with the six-record sample directory.
    pub fn sample() -> Self {
        Self::new(sample_profiles())
    }

    /// Delay applied to every fetch. Not cancellable.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// While offline, fetches and writes fail.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Copy of what the source currently holds.
    pub fn snapshot(&self) -> Vec<Profile> {
        self.data.lock().clone()
    }

    fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileSource for InMemorySource {
    async fn fetch_all(&self) -> Result<Vec<Profile>, SourceError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.is_offline() {
            return Err(SourceError::Unavailable("source is offline".to_string()));
        }

        let profiles = self.data.lock().clone();
        tracing::debug!(count = profiles.len(), "Fetched profiles from memory");
        Ok(profiles)
    }

    async fn persist(&self, profiles: &[Profile]) -> Result<(), SourceError> {
        if self.is_offline() {
            return Err(SourceError::Rejected("source is offline".to_string()));
        }

        *self.data.lock() = profiles.to_vec();
        tracing::debug!(count = profiles.len(), "Persisted profiles to memory");
        Ok(())
    }
}
