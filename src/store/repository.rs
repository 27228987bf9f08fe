//! Profile repository
//!
//! Owns the canonical profile set for the life of the instance. The set is
//! loaded once from a [`ProfileSource`], mutated in memory, and every
//! mutation is written back through the source before it becomes visible.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use super::ids::IdSequence;
use super::source::{ProfileSource, SourceError};
use crate::domain::{validate_profile, NewProfile, Profile, ValidationErrors};
use crate::editor::Submission;
use crate::query;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("profile {0} not found")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("failed to load profiles: {0}")]
    Load(#[source] SourceError),

    #[error("failed to persist profiles: {0}")]
    Persist(#[source] SourceError),
}

struct Loaded {
    profiles: Vec<Profile>,
    ids: IdSequence,
}

impl Loaded {
    fn new(fetched: Vec<Profile>) -> Self {
        let mut profiles: Vec<Profile> = Vec::with_capacity(fetched.len());
        for profile in fetched {
            if profiles.iter().any(|p| p.id == profile.id) {
                tracing::warn!(profile_id = %profile.id, "Dropping duplicate profile id from source");
                continue;
            }
            profiles.push(profile);
        }

        let ids = IdSequence::seeded_from(&profiles);
        Self { profiles, ids }
    }
}

/// In-memory profile store over an injected source.
pub struct ProfileRepository {
    source: Arc<dyn ProfileSource>,
    state: RwLock<Option<Loaded>>,
    opened: AtomicBool,
}

impl ProfileRepository {
    /// Create an unopened repository. Nothing is fetched until [`open`] or
    /// the first read.
    ///
    /// [`open`]: ProfileRepository::open
    pub fn new(source: Arc<dyn ProfileSource>) -> Self {
        Self {
            source,
            state: RwLock::new(None),
            opened: AtomicBool::new(false),
        }
    }

    /// Perform the one-time load. Returns the number of profiles held.
    /// Calling it again on an open repository does not refetch.
    pub async fn open(&self) -> Result<usize, RepositoryError> {
        let mut state = self.state.write().await;
        let loaded = self.ensure_loaded(&mut state).await?;
        Ok(loaded.profiles.len())
    }

    /// Write the current set back to the source and unload it.
    pub async fn close(&self) -> Result<(), RepositoryError> {
        let mut state = self.state.write().await;
        if let Some(loaded) = state.as_ref() {
            self.source
                .persist(&loaded.profiles)
                .await
                .map_err(RepositoryError::Persist)?;
            *state = None;
            self.opened.store(false, Ordering::Release);
            tracing::info!("Profile repository closed");
        }
        Ok(())
    }

    /// Whether the load has completed. Does not wait: while a load or a
    /// write holds the lock this answers from the last settled state.
    pub fn is_open(&self) -> bool {
        match self.state.try_read() {
            Ok(state) => state.is_some(),
            Err(_) => self.opened.load(Ordering::Acquire),
        }
    }

    /// Current full set, in stored order.
    pub async fn list(&self) -> Result<Vec<Profile>, RepositoryError> {
        self.read(|profiles| profiles.to_vec()).await
    }

    pub async fn get(&self, id: &str) -> Result<Profile, RepositoryError> {
        self.read(|profiles| profiles.iter().find(|p| p.id == id).cloned())
            .await?
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    /// Distinct cities across the current set, sorted ascending.
    pub async fn cities(&self) -> Result<Vec<String>, RepositoryError> {
        self.read(query::distinct_cities).await
    }

    /// Assign a fresh id to `draft` and append it.
    pub async fn create(&self, draft: NewProfile) -> Result<Profile, RepositoryError> {
        let draft = draft.normalize();
        validate_profile(&draft)?;

        let mut state = self.state.write().await;
        let loaded = self.ensure_loaded(&mut state).await?;

        let existing = &loaded.profiles;
        let id = loaded
            .ids
            .issue(|candidate| existing.iter().any(|p| p.id == candidate));
        let profile = draft.with_id(id);

        let mut next = loaded.profiles.clone();
        next.push(profile.clone());
        self.commit(loaded, next).await?;

        tracing::info!(profile_id = %profile.id, "Profile created");
        Ok(profile)
    }

    /// Replace the stored record with the same id.
    pub async fn update(&self, profile: Profile) -> Result<Profile, RepositoryError> {
        let (id, body) = profile.into_parts();
        let body = body.normalize();
        validate_profile(&body)?;
        let profile = body.with_id(id);

        let mut state = self.state.write().await;
        let loaded = self.ensure_loaded(&mut state).await?;

        let index = loaded
            .profiles
            .iter()
            .position(|p| p.id == profile.id)
            .ok_or_else(|| RepositoryError::NotFound(profile.id.clone()))?;

        let mut next = loaded.profiles.clone();
        next[index] = profile.clone();
        self.commit(loaded, next).await?;

        tracing::info!(profile_id = %profile.id, "Profile updated");
        Ok(profile)
    }

    /// Hand an editor submission to `create` or `update`.
    pub async fn save(&self, submission: Submission) -> Result<Profile, RepositoryError> {
        match submission {
            Submission::Create(draft) => self.create(draft).await,
            Submission::Update(profile) => self.update(profile).await,
        }
    }

    /// Remove the record with `id`. Returns whether anything was removed;
    /// an absent id leaves the set untouched.
    pub async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        let loaded = self.ensure_loaded(&mut state).await?;

        if !loaded.profiles.iter().any(|p| p.id == id) {
            tracing::debug!(profile_id = %id, "Delete of unknown profile ignored");
            return Ok(false);
        }

        let next: Vec<Profile> = loaded
            .profiles
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        self.commit(loaded, next).await?;

        tracing::info!(profile_id = %id, "Profile deleted");
        Ok(true)
    }

    async fn read<T>(&self, f: impl FnOnce(&[Profile]) -> T) -> Result<T, RepositoryError> {
        {
            let state = self.state.read().await;
            if let Some(loaded) = state.as_ref() {
                return Ok(f(&loaded.profiles));
            }
        }

        let mut state = self.state.write().await;
        let loaded = self.ensure_loaded(&mut state).await?;
        Ok(f(&loaded.profiles))
    }

    async fn ensure_loaded<'a>(
        &self,
        state: &'a mut Option<Loaded>,
    ) -> Result<&'a mut Loaded, RepositoryError> {
        let loaded = match state.take() {
            Some(loaded) => loaded,
            None => {
                let fetched = self.source.fetch_all().await.map_err(|e| {
                    tracing::error!(error = %e, "Failed to load profiles");
                    RepositoryError::Load(e)
                })?;
                let loaded = Loaded::new(fetched);
                self.opened.store(true, Ordering::Release);
                tracing::info!(count = loaded.profiles.len(), "Profiles loaded");
                loaded
            }
        };
        Ok(state.insert(loaded))
    }

    /// Write `next` through the source; only on success does it replace the
    /// in-memory set.
    async fn commit(&self, loaded: &mut Loaded, next: Vec<Profile>) -> Result<(), RepositoryError> {
        self.source.persist(&next).await.map_err(|e| {
            tracing::error!(error = %e, "Failed to persist profiles");
            RepositoryError::Persist(e)
        })?;
        loaded.profiles = next;
        Ok(())
    }
}
