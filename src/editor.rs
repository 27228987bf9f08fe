//! Draft editing for a single profile.
//!
//! A [`ProfileEditor`] holds a private copy of a profile (or a blank
//! template) and nothing it does reaches the repository until the caller
//! hands the [`Submission`] to `create` or `update`.
//!
//! Session states: `Blank -> Editing -> Submitted`, or `Blank/Editing ->
//! Cancelled`. Both end states are terminal.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::domain::{
    validate_profile, Experience, NewProfile, Profile, ProfileInput, ValidationErrors,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Blank,
    Editing,
    Submitted,
    Cancelled,
}

impl EditorState {
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Submitted | Self::Cancelled)
    }
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => write!(f, "blank"),
            Self::Editing => write!(f, "editing"),
            Self::Submitted => write!(f, "submitted"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("unknown field `{0}`")]
    UnknownField(String),

    #[error("field path `{0}` is nested more than one level")]
    PathTooDeep(String),

    #[error("editor session is already {0}")]
    Closed(EditorState),

    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

/// What a successful submit produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Draft started blank; the repository assigns the id.
    Create(NewProfile),
    /// Draft of an existing record; replaces it by id.
    Update(Profile),
}

/// A batch of edits applied as one editor session
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileEdits {
    /// Dotted field path to new value.
    #[serde(default)]
    pub set: BTreeMap<String, String>,
    #[serde(default)]
    pub add_skills: Vec<String>,
    /// Positions in the skill list as it was before this batch.
    #[serde(default)]
    pub remove_skills: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct ProfileEditor {
    id: Option<String>,
    draft: NewProfile,
    state: EditorState,
}

impl ProfileEditor {
    /// Session for a new profile, starting from the blank template.
    pub fn blank() -> Self {
        Self {
            id: None,
            draft: NewProfile::default(),
            state: EditorState::Blank,
        }
    }

    /// Session over a copy of an existing profile.
    pub fn edit(profile: &Profile) -> Self {
        let (id, draft) = profile.clone().into_parts();
        Self {
            id: Some(id),
            draft,
            state: EditorState::Blank,
        }
    }

    /// New-profile session pre-filled from client input.
    pub fn from_input(input: ProfileInput) -> Self {
        Self {
            id: None,
            draft: input.into(),
            state: EditorState::Editing,
        }
    }

    /// Full-replacement session for `id`, with every field taken from
    /// `input`.
    pub fn replace(id: impl Into<String>, input: ProfileInput) -> Self {
        Self {
            id: Some(id.into()),
            draft: input.into(),
            state: EditorState::Editing,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn draft(&self) -> &NewProfile {
        &self.draft
    }

    /// Set a top-level field or an `address.*` sub-field.
    pub fn set_field(&mut self, path: &str, value: impl Into<String>) -> Result<(), EditorError> {
        self.ensure_open()?;

        let segments: Vec<&str> = path.split('.').collect();
        let draft = &mut self.draft;
        let slot = match segments.as_slice() {
            [field] => match *field {
                "name" => &mut draft.name,
                "email" => &mut draft.email,
                "phone" => &mut draft.phone,
                "title" => &mut draft.title,
                "company" => &mut draft.company,
                "description" => &mut draft.description,
                "avatar" => &mut draft.avatar,
                _ => return Err(EditorError::UnknownField(path.to_string())),
            },
            ["address", child] => match *child {
                "street" => &mut draft.address.street,
                "city" => &mut draft.address.city,
                "zipCode" | "zip_code" => &mut draft.address.zip_code,
                "country" => &mut draft.address.country,
                _ => return Err(EditorError::UnknownField(path.to_string())),
            },
            [_, _] => return Err(EditorError::UnknownField(path.to_string())),
            _ => return Err(EditorError::PathTooDeep(path.to_string())),
        };

        *slot = value.into();
        self.state = EditorState::Editing;
        Ok(())
    }

    /// Append a trimmed skill. Blank input is ignored; returns whether the
    /// skill was added.
    pub fn add_skill(&mut self, text: &str) -> Result<bool, EditorError> {
        self.ensure_open()?;

        let skill = text.trim();
        if skill.is_empty() {
            return Ok(false);
        }
        self.draft.skills.push(skill.to_string());
        self.state = EditorState::Editing;
        Ok(true)
    }

    /// Remove the skill at `index`; out of range is ignored.
    pub fn remove_skill(&mut self, index: usize) -> Result<Option<String>, EditorError> {
        self.ensure_open()?;

        if index >= self.draft.skills.len() {
            return Ok(None);
        }
        self.state = EditorState::Editing;
        Ok(Some(self.draft.skills.remove(index)))
    }

    pub fn add_experience(&mut self, entry: Experience) -> Result<(), EditorError> {
        self.ensure_open()?;

        self.draft.experience.push(entry);
        self.state = EditorState::Editing;
        Ok(())
    }

    /// Remove the experience entry at `index`; out of range is ignored.
    pub fn remove_experience(&mut self, index: usize) -> Result<Option<Experience>, EditorError> {
        self.ensure_open()?;

        if index >= self.draft.experience.len() {
            return Ok(None);
        }
        self.state = EditorState::Editing;
        Ok(Some(self.draft.experience.remove(index)))
    }

    /// Apply a batch: field sets, then removals (highest index first), then
    /// additions. Stops at the first error.
    pub fn apply(&mut self, edits: ProfileEdits) -> Result<(), EditorError> {
        for (path, value) in edits.set {
            self.set_field(&path, value)?;
        }

        let mut removals = edits.remove_skills;
        removals.sort_unstable_by(|a, b| b.cmp(a));
        removals.dedup();
        for index in removals {
            self.remove_skill(index)?;
        }

        for skill in &edits.add_skills {
            self.add_skill(skill)?;
        }
        Ok(())
    }

    /// Validate the draft and close the session. On a validation failure the
    /// session stays open so the draft can be corrected.
    pub fn submit(&mut self) -> Result<Submission, EditorError> {
        self.ensure_open()?;

        let draft = self.draft.clone().normalize();
        validate_profile(&draft)?;

        self.state = EditorState::Submitted;
        Ok(match &self.id {
            Some(id) => Submission::Update(draft.with_id(id.clone())),
            None => Submission::Create(draft),
        })
    }

    /// Discard the draft.
    pub fn cancel(&mut self) -> Result<(), EditorError> {
        self.ensure_open()?;
        self.state = EditorState::Cancelled;
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), EditorError> {
        if self.state.is_terminal() {
            Err(EditorError::Closed(self.state))
        } else {
            Ok(())
        }
    }
}
