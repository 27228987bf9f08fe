//! Search and filtering over a profile set.
//!
//! A [`ProfileQuery`] combines a case-insensitive substring search over a
//! configurable set of text fields with an exact city filter. Both predicates
//! must hold. Filtering is stable: matches keep their input order.

use std::collections::BTreeSet;

use crate::domain::Profile;

/// A text field the search can look at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Email,
    Description,
    Title,
    Company,
    City,
    Skills,
}

impl SearchField {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "description" => Some(Self::Description),
            "title" => Some(Self::Title),
            "company" => Some(Self::Company),
            "city" => Some(Self::City),
            "skills" => Some(Self::Skills),
            _ => None,
        }
    }

    fn matches(self, profile: &Profile, needle: &str) -> bool {
        let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
        match self {
            Self::Name => contains(profile.name.as_str()),
            Self::Email => contains(profile.email.as_str()),
            Self::Description => contains(profile.description.as_str()),
            Self::Title => contains(profile.title.as_str()),
            Self::Company => contains(profile.company.as_str()),
            Self::City => contains(profile.address.city.as_str()),
            Self::Skills => profile.skills.iter().any(|s| contains(s.as_str())),
        }
    }
}

/// Which fields a surface searches
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchScope {
    /// Public directory: name or description.
    #[default]
    Directory,
    /// Admin table: name or email.
    Admin,
    Custom(Vec<SearchField>),
}

impl SearchScope {
    pub fn fields(&self) -> &[SearchField] {
        match self {
            Self::Directory => &[SearchField::Name, SearchField::Description],
            Self::Admin => &[SearchField::Name, SearchField::Email],
            Self::Custom(fields) => fields,
        }
    }

    /// Parse a scope name as it appears in a query string.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "directory" => Some(Self::Directory),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Exact-match filter on `address.city`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocationFilter {
    #[default]
    Any,
    City(String),
}

impl LocationFilter {
    /// Empty input and the `all` sentinel mean no filtering.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            Self::Any
        } else {
            Self::City(value.to_string())
        }
    }

    fn matches(&self, profile: &Profile) -> bool {
        match self {
            Self::Any => true,
            Self::City(city) => profile.address.city == *city,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProfileQuery {
    pub text: String,
    pub scope: SearchScope,
    pub location: LocationFilter,
}

impl ProfileQuery {
    pub fn new(text: impl Into<String>, scope: SearchScope, location: LocationFilter) -> Self {
        Self {
            text: text.into(),
            scope,
            location,
        }
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        self.location.matches(profile) && self.matches_text(profile, &self.text.to_lowercase())
    }

    fn matches_text(&self, profile: &Profile, needle: &str) -> bool {
        needle.is_empty()
            || self
                .scope
                .fields()
                .iter()
                .any(|field| field.matches(profile, needle))
    }
}

/// Profiles from `all` that satisfy `query`, in input order.
pub fn filter<'a>(all: &'a [Profile], query: &ProfileQuery) -> Vec<&'a Profile> {
    let needle = query.text.to_lowercase();
    all.iter()
        .filter(|p| query.location.matches(p) && query.matches_text(p, &needle))
        .collect()
}

/// Distinct `address.city` values, sorted ascending.
pub fn distinct_cities(all: &[Profile]) -> Vec<String> {
    all.iter()
        .map(|p| p.address.city.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
