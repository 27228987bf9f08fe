//! Profile domain types
//!
//! A profile is a personnel record with contact, employment, address,
//! skills and experience data.

use serde::{Deserialize, Serialize};

/// Avatar used when a profile does not supply one.
pub const DEFAULT_AVATAR: &str = "/placeholder.svg?height=128&width=128";

/// Postal address of a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// One entry of a profile's work history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

/// Stored profile entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub avatar: String,
    pub address: Address,
    pub skills: Vec<String>,
    /// Reverse-chronological, as supplied by the caller.
    pub experience: Vec<Experience>,
}

/// A profile that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub avatar: String,
    pub address: Address,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
}

impl Default for NewProfile {
    /// The blank template a new draft starts from.
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            title: String::new(),
            company: String::new(),
            description: String::new(),
            avatar: DEFAULT_AVATAR.to_string(),
            address: Address::default(),
            skills: Vec::new(),
            experience: Vec::new(),
        }
    }
}

impl NewProfile {
    /// Fill in defaults for fields the caller may leave empty. A blank
    /// avatar becomes [`DEFAULT_AVATAR`].
    pub fn normalize(mut self) -> Self {
        if self.avatar.trim().is_empty() {
            self.avatar = DEFAULT_AVATAR.to_string();
        }
        self
    }

    /// Attach an id, producing the stored form.
    pub fn with_id(self, id: impl Into<String>) -> Profile {
        Profile {
            id: id.into(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            title: self.title,
            company: self.company,
            description: self.description,
            avatar: self.avatar,
            address: self.address,
            skills: self.skills,
            experience: self.experience,
        }
    }
}

impl Profile {
    /// Split into the id and the id-less body.
    pub fn into_parts(self) -> (String, NewProfile) {
        (
            self.id,
            NewProfile {
                name: self.name,
                email: self.email,
                phone: self.phone,
                title: self.title,
                company: self.company,
                description: self.description,
                avatar: self.avatar,
                address: self.address,
                skills: self.skills,
                experience: self.experience,
            },
        )
    }
}

/// Address as received from a client; missing parts default to empty
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInput {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Request DTO for creating or replacing a profile
///
/// Every field is optional so that an incomplete submission reaches
/// validation and comes back as an itemised field error list instead of a
/// deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub address: Option<AddressInput>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: Option<Vec<Experience>>,
}

impl From<ProfileInput> for NewProfile {
    fn from(input: ProfileInput) -> Self {
        let blank = NewProfile::default();
        let address = input.address.unwrap_or_default();

        Self {
            name: input.name.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            phone: input.phone.unwrap_or_default(),
            title: input.title.unwrap_or_default(),
            company: input.company.unwrap_or_default(),
            description: input.description.unwrap_or_default(),
            avatar: input.avatar.unwrap_or(blank.avatar),
            address: Address {
                street: address.street.unwrap_or_default(),
                city: address.city.unwrap_or_default(),
                zip_code: address.zip_code.unwrap_or_default(),
                country: address.country.unwrap_or_default(),
            },
            skills: input.skills.unwrap_or_default(),
            experience: input.experience.unwrap_or_default(),
        }
    }
}

/// Location card shown by the map view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLocation {
    pub profile_id: String,
    pub name: String,
    pub address: Address,
    pub label: String,
}

impl From<&Profile> for MapLocation {
    fn from(p: &Profile) -> Self {
        Self {
            profile_id: p.id.clone(),
            name: p.name.clone(),
            address: p.address.clone(),
            label: format!(
                "{}, {}, {}",
                p.address.street, p.address.city, p.address.country
            ),
        }
    }
}
