//! Profile types
//!
//! Public-facing profile row backing a user's link page

use serde::{Deserialize, Serialize};

/// Profile record as stored in the `profiles` collection
///
/// Created once at signup (outside this core) and mutated only by the
/// owning user. The handle is case-preserving in storage; lookups
/// normalize to lowercase first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub bio: String,
    pub avatar_url: String,
}

/// Partial update for a profile row
///
/// `None` fields are left untouched by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl ProfileChanges {
    /// Changes carrying only a new avatar URL, as written after an
    /// external upload completes.
    #[must_use]
    pub fn avatar(url: impl Into<String>) -> Self {
        Self { avatar_url: Some(url.into()), ..Self::default() }
    }

    /// Apply the accepted changes to a cached profile row.
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(username) = &self.username {
            profile.username = username.clone();
        }
        if let Some(display_name) = &self.display_name {
            profile.display_name = display_name.clone();
        }
        if let Some(bio) = &self.bio {
            profile.bio = bio.clone();
        }
        if let Some(avatar_url) = &self.avatar_url {
            profile.avatar_url = avatar_url.clone();
        }
    }
}
