//! Wire row shapes for the record store collections
//!
//! Text columns the store may hand back as `null` are optional here and
//! default to empty strings on the way into the domain types.

use heypage_domain::{Link, Profile};
use serde::Deserialize;

/// `links` row as returned by the store
#[derive(Debug, Deserialize)]
pub(crate) struct LinkRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub url: String,
    pub category: String,
    pub notes: Option<String>,
    pub is_archived: bool,
    pub position: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            title: row.title,
            url: row.url,
            category: row.category,
            notes: row.notes.unwrap_or_default(),
            is_archived: row.is_archived,
            position: row.position,
        }
    }
}

/// `profiles` row as returned by the store
#[derive(Debug, Deserialize)]
pub(crate) struct ProfileRow {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            display_name: row.display_name.unwrap_or_default(),
            bio: row.bio.unwrap_or_default(),
            avatar_url: row.avatar_url.unwrap_or_default(),
        }
    }
}
