//! Link types
//!
//! Link rows as stored in the `links` collection, plus the form payload
//! and partial-update shapes used by the management flow.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CATEGORY;

/// Link record as stored in the `links` collection
///
/// `position` is an ordering key, not an index: gaps left by deletes are
/// normal and are never compacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub url: String,
    pub category: String,
    pub notes: String,
    pub is_archived: bool,
    pub position: i64,
}

/// Management-form payload for creating or editing a link
///
/// The form never carries `position`; position assignment happens at
/// creation time and edits leave it untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
    pub category: String,
    pub notes: String,
    pub is_archived: bool,
}

impl Default for LinkDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            notes: String::new(),
            is_archived: false,
        }
    }
}

/// Insert row sent to the store; the store assigns `id` and returns the
/// complete row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLink {
    pub user_id: String,
    pub title: String,
    pub url: String,
    pub category: String,
    pub notes: String,
    pub is_archived: bool,
    pub position: i64,
}

/// Partial update for a link row
///
/// `None` fields are left untouched by the store. `position` is
/// deliberately absent: no mutation renumbers it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_archived: Option<bool>,
}

impl LinkChanges {
    /// Changes flipping only the archive flag.
    #[must_use]
    pub fn archived(flag: bool) -> Self {
        Self { is_archived: Some(flag), ..Self::default() }
    }

    /// Apply the accepted changes to a cached link row.
    pub fn apply_to(&self, link: &mut Link) {
        if let Some(title) = &self.title {
            link.title = title.clone();
        }
        if let Some(url) = &self.url {
            link.url = url.clone();
        }
        if let Some(category) = &self.category {
            link.category = category.clone();
        }
        if let Some(notes) = &self.notes {
            link.notes = notes.clone();
        }
        if let Some(is_archived) = self.is_archived {
            link.is_archived = is_archived;
        }
    }
}

impl From<LinkDraft> for LinkChanges {
    fn from(draft: LinkDraft) -> Self {
        Self {
            title: Some(draft.title),
            url: Some(draft.url),
            category: Some(draft.category),
            notes: Some(draft.notes),
            is_archived: Some(draft.is_archived),
        }
    }
}
