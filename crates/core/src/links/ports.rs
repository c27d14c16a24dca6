//! Port interfaces for link persistence
//!
//! These traits define the boundaries between core business logic
//! and the record store adapter for link operations.

use async_trait::async_trait;
use heypage_domain::{Link, LinkChanges, NewLink, Result};

/// Trait for link persistence and retrieval
///
/// Mutations take the owning `user_id` so the adapter can apply the
/// ownership filter; this component never checks ownership itself.
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// All links owned by the user, active and archived, ordered by
    /// `position` ascending
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Link>>;

    /// Active links only (`is_archived = false`), ordered by `position`
    /// ascending; this is the public-surface query
    async fn list_active_for_user(&self, user_id: &str) -> Result<Vec<Link>>;

    /// Insert a new link; the store assigns the id and returns the row
    async fn insert(&self, link: NewLink) -> Result<Link>;

    /// Apply a partial update to one of the user's links
    async fn update(&self, user_id: &str, id: &str, changes: &LinkChanges) -> Result<()>;

    /// Permanently delete one of the user's links
    async fn delete(&self, user_id: &str, id: &str) -> Result<()>;
}
