//! Port interfaces for profile persistence
//!
//! These traits define the boundaries between core business logic
//! and the record store adapter for profile operations.

use async_trait::async_trait;
use heypage_domain::{Profile, ProfileChanges, Result};

/// Trait for profile persistence and retrieval
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Rows whose stored username matches the already-normalized handle.
    ///
    /// Returns every match: more than one row violates the uniqueness
    /// invariant, and the resolver needs to see that rather than have the
    /// adapter pick a row arbitrarily.
    async fn find_by_username(&self, normalized_username: &str) -> Result<Vec<Profile>>;

    /// Get a profile by id
    async fn get_by_id(&self, id: &str) -> Result<Option<Profile>>;

    /// Apply a partial update to a profile
    async fn update(&self, id: &str, changes: &ProfileChanges) -> Result<()>;
}
