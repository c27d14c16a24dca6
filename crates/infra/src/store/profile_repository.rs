//! Profile repository implementation over the record store

use std::sync::Arc;

use async_trait::async_trait;
use heypage_core::ProfileRepository as ProfileRepositoryPort;
use heypage_domain::{Profile, ProfileChanges, Result as DomainResult};

use super::client::{Filter, RecordStoreClient};
use super::rows::ProfileRow;

const PROFILES: &str = "profiles";

/// REST-backed implementation of `ProfileRepository`
pub struct RestProfileRepository {
    client: Arc<RecordStoreClient>,
}

impl RestProfileRepository {
    /// Create a new repository instance
    pub fn new(client: Arc<RecordStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepositoryPort for RestProfileRepository {
    async fn find_by_username(&self, normalized_username: &str) -> DomainResult<Vec<Profile>> {
        // The collection is queryable by normalized username; every match
        // comes back so the resolver can spot uniqueness violations.
        let rows: Vec<ProfileRow> = self
            .client
            .select(PROFILES, &[Filter::eq("username", normalized_username)], None)
            .await?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn get_by_id(&self, id: &str) -> DomainResult<Option<Profile>> {
        let mut rows: Vec<ProfileRow> =
            self.client.select(PROFILES, &[Filter::eq("id", id)], None).await?;

        Ok(rows.pop().map(Profile::from))
    }

    async fn update(&self, id: &str, changes: &ProfileChanges) -> DomainResult<()> {
        self.client.update(PROFILES, &[Filter::eq("id", id)], changes).await?;
        Ok(())
    }
}
