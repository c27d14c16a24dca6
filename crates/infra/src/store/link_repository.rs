//! Link repository implementation over the record store
//!
//! Every mutation carries the owning user's filter alongside the row id,
//! so a row outside the session's ownership is simply never matched.

use std::sync::Arc;

use async_trait::async_trait;
use heypage_core::LinkRepository as LinkRepositoryPort;
use heypage_domain::{Link, LinkChanges, NewLink, Result as DomainResult};

use super::client::{Filter, Order, RecordStoreClient};
use super::rows::LinkRow;

const LINKS: &str = "links";

/// REST-backed implementation of `LinkRepository`
pub struct RestLinkRepository {
    client: Arc<RecordStoreClient>,
}

impl RestLinkRepository {
    /// Create a new repository instance
    pub fn new(client: Arc<RecordStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LinkRepositoryPort for RestLinkRepository {
    async fn list_for_user(&self, user_id: &str) -> DomainResult<Vec<Link>> {
        let rows: Vec<LinkRow> = self
            .client
            .select(LINKS, &[Filter::eq("user_id", user_id)], Some(Order::asc("position")))
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn list_active_for_user(&self, user_id: &str) -> DomainResult<Vec<Link>> {
        let rows: Vec<LinkRow> = self
            .client
            .select(
                LINKS,
                &[Filter::eq("user_id", user_id), Filter::eq("is_archived", false)],
                Some(Order::asc("position")),
            )
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn insert(&self, link: NewLink) -> DomainResult<Link> {
        let row: LinkRow = self.client.insert(LINKS, &link).await?;
        Ok(row.into())
    }

    async fn update(&self, user_id: &str, id: &str, changes: &LinkChanges) -> DomainResult<()> {
        self.client
            .update(LINKS, &[Filter::eq("id", id), Filter::eq("user_id", user_id)], changes)
            .await?;
        Ok(())
    }

    async fn delete(&self, user_id: &str, id: &str) -> DomainResult<()> {
        self.client
            .delete(LINKS, &[Filter::eq("id", id), Filter::eq("user_id", user_id)])
            .await?;
        Ok(())
    }
}
