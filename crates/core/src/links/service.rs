//! Link lifecycle service - core business logic
//!
//! Owns the in-memory link set shown on the dashboard. Every mutation is
//! two-phase: the record store is written first, and the local set is
//! updated only after the store acknowledges. A failed store call leaves
//! the local set untouched and surfaces the error unchanged; there is no
//! automatic retry.

use std::sync::Arc;

use heypage_domain::{HeyPageError, Link, LinkChanges, LinkDraft, NewLink, Result};
use parking_lot::RwLock;
use tracing::debug;

use super::ports::LinkRepository;
use super::validation::validate_draft;

/// Link lifecycle service for a single editing session
///
/// Position assignment uses the current in-memory count (active plus
/// archived), so two sessions of the same account inserting concurrently
/// can mint duplicate positions. The product targets single-session
/// editing; read-back ordering tolerates ties via store-default order.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    user_id: String,
    links: RwLock<Vec<Link>>,
}

impl LinkService {
    /// Create a service for the session owner with an empty local set.
    ///
    /// Call [`Self::load`] before the first mutation so position
    /// assignment sees the user's existing links.
    pub fn new(repository: Arc<dyn LinkRepository>, user_id: impl Into<String>) -> Self {
        Self { repository, user_id: user_id.into(), links: RwLock::new(Vec::new()) }
    }

    /// Owner of this session's link set.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Replace the local set with the store's current rows.
    pub async fn load(&self) -> Result<Vec<Link>> {
        let rows = self.repository.list_for_user(&self.user_id).await?;
        *self.links.write() = rows.clone();
        Ok(rows)
    }

    /// Snapshot of the local set, position order as loaded.
    pub fn links(&self) -> Vec<Link> {
        self.links.read().clone()
    }

    /// Active subset of the local set, for the dashboard's primary list.
    pub fn active_links(&self) -> Vec<Link> {
        self.links.read().iter().filter(|l| !l.is_archived).cloned().collect()
    }

    /// Archived subset of the local set, for the dashboard's archive list.
    pub fn archived_links(&self) -> Vec<Link> {
        self.links.read().iter().filter(|l| l.is_archived).cloned().collect()
    }

    /// Create a new link at the end of the user's set.
    ///
    /// The new link's position is the count of the user's links (active
    /// and archived) at creation time.
    ///
    /// # Errors
    /// `Validation` before any store call for a malformed draft; any
    /// store error otherwise, in which case the local set is unchanged.
    pub async fn create(&self, draft: LinkDraft) -> Result<Link> {
        validate_draft(&draft)?;

        let position = self.links.read().len() as i64;
        let row = NewLink {
            user_id: self.user_id.clone(),
            title: draft.title,
            url: draft.url,
            category: draft.category,
            notes: draft.notes,
            is_archived: draft.is_archived,
            position,
        };

        let created = self.repository.insert(row).await?;
        debug!(link_id = %created.id, position, "link created");

        self.links.write().push(created.clone());
        Ok(created)
    }

    /// Edit a link in place. Position is never touched by edits.
    ///
    /// # Errors
    /// `Validation` for a malformed draft, `NotFound` if the id is not in
    /// the session's own set, or any store error.
    pub async fn update(&self, id: &str, draft: LinkDraft) -> Result<Link> {
        validate_draft(&draft)?;
        self.ensure_known(id)?;

        let changes = LinkChanges::from(draft);
        self.repository.update(&self.user_id, id, &changes).await?;

        self.apply_changes(id, &changes)
    }

    /// Archive a link, hiding it from public views. Idempotent.
    pub async fn archive(&self, id: &str) -> Result<()> {
        self.set_archived(id, true).await
    }

    /// Restore an archived link to the public views. Idempotent.
    pub async fn unarchive(&self, id: &str) -> Result<()> {
        self.set_archived(id, false).await
    }

    /// Permanently delete a link. Sibling positions are not renumbered;
    /// the resulting gap is normal.
    ///
    /// # Errors
    /// `NotFound` if the id is not in the session's own set, or any store
    /// error, in which case the local set is unchanged.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.ensure_known(id)?;

        self.repository.delete(&self.user_id, id).await?;
        debug!(link_id = %id, "link deleted");

        self.links.write().retain(|l| l.id != id);
        Ok(())
    }

    async fn set_archived(&self, id: &str, flag: bool) -> Result<()> {
        let current = self
            .links
            .read()
            .iter()
            .find(|l| l.id == id)
            .map(|l| l.is_archived)
            .ok_or_else(|| HeyPageError::NotFound(format!("link {id} not found")))?;

        if current == flag {
            debug!(link_id = %id, is_archived = flag, "archive state unchanged");
            return Ok(());
        }

        let changes = LinkChanges::archived(flag);
        self.repository.update(&self.user_id, id, &changes).await?;

        self.apply_changes(id, &changes)?;
        Ok(())
    }

    fn ensure_known(&self, id: &str) -> Result<()> {
        if self.links.read().iter().any(|l| l.id == id) {
            Ok(())
        } else {
            Err(HeyPageError::NotFound(format!("link {id} not found")))
        }
    }

    /// Mirror an acknowledged store mutation into the local set.
    fn apply_changes(&self, id: &str, changes: &LinkChanges) -> Result<Link> {
        let mut links = self.links.write();
        let link = links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| HeyPageError::NotFound(format!("link {id} not found")))?;
        changes.apply_to(link);
        Ok(link.clone())
    }
}
