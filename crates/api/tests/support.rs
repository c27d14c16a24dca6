//! Shared fixtures for the application-layer integration tests
//!
//! The in-memory repositories emulate the record store's observable
//! semantics: ownership filters on every mutation, position-ascending
//! reads, store-assigned ids, and an injectable write failure for
//! two-phase commit tests.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use heypage_core::{LinkRepository, ProfileRepository};
use heypage_domain::{
    Config, HeyPageError, Link, LinkChanges, LinkDraft, NewLink, Profile, ProfileChanges, Result,
};
use heypage_lib::AppContext;
use parking_lot::Mutex;

/// Profile id used for the seeded session owner.
pub const OWNER_ID: &str = "user-1";

/// In-memory `links` collection
#[derive(Default)]
pub struct InMemoryLinkRepository {
    pub rows: Mutex<Vec<Link>>,
    fail_writes: AtomicBool,
}

impl InMemoryLinkRepository {
    /// Make every subsequent write fail with a `Store` error.
    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    fn check_failure(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(HeyPageError::Store("injected store failure".into()))
        } else {
            Ok(())
        }
    }

    /// Seed a row directly, bypassing the lifecycle service.
    pub fn seed(&self, link: Link) {
        self.rows.lock().push(link);
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Link>> {
        let mut rows: Vec<Link> =
            self.rows.lock().iter().filter(|l| l.user_id == user_id).cloned().collect();
        rows.sort_by_key(|l| l.position);
        Ok(rows)
    }

    async fn list_active_for_user(&self, user_id: &str) -> Result<Vec<Link>> {
        Ok(self.list_for_user(user_id).await?.into_iter().filter(|l| !l.is_archived).collect())
    }

    async fn insert(&self, link: NewLink) -> Result<Link> {
        self.check_failure()?;
        let row = Link {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: link.user_id,
            title: link.title,
            url: link.url,
            category: link.category,
            notes: link.notes,
            is_archived: link.is_archived,
            position: link.position,
        };
        self.rows.lock().push(row.clone());
        Ok(row)
    }

    async fn update(&self, user_id: &str, id: &str, changes: &LinkChanges) -> Result<()> {
        self.check_failure()?;
        let mut rows = self.rows.lock();
        match rows.iter_mut().find(|l| l.id == id && l.user_id == user_id) {
            Some(row) => {
                changes.apply_to(row);
                Ok(())
            }
            None => Err(HeyPageError::NotFound(format!("link {id} not found"))),
        }
    }

    async fn delete(&self, user_id: &str, id: &str) -> Result<()> {
        self.check_failure()?;
        self.rows.lock().retain(|l| !(l.id == id && l.user_id == user_id));
        Ok(())
    }
}

/// In-memory `profiles` collection
#[derive(Default)]
pub struct InMemoryProfileRepository {
    pub rows: Mutex<Vec<Profile>>,
}

impl InMemoryProfileRepository {
    pub fn seed(&self, profile: Profile) {
        self.rows.lock().push(profile);
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_by_username(&self, normalized_username: &str) -> Result<Vec<Profile>> {
        Ok(self
            .rows
            .lock()
            .iter()
            .filter(|p| p.username.to_lowercase() == normalized_username)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Profile>> {
        Ok(self.rows.lock().iter().find(|p| p.id == id).cloned())
    }

    async fn update(&self, id: &str, changes: &ProfileChanges) -> Result<()> {
        let mut rows = self.rows.lock();
        match rows.iter_mut().find(|p| p.id == id) {
            Some(profile) => {
                changes.apply_to(profile);
                Ok(())
            }
            None => Err(HeyPageError::NotFound(format!("profile {id} not found"))),
        }
    }
}

/// Shared context for integration tests backed by in-memory collections.
pub struct TestContext {
    pub ctx: Arc<AppContext>,
    pub links: Arc<InMemoryLinkRepository>,
    pub profiles: Arc<InMemoryProfileRepository>,
}

/// Create a fresh test context with the session owner's profile seeded.
pub fn setup_test_context() -> TestContext {
    let links = Arc::new(InMemoryLinkRepository::default());
    let profiles = Arc::new(InMemoryProfileRepository::default());
    profiles.seed(test_profile(OWNER_ID, "alice"));

    let ctx = AppContext::with_repositories(
        Config::default(),
        profiles.clone(),
        links.clone(),
        OWNER_ID,
    );

    TestContext { ctx: Arc::new(ctx), links, profiles }
}

/// Helper to create a test profile
pub fn test_profile(id: &str, username: &str) -> Profile {
    Profile {
        id: id.into(),
        username: username.into(),
        display_name: "Alice Example".into(),
        bio: "Linking things since 2024".into(),
        avatar_url: String::new(),
    }
}

/// Helper to create a valid management-form draft
pub fn test_draft(title: &str, category: &str) -> LinkDraft {
    LinkDraft {
        title: title.into(),
        url: "https://example.com/page".into(),
        category: category.into(),
        notes: String::new(),
        is_archived: false,
    }
}

/// Helper to seed a stored link row directly
pub fn seed_link(
    links: &InMemoryLinkRepository,
    id: &str,
    category: &str,
    position: i64,
    is_archived: bool,
) -> Link {
    let row = Link {
        id: id.into(),
        user_id: OWNER_ID.into(),
        title: format!("Link {id}"),
        url: format!("https://{id}.example.com"),
        category: category.into(),
        notes: String::new(),
        is_archived,
        position,
    };
    links.seed(row.clone());
    row
}
