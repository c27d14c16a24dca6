//! Public handle resolution
//!
//! Maps a public-facing username to its profile and scopes the link set
//! visible on the public surfaces.

use std::sync::Arc;

use heypage_domain::utils::pages::normalize_username;
use heypage_domain::{HeyPageError, Link, Profile, Result};
use tracing::error;

use crate::links::ports::LinkRepository;
use super::ports::ProfileRepository;

/// Resolves public handles to profiles and their publicly visible links
pub struct ProfileResolver {
    profiles: Arc<dyn ProfileRepository>,
    links: Arc<dyn LinkRepository>,
}

impl ProfileResolver {
    /// Create a new resolver
    pub fn new(profiles: Arc<dyn ProfileRepository>, links: Arc<dyn LinkRepository>) -> Self {
        Self { profiles, links }
    }

    /// Resolve a handle to its profile.
    ///
    /// The input is normalized to lowercase before lookup; storage keeps
    /// the handle's original casing.
    ///
    /// # Errors
    /// `NotFound` when no profile carries the handle (public pages render
    /// this as a standard not-found outcome), `Integrity` when more than
    /// one row does — the uniqueness invariant is violated and picking a
    /// row arbitrarily would hide it.
    pub async fn resolve(&self, username_input: &str) -> Result<Profile> {
        let handle = normalize_username(username_input);
        let mut rows = self.profiles.find_by_username(&handle).await?;

        match rows.len() {
            0 => Err(HeyPageError::NotFound(format!("no profile for handle '{handle}'"))),
            1 => Ok(rows.remove(0)),
            count => {
                error!(handle = %handle, count, "duplicate profiles for handle");
                Err(HeyPageError::Integrity(format!(
                    "{count} profiles share the handle '{handle}'"
                )))
            }
        }
    }

    /// The profile's publicly visible links: `is_archived = false`,
    /// ordered by position ascending. Archived links are never exposed
    /// here, including to the owner previewing their own page.
    pub async fn public_links(&self, profile: &Profile) -> Result<Vec<Link>> {
        self.links.list_active_for_user(&profile.id).await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use heypage_domain::{LinkChanges, NewLink, ProfileChanges};
    use parking_lot::Mutex;

    use super::*;

    #[derive(Default)]
    struct InMemoryProfiles {
        rows: Mutex<Vec<Profile>>,
    }

    #[async_trait]
    impl ProfileRepository for InMemoryProfiles {
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

    #[derive(Default)]
    struct InMemoryLinks {
        rows: Mutex<Vec<Link>>,
    }

    #[async_trait]
    impl LinkRepository for InMemoryLinks {
        async fn list_for_user(&self, user_id: &str) -> Result<Vec<Link>> {
            let mut rows: Vec<Link> =
                self.rows.lock().iter().filter(|l| l.user_id == user_id).cloned().collect();
            rows.sort_by_key(|l| l.position);
            Ok(rows)
        }

        async fn list_active_for_user(&self, user_id: &str) -> Result<Vec<Link>> {
            Ok(self
                .list_for_user(user_id)
                .await?
                .into_iter()
                .filter(|l| !l.is_archived)
                .collect())
        }

        async fn insert(&self, _link: NewLink) -> Result<Link> {
            Err(HeyPageError::Internal("not used by resolver tests".into()))
        }

        async fn update(&self, _user_id: &str, _id: &str, _changes: &LinkChanges) -> Result<()> {
            Err(HeyPageError::Internal("not used by resolver tests".into()))
        }

        async fn delete(&self, _user_id: &str, _id: &str) -> Result<()> {
            Err(HeyPageError::Internal("not used by resolver tests".into()))
        }
    }

    fn profile(id: &str, username: &str) -> Profile {
        Profile {
            id: id.into(),
            username: username.into(),
            display_name: "Alice".into(),
            bio: String::new(),
            avatar_url: String::new(),
        }
    }

    fn resolver_with(profiles: Vec<Profile>, links: Vec<Link>) -> ProfileResolver {
        let profile_repo = Arc::new(InMemoryProfiles { rows: Mutex::new(profiles) });
        let link_repo = Arc::new(InMemoryLinks { rows: Mutex::new(links) });
        ProfileResolver::new(profile_repo, link_repo)
    }

    #[tokio::test]
    async fn test_resolution_is_case_insensitive() {
        let resolver = resolver_with(vec![profile("p1", "alice")], Vec::new());

        let upper = resolver.resolve("Alice").await.expect("resolve Alice");
        let lower = resolver.resolve("alice").await.expect("resolve alice");

        assert_eq!(upper.id, "p1");
        assert_eq!(lower.id, "p1");
    }

    #[tokio::test]
    async fn test_unknown_handle_is_not_found() {
        let resolver = resolver_with(Vec::new(), Vec::new());

        let err = resolver.resolve("ghost").await.unwrap_err();
        assert!(matches!(err, HeyPageError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_duplicate_handles_raise_integrity_not_not_found() {
        let resolver =
            resolver_with(vec![profile("p1", "alice"), profile("p2", "alice")], Vec::new());

        let err = resolver.resolve("alice").await.unwrap_err();
        assert!(matches!(err, HeyPageError::Integrity(_)));
    }

    #[tokio::test]
    async fn test_public_links_exclude_archived_rows() {
        let links = vec![
            Link {
                id: "l1".into(),
                user_id: "p1".into(),
                title: "Active".into(),
                url: "https://example.com".into(),
                category: "Featured".into(),
                notes: String::new(),
                is_archived: false,
                position: 0,
            },
            Link {
                id: "l2".into(),
                user_id: "p1".into(),
                title: "Hidden".into(),
                url: "https://example.org".into(),
                category: "Featured".into(),
                notes: String::new(),
                is_archived: true,
                position: 1,
            },
        ];
        let resolver = resolver_with(vec![profile("p1", "alice")], links);

        let me = resolver.resolve("alice").await.expect("resolve");
        let visible = resolver.public_links(&me).await.expect("public links");

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "l1");
    }
}
