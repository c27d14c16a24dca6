//! Application context - dependency injection container

use std::sync::Arc;

use heypage_core::{LinkRepository, LinkService, ProfileRepository, ProfileResolver};
use heypage_domain::{Config, Result};
use heypage_infra::{
    RecordStoreClient, RecordStoreConfig, RestLinkRepository, RestProfileRepository,
};

/// Type alias for link repository port trait object
type DynLinkRepositoryPort = dyn LinkRepository + 'static;

/// Type alias for profile repository port trait object
type DynProfileRepositoryPort = dyn ProfileRepository + 'static;

/// Application context - holds all services and dependencies
///
/// One context serves one editing session (the dashboard side is scoped
/// to the session owner's links) plus the public read surface, which is
/// session-independent.
pub struct AppContext {
    pub config: Config,
    pub links: Arc<DynLinkRepositoryPort>,
    pub profiles: Arc<DynProfileRepositoryPort>,
    pub link_service: Arc<LinkService>,
    pub resolver: Arc<ProfileResolver>,
}

impl AppContext {
    /// Create a context wired to the REST record store.
    ///
    /// `session_user_id` is the authenticated owner's profile id; session
    /// issuance itself happens outside this core.
    ///
    /// # Errors
    /// Returns `Config` errors when the store client cannot be built.
    pub fn new(config: Config, session_user_id: impl Into<String>) -> Result<Self> {
        let store_config = RecordStoreConfig::from(&config.store);
        let client = Arc::new(RecordStoreClient::new(store_config)?);

        let links: Arc<DynLinkRepositoryPort> =
            Arc::new(RestLinkRepository::new(Arc::clone(&client)));
        let profiles: Arc<DynProfileRepositoryPort> =
            Arc::new(RestProfileRepository::new(Arc::clone(&client)));

        Ok(Self::with_repositories(config, profiles, links, session_user_id))
    }

    /// Create a context over explicit repository implementations.
    ///
    /// This is the wiring point for tests, which inject in-memory ports
    /// instead of the REST adapters.
    pub fn with_repositories(
        config: Config,
        profiles: Arc<DynProfileRepositoryPort>,
        links: Arc<DynLinkRepositoryPort>,
        session_user_id: impl Into<String>,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(Arc::clone(&links), session_user_id));
        let resolver = Arc::new(ProfileResolver::new(Arc::clone(&profiles), Arc::clone(&links)));

        Self { config, links, profiles, link_service, resolver }
    }

    /// Profile id of the session owner.
    pub fn session_user_id(&self) -> &str {
        self.link_service.user_id()
    }
}
