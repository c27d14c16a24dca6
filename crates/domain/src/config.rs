//! Configuration structures
//!
//! Loaded by `heypage-infra` from environment variables or a config file;
//! see the loader module there for the supported sources.

use serde::{Deserialize, Serialize};

/// Record store connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the record service REST endpoint
    pub base_url: String,
    /// Opaque API key; issuing and refreshing it is external
    pub api_key: String,
    /// Optional transport timeout. The mutation layer enforces none; this
    /// only bounds a hung connection when an operator opts in.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321/rest/v1".to_string(),
            api_key: String::new(),
            timeout_seconds: None,
        }
    }
}

/// Public site settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL the public pages are served from; used to derive share URLs
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { base_url: "https://heypage.vercel.app".to_string() }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub site: SiteConfig,
}
