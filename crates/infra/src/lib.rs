//! # HeyPage Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The Record Store Client (typed REST access to `profiles` and `links`)
//! - REST-backed implementations of the core repository ports
//! - The configuration loader
//!
//! ## Architecture
//! - Implements traits defined in `heypage-core`
//! - Depends on `heypage-domain` and `heypage-core`
//! - Contains all "impure" code (HTTP, environment, files)

pub mod config;
pub mod store;

// Re-export commonly used items
pub use store::client::{Filter, Order, RecordStoreClient, RecordStoreConfig};
pub use store::errors::StoreApiError;
pub use store::link_repository::RestLinkRepository;
pub use store::profile_repository::RestProfileRepository;
