//! Public page addressing
//!
//! A profile's page is addressed solely by its normalized username; the
//! about variant appends a fixed suffix segment.

use crate::constants::ABOUT_PATH_SEGMENT;

/// Normalize a handle for lookup: handles are case-insensitive at the
/// boundary, case-preserving in storage.
#[must_use]
pub fn normalize_username(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Shareable URL of a profile's public page.
#[must_use]
pub fn profile_url(site_base: &str, username: &str) -> String {
    format!("{}/{}", site_base.trim_end_matches('/'), normalize_username(username))
}

/// Shareable URL of a profile's about page.
#[must_use]
pub fn about_url(site_base: &str, username: &str) -> String {
    format!("{}/{}", profile_url(site_base, username), ABOUT_PATH_SEGMENT)
}
