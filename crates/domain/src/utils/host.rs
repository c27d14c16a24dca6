//! Hostname extraction for link display
//!
//! Public views show the link's hostname as a secondary line beneath the
//! title.

use url::Url;

/// Derive the hostname displayed beneath a link title.
///
/// Returns `None` when the stored URL no longer parses or has no host
/// (views fall back to omitting the secondary line rather than failing).
///
/// # Examples
///
/// ```
/// use heypage_domain::utils::host::display_host;
///
/// assert_eq!(display_host("https://github.com/octocat"), Some("github.com".to_string()));
/// assert_eq!(display_host("not a url"), None);
/// ```
#[must_use]
pub fn display_host(url: &str) -> Option<String> {
    Url::parse(url).ok().and_then(|u| u.host_str().map(ToString::to_string))
}
