//! Management-form validation
//!
//! Rejections happen here, before any store round trip: a draft that
//! fails validation never reaches the record store.

use heypage_domain::constants::LINK_CATEGORIES;
use heypage_domain::{HeyPageError, LinkDraft, Result};
use url::Url;

/// Validate a link draft coming from the management form.
///
/// # Errors
/// Returns `HeyPageError::Validation` if the title is empty, the URL is
/// empty or not an absolute URL, or the category is outside the closed
/// set offered by the form.
pub fn validate_draft(draft: &LinkDraft) -> Result<()> {
    if draft.title.trim().is_empty() {
        return Err(HeyPageError::Validation("link title must not be empty".to_string()));
    }

    if draft.url.trim().is_empty() {
        return Err(HeyPageError::Validation("link url must not be empty".to_string()));
    }

    // Url::parse rejects relative references, so this doubles as the
    // absolute-URL gate.
    Url::parse(&draft.url).map_err(|e| {
        HeyPageError::Validation(format!("link url must be a valid absolute URL: {e}"))
    })?;

    if !LINK_CATEGORIES.contains(&draft.category.as_str()) {
        return Err(HeyPageError::Validation(format!(
            "unknown link category: {}",
            draft.category
        )));
    }

    Ok(())
}
