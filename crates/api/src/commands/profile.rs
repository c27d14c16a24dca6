//! Profile management commands
//!
//! The profile row is created at signup (external); these commands only
//! read and mutate the session owner's row.

use std::time::Instant;

use heypage_domain::{profile_url, Profile, ProfileChanges, Result};
use tracing::info;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Get the session owner's profile, or `None` when the row is missing.
pub async fn get_profile(ctx: &AppContext) -> Result<Option<Profile>> {
    let command_name = "profile::get_profile";
    let start = Instant::now();

    let result = ctx.profiles.get_by_id(ctx.session_user_id()).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Update the session owner's display fields and/or handle.
pub async fn update_profile(ctx: &AppContext, changes: ProfileChanges) -> Result<()> {
    let command_name = "profile::update_profile";
    let start = Instant::now();

    info!(command = command_name, "Executing update_profile");
    let result = ctx.profiles.update(ctx.session_user_id(), &changes).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Record the public URL of a freshly uploaded avatar.
///
/// The upload itself happens against external storage; only the resulting
/// URL is written here.
pub async fn set_avatar_url(ctx: &AppContext, url: impl Into<String>) -> Result<()> {
    let command_name = "profile::set_avatar_url";
    let start = Instant::now();

    let result = ctx.profiles.update(ctx.session_user_id(), &ProfileChanges::avatar(url)).await;

    log_command_execution(command_name, start.elapsed(), result.is_ok());
    result
}

/// Shareable URL of the owner's public page, shown in the profile editor.
pub fn profile_share_url(ctx: &AppContext, profile: &Profile) -> String {
    profile_url(&ctx.config.site.base_url, &profile.username)
}
